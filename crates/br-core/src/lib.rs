/// Configuration, types, and shared structures for brailler.
///
/// This crate contains the shared frame and grid types, the validated
/// render configuration, and the error type used across the workspace.

pub mod config;
pub mod error;
pub mod frame;

pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{DotGrid, FrameBuffer, FrameView};
