/// Visual source modules for brailler (still images).

pub mod error;
pub mod image;

pub use error::DecodeError;
