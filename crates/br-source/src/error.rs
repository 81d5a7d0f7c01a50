use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from image decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {}", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The decoder could not read or understand the file.
    #[error("Impossible de charger {}", path.display())]
    Image {
        /// Path of the image.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: ::image::ImageError,
    },

    /// Decoded pixels do not form a usable frame (e.g. zero-sized image).
    #[error("Image inutilisable {} : {source}", path.display())]
    Frame {
        /// Path of the image.
        path: PathBuf,
        /// Frame validation error.
        #[source]
        source: br_core::CoreError,
    },
}
