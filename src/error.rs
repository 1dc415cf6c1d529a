//! Error types for resource loading and scene lifecycle.
//!
//! Library-level failures that callers are expected to match on are typed
//! here. Window, device and event-loop plumbing keeps using `anyhow`.

use thiserror::Error;

/// Failure reported by an [`ImageDecoder`](crate::resources::decoder::ImageDecoder).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Other(String),
}

/// Failure while registering a texture.
///
/// Everything except [`TextureError::CapacityExceeded`] only costs the scene
/// one texture. Running out of texture units means the scene data asks for
/// more than the backend can bind, which is a configuration error.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("could not load image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },

    #[error("image {path} has {channels} channels, only 3 (RGB) and 4 (RGBA) are supported")]
    UnsupportedChannels { path: String, channels: u8 },

    #[error("could not upload texture `{tag}`: {reason}")]
    Upload { tag: String, reason: String },

    #[error("all {capacity} texture units are taken, cannot register `{tag}`")]
    CapacityExceeded { tag: String, capacity: usize },
}

impl TextureError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, TextureError::CapacityExceeded { .. })
    }
}

/// Scene lifecycle errors returned by the [`SceneComposer`](crate::composer::SceneComposer).
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("scene `{0}` was already prepared")]
    AlreadyPrepared(&'static str),

    #[error("scene `{0}` has to be prepared before it can be rendered")]
    NotPrepared(&'static str),

    #[error(transparent)]
    CapacityExceeded(TextureError),
}
