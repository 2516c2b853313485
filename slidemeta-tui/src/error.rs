//! Viewer error type

/// Errors the viewer can hit between startup and shutdown.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slide server request failed.
    #[error(transparent)]
    Api(#[from] slidemeta_lib::Error),

    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}
