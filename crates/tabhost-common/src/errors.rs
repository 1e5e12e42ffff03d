use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("config io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of a single call into the embedded rendering engine.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface construction failed: {0}")]
    Construction(String),

    #[error("engine call failed: {0}")]
    Engine(String),

    #[error("navigation refused: {0}")]
    Refused(String),

    #[error("surface already destroyed")]
    Destroyed,

    #[error("host window is gone")]
    HostGone,
}

#[derive(Debug, thiserror::Error)]
pub enum TabhostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}
