use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] astrasim_web::ConfigError),

    #[error(transparent)]
    Route(#[from] astrasim_core::RouteError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("server error: {0}")]
    Server(std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Route(_) => 3,
            Self::Serialization(_) => 4,
            Self::Server(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
