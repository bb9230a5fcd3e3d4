use thiserror::Error;

/// Failure to resolve a requested path against the route table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches path '{path}'")]
    Unmatched { path: String },
}

impl RouteError {
    pub fn unmatched(path: impl Into<String>) -> Self {
        Self::Unmatched { path: path.into() }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Unmatched { path } => path,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unmatched { .. } => "route.unmatched",
        }
    }
}

/// Route table construction errors, raised before any request is served.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route pattern '{candidate}' overlaps registered pattern '{existing}'")]
    Overlap { existing: String, candidate: String },
}

impl RegistrationError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
