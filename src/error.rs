use thiserror::Error;

/// Failure reported by a deferred component loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),
    #[error("no route named {0:?}")]
    UnknownName(String),
    #[error("no route matches {0:?}")]
    NoMatch(String),
    #[error("navigation to route {0:?} was superseded by a newer one")]
    Cancelled(String),
    #[error("{url:?} is outside the base path {base:?}")]
    OutsideBase { url: String, base: String },
    #[error("failed to load the component for route {name:?}: {source}")]
    ComponentLoad {
        name: String,
        #[source]
        source: LoadError,
    },
}

pub type Result<T> = std::result::Result<T, RouterError>;
