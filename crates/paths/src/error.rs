use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathsError {
    #[error("Unknown path name: {0}")]
    UnknownPath(String),

    #[error("Unknown hook event: {0}")]
    UnknownHookEvent(String),
}
