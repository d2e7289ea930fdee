use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown color: {name}")]
    UnknownColor { name: String },

    #[error("Unknown {what} keyword: {value}")]
    UnknownKeyword { what: &'static str, value: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
