use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairSumError {
    #[error("unknown strategy '{0}', expected one of: quadratic, lookup")]
    UnknownStrategy(String),
    #[error("missing target, usage: pair-sum <target> [numbers...]")]
    MissingTarget,
    #[error("target '{0}' is not a valid 32-bit integer")]
    InvalidTarget(String),
    #[error("number '{value}' at position {position} is not a valid 32-bit integer")]
    InvalidNumber { position: usize, value: String },
}

pub type Error = PairSumError;
pub type Result<T> = std::result::Result<T, Error>;
