use thiserror::Error;

/// The outcome of evaluating the calculator stack.
pub type EvaluationResult = Result<f64, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Variable '{0}' is not set")]
    UnboundVariable(String),

    #[error("Not enough operands for '{symbol}'")]
    MissingOperand { symbol: &'static str },

    #[error("Result is infinite")]
    InfiniteResult,

    #[error("Result is not a number")]
    NotANumber,

    #[error("Nothing to evaluate")]
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnboundVariable,
    MissingOperand,
    InfiniteResult,
    NotANumber,
    Generic,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnboundVariable(_) => ErrorKind::UnboundVariable,
            EvalError::MissingOperand { .. } => ErrorKind::MissingOperand,
            EvalError::InfiniteResult => ErrorKind::InfiniteResult,
            EvalError::NotANumber => ErrorKind::NotANumber,
            EvalError::Generic => ErrorKind::Generic,
        }
    }
}
