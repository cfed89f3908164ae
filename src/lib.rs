//! An RPN calculator engine: operations are pushed one at a time onto a
//! postfix stack, which can be evaluated to a number or described as infix
//! text at any point.

pub mod builtins;
pub mod error;
pub mod operators;
pub mod postfix_to_infix;
pub mod session;
pub mod state;
pub mod tui;
pub mod util;

pub use error::{ErrorKind, EvalError, EvaluationResult};
pub use state::CalculatorState;
