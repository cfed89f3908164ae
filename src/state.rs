use bevy_utils::HashMap;

use crate::{
    builtins::Registry,
    error::{EvalError, EvaluationResult},
    operators::Operation,
    postfix_to_infix,
};

/// The calculator's memory: every operation the user has entered, in postfix
/// order, plus the values of named variables.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    stack: Vec<Operation>,
    variables: HashMap<String, f64>,
    registry: Registry,
}

impl CalculatorState {
    pub fn new_with_builtins() -> Self {
        Self::with_registry(Registry::builtin())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            stack: Vec::new(),
            variables: Default::default(),
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn stack(&self) -> &[Operation] {
        &self.stack
    }

    pub fn push_operand(&mut self, value: f64) -> EvaluationResult {
        self.stack.push(Operation::Operand(value));
        self.evaluate()
    }

    pub fn push_variable(&mut self, name: &str) -> EvaluationResult {
        self.stack.push(Operation::Variable(name.to_owned()));
        self.evaluate()
    }

    /// Pushes the built-in operator or constant displayed as `symbol`.
    /// Unknown symbols leave the stack as it was, but the stack is still
    /// evaluated so the caller always gets a fresh result.
    pub fn push_symbol(&mut self, symbol: &str) -> EvaluationResult {
        match self.registry.lookup(symbol) {
            Some(operation) => self.stack.push(operation),
            None => tracing::debug!(symbol, "ignoring unknown operation"),
        }
        self.evaluate()
    }

    pub fn pop_last(&mut self) -> Option<Operation> {
        self.stack.pop()
    }

    /// Empties the stack. Variables are kept.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Inserts a variable with the given name and value. If there was already
    /// a value with the name, it is replaced and the old value is returned.
    pub fn set_variable(&mut self, name: &str, value: f64) -> Option<f64> {
        self.variables.insert(name.to_owned(), value)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Evaluates the whole stack, most recent operation first.
    /// ## Errors
    /// Non-finite results are reported as errors, as are references to
    /// variables without a value and operators lacking operands.
    pub fn evaluate(&self) -> EvaluationResult {
        let result = self
            .evaluate_ops(&self.stack)
            .and_then(|(value, remaining)| {
                tracing::debug!(
                    stack = %self.describe(),
                    value,
                    left_over = remaining.len(),
                    "evaluated"
                );
                if value.is_nan() {
                    Err(EvalError::NotANumber)
                } else if value.is_infinite() {
                    Err(EvalError::InfiniteResult)
                } else {
                    Ok(value)
                }
            });

        if let Err(ref e) = result {
            tracing::debug!(stack = %self.describe(), error = %e, "evaluation failed");
        }
        result
    }

    /// Renders the stack as infix text. Independent expressions are
    /// separated by `", "`.
    pub fn describe(&self) -> String {
        postfix_to_infix::postfix_to_infix(&self.stack).join(", ")
    }

    /// Pops the last operation off `ops` and evaluates it, recursing into
    /// what remains for operator arguments. Returns the value and the
    /// operations that were not consumed.
    /// An empty `ops` has no value, which is reported as `EvalError::Generic`.
    fn evaluate_ops<'a>(&self, ops: &'a [Operation]) -> Result<(f64, &'a [Operation]), EvalError> {
        let Some((op, remaining)) = ops.split_last() else {
            return Err(EvalError::Generic);
        };

        match op {
            Operation::Operand(value) => Ok((*value, remaining)),
            Operation::Variable(name) => match self.variables.get(name) {
                Some(value) => Ok((*value, remaining)),
                None => Err(EvalError::UnboundVariable(name.clone())),
            },
            Operation::Constant { value, .. } => Ok((*value, remaining)),
            Operation::Unary(operator) => {
                let (x, remaining) = self.evaluate_operand(operator.symbol(), remaining)?;
                Ok((operator.apply(x), remaining))
            }
            Operation::Binary(operator) => {
                // `rhs` is the more recent of the two, so it's popped first
                let (rhs, remaining) = self.evaluate_operand(operator.symbol(), remaining)?;
                let (lhs, remaining) = self.evaluate_operand(operator.symbol(), remaining)?;
                Ok((operator.apply(lhs, rhs), remaining))
            }
        }
    }

    fn evaluate_operand<'a>(
        &self,
        symbol: &'static str,
        ops: &'a [Operation],
    ) -> Result<(f64, &'a [Operation]), EvalError> {
        self.evaluate_ops(ops).map_err(|e| match e {
            EvalError::Generic => EvalError::MissingOperand { symbol },
            other => other,
        })
    }
}
