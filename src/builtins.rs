// All the built-in operators and constants.

use bevy_utils::HashMap;

use crate::operators::{BinaryOperator, Operation, UnaryOperator};

/// Maps display symbols to the built-in operation they stand for.
/// Built once; the calculator only ever reads from it.
#[derive(Debug, Clone)]
pub struct Registry {
    operations: HashMap<&'static str, Operation>,
}

impl Registry {
    pub fn builtin() -> Self {
        let mut registry = Self {
            operations: Default::default(),
        };

        for op in [
            UnaryOperator::Sqrt,
            UnaryOperator::Sin,
            UnaryOperator::Cos,
            UnaryOperator::Negate,
        ] {
            registry.learn(Operation::Unary(op));
        }
        for op in [
            BinaryOperator::Multiply,
            BinaryOperator::Add,
            BinaryOperator::Divide,
            BinaryOperator::Subtract,
        ] {
            registry.learn(Operation::Binary(op));
        }
        registry.learn(Operation::Constant {
            symbol: "π",
            value: std::f64::consts::PI,
        });

        registry
    }

    fn learn(&mut self, operation: Operation) {
        let symbol = match &operation {
            Operation::Unary(op) => op.symbol(),
            Operation::Binary(op) => op.symbol(),
            Operation::Constant { symbol, .. } => *symbol,
            Operation::Operand(_) | Operation::Variable(_) => return,
        };
        self.operations.insert(symbol, operation);
    }

    pub fn lookup(&self, symbol: &str) -> Option<Operation> {
        self.operations.get(symbol).cloned()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
