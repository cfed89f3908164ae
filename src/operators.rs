use crate::util::format_operand;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Multiply,
    Add,
    Divide,
    Subtract,
}

impl BinaryOperator {
    /// Compute `lhs OP rhs`, where OP is a binary operator (self).
    /// On the stack, `lhs` is the older of the two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Multiply => lhs * rhs,
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Divide => lhs / rhs,
            BinaryOperator::Subtract => lhs - rhs,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Multiply => "×",
            BinaryOperator::Add => "+",
            BinaryOperator::Divide => "÷",
            BinaryOperator::Subtract => "−",
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Sqrt,
    Sin,
    Cos,
    Negate,
}

impl UnaryOperator {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOperator::Sqrt => x.sqrt(),
            UnaryOperator::Sin => x.sin(),
            UnaryOperator::Cos => x.cos(),
            UnaryOperator::Negate => -x,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Sqrt => "√",
            UnaryOperator::Sin => "sin",
            UnaryOperator::Cos => "cos",
            UnaryOperator::Negate => "±",
        }
    }
}

/// Decides whether a sub-expression may need parentheses when it is used as
/// an operand. All binary operators share the single `Binary` tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Binary,
    Atomic,
}

/// A single entry of the calculator stack, in postfix order.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Operand(f64),
    Variable(String),
    Constant { symbol: &'static str, value: f64 },
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl Operation {
    pub const fn precedence(&self) -> Precedence {
        match self {
            Operation::Binary(_) => Precedence::Binary,
            _ => Precedence::Atomic,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Operation::Binary(_))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Operand(value) => f.write_str(&format_operand(*value)),
            Operation::Variable(name) => f.write_str(name),
            Operation::Constant { symbol, .. } => f.write_str(symbol),
            Operation::Unary(op) => f.write_str(op.symbol()),
            Operation::Binary(op) => f.write_str(op.symbol()),
        }
    }
}
