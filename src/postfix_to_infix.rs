use crate::operators::Operation;

/// Converts operations from postfix form (`1 2 +`) back to infix text (`1+2`),
/// reading the stack from the oldest operation forward. Every complete
/// expression becomes its own string, in stack order.
///
/// Parentheses are decided with a one-token lookahead rather than true
/// operator precedence: all binary operators are on the same tier, and a
/// combination is left bare only when it ends the stack or is immediately
/// continued by the same operator. Missing operands are shown as `?`.
///
/// A unary operator with nothing to apply to ends the conversion; whatever
/// follows it is not described.
pub fn postfix_to_infix(ops: &[Operation]) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut remaining = ops;

    while let Some((op, rest)) = remaining.split_first() {
        remaining = rest;

        match op {
            Operation::Operand(_) | Operation::Variable(_) | Operation::Constant { .. } => {
                fragments.push(op.to_string());
            }
            Operation::Unary(operator) => match fragments.pop() {
                Some(operand) => fragments.push(format!("{}({operand})", operator.symbol())),
                None => break,
            },
            Operation::Binary(operator) => {
                let symbol = operator.symbol();
                let fragment = match fragments.pop() {
                    None => format!("?{symbol}?"),
                    Some(rhs) => match fragments.pop() {
                        None => format!("?{symbol}{rhs}"),
                        Some(lhs) if needs_parentheses(op, rest) => format!("({lhs}{symbol}{rhs})"),
                        Some(lhs) => format!("{lhs}{symbol}{rhs}"),
                    },
                };
                fragments.push(fragment);
            }
        }
    }

    fragments
}

/// `op` is a binary operation whose infix form is being built, `rest` the
/// operations after it.
fn needs_parentheses(op: &Operation, rest: &[Operation]) -> bool {
    match rest.first() {
        None => false,
        Some(next) if next.precedence() == op.precedence() => next != op,
        Some(_) => true,
    }
}

#[rustfmt::skip] // one assert per line
#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{BinaryOperator as BinOp, UnaryOperator as UnOp};

    // Builds a vector of operations from space-separated tokens. ASCII stands
    // in for the display symbols, which aren't valid macro tokens.
    macro_rules! ops {
        (+) => {Operation::Binary(BinOp::Add)};
        (-) => {Operation::Binary(BinOp::Subtract)};
        (*) => {Operation::Binary(BinOp::Multiply)};
        (/) => {Operation::Binary(BinOp::Divide)};
        (sqrt) => {Operation::Unary(UnOp::Sqrt)};
        (sin) => {Operation::Unary(UnOp::Sin)};
        (cos) => {Operation::Unary(UnOp::Cos)};
        (neg) => {Operation::Unary(UnOp::Negate)};
        (pi) => {Operation::Constant { symbol: "π", value: std::f64::consts::PI }};
        ($lit:literal) => {Operation::Operand($lit as f64)};
        ($name:ident) => {Operation::Variable(stringify!($name).to_owned())};
        ($($tok:tt)+) => {
            vec![$(ops!($tok),)*]
        }
    }

    fn describe(ops: Vec<Operation>) -> String {
        postfix_to_infix(&ops).join(", ")
    }

    #[test]
    fn test_empty_stack_has_no_description() {
        assert!(postfix_to_infix(&[]).is_empty());
    }

    #[test]
    fn test_single_values() {
        assert_eq!("3", describe(vec![ops![3]]));
        assert_eq!("2.5", describe(vec![ops![2.5]]));
        assert_eq!("M", describe(vec![ops![M]]));
        assert_eq!("π", describe(vec![ops![pi]]));
    }

    #[test]
    fn test_simple_binary_operations() {
        assert_eq!("3+4", describe(ops![3 4 +]));
        assert_eq!("10−2", describe(ops![10 2 -]));
        assert_eq!("6÷2", describe(ops![6 2 /]));
        assert_eq!("x×y", describe(ops![x y *]));
    }

    #[test]
    fn test_unary_operations_wrap_their_operand() {
        assert_eq!("√(16)", describe(ops![16 sqrt]));
        assert_eq!("cos(π)", describe(ops![pi cos]));
        assert_eq!("±(sin(M))", describe(ops![M sin neg]));
        assert_eq!("√((3+4))", describe(ops![3 4 + sqrt]));
    }

    #[test]
    fn test_right_nested_chains_of_one_operator_stay_flat() {
        assert_eq!("3+4+5", describe(ops![3 4 5 + +]));
        assert_eq!("1×2×3×4", describe(ops![1 2 3 4 * * *]));
    }

    #[test]
    fn test_lookahead_only_sees_the_next_operation() {
        // The next token after the first `+` is an operand, so it gets parenthesized
        assert_eq!("(3+4)+5", describe(ops![3 4 + 5 +]));
        assert_eq!("((1×2)×3)×4", describe(ops![1 2 * 3 * 4 *]));
        // Flat even though subtraction isn't associative: evaluates as 3−(4−5)
        assert_eq!("3−4−5", describe(ops![3 4 5 - -]));
    }

    #[test]
    fn test_mixed_operators_are_parenthesized() {
        assert_eq!("(3+4)×5", describe(ops![3 4 + 5 *]));
        assert_eq!("3×(4+5)", describe(ops![3 4 5 + *]));
        assert_eq!("(3+5)×(6−2)", describe(ops![3 5 + 6 2 - *]));
        assert_eq!("√((3+5))×(6−2)", describe(ops![3 5 + sqrt 6 2 - *]));
    }

    #[test]
    fn test_missing_operands_show_question_marks() {
        assert_eq!("?+?", describe(vec![ops![+]]));
        assert_eq!("?×3", describe(ops![3 *]));
        assert_eq!("?−(3+4)", describe(ops![3 4 + -]));
    }

    #[test]
    fn test_independent_expressions_are_separated() {
        assert_eq!("3, 4", describe(ops![3 4]));
        assert_eq!("(3+4), 5", describe(ops![3 4 + 5]));
        assert_eq!(vec!["(1+2)".to_owned(), "√(9)".to_owned()], postfix_to_infix(&ops![1 2 + 9 sqrt]));
    }

    #[test]
    fn test_unary_without_operand_ends_description() {
        assert_eq!("", describe(vec![ops![sqrt]]));
        assert_eq!("", describe(ops![sqrt 3 4 +]));
        assert_eq!("√(?+3)", describe(ops![3 + sqrt]));
    }
}
