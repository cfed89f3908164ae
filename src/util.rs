use crate::error::EvaluationResult;

/// Formats an operand the way it was most likely typed: whole numbers
/// without a fractional part (`3`, not `3.0`), everything else in full.
pub fn format_operand(value: f64) -> String {
    // Beyond 2^53 every f64 is whole, and i64 runs out at 2^63
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.2e18 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Converts an evaluation result to a user-friendly string, ready to be
/// displayed to the user.
pub fn stringify_output(result: &EvaluationResult) -> String {
    match result {
        Ok(value) => format!("= {}", format_operand(*value)),
        Err(e) => format!("Error: {e}"),
    }
}

/// The line shown above the result: what the stack contains, or nothing
/// when it is empty.
pub fn history_line(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("{description} =")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EvalError;

    use super::*;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!("3", format_operand(3.0));
        assert_eq!("-12", format_operand(-12.0));
        assert_eq!("0", format_operand(0.0));
        assert_eq!("1000000", format_operand(1e6));
    }

    #[test]
    fn test_fractions_are_printed_in_full() {
        assert_eq!("2.5", format_operand(2.5));
        assert_eq!("0.1", format_operand(0.1));
        assert_eq!("0.30000000000000004", format_operand(0.1 + 0.2));
        assert_eq!("3.141592653589793", format_operand(std::f64::consts::PI));
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!("inf", format_operand(f64::INFINITY));
        assert_eq!("NaN", format_operand(f64::NAN));
    }

    #[test]
    fn test_output() {
        assert_eq!("= 7", stringify_output(&Ok(7.0)));
        assert_eq!("= 0.5", stringify_output(&Ok(0.5)));
        assert_eq!("Error: Result is infinite", stringify_output(&Err(EvalError::InfiniteResult)));
        assert_eq!("3+4 =", history_line("3+4"));
        assert_eq!("", history_line(""));
    }
}
