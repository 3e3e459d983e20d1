//! Arithmetic evaluation for operation requests.

/// Selector of the arithmetic operation in an operation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
}

impl TryFrom<u8> for OpCode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(OpCode::Add),
            2 => Ok(OpCode::Subtract),
            3 => Ok(OpCode::Multiply),
            4 => Ok(OpCode::Divide),
            _ => Err(()),
        }
    }
}

/// Maps `(op_code, operand1, operand2)` to a 64-bit result.
///
/// Operands are widened to i64 before the arithmetic, so multiplying two
/// extreme 32-bit values cannot overflow the result field.
///
/// Two degenerate inputs produce 0 instead of an error and are therefore
/// indistinguishable from a legitimate zero result on the wire: division by
/// zero, and an op_code outside 1..=4. Both are fixed protocol behaviour,
/// not failure modes.
pub fn evaluate(op_code: u8, operand1: i32, operand2: i32) -> i64 {
    let a = i64::from(operand1);
    let b = i64::from(operand2);

    let Ok(op) = OpCode::try_from(op_code) else {
        return 0;
    };

    match op {
        OpCode::Add => a + b,
        OpCode::Subtract => a - b,
        OpCode::Multiply => a * b,
        OpCode::Divide if b == 0 => 0,
        OpCode::Divide => floor_div(a, b),
    }
}

/// Integer division rounding toward negative infinity.
///
/// `/` on integers truncates toward zero; the quotient is adjusted down by
/// one whenever a nonzero remainder has the opposite sign of the divisor.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(evaluate(1, 5, 3), 8);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(evaluate(2, 5, 3), 2);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(evaluate(3, 5, 3), 15);
    }

    #[test]
    fn test_divide() {
        assert_eq!(evaluate(4, 7, 2), 3);
    }

    #[test]
    fn test_divide_by_zero_returns_zero() {
        assert_eq!(evaluate(4, 5, 0), 0);
    }

    #[test]
    fn test_unknown_op_code_returns_zero() {
        assert_eq!(evaluate(9, 1, 1), 0);
        assert_eq!(evaluate(0, 1, 1), 0);
        assert_eq!(evaluate(0xFF, i32::MAX, i32::MAX), 0);
    }

    #[test]
    fn test_divide_floors_toward_negative_infinity() {
        assert_eq!(evaluate(4, -7, 2), -4);
        assert_eq!(evaluate(4, 7, -2), -4);
        assert_eq!(evaluate(4, -7, -2), 3);
        assert_eq!(evaluate(4, -6, 2), -3);
    }

    #[test]
    fn test_multiply_extreme_operands_does_not_overflow() {
        let expected = i64::from(i32::MAX) * i64::from(i32::MAX);
        assert_eq!(evaluate(3, i32::MAX, i32::MAX), expected);

        let expected = i64::from(i32::MIN) * i64::from(i32::MIN);
        assert_eq!(evaluate(3, i32::MIN, i32::MIN), expected);
    }

    #[test]
    fn test_add_extreme_operands_widens() {
        assert_eq!(
            evaluate(1, i32::MAX, i32::MAX),
            2 * i64::from(i32::MAX)
        );
        assert_eq!(
            evaluate(2, i32::MIN, i32::MAX),
            i64::from(i32::MIN) - i64::from(i32::MAX)
        );
    }

    #[test]
    fn test_divide_min_by_minus_one_widens() {
        // i32::MIN / -1 overflows in 32 bits; the widened result is exact.
        assert_eq!(evaluate(4, i32::MIN, -1), -i64::from(i32::MIN));
    }

    #[test]
    fn test_op_code_try_from_known_values() {
        assert_eq!(OpCode::try_from(1), Ok(OpCode::Add));
        assert_eq!(OpCode::try_from(2), Ok(OpCode::Subtract));
        assert_eq!(OpCode::try_from(3), Ok(OpCode::Multiply));
        assert_eq!(OpCode::try_from(4), Ok(OpCode::Divide));
    }

    #[test]
    fn test_op_code_try_from_rejects_out_of_range() {
        assert_eq!(OpCode::try_from(0), Err(()));
        assert_eq!(OpCode::try_from(5), Err(()));
    }
}
