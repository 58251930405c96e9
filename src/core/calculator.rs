use crate::core::{Calculation, FallibleOperation, Operator};
use crate::utils::error::{LmsError, Result};

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
pub const INVALID_OPERATOR: &str = "Invalid operator";

impl Operator {
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => {
                if b == 0.0 {
                    return Err(LmsError::invalid_operation(DIVIDE_BY_ZERO));
                }
                Ok(a / b)
            }
        }
    }

    pub fn parse(symbol: &str) -> Result<Self> {
        Operator::from_symbol(symbol).ok_or_else(|| LmsError::invalid_operation(INVALID_OPERATOR))
    }
}

impl std::str::FromStr for Operator {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::parse(s)
    }
}

fn evaluate(op: Operator, a: f64, b: f64) -> Result<f64> {
    let result = op.apply(a, b)?;
    tracing::debug!(a, b, operator = %op, result, "calculated");
    Ok(result)
}

pub fn calculate(a: f64, b: f64, operator: &str) -> Result<f64> {
    evaluate(Operator::parse(operator)?, a, b)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl FallibleOperation<Calculation> for Calculator {
    type Output = f64;

    fn apply(&self, input: Calculation) -> Result<f64> {
        evaluate(input.operator, input.a, input.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_operation(result: Result<f64>, expected: &str) {
        match result {
            Err(LmsError::InvalidOperation { message }) => assert_eq!(message, expected),
            other => panic!("expected InvalidOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_addition() {
        assert_eq!(calculate(1.0, 2.0, "+").unwrap(), 3.0);
        assert_eq!(calculate(-1.0, -1.0, "+").unwrap(), -2.0);
        assert_eq!(calculate(0.0, 5.0, "+").unwrap(), 5.0);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(calculate(5.0, 3.0, "-").unwrap(), 2.0);
        assert_eq!(calculate(-1.0, -1.0, "-").unwrap(), 0.0);
        assert_eq!(calculate(0.0, 5.0, "-").unwrap(), -5.0);
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(calculate(3.0, 4.0, "x").unwrap(), 12.0);
        assert_eq!(calculate(-1.0, 5.0, "x").unwrap(), -5.0);
        assert_eq!(calculate(0.0, 5.0, "x").unwrap(), 0.0);
    }

    #[test]
    fn test_division() {
        assert_eq!(calculate(10.0, 2.0, "/").unwrap(), 5.0);
        assert_eq!(calculate(-10.0, 2.0, "/").unwrap(), -5.0);
        assert_eq!(calculate(0.0, 1.0, "/").unwrap(), 0.0);
        assert_eq!(calculate(1.0, 4.0, "/").unwrap(), 0.25);
    }

    #[test]
    fn test_division_by_zero() {
        assert_invalid_operation(calculate(10.0, 0.0, "/"), "Cannot divide by zero");
        assert_invalid_operation(calculate(10.0, -0.0, "/"), "Cannot divide by zero");
    }

    #[test]
    fn test_invalid_operator() {
        assert_invalid_operation(calculate(10.0, 5.0, "%"), "Invalid operator");
        assert_invalid_operation(calculate(3.0, 4.0, "*"), "Invalid operator");
        assert_invalid_operation(calculate(3.0, 4.0, ""), "Invalid operator");
    }

    #[test]
    fn test_calculator_operation() {
        let calc = Calculator;
        let input = Calculation {
            a: 3.0,
            b: 4.0,
            operator: Operator::Multiply,
        };
        assert_eq!(calc.apply(input).unwrap(), 12.0);
        assert_eq!(calc.apply(input).unwrap(), calc.apply(input).unwrap());
    }

    #[test]
    fn test_calculator_matches_calculate() {
        for op in Operator::ALL {
            for (a, b) in [(7.0, 2.0), (-3.0, 0.5), (4.0, 0.0)] {
                let via_fn = calculate(a, b, op.symbol()).map_err(|e| e.to_string());
                let via_trait = Calculator
                    .apply(Calculation { a, b, operator: op })
                    .map_err(|e| e.to_string());
                assert_eq!(via_fn, via_trait, "{} {} {}", a, op, b);
            }
        }
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("mod".parse::<Operator>().is_err());
    }
}
