use crate::core::{DiscountRequest, FallibleOperation};
use crate::utils::error::{LmsError, Result};
use crate::utils::validation::is_within_range;

pub const MIN_PERCENTAGE: f64 = 0.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

pub fn check_percentage(percentage: f64) -> Result<()> {
    if !is_within_range(percentage, MIN_PERCENTAGE, MAX_PERCENTAGE) {
        tracing::warn!(percentage, "discount percentage out of range");
        return Err(LmsError::invalid_argument(
            "Discount percentage must be between 0 and 100",
        ));
    }
    Ok(())
}

/// 價格不做檢查，只檢查折扣百分比 (0 到 100，含邊界)
pub fn calculate_discount(price: f64, percentage: f64) -> Result<f64> {
    check_percentage(percentage)?;
    Ok(price * (1.0 - percentage / 100.0))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountCalculator;

impl FallibleOperation<DiscountRequest> for DiscountCalculator {
    type Output = f64;

    fn apply(&self, input: DiscountRequest) -> Result<f64> {
        calculate_discount(input.price, input.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_discount_valid() {
        assert_eq!(calculate_discount(100.0, 10.0).unwrap(), 90.0);
        assert_eq!(calculate_discount(200.0, 50.0).unwrap(), 100.0);
        assert_eq!(calculate_discount(150.0, 0.0).unwrap(), 150.0);
        assert_eq!(calculate_discount(150.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_calculate_discount_invalid_percentage() {
        for percentage in [-10.0, 110.0, 100.0001, f64::NAN] {
            let err = calculate_discount(100.0, percentage).unwrap_err();
            assert!(matches!(err, LmsError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_negative_price_passes_through() {
        assert_eq!(calculate_discount(-100.0, 50.0).unwrap(), -50.0);
    }

    #[test]
    fn test_discount_calculator_operation() {
        let request = DiscountRequest {
            price: 200.0,
            percentage: 50.0,
        };
        assert_eq!(DiscountCalculator.apply(request).unwrap(), 100.0);
        assert!(DiscountCalculator
            .apply(DiscountRequest {
                price: 200.0,
                percentage: -1.0
            })
            .is_err());
    }
}
