pub mod batch;
pub mod calculator;
pub mod discount;
pub mod password;

pub use crate::domain::model::{
    Calculation, DiscountRequest, DiscountedPrice, Operator, PasswordRule, PriceEntry,
};
pub use crate::domain::ports::{FallibleOperation, Predicate};
pub use crate::utils::error::Result;
