#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::TomlConfig;
pub use crate::core::{
    calculator::{calculate, Calculator},
    discount::{calculate_discount, DiscountCalculator},
    password::{validate_password, PasswordPolicy},
};
pub use crate::domain::model::{Operator, PasswordRule};
pub use crate::domain::ports::{FallibleOperation, Predicate};
pub use crate::utils::error::{LmsError, Result};
