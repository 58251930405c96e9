use crate::config::{Command, TomlConfig};
use crate::core::batch::discount_price_list;
use crate::core::calculator::calculate;
use crate::core::discount::calculate_discount;
use crate::core::PasswordRule;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// 一個指令的結果，可輸出為文字或 JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum CommandOutput {
    Calc {
        a: f64,
        operator: String,
        b: f64,
        result: f64,
    },
    Password {
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        violations: Option<Vec<PasswordRule>>,
    },
    Discount {
        price: f64,
        percentage: f64,
        result: f64,
    },
    DiscountBatch {
        output: String,
        rows: usize,
    },
}

impl CommandOutput {
    /// 只有密碼檢查失敗時回傳非零
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Password { valid: false, .. } => 1,
            _ => 0,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calc {
                a,
                operator,
                b,
                result,
            } => write!(f, "{} {} {} = {}", a, operator, b, result),
            Self::Password { valid, violations } => {
                if *valid {
                    write!(f, "✅ Password is valid")?;
                } else {
                    write!(f, "❌ Password is invalid")?;
                }
                for rule in violations.iter().flatten() {
                    write!(f, "\n  - {}", rule)?;
                }
                Ok(())
            }
            Self::Discount {
                price,
                percentage,
                result,
            } => write!(f, "{} - {}% = {}", price, percentage, result),
            Self::DiscountBatch { output, rows } => {
                write!(f, "📁 {} discounted prices saved to: {}", rows, output)
            }
        }
    }
}

pub fn execute(command: &Command, config: &TomlConfig) -> Result<CommandOutput> {
    tracing::debug!("Executing command: {:?}", command);

    match command {
        Command::Calc { a, operator, b } => Ok(CommandOutput::Calc {
            a: *a,
            operator: operator.clone(),
            b: *b,
            result: calculate(*a, *b, operator)?,
        }),
        Command::Password { candidate, explain } => {
            let policy = config.password_policy();
            let valid = policy.is_valid(candidate);
            let violations = explain.then(|| policy.violations(candidate));
            Ok(CommandOutput::Password { valid, violations })
        }
        Command::Discount { price, percentage } => Ok(CommandOutput::Discount {
            price: *price,
            percentage: *percentage,
            result: calculate_discount(*price, *percentage)?,
        }),
        Command::DiscountBatch {
            input,
            output,
            percentage,
        } => {
            let rows = discount_price_list(input, output, *percentage)?;
            Ok(CommandOutput::DiscountBatch {
                output: output.clone(),
                rows,
            })
        }
    }
}
