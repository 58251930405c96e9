use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "lms-core")]
#[command(about = "LMS utilities: calculator, password validator and discount calculator")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply an operator (+, -, x, /) to two numbers
    #[command(allow_negative_numbers = true)]
    Calc {
        a: f64,
        #[arg(allow_hyphen_values = true)]
        operator: String,
        b: f64,
    },

    /// Check a password against the composition rules
    Password {
        #[arg(allow_hyphen_values = true)]
        candidate: String,

        /// List the rules the password fails
        #[arg(long)]
        explain: bool,
    },

    /// Apply a percentage discount to a price
    #[command(allow_negative_numbers = true)]
    Discount { price: f64, percentage: f64 },

    /// Apply a percentage discount to every row of a `name,price` CSV file
    #[command(allow_negative_numbers = true)]
    DiscountBatch {
        #[arg(long)]
        input: String,

        #[arg(long)]
        output: String,

        #[arg(long)]
        percentage: f64,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
        }
        if let Command::DiscountBatch { input, output, .. } = &self.command {
            validate_non_empty_string("input", input)?;
            validate_non_empty_string("output", output)?;
        }
        Ok(())
    }
}
