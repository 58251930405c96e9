use crate::core::{PasswordRule, Predicate};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LENGTH: usize = 8;

/// 密碼組成規則。`special_characters` 為 None 時，任何 ASCII 標點符號都算特殊字元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub special_characters: Option<String>,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_characters: None,
        }
    }
}

impl PasswordPolicy {
    fn is_special(&self, c: char) -> bool {
        match &self.special_characters {
            Some(set) => set.contains(c),
            None => c.is_ascii_punctuation(),
        }
    }

    /// 回傳所有未通過的規則，依規則順序排列
    pub fn violations(&self, candidate: &str) -> Vec<PasswordRule> {
        let mut failed = Vec::new();

        if candidate.chars().count() < self.min_length {
            failed.push(PasswordRule::MinLength);
        }
        if !candidate.chars().any(char::is_uppercase) {
            failed.push(PasswordRule::Uppercase);
        }
        if !candidate.chars().any(char::is_lowercase) {
            failed.push(PasswordRule::Lowercase);
        }
        if !candidate.chars().any(|c| c.is_ascii_digit()) {
            failed.push(PasswordRule::Digit);
        }
        if !candidate.chars().any(|c| self.is_special(c)) {
            failed.push(PasswordRule::SpecialCharacter);
        }

        failed
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        let failed = self.violations(candidate);
        if !failed.is_empty() {
            tracing::debug!(rules = ?failed, "password rejected");
        }
        failed.is_empty()
    }
}

impl Predicate<str> for PasswordPolicy {
    fn test(&self, input: &str) -> bool {
        self.is_valid(input)
    }
}

impl Validate for PasswordPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("password.min_length", self.min_length, 1)?;
        if let Some(set) = &self.special_characters {
            validate_non_empty_string("password.special_characters", set)?;
        }
        Ok(())
    }
}

pub fn validate_password(candidate: &str) -> bool {
    PasswordPolicy::default().is_valid(candidate)
}
