#![deny(warnings)]

//! Shared input model and validation errors for the shop calculators.
//!
//! This crate defines the host-facing settings (the scalar inputs each
//! calculator is configured with) and the error taxonomy both engines report.
//! It performs no arithmetic itself; validation of the values happens inside
//! the engines so that every entry point applies the same rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Validation errors for calculator inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Cover price must be strictly positive.
    #[error("cover price must be greater than zero")]
    NonPositivePrice,
    /// Copy count must be strictly positive.
    #[error("number of copies must be greater than zero")]
    NonPositiveCopies,
    /// Dollar amount must be zero or more.
    #[error("dollar amount cannot be negative")]
    NegativeAmount,
    /// Intermediate value left the representable decimal range.
    #[error("calculation overflowed decimal range")]
    Overflow,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Inputs for the bookstore cost calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookstoreSettings {
    /// List price of a single book.
    pub cover_price: Decimal,
    /// Number of copies ordered.
    pub number_of_copies: i64,
}

impl Default for BookstoreSettings {
    fn default() -> Self {
        Self {
            cover_price: Decimal::new(2495, 2),
            number_of_copies: 60,
        }
    }
}

/// Inputs for the bill breakdown calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillSettings {
    /// Whole-dollar amount to break into bills.
    pub dollar_amount: i64,
}

impl Default for BillSettings {
    fn default() -> Self {
        Self { dollar_amount: 247 }
    }
}

/// Complete host configuration: one settings block per calculator.
///
/// Values are carried as given; out-of-range numbers are only rejected when
/// the corresponding engine runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub bookstore: BookstoreSettings,
    pub bills: BillSettings,
}

impl CalcConfig {
    /// Parse a configuration from YAML. Missing sections fall back to defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: CalcConfig = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    /// Read and parse a YAML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading calculator config");
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_shipped_components() {
        let cfg = CalcConfig::default();
        assert_eq!(cfg.bookstore.cover_price, Decimal::new(2495, 2));
        assert_eq!(cfg.bookstore.number_of_copies, 60);
        assert_eq!(cfg.bills.dollar_amount, 247);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = CalcConfig::from_yaml_str("bills:\n  dollar_amount: 58\n").unwrap();
        assert_eq!(cfg.bills.dollar_amount, 58);
        assert_eq!(cfg.bookstore, BookstoreSettings::default());
    }

    #[test]
    fn yaml_decimal_price() {
        let text = "bookstore:\n  cover_price: \"19.99\"\n  number_of_copies: 3\n";
        let cfg = CalcConfig::from_yaml_str(text).unwrap();
        assert_eq!(cfg.bookstore.cover_price, Decimal::new(1999, 2));
        assert_eq!(cfg.bookstore.number_of_copies, 3);
    }

    #[test]
    fn invalid_values_are_carried_not_rejected() {
        let cfg = CalcConfig::from_yaml_str("bills:\n  dollar_amount: -5\n").unwrap();
        assert_eq!(cfg.bills.dollar_amount, -5);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = CalcConfig::from_yaml_str("bills: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CalcConfig::load("/definitely/not/here/calc.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::NonPositivePrice.to_string(),
            "cover price must be greater than zero"
        );
        assert_eq!(
            ValidationError::NegativeAmount.to_string(),
            "dollar amount cannot be negative"
        );
    }

    proptest! {
        #[test]
        fn integer_inputs_parse_verbatim(copies in any::<i64>(), amount in any::<i64>()) {
            let text = format!(
                "bookstore:\n  number_of_copies: {copies}\nbills:\n  dollar_amount: {amount}\n"
            );
            let cfg = CalcConfig::from_yaml_str(&text).unwrap();
            prop_assert_eq!(cfg.bookstore.number_of_copies, copies);
            prop_assert_eq!(cfg.bills.dollar_amount, amount);
        }
    }
}
