use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::labels::{Labels, Language};

/// presentation configuration, passed with every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub language: Language,
    pub currency_symbol: String,
    /// render digits as ०-९ instead of 0-9
    pub devanagari_digits: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::nepali()
    }
}

impl CalculatorConfig {
    /// nepali labels, ascii digits
    pub fn nepali() -> Self {
        Self {
            language: Language::Nepali,
            currency_symbol: "रु".to_string(),
            devanagari_digits: false,
        }
    }

    pub fn english() -> Self {
        Self {
            language: Language::English,
            currency_symbol: "Rs.".to_string(),
            devanagari_digits: false,
        }
    }

    pub fn with_devanagari_digits(mut self, enabled: bool) -> Self {
        self.devanagari_digits = enabled;
        self
    }

    /// load from json, missing keys take the nepali defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(CalculatorError::InvalidConfiguration {
                message: "currency symbol cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nepali() {
        let config = CalculatorConfig::default();
        assert_eq!(config.language, Language::Nepali);
        assert_eq!(config.currency_symbol, "रु");
        assert!(!config.devanagari_digits);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"language": "en", "devanagari_digits": true}"#;
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.currency_symbol, "रु");
        assert!(config.devanagari_digits);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let err = CalculatorConfig::from_json(r#"{"language": "fr"}"#).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidConfiguration { .. }));

        let err = CalculatorConfig::from_json(r#"{"currency_symbol": " "}"#).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidConfiguration {
                message: "currency symbol cannot be empty".to_string(),
            }
        );
    }
}
