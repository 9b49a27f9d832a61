use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_max_len, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const MAX_VALUES: usize = 1024;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

/// Inputs fed to the demonstrations. The defaults trigger one failure in
/// each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub dividend: i32,
    pub divisor: i32,
    pub values: Vec<i32>,
    pub index: i64,
    pub text: Option<String>,
    pub marks: i32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            dividend: 10,
            divisor: -1,
            values: vec![1, 2, 3],
            index: 5,
            text: None,
            marks: 105,
        }
    }
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Keys missing from `content` keep their default value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let scenario: Scenario = toml::from_str(&processed)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_max_len("values", &self.values, MAX_VALUES)?;
        if let Some(text) = &self.text {
            if text.contains('\0') {
                return Err(DemoError::InvalidConfigValueError {
                    field: "text".to_string(),
                    value: text.escape_default().to_string(),
                    reason: "Text contains null bytes".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(Scenario::from_toml_str("").unwrap(), Scenario::default());
    }

    #[test]
    fn test_partial_override() {
        let scenario = Scenario::from_toml_str("divisor = 0\ntext = \"abc\"").unwrap();
        assert_eq!(scenario.divisor, 0);
        assert_eq!(scenario.text.as_deref(), Some("abc"));
        assert_eq!(scenario.marks, 105);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Scenario::from_toml_str("divisr = 2").unwrap_err();
        assert!(matches!(err, DemoError::ParseError(_)));
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let content = "text = \"${FAULT_DEMO_SURELY_UNSET_VARIABLE}\"";
        let scenario = Scenario::from_toml_str(content).unwrap();
        assert_eq!(
            scenario.text.as_deref(),
            Some("${FAULT_DEMO_SURELY_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_too_many_values() {
        let values = vec!["0"; MAX_VALUES + 1].join(", ");
        let err = Scenario::from_toml_str(&format!("values = [{}]", values)).unwrap_err();
        assert!(matches!(err, DemoError::InvalidConfigValueError { .. }));
    }
}
