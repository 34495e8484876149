use crate::core::datetime::DEFAULT_DATE_FORMAT;
use crate::core::misc::DEFAULT_DICE_SIDES;
use crate::core::text::{DEFAULT_CHARSET, DEFAULT_TRUNCATE_SUFFIX};
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_RANDOM_LENGTH: i64 = 4096;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Inputs for the demo binary. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub strings: StringsConfig,
    pub dates: DatesConfig,
    pub misc: MiscConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    pub random_length: i64,
    pub charset: String,
    pub truncate_suffix: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            random_length: 10,
            charset: DEFAULT_CHARSET.to_string(),
            truncate_suffix: DEFAULT_TRUNCATE_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatesConfig {
    pub date_format: String,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscConfig {
    pub dice_sides: i64,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            dice_sides: DEFAULT_DICE_SIDES,
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UtilError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DICE_SIDES})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "strings.random_length",
            self.strings.random_length,
            0,
            MAX_RANDOM_LENGTH,
        )?;
        validate_non_empty_string("strings.charset", &self.strings.charset)?;
        validate_non_empty_string("dates.date_format", &self.dates.date_format)?;
        validate_positive_number("misc.dice_sides", self.misc.dice_sides, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[strings]
random_length = 16
charset = "01"
truncate_suffix = "…"

[dates]
date_format = "%d/%m/%Y"

[misc]
dice_sides = 20
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.strings.random_length, 16);
        assert_eq!(config.strings.charset, "01");
        assert_eq!(config.strings.truncate_suffix, "…");
        assert_eq!(config.dates.date_format, "%d/%m/%Y");
        assert_eq!(config.misc.dice_sides, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_tables_use_defaults() {
        let config = DemoConfig::from_toml_str("[misc]\ndice_sides = 8\n").unwrap();
        assert_eq!(config.misc.dice_sides, 8);
        assert_eq!(config.strings, StringsConfig::default());
        assert_eq!(config.dates.date_format, DEFAULT_DATE_FORMAT);

        assert_eq!(DemoConfig::from_toml_str("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AIO_TOOLKIT_TEST_SIDES", "12");

        let config =
            DemoConfig::from_toml_str("[misc]\ndice_sides = ${AIO_TOOLKIT_TEST_SIDES}\n").unwrap();
        assert_eq!(config.misc.dice_sides, 12);

        std::env::remove_var("AIO_TOOLKIT_TEST_SIDES");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = DemoConfig::from_toml_str(
            "[strings]\ncharset = \"${AIO_TOOLKIT_SURELY_UNSET}\"\n",
        )
        .unwrap();
        assert_eq!(config.strings.charset, "${AIO_TOOLKIT_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let config = DemoConfig::from_toml_str("[misc]\ndice_sides = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = DemoConfig::from_toml_str("[strings]\nrandom_length = -1\n").unwrap();
        assert!(config.validate().is_err());

        let config = DemoConfig::from_toml_str("[strings]\ncharset = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DemoConfig::from_toml_str("[misc\n").unwrap_err();
        assert!(matches!(err, UtilError::ConfigError { .. }));
        assert!(err.to_string().starts_with("Configuration error: TOML parsing error"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[dates]\ndate_format = \"%Y/%m/%d\"\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dates.date_format, "%Y/%m/%d");

        assert!(matches!(
            DemoConfig::from_file("/definitely/not/here.toml"),
            Err(UtilError::IoError(_))
        ));
    }
}
