//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! transliteration rules.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub segmenter: SegmenterSettings,
    pub classifier: ClassifierSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterSettings {
    /// Tokens shorter than this are converted whole, no boundary search.
    pub min_word_chars: usize,
    /// Tokens longer than this are converted whole, no boundary search.
    pub max_word_chars: usize,
    pub known_word_cost: i64,
    pub unknown_char_cost: i64,
    pub segment_penalty: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub acronym_min_chars: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(segmenter.min_word_chars);
    check_positive_usize!(segmenter.max_word_chars);
    check_non_negative!(segmenter.known_word_cost);
    check_non_negative!(segmenter.unknown_char_cost);
    check_non_negative!(segmenter.segment_penalty);
    if s.segmenter.min_word_chars > s.segmenter.max_word_chars {
        return Err(SettingsError::InvalidValue {
            field: "segmenter.min_word_chars".to_string(),
            reason: "must not exceed segmenter.max_word_chars".to_string(),
        });
    }

    check_positive_usize!(classifier.acronym_min_chars);

    Ok(())
}
