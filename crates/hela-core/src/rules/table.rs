/// Default Singlish scheme, embedded at compile time.
pub const DEFAULT_TOML: &str = include_str!("singlish.toml");
