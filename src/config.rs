// SPDX-License-Identifier: MIT

//! Environment-driven configuration
//!
//! Loaded once at startup. A missing `GOOGLE_API_KEY` is a fatal
//! construction error; everything else has a sensible default.

use std::env;
use std::path::PathBuf;

use crate::error::CompassError;

/// Default Gemini model for classification (cheap, fast)
pub const DEFAULT_FLASH_MODEL: &str = "gemini-2.5-flash";
/// Default Gemini model for content generation
pub const DEFAULT_PRO_MODEL: &str = "gemini-2.5-flash";

/// Runtime settings resolved from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Google API key for Gemini
    pub google_api_key: String,
    /// Brave Search API key; search is skipped entirely when unset
    pub brave_api_key: Option<String>,
    /// Model used by the classifiers
    pub flash_model: String,
    /// Model used by the task agents
    pub pro_model: String,
    /// Directory where generated markdown files are written
    pub output_dir: PathBuf,
    /// Start agents in fallback mode (canned responses, no external calls)
    pub use_canned_responses: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, CompassError> {
        let google_api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| CompassError::config("GOOGLE_API_KEY must be set"))?;

        let brave_api_key = env::var("BRAVE_API_KEY").ok().filter(|k| !k.is_empty());

        let flash_model =
            env::var("FLASH_MODEL").unwrap_or_else(|_| DEFAULT_FLASH_MODEL.to_string());
        let pro_model = env::var("PRO_MODEL").unwrap_or_else(|_| DEFAULT_PRO_MODEL.to_string());

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));

        let use_canned_responses = env::var("USE_CANNED_RESPONSES")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            google_api_key,
            brave_api_key,
            flash_model,
            pro_model,
            output_dir,
            use_canned_responses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var mutation is process-global, so everything lives in one test.
    #[test]
    fn test_settings_from_env() {
        env::remove_var("GOOGLE_API_KEY");
        env::remove_var("BRAVE_API_KEY");
        env::remove_var("OUTPUT_DIR");
        env::remove_var("USE_CANNED_RESPONSES");

        // Missing API key is a construction failure
        assert!(Settings::from_env().is_err());

        env::set_var("GOOGLE_API_KEY", "test-key");
        let settings = Settings::from_env().expect("settings");
        assert_eq!(settings.google_api_key, "test-key");
        assert!(settings.brave_api_key.is_none());
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert!(!settings.use_canned_responses);

        env::set_var("USE_CANNED_RESPONSES", "True");
        env::set_var("OUTPUT_DIR", "/tmp/compass-out");
        let settings = Settings::from_env().expect("settings");
        assert!(settings.use_canned_responses);
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/compass-out"));

        env::remove_var("GOOGLE_API_KEY");
        env::remove_var("OUTPUT_DIR");
        env::remove_var("USE_CANNED_RESPONSES");
    }
}
