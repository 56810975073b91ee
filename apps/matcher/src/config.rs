use anyhow::{Context, Result};

use crate::parsing::DEFAULT_MAX_UPLOAD_BYTES;

/// Runtime configuration loaded from environment variables (and `.env`).
/// Every value has a default; malformed values are startup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_upload_bytes: usize,
    /// Derive required skills from the job text when none are supplied.
    pub infer_required_skills: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            infer_required_skills: true,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            max_upload_bytes: match lookup("MATCHER_MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("MATCHER_MAX_UPLOAD_BYTES must be a non-negative integer")?,
                None => defaults.max_upload_bytes,
            },
            infer_required_skills: match lookup("MATCHER_INFER_SKILLS") {
                Some(raw) => parse_bool(&raw)
                    .with_context(|| format!("MATCHER_INFER_SKILLS must be a boolean, got '{raw}'"))?,
                None => defaults.infer_required_skills,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
