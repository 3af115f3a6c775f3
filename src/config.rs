use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ON_NO_MATCH_KEY: &str = "BANKING_ON_NO_MATCH";

/// Compiled into the binary so the web build has a config without a
/// filesystem or process environment.
const EMBEDDED_CONFIG: &str = include_str!("../config/shell.json");

/// What the router shell does when no route matches the current path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatch {
    /// Leave the content region empty.
    #[default]
    Blank,
    FallbackView,
    RedirectHome,
}

impl FromStr for NoMatch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "blank" => Ok(NoMatch::Blank),
            "fallback_view" | "fallbackView" => Ok(NoMatch::FallbackView),
            "redirect_home" | "redirectHome" => Ok(NoMatch::RedirectHome),
            other => bail!("unknown no-match policy: {:?}", other),
        }
    }
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoMatch::Blank => "blank",
            NoMatch::FallbackView => "fallback_view",
            NoMatch::RedirectHome => "redirect_home",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub on_no_match: NoMatch,
}

impl ShellConfig {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("failed to parse shell config")
    }

    /// Embedded config, then `BANKING_ON_NO_MATCH` from the process
    /// environment, then the same variable as seen at build time.
    pub fn load() -> Self {
        let mut config = match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default shell config: {:#}", e);
                Self::default()
            }
        };

        let runtime = std::env::var(ON_NO_MATCH_KEY).ok();
        let value = runtime.as_deref().or(option_env!("BANKING_ON_NO_MATCH"));
        if let Some(policy) = parse_override(value) {
            config.on_no_match = policy;
        }

        tracing::info!("no-match policy: {}", config.on_no_match);
        config
    }
}

fn parse_override(value: Option<&str>) -> Option<NoMatch> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(policy) => Some(policy),
        Err(e) => {
            tracing::warn!("ignoring {}: {}", ON_NO_MATCH_KEY, e);
            None
        }
    }
}
