use crate::error::AppError;
use crate::matcher::DEFAULT_MAX_RESULTS;
use crate::render::DEFAULT_PREVIEW_CHARS;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of articles surfaced per query when the caller gives no limit.
    pub max_results: usize,
    /// Characters of article content shown on a rendered card.
    pub preview_chars: usize,
    /// Serve MCP over TCP on this address instead of stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `LEGAL_REFERENCES_MAX_RESULTS` (default: 3)
    /// - `LEGAL_REFERENCES_PREVIEW_CHARS` (default: 140)
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let max_results =
            positive_or_default(&var, "LEGAL_REFERENCES_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        let preview_chars =
            positive_or_default(&var, "LEGAL_REFERENCES_PREVIEW_CHARS", DEFAULT_PREVIEW_CHARS)?;

        Ok(Self {
            max_results,
            preview_chars,
            tcp_listen_addr: var("MCP_TCP_LISTEN_ADDR").filter(|addr| !addr.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            tcp_listen_addr: None,
        }
    }
}

fn positive_or_default(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, AppError> {
    let Some(raw) = var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
