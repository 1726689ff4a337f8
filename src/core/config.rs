use std::env;
use std::time::Duration;

/// Realistic desktop-browser user agent. Plenty of sites gate the default
/// library UA with a 403 before the page is even rendered.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Hard deadline for the single HTTP GET a remote summary performs.
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// How many sentences a synopsis may contain.
    pub summary_sentences: usize,
    /// Character cap on web-path summary bodies (includes the `...` marker).
    pub web_summary_max_chars: usize,
    /// Local text shorter than this is returned verbatim instead of ranked.
    pub passthrough_max_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_millis(3000),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            summary_sentences: 3,
            web_summary_max_chars: 150,
            passthrough_max_chars: 200,
        }
    }
}

impl EngineConfig {
    /// Defaults with optional environment overrides. Unset or malformed
    /// variables fall back silently; the engine must keep working inside a
    /// host application that configures nothing.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("GIST_FETCH_TIMEOUT_MS").ok(),
            env::var("GIST_USER_AGENT").ok(),
        )
    }

    fn from_vars(timeout_ms: Option<String>, user_agent: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = timeout_ms
            && let Ok(ms) = raw.trim().parse::<u64>()
            && ms > 0
        {
            config.fetch_timeout = Duration::from_millis(ms);
        }
        if let Some(ua) = user_agent
            && !ua.trim().is_empty()
        {
            config.user_agent = ua.trim().to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = EngineConfig::default();
        assert_eq!(config.fetch_timeout, Duration::from_millis(3000));
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.web_summary_max_chars, 150);
        assert_eq!(config.passthrough_max_chars, 200);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn overrides_apply_when_valid() {
        let config = EngineConfig::from_vars(
            Some("500".to_string()),
            Some("TestAgent/1.0".to_string()),
        );
        assert_eq!(config.fetch_timeout, Duration::from_millis(500));
        assert_eq!(config.user_agent, "TestAgent/1.0");
    }

    #[test]
    fn malformed_overrides_fall_back() {
        let config = EngineConfig::from_vars(Some("soon".to_string()), Some("   ".to_string()));
        assert_eq!(config.fetch_timeout, Duration::from_millis(3000));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = EngineConfig::from_vars(Some("0".to_string()), None);
        assert_eq!(config.fetch_timeout, Duration::from_millis(3000));
    }
}
