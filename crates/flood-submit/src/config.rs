//! Submission timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays of the submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// How long the simulated transport takes to "send", in milliseconds.
    pub send_delay_ms: u64,

    /// How long the success state is shown before returning to idle.
    pub reset_delay_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 5_000,  // 5 seconds
            reset_delay_ms: 5_000, // 5 seconds
        }
    }
}

impl SubmitConfig {
    /// Config with no waiting at all.
    pub fn immediate() -> Self {
        Self {
            send_delay_ms: 0,
            reset_delay_ms: 0,
        }
    }

    #[inline]
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    #[inline]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SubmitConfig::default();
        assert_eq!(config.send_delay(), Duration::from_secs(5));
        assert_eq!(config.reset_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SubmitConfig = serde_json::from_str(r#"{"send_delay_ms": 250}"#).unwrap();
        assert_eq!(config.send_delay_ms, 250);
        assert_eq!(config.reset_delay_ms, 5_000);
    }

    #[test]
    fn test_immediate() {
        let config = SubmitConfig::immediate();
        assert!(config.send_delay().is_zero());
        assert!(config.reset_delay().is_zero());
    }
}
