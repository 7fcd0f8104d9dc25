//! Transports that carry a submitted field set.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use flood_model::FieldSet;

use crate::config::SubmitConfig;
use crate::error::Result;

/// Acknowledgement of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Number of fields that held a non-empty value.
    pub filled_fields: usize,
    /// When the transport finished.
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn for_fields(fields: &FieldSet) -> Self {
        Self {
            filled_fields: fields.iter().filter(|(_, value)| !value.is_empty()).count(),
            submitted_at: Utc::now(),
        }
    }
}

/// Something that can deliver a field set.
///
/// The snapshot is passed by value, so edits made to the form after the
/// submission started cannot reach the transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name for logs and error messages.
    fn name(&self) -> &str;

    async fn send(&self, fields: FieldSet) -> Result<Receipt>;
}

/// Transport that waits and then succeeds. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::from_config(&SubmitConfig::default())
    }
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SubmitConfig) -> Self {
        Self::new(config.send_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn send(&self, fields: FieldSet) -> Result<Receipt> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating send");
        tokio::time::sleep(self.delay).await;
        Ok(Receipt::for_fields(&fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_model::FieldName;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_waits_for_delay() {
        let transport = SimulatedTransport::new(Duration::from_secs(5));
        let start = tokio::time::Instant::now();

        let receipt = transport.send(FieldSet::new()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(5));
        // past_flood defaults to "no"
        assert_eq!(receipt.filled_fields, 1);
    }

    #[test]
    fn test_receipt_counts_filled_fields() {
        let mut fields = FieldSet::new();
        fields.set(FieldName::LandUse, "urban");
        fields.set(FieldName::PastFlood, "");
        assert_eq!(Receipt::for_fields(&fields).filled_fields, 1);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedTransport::default().delay(), Duration::from_secs(5));
    }
}
