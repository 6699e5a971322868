//! `[contact]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[contact]` section in folio.toml - simulated form submission.
///
/// The form never sends anything; the server waits `delay_ms` and then shows
/// the confirmation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    #[serde(default = "defaults::contact::delay_ms")]
    #[educe(Default = defaults::contact::delay_ms())]
    pub delay_ms: u64,
}
