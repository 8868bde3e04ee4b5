use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Create-or-renew request. Every field is optional so that a missing value
/// is reported by validation rather than by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}
