use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use common::validation::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "subscription_provider", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Apple,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Apple, Provider::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Apple => "APPLE",
            Provider::Google => "GOOGLE",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the enumeration names.
impl FromStr for Provider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(ValidationError::invalid_provider)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "subscription_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Expired,
    Canceled,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Active => "ACTIVE",
            Status::Expired => "EXPIRED",
            Status::Canceled => "CANCELED",
        })
    }
}

/// A subscription row. `id` is `None` until the row has been inserted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Option<Uuid>,
    pub user_id: i32,
    pub name: String,
    pub provider: Provider,
    pub expiration_date: DateTime<Utc>,
    pub status: Status,
}
