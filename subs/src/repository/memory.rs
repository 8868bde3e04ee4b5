//! In-process repository, for embedding tests and local runs without Postgres.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use common::error::{AppError, Res};
use db::models::subscription::Subscription;
use uuid::Uuid;

use super::SubscriptionRepository;

#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    rows: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; rows without an id are given one.
    pub fn with_subscriptions(subscriptions: Vec<Subscription>) -> Self {
        let rows = subscriptions
            .into_iter()
            .map(|mut s| {
                s.id.get_or_insert_with(Uuid::new_v4);
                s
            })
            .collect();
        Self {
            rows: Mutex::new(rows),
        }
    }

    fn rows(&self) -> Res<MutexGuard<'_, Vec<Subscription>>> {
        self.rows
            .lock()
            .map_err(|_| AppError::Internal("Subscription store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find_all(&self) -> Res<Vec<Subscription>> {
        Ok(self.rows()?.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Res<Option<Subscription>> {
        Ok(self.rows()?.iter().find(|s| s.id == Some(id)).cloned())
    }

    async fn find_by_user_id(&self, user_id: Option<i32>) -> Res<Vec<Subscription>> {
        let Some(user_id) = user_id else {
            return Ok(Vec::new());
        };

        let mut found: Vec<_> = self
            .rows()?
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        // same order as the Postgres adapter
        found.sort_by(|a, b| b.expiration_date.cmp(&a.expiration_date));
        Ok(found)
    }

    async fn insert(&self, mut subscription: Subscription) -> Res<Subscription> {
        subscription.id = Some(Uuid::new_v4());
        self.rows()?.push(subscription.clone());
        Ok(subscription)
    }

    async fn update(&self, subscription: &Subscription) -> Res<()> {
        let id = subscription.id.ok_or_else(|| {
            AppError::BadRequest("Cannot update a subscription without an id".to_string())
        })?;

        if let Some(row) = self.rows()?.iter_mut().find(|s| s.id == Some(id)) {
            *row = subscription.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Res<bool> {
        let mut rows = self.rows()?;
        let before = rows.len();
        rows.retain(|s| s.id != Some(id));
        Ok(rows.len() != before)
    }
}
