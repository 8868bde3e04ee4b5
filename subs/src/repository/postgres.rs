use std::sync::Arc;

use async_trait::async_trait;
use common::error::{AppError, Res};
use db::models::subscription::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

use super::SubscriptionRepository;

/// Postgres adapter. Each call runs as its own statement on the pool.
#[derive(Debug, Clone)]
pub struct PgSubscriptionRepository {
    pool: Arc<PgPool>,
}

impl PgSubscriptionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn find_all(&self) -> Res<Vec<Subscription>> {
        db::subscription::get_all_subscriptions(&*self.pool).await
    }

    async fn find_by_id(&self, id: Uuid) -> Res<Option<Subscription>> {
        db::subscription::get_subscription_by_id(&*self.pool, id).await
    }

    async fn find_by_user_id(&self, user_id: Option<i32>) -> Res<Vec<Subscription>> {
        match user_id {
            Some(user_id) => {
                db::subscription::get_subscriptions_by_user_id(&*self.pool, user_id).await
            }
            None => Ok(Vec::new()),
        }
    }

    async fn insert(&self, subscription: Subscription) -> Res<Subscription> {
        let inserted = db::subscription::insert_subscription(&*self.pool, &subscription).await?;
        log::debug!(
            "Inserted subscription {:?} for user {}",
            inserted.id,
            inserted.user_id
        );
        Ok(inserted)
    }

    async fn update(&self, subscription: &Subscription) -> Res<()> {
        let id = subscription.id.ok_or_else(|| {
            AppError::BadRequest("Cannot update a subscription without an id".to_string())
        })?;

        let touched = db::subscription::update_subscription(&*self.pool, id, subscription).await?;
        log::debug!("Updated subscription {} ({} row(s))", id, touched);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Res<bool> {
        let deleted = db::subscription::delete_subscription(&*self.pool, id).await?;
        log::debug!("Delete subscription {}: removed={}", id, deleted);
        Ok(deleted)
    }
}
