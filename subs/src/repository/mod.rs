use async_trait::async_trait;
use common::error::Res;
use db::models::subscription::Subscription;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::InMemorySubscriptionRepository;
pub use postgres::PgSubscriptionRepository;

/// Persistence boundary for subscriptions. The only writer of durable state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_all(&self) -> Res<Vec<Subscription>>;

    async fn find_by_id(&self, id: Uuid) -> Res<Option<Subscription>>;

    /// An absent `user_id` matches nothing.
    async fn find_by_user_id(&self, user_id: Option<i32>) -> Res<Vec<Subscription>>;

    /// Stores a new row and returns it with its assigned identifier.
    async fn insert(&self, subscription: Subscription) -> Res<Subscription>;

    /// Overwrites the mutable fields of the row with the same identifier.
    /// An identifier with no row is not an error.
    async fn update(&self, subscription: &Subscription) -> Res<()>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Res<bool>;

    /// Inserts when `subscription.id` is `None`, updates otherwise.
    async fn upsert(&self, subscription: Subscription) -> Res<Subscription> {
        if subscription.id.is_some() {
            self.update(&subscription).await?;
            Ok(subscription)
        } else {
            self.insert(subscription).await
        }
    }
}
