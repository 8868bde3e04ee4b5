use std::sync::Arc;

use common::{
    error::{AppError, Res},
    validation::ValidationError,
};
use db::models::subscription::{Status, Subscription};
use uuid::Uuid;

use crate::{
    clock::Clock,
    dtos::sub::CreateSubscriptionRequest,
    mapper::{RequestMapper, parse_provider},
    repository::SubscriptionRepository,
    validator::RequestValidator,
};

/// Subscription lifecycle: create/renew, cancel and expire.
///
/// Every call is one read followed by at most one write through the
/// repository. There is no transaction spanning the two, so concurrent
/// callers on the same subscription race and the last write wins.
/// Failures are returned to the caller, never retried or logged here.
pub struct SubscriptionService {
    repository: Arc<dyn SubscriptionRepository>,
    mapper: Arc<dyn RequestMapper>,
    validator: Arc<dyn RequestValidator>,
    clock: Arc<dyn Clock>,
}

impl SubscriptionService {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        mapper: Arc<dyn RequestMapper>,
        validator: Arc<dyn RequestValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            mapper,
            validator,
            clock,
        }
    }

    /// Creates a subscription for a new user, or renews the user's first
    /// existing one (latest expiration) in place.
    ///
    /// # Errors
    ///
    /// `AppError::Validation` with every violation when the request is
    /// invalid; the repository is not touched in that case.
    pub async fn upsert(&self, request: CreateSubscriptionRequest) -> Res<Subscription> {
        let validation = self.validator.validate(&request);
        if validation.has_errors() {
            return Err(AppError::Validation(validation));
        }

        let existing = self
            .repository
            .find_by_user_id(request.user_id)
            .await?
            .into_iter()
            .next();

        let subscription = match existing {
            Some(existing) => renew(existing, &request)?,
            None => self.mapper.map(&request)?,
        };

        let saved = self.repository.upsert(subscription).await?;
        log::info!(
            "Upserted subscription {:?} for user {}",
            saved.id,
            saved.user_id
        );
        Ok(saved)
    }

    /// Moves an `ACTIVE` subscription to `CANCELED`.
    pub async fn cancel(&self, id: Uuid) -> Res<()> {
        let mut subscription = self.find_existing(id).await?;

        if subscription.status != Status::Active {
            return Err(AppError::IllegalState(format!(
                "Only active subscription {} can be canceled",
                id
            )));
        }

        subscription.status = Status::Canceled;
        self.repository.update(&subscription).await?;
        log::info!("Canceled subscription {}", id);
        Ok(())
    }

    /// Moves a subscription that is not yet `EXPIRED` to `EXPIRED`, stamping
    /// the expiration date with the current instant. `CANCELED` subscriptions
    /// may be expired.
    pub async fn expire(&self, id: Uuid) -> Res<()> {
        let mut subscription = self.find_existing(id).await?;

        if subscription.status == Status::Expired {
            return Err(AppError::IllegalState(format!(
                "Subscription {} has already expired",
                id
            )));
        }

        subscription.expiration_date = self.clock.now();
        subscription.status = Status::Expired;
        self.repository.update(&subscription).await?;
        log::info!("Expired subscription {}", id);
        Ok(())
    }

    pub async fn find_all(&self) -> Res<Vec<Subscription>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Res<Option<Subscription>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Res<Vec<Subscription>> {
        self.repository.find_by_user_id(Some(user_id)).await
    }

    /// Administrative removal; not part of the lifecycle.
    pub async fn delete(&self, id: Uuid) -> Res<bool> {
        self.repository.delete(id).await
    }

    async fn find_existing(&self, id: Uuid) -> Res<Subscription> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subscription {} not found", id)))
    }
}

/// Copies the renewable fields onto an existing row; id and status are kept.
fn renew(mut existing: Subscription, request: &CreateSubscriptionRequest) -> Res<Subscription> {
    existing.name = request
        .name
        .clone()
        .ok_or_else(ValidationError::invalid_name)?;
    existing.provider = parse_provider(request.provider.as_deref())?;
    existing.expiration_date = request
        .expiration_date
        .ok_or_else(ValidationError::invalid_expiration_date)?;
    Ok(existing)
}
