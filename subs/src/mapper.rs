use common::{error::Res, validation::ValidationError};
use db::models::subscription::{Provider, Status, Subscription};

use crate::dtos::sub::CreateSubscriptionRequest;

#[cfg_attr(test, mockall::automock)]
pub trait RequestMapper: Send + Sync {
    /// Builds a new, not yet persisted subscription from a validated request.
    fn map(&self, request: &CreateSubscriptionRequest) -> Res<Subscription>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionMapper;

impl RequestMapper for CreateSubscriptionMapper {
    fn map(&self, request: &CreateSubscriptionRequest) -> Res<Subscription> {
        Ok(Subscription {
            id: None,
            user_id: request.user_id.ok_or_else(ValidationError::invalid_user_id)?,
            name: request
                .name
                .clone()
                .ok_or_else(ValidationError::invalid_name)?,
            provider: parse_provider(request.provider.as_deref())?,
            expiration_date: request
                .expiration_date
                .ok_or_else(ValidationError::invalid_expiration_date)?,
            status: Status::Active,
        })
    }
}

pub(crate) fn parse_provider(raw: Option<&str>) -> Result<Provider, ValidationError> {
    raw.ok_or_else(ValidationError::invalid_provider)?.parse()
}
