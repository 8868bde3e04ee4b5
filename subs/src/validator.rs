use std::sync::Arc;

use common::validation::{ValidationError, ValidationResult};
use db::models::subscription::Provider;

use crate::{clock::Clock, dtos::sub::CreateSubscriptionRequest};

#[cfg_attr(test, mockall::automock)]
pub trait RequestValidator: Send + Sync {
    /// Collects every violation; never short-circuits and never fails.
    fn validate(&self, request: &CreateSubscriptionRequest) -> ValidationResult;
}

pub struct CreateSubscriptionValidator {
    clock: Arc<dyn Clock>,
}

impl CreateSubscriptionValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl RequestValidator for CreateSubscriptionValidator {
    fn validate(&self, request: &CreateSubscriptionRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if request.user_id.is_none() {
            result.add(ValidationError::invalid_user_id());
        }

        if request.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            result.add(ValidationError::invalid_name());
        }

        if request
            .provider
            .as_deref()
            .is_none_or(|provider| provider.parse::<Provider>().is_err())
        {
            result.add(ValidationError::invalid_provider());
        }

        let now = self.clock.now();
        if request
            .expiration_date
            .is_none_or(|expiration_date| expiration_date <= now)
        {
            result.add(ValidationError::invalid_expiration_date());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use common::validation::{
        EXPIRATION_DATE_INVALID, NAME_INVALID, PROVIDER_INVALID, USER_ID_INVALID,
    };

    use super::*;
    use crate::clock::FixedClock;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn validator() -> CreateSubscriptionValidator {
        CreateSubscriptionValidator::new(Arc::new(FixedClock(now())))
    }

    fn valid_request() -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            user_id: Some(1),
            name: Some("Ivan".to_string()),
            provider: Some("APPLE".to_string()),
            expiration_date: Some(now() + Duration::seconds(1000)),
        }
    }

    #[test]
    fn should_pass_validation() {
        let result = validator().validate(&valid_request());

        assert!(!result.has_errors());
    }

    #[test]
    fn invalid_user_id() {
        let request = CreateSubscriptionRequest {
            user_id: None,
            ..valid_request()
        };

        let result = validator().validate(&request);

        assert_eq!(result.codes(), vec![USER_ID_INVALID]);
    }

    #[test]
    fn empty_and_blank_names_are_invalid() {
        for name in [None, Some(""), Some("   ")] {
            let request = CreateSubscriptionRequest {
                name: name.map(str::to_string),
                ..valid_request()
            };

            let result = validator().validate(&request);

            assert_eq!(result.codes(), vec![NAME_INVALID], "{name:?}");
        }
    }

    #[test]
    fn missing_or_unknown_provider_is_invalid() {
        for provider in [None, Some("fake_provider"), Some("apple")] {
            let request = CreateSubscriptionRequest {
                provider: provider.map(str::to_string),
                ..valid_request()
            };

            let result = validator().validate(&request);

            assert_eq!(result.codes(), vec![PROVIDER_INVALID], "{provider:?}");
        }
    }

    #[test]
    fn google_provider_is_accepted() {
        let request = CreateSubscriptionRequest {
            provider: Some("GOOGLE".to_string()),
            ..valid_request()
        };

        assert!(!validator().validate(&request).has_errors());
    }

    #[test]
    fn missing_expiration_date_is_invalid() {
        let request = CreateSubscriptionRequest {
            expiration_date: None,
            ..valid_request()
        };

        let result = validator().validate(&request);

        assert_eq!(result.codes(), vec![EXPIRATION_DATE_INVALID]);
    }

    #[test]
    fn expiration_date_must_be_strictly_in_the_future() {
        for expiration_date in [now() - Duration::seconds(5), now()] {
            let request = CreateSubscriptionRequest {
                expiration_date: Some(expiration_date),
                ..valid_request()
            };

            let result = validator().validate(&request);

            assert_eq!(result.codes(), vec![EXPIRATION_DATE_INVALID]);
        }
    }

    #[test]
    fn accumulates_every_violation() {
        let request = CreateSubscriptionRequest {
            user_id: None,
            name: None,
            provider: Some("fake_provider".to_string()),
            expiration_date: None,
        };

        let result = validator().validate(&request);

        assert_eq!(result.errors().len(), 4);
        let codes = result.codes();
        for code in [
            USER_ID_INVALID,
            NAME_INVALID,
            PROVIDER_INVALID,
            EXPIRATION_DATE_INVALID,
        ] {
            assert!(codes.contains(&code), "missing {code}");
        }
    }
}
