use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::database::repositories::SubscriptionRepository;
use crate::domain::billing;
use crate::domain::round_2dp;
use crate::error::AppError;

#[derive(Clone)]
pub struct SubscriptionService {
    subscriptions: SubscriptionRepository,
}

impl SubscriptionService {
    pub fn new(subscriptions: SubscriptionRepository) -> Self {
        Self { subscriptions }
    }

    /// Dashboard aggregate: the monthly-equivalent cost of every active
    /// subscription, rounded once at the end.
    pub async fn monthly_total(&self, user_id: &str) -> Result<BigDecimal, AppError> {
        let subscriptions = self.subscriptions.list_active_for_user(user_id).await?;

        let total = subscriptions
            .iter()
            .fold(BigDecimal::from(0), |acc, subscription| {
                acc + billing::monthly_cost(&subscription.amount, subscription.billing_cycle)
            });
        Ok(round_2dp(&total))
    }

    /// Preview of the next `count` billing dates for one subscription.
    pub async fn upcoming_billing_dates(
        &self,
        user_id: &str,
        subscription_id: &str,
        count: usize,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let subscription = self
            .subscriptions
            .find_by_id(user_id, subscription_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("subscription {}", subscription_id)))?;

        Ok(billing::upcoming_dates(
            subscription.next_billing_date,
            subscription.billing_cycle,
            count,
        )
        .collect())
    }

    /// Advance next_billing_date by whole cycles until it is strictly after
    /// `today`. A date already in the future is left alone.
    pub async fn roll_next_billing_date(
        &self,
        user_id: &str,
        subscription_id: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate, AppError> {
        let subscription = self
            .subscriptions
            .find_by_id(user_id, subscription_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("subscription {}", subscription_id)))?;

        let mut next = subscription.next_billing_date;
        while next <= today {
            next = billing::advance(next, subscription.billing_cycle).ok_or_else(|| {
                AppError::Internal(Some("billing date out of range".to_string()))
            })?;
        }

        if next != subscription.next_billing_date {
            self.subscriptions
                .update_next_billing_date(user_id, subscription_id, next)
                .await?;
        }
        Ok(next)
    }
}
