use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::database::models::MileageJourney;
use crate::database::repositories::MileageRepository;
use crate::domain::mileage::{self, TaxYearSummary};
use crate::error::AppError;

#[derive(Clone)]
pub struct MileageService {
    journeys: MileageRepository,
}

impl MileageService {
    pub fn new(journeys: MileageRepository) -> Self {
        Self { journeys }
    }

    /// Record a journey, banding it against the miles already logged in the
    /// same tax year. The rate and claim are snapshots taken now; editing or
    /// deleting an earlier journey later does not recompute them.
    ///
    /// The prior-total read and the insert are not serialized. Two journeys
    /// recorded concurrently for one user could band against the same prior
    /// total; per-user write concurrency is low enough that this is accepted.
    pub async fn record_journey(
        &self,
        user_id: &str,
        client_id: Option<String>,
        journey_date: NaiveDate,
        miles: BigDecimal,
        description: Option<String>,
    ) -> Result<MileageJourney, AppError> {
        let (year_start, year_end) = mileage::tax_year_bounds(journey_date);
        let prior = self
            .journeys
            .total_miles_in_window(user_id, year_start, year_end)
            .await?;

        let claim = mileage::compute_claim(&miles, &prior)?;

        let journey = MileageJourney::new(
            user_id.to_string(),
            client_id,
            journey_date,
            miles,
            claim.rate_per_mile,
            claim.total_claim,
            description,
        );
        self.journeys.create(&journey).await?;

        log::info!(
            "Recorded journey {} for user {}: {} miles at {}",
            journey.id,
            user_id,
            journey.miles,
            journey.rate_per_mile
        );
        Ok(journey)
    }

    /// Aggregate one user's journeys for the tax year starting April 6 of
    /// `start_year`. The 45p/25p split is derived from the live total, so it
    /// stays consistent even when per-journey snapshots have gone stale.
    pub async fn tax_year_summary(
        &self,
        user_id: &str,
        start_year: i32,
    ) -> Result<TaxYearSummary, AppError> {
        let (year_start, year_end) = mileage::bounds_for_start_year(start_year);
        let journeys = self
            .journeys
            .list_in_window(user_id, year_start, year_end)
            .await?;

        let mut total_miles = BigDecimal::from(0);
        let mut total_claim = BigDecimal::from(0);
        for journey in &journeys {
            total_miles += &journey.miles;
            total_claim += &journey.total_claim;
        }
        let (miles_at_45p, miles_at_25p) = mileage::banded_split(&total_miles);

        Ok(TaxYearSummary {
            total_miles,
            total_claim,
            miles_at_45p,
            miles_at_25p,
            journey_count: journeys.len(),
            tax_year_start: year_start,
            tax_year_end: year_end,
        })
    }
}
