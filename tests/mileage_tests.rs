use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use tally_be::database::repositories::MileageRepository;
use tally_be::error::AppError;
use tally_be::services::MileageService;

mod common;
use common::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn banding_splits_a_journey_across_the_threshold() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    service
        .record_journey("user-1", None, date(2024, 6, 1), dec("9500"), None)
        .await
        .unwrap();

    // 500 miles left at 45p, the remaining 500 at 25p
    let journey = service
        .record_journey("user-1", None, date(2024, 7, 1), dec("1000"), None)
        .await
        .unwrap();

    assert_eq!(journey.rate_per_mile, dec("0.45"));
    assert_eq!(journey.total_claim, dec("350.00"));
}

#[tokio::test]
async fn journeys_above_the_threshold_get_the_low_rate() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    service
        .record_journey("user-1", None, date(2024, 6, 1), dec("10000"), None)
        .await
        .unwrap();

    let journey = service
        .record_journey("user-1", None, date(2024, 7, 1), dec("100"), None)
        .await
        .unwrap();

    assert_eq!(journey.rate_per_mile, dec("0.25"));
    assert_eq!(journey.total_claim, dec("25.00"));
}

#[tokio::test]
async fn prior_miles_reset_at_the_tax_year_boundary() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    // April 5 belongs to the previous tax year
    service
        .record_journey("user-1", None, date(2024, 4, 5), dec("11000"), None)
        .await
        .unwrap();

    let journey = service
        .record_journey("user-1", None, date(2024, 4, 6), dec("100"), None)
        .await
        .unwrap();

    assert_eq!(journey.rate_per_mile, dec("0.45"));
    assert_eq!(journey.total_claim, dec("45.00"));
}

#[tokio::test]
async fn other_users_miles_never_affect_the_band() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    service
        .record_journey("user-2", None, date(2024, 6, 1), dec("12000"), None)
        .await
        .unwrap();

    let journey = service
        .record_journey("user-1", None, date(2024, 6, 2), dec("100"), None)
        .await
        .unwrap();

    assert_eq!(journey.rate_per_mile, dec("0.45"));
}

#[tokio::test]
async fn non_positive_miles_are_rejected() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    let result = service
        .record_journey("user-1", None, date(2024, 6, 1), dec("0"), None)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn summary_aggregates_the_tax_year() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let service = MileageService::new(MileageRepository::new(db.pool.clone()));

    service
        .record_journey("user-1", None, date(2024, 5, 1), dec("9500"), None)
        .await
        .unwrap();
    service
        .record_journey("user-1", None, date(2024, 6, 1), dec("1000"), None)
        .await
        .unwrap();
    // Outside the 2024/25 tax year
    service
        .record_journey("user-1", None, date(2024, 3, 1), dec("500"), None)
        .await
        .unwrap();

    let summary = service.tax_year_summary("user-1", 2024).await.unwrap();

    assert_eq!(summary.journey_count, 2);
    assert_eq!(summary.total_miles, dec("10500"));
    assert_eq!(summary.miles_at_45p, dec("10000"));
    assert_eq!(summary.miles_at_25p, dec("500"));
    // 9500 * 0.45 + 350.00
    assert_eq!(summary.total_claim, dec("4625.00"));
    assert_eq!(summary.tax_year_start, date(2024, 4, 6));
    assert_eq!(summary.tax_year_end, date(2025, 4, 5));
}

#[tokio::test]
async fn earlier_journey_snapshots_are_never_recomputed() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = MileageRepository::new(db.pool.clone());
    let service = MileageService::new(repo.clone());

    let first = service
        .record_journey("user-1", None, date(2024, 5, 1), dec("100"), None)
        .await
        .unwrap();
    service
        .record_journey("user-1", None, date(2024, 6, 1), dec("11000"), None)
        .await
        .unwrap();

    // The first journey keeps its creation-time snapshot
    let stored = repo.find_by_id("user-1", &first.id).await.unwrap().unwrap();
    assert_eq!(stored.rate_per_mile, dec("0.45"));
    assert_eq!(stored.total_claim, dec("45.00"));
}
