use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use tally_be::database::models::{BillingCycle, Subscription};
use tally_be::database::repositories::SubscriptionRepository;
use tally_be::services::SubscriptionService;

mod common;
use common::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_subscription(
    repo: &SubscriptionRepository,
    user_id: &str,
    name: &str,
    amount: &str,
    cycle: BillingCycle,
    next_billing: NaiveDate,
) -> Subscription {
    let subscription = Subscription::new(
        user_id.to_string(),
        name.to_string(),
        amount.parse().unwrap(),
        cycle,
        date(2024, 1, 1),
        next_billing,
    );
    repo.create(&subscription).await.unwrap();
    subscription
}

#[tokio::test]
async fn monthly_total_normalizes_every_cycle() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = SubscriptionRepository::new(db.pool.clone());
    let service = SubscriptionService::new(repo.clone());

    seed_subscription(&repo, "user-1", "Hosting", "300.00", BillingCycle::Quarterly, date(2024, 7, 1)).await;
    seed_subscription(&repo, "user-1", "Insurance", "1200.00", BillingCycle::Yearly, date(2025, 1, 1)).await;
    seed_subscription(&repo, "user-1", "Software", "9.99", BillingCycle::Monthly, date(2024, 7, 1)).await;

    // 100 + 100 + 9.99
    assert_eq!(service.monthly_total("user-1").await.unwrap(), dec("209.99"));
}

#[tokio::test]
async fn inactive_subscriptions_are_excluded_from_the_total() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = SubscriptionRepository::new(db.pool.clone());
    let service = SubscriptionService::new(repo.clone());

    seed_subscription(&repo, "user-1", "Software", "10.00", BillingCycle::Monthly, date(2024, 7, 1)).await;
    let mut cancelled = Subscription::new(
        "user-1".to_string(),
        "Old CRM".to_string(),
        dec("50.00"),
        BillingCycle::Monthly,
        date(2024, 1, 1),
        date(2024, 7, 1),
    );
    cancelled.is_active = false;
    repo.create(&cancelled).await.unwrap();

    assert_eq!(service.monthly_total("user-1").await.unwrap(), dec("10.00"));
}

#[tokio::test]
async fn upcoming_dates_roll_months_and_years() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = SubscriptionRepository::new(db.pool.clone());
    let service = SubscriptionService::new(repo.clone());

    let subscription = seed_subscription(
        &repo,
        "user-1",
        "Hosting",
        "300.00",
        BillingCycle::Quarterly,
        date(2024, 11, 30),
    )
    .await;

    let dates = service
        .upcoming_billing_dates("user-1", &subscription.id, 3)
        .await
        .unwrap();
    assert_eq!(dates, vec![date(2024, 11, 30), date(2025, 2, 28), date(2025, 5, 30)]);
}

#[tokio::test]
async fn rolling_advances_past_today_and_persists() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = SubscriptionRepository::new(db.pool.clone());
    let service = SubscriptionService::new(repo.clone());

    let subscription = seed_subscription(
        &repo,
        "user-1",
        "Software",
        "9.99",
        BillingCycle::Monthly,
        date(2024, 3, 15),
    )
    .await;

    let next = service
        .roll_next_billing_date("user-1", &subscription.id, date(2024, 6, 20))
        .await
        .unwrap();
    assert_eq!(next, date(2024, 7, 15));

    let stored = repo.find_by_id("user-1", &subscription.id).await.unwrap().unwrap();
    assert_eq!(stored.next_billing_date, date(2024, 7, 15));
}

#[tokio::test]
async fn rolling_leaves_future_dates_alone() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let repo = SubscriptionRepository::new(db.pool.clone());
    let service = SubscriptionService::new(repo.clone());

    let subscription = seed_subscription(
        &repo,
        "user-1",
        "Software",
        "9.99",
        BillingCycle::Monthly,
        date(2024, 8, 1),
    )
    .await;

    let next = service
        .roll_next_billing_date("user-1", &subscription.id, date(2024, 6, 20))
        .await
        .unwrap();
    assert_eq!(next, date(2024, 8, 1));
}
