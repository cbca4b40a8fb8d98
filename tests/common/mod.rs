use anyhow::Result;
use bigdecimal::BigDecimal;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use sqlx::SqlitePool;
use tempfile::TempDir;

use tally_be::database::init_database;
use tally_be::database::models::Client;
use tally_be::database::repositories::ClientRepository;

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn dec(value: &str) -> BigDecimal {
    value.parse().unwrap()
}

#[allow(dead_code)]
pub async fn create_test_client(pool: &SqlitePool, user_id: &str, hourly_rate: &str) -> Client {
    let repo = ClientRepository::new(pool.clone());
    let client = Client::new(
        user_id.to_string(),
        CompanyName().fake(),
        Some(SafeEmail().fake()),
        hourly_rate.parse().unwrap(),
    );
    repo.create(&client).await.unwrap();
    client
}
