//! MongoDB test utilities
//!
//! Integration tests that need a live MongoDB instance are guarded by the
//! `TEST_MONGO_URL` environment variable; when it is unset, the tests skip
//! themselves. Each test uses its own database name so parallel test runs
//! do not interfere.

use std::time::Duration;

use roadkill_persistence::MongoInstallerRepository;
use roadkill_persistence::mongodb::{Client, Database};

/// A live MongoDB handle for one test.
pub struct TestMongo {
    /// The repository under test
    pub repository: MongoInstallerRepository,
    /// Raw driver handle to the same database, for independent assertions
    pub database: Database,
}

impl TestMongo {
    /// Connect from `TEST_MONGO_URL`, swapping the database name for
    /// `test_db`. Returns `None` when the variable is unset so the caller
    /// can skip.
    pub async fn from_env(test_db: &str) -> Option<TestMongo> {
        let base = std::env::var("TEST_MONGO_URL").ok()?;

        let mut parsed = url::Url::parse(&base).expect("TEST_MONGO_URL must be a valid URL");
        parsed.set_path(&format!("/{test_db}"));
        let connection_string = parsed.to_string();

        let repository = MongoInstallerRepository::connect(
            &connection_string,
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .await
        .expect("failed to connect to TEST_MONGO_URL");

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("failed to connect raw client to TEST_MONGO_URL");
        let database = client.database(test_db);

        Some(TestMongo { repository, database })
    }
}
