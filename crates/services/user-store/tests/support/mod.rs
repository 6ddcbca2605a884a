//! Shared helpers for user store integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Once;

use common::DatabaseConfig;
use domain::User;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_store::infra::Database;
use user_store::repository::UserStore;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Fresh, migrated in-memory database for each test
pub async fn create_test_db() -> Database {
    init_tracing();

    Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to create test database")
}

/// Repository over a fresh in-memory database
pub async fn create_test_store() -> UserStore {
    let db = create_test_db().await;
    UserStore::new(db.get_connection())
}

/// Repository over a migrated SQLite file with the default pool, so
/// concurrent calls run on separate connections
pub async fn create_file_store(path: &Path) -> UserStore {
    init_tracing();

    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    };
    let db = Database::connect(&config)
        .await
        .expect("Failed to create file database");

    UserStore::new(db.get_connection())
}

/// User with every optional field filled in
pub fn full_user(email: &str) -> User {
    User::new("Full", "Name", email, "fullPass").with_address(
        "123 Test St",
        "98765",
        "Testville",
        "Testland",
    )
}
