//! Installer repository integration tests
//!
//! These run against a live MongoDB when `TEST_MONGO_URL` is set (for
//! example `mongodb://localhost:27017/roadkill_test`) and skip themselves
//! otherwise. The unreachable-server test needs no database and always runs.

mod common;

use std::time::Duration;

use common::db::TestMongo;

use roadkill_auth::service::user;
use roadkill_common::RoadkillError;
use roadkill_persistence::MongoInstallerRepository;
use roadkill_persistence::entity::{Page, PageContent};
use roadkill_persistence::model::{SiteSettings, StorageCollection};
use roadkill_persistence::mongodb::bson::{Document, doc};
use roadkill_persistence::traits::{InstallerPersistence, SitePersistence};

async fn count(mongo: &TestMongo, collection: StorageCollection) -> u64 {
    mongo
        .database
        .collection::<Document>(collection.name())
        .count_documents(doc! {})
        .await
        .unwrap()
}

#[tokio::test]
async fn wipe_removes_all_target_collections() {
    let Some(mongo) = TestMongo::from_env("roadkill_test_wipe").await else {
        eprintln!("skipping: TEST_MONGO_URL not set");
        return;
    };

    mongo.repository.create_schema().await.unwrap();
    let names = mongo.repository.collection_names().await.unwrap();
    for collection in StorageCollection::ALL {
        assert!(names.contains(&collection.name().to_string()));
    }

    // Seed page data through the generic upsert so the wipe has real
    // documents to remove.
    let page = Page::new("Home", "admin");
    mongo.repository.save_or_update(&page).await.unwrap();
    let content = PageContent::new(page.id, "Welcome to the wiki.", "admin", 1);
    mongo.repository.save_or_update(&content).await.unwrap();
    assert_eq!(count(&mongo, StorageCollection::Pages).await, 1);
    assert_eq!(count(&mongo, StorageCollection::PageContent).await, 1);

    // Upserting the same document twice leaves exactly one copy.
    mongo.repository.save_or_update(&page).await.unwrap();
    assert_eq!(count(&mongo, StorageCollection::Pages).await, 1);

    mongo.repository.wipe().await.unwrap();
    let names = mongo.repository.collection_names().await.unwrap();
    for collection in StorageCollection::ALL {
        assert!(!names.contains(&collection.name().to_string()));
    }
}

#[tokio::test]
async fn admin_user_round_trip() {
    let Some(mongo) = TestMongo::from_env("roadkill_test_admin").await else {
        eprintln!("skipping: TEST_MONGO_URL not set");
        return;
    };

    mongo.repository.create_schema().await.unwrap();
    user::create_admin(&mongo.repository, "a@b.com", "admin", "pw123")
        .await
        .unwrap();

    let found = mongo
        .repository
        .user_find_by_email("a@b.com")
        .await
        .unwrap()
        .expect("admin user should exist");

    assert!(found.is_admin && found.is_editor && found.is_activated);
    assert_eq!(found.username, "admin");
    assert_ne!(found.password, "pw123");
    assert!(user::verify_password("pw123", &found.password));

    // Re-seeding replaces rather than duplicates.
    user::create_admin(&mongo.repository, "a@b.com", "admin2", "pw456")
        .await
        .unwrap();
    assert_eq!(count(&mongo, StorageCollection::Users).await, 1);
}

#[tokio::test]
async fn settings_round_trip_and_version_stamp() {
    let Some(mongo) = TestMongo::from_env("roadkill_test_settings").await else {
        eprintln!("skipping: TEST_MONGO_URL not set");
        return;
    };

    mongo.repository.create_schema().await.unwrap();

    let mut settings = SiteSettings::default();
    settings.site_name = "Engineering Wiki".to_string();
    settings.allow_user_signup = true;

    mongo.repository.save_settings(&settings, "9.9.9").await.unwrap();

    let stored = mongo
        .repository
        .settings_find()
        .await
        .unwrap()
        .expect("settings should exist");
    assert_eq!(stored.settings, settings);
    assert_eq!(stored.version, "9.9.9");

    // Saving again under the fixed identifier keeps exactly one document.
    mongo.repository.save_settings(&settings, "9.9.9").await.unwrap();
    assert_eq!(count(&mongo, StorageCollection::SiteConfiguration).await, 1);
}

#[tokio::test]
async fn install_scenario_creates_two_documents_and_wipe_removes_them() {
    let Some(mongo) = TestMongo::from_env("roadkill_test_scenario").await else {
        eprintln!("skipping: TEST_MONGO_URL not set");
        return;
    };

    mongo.repository.wipe().await.unwrap();

    user::create_admin(&mongo.repository, "a@b.com", "admin", "pw123")
        .await
        .unwrap();
    mongo
        .repository
        .save_settings(&SiteSettings::default(), "0.1.0")
        .await
        .unwrap();

    assert_eq!(count(&mongo, StorageCollection::Users).await, 1);
    assert_eq!(count(&mongo, StorageCollection::SiteConfiguration).await, 1);

    mongo.repository.wipe().await.unwrap();

    let names = mongo.repository.collection_names().await.unwrap();
    assert!(!names.contains(&"User".to_string()));
    assert!(!names.contains(&"SiteConfiguration".to_string()));
}

#[tokio::test]
async fn unreachable_server_yields_uniform_database_error() {
    // Nothing listens on port 1; the connection is lazy, so the first
    // operation is where the failure surfaces.
    let repository = MongoInstallerRepository::connect(
        "mongodb://127.0.0.1:1/testwiki",
        Duration::from_millis(500),
        Duration::from_millis(500),
    )
    .await
    .unwrap();

    let err = repository.wipe().await.unwrap_err();
    match err.downcast_ref::<RoadkillError>() {
        Some(RoadkillError::Database { op, target, .. }) => {
            assert_eq!(op, "wipe");
            assert_eq!(target, "mongodb://127.0.0.1:1/testwiki");
        }
        other => panic!("expected Database error, got {other:?}"),
    }
}
