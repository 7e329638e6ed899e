//! User document entity

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::StoredDocument;
use crate::model::StorageCollection;

/// A wiki user account.
///
/// `password` always holds a bcrypt hash; plaintext passwords never reach
/// this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_activated: bool,
}

impl User {
    /// Build the bootstrap admin account: every privilege flag is set and
    /// the account is activated immediately.
    pub fn admin(email: &str, username: &str, password_hash: &str) -> Self {
        Self {
            id: ObjectId::new(),
            email: email.to_string(),
            username: username.to_string(),
            password: password_hash.to_string(),
            is_admin: true,
            is_editor: true,
            is_activated: true,
        }
    }

    /// Rebuild this user under an existing document identifier, preserving
    /// upsert-by-id semantics when an account is re-seeded.
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = id;
        self
    }
}

impl StoredDocument for User {
    const COLLECTION: StorageCollection = StorageCollection::Users;

    fn document_id(&self) -> Bson {
        Bson::ObjectId(self.id)
    }
}
