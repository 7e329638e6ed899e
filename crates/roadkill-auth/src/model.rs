//! User view models

use serde::{Deserialize, Serialize};

use roadkill_persistence::entity::User;

/// User information exposed to the web layer.
///
/// Deliberately omits the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_activated: bool,
}

impl From<User> for UserInfo {
    fn from(value: User) -> Self {
        Self {
            email: value.email,
            username: value.username,
            is_admin: value.is_admin,
            is_editor: value.is_editor,
            is_activated: value.is_activated,
        }
    }
}

impl From<&User> for UserInfo {
    fn from(value: &User) -> Self {
        Self {
            email: value.email.to_string(),
            username: value.username.to_string(),
            is_admin: value.is_admin,
            is_editor: value.is_editor,
            is_activated: value.is_activated,
        }
    }
}
