//! User service

use roadkill_common::{RoadkillError, is_valid_email};
use roadkill_persistence::traits::{InstallerPersistence, SitePersistence};

use crate::model::UserInfo;

/// Hash a plaintext password with bcrypt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, 10u32).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// An unparseable hash counts as a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Create the bootstrap admin account.
///
/// Validates the credentials, hashes the password, and hands only the hash
/// to the persistence layer, which sets every privilege flag on the
/// account.
pub async fn create_admin<S>(
    store: &S,
    email: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<()>
where
    S: InstallerPersistence + ?Sized,
{
    if username.is_empty() || password.is_empty() {
        return Err(RoadkillError::IllegalArgument(
            "username or password cann't be empty".to_string(),
        )
        .into());
    }
    if !is_valid_email(email) {
        return Err(
            RoadkillError::IllegalArgument(format!("'{}' is not a valid email address", email))
                .into(),
        );
    }

    let password_hash = hash_password(password)?;
    store.add_admin_user(email, username, &password_hash).await?;

    tracing::info!(email, username, "bootstrap admin account created");

    Ok(())
}

/// Find a user account by email.
pub async fn find_by_email<S>(store: &S, email: &str) -> anyhow::Result<Option<UserInfo>>
where
    S: SitePersistence + ?Sized,
{
    let user = store.user_find_by_email(email).await?.map(UserInfo::from);

    Ok(user)
}

/// Verify a login attempt against the stored account.
pub async fn check_password<S>(store: &S, email: &str, password: &str) -> anyhow::Result<bool>
where
    S: SitePersistence + ?Sized,
{
    match store.user_find_by_email(email).await? {
        Some(user) => Ok(verify_password(password, &user.password)),
        None => Err(RoadkillError::UserNotFound(email.to_string()).into()),
    }
}
