pub mod cookies;
pub mod extractors;
pub mod middleware;
pub mod session;

use shared_types::{AccountEntry, AppError, AuthUser, Capability};

/// Resolve a username against the account directory in `config.toml`.
///
/// Only the name is checked; there is no credential to verify. Account ids
/// are the 1-based position of the entry in the directory.
pub fn lookup_account(username: &str) -> Option<AuthUser> {
    account_from_directory(&crate::config::app_config().accounts, username)
}

/// Every directory account, in directory order.
pub fn directory_accounts() -> Vec<AuthUser> {
    accounts_as_users(&crate::config::app_config().accounts)
}

fn accounts_as_users(accounts: &[AccountEntry]) -> Vec<AuthUser> {
    accounts
        .iter()
        .enumerate()
        .map(|(idx, a)| AuthUser {
            id: idx as i64 + 1,
            username: a.username.clone(),
            role: a.role.clone(),
        })
        .collect()
}

/// Fail with 403 unless `user` holds `capability`.
pub fn require_capability(user: &AuthUser, capability: Capability) -> Result<(), AppError> {
    if user.capabilities().contains(capability) {
        Ok(())
    } else {
        Err(AppError::forbidden("Admin role required"))
    }
}

fn account_from_directory(accounts: &[AccountEntry], username: &str) -> Option<AuthUser> {
    accounts_as_users(accounts)
        .into_iter()
        .find(|u| u.username == username)
}
