use std::sync::OnceLock;

use regex::Regex;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::auth::{hash_password, verify_password, TokenIssuer};
use crate::db;
use crate::errors::AppError;
use crate::models::{User, UserSettings, UserSummary};

pub const MIN_PASSWORD_LEN: usize = 6;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

/// Stand-in hash verified when the username is unknown, so that branch pays
/// for an Argon2 verify just like a wrong password does.
async fn dummy_hash() -> Result<&'static str, AppError> {
    static DUMMY: OnceCell<String> = OnceCell::const_new();
    DUMMY
        .get_or_try_init(|| hash_password("no-such-user-placeholder".to_string()))
        .await
        .map(String::as_str)
}

fn validate_new_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

/// Creates the account (username = email) and logs it straight in.
pub async fn register(
    pool: &SqlitePool,
    tokens: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<(String, UserSummary), AppError> {
    let email = email.trim();
    if !email_regex().is_match(email) {
        return Err(AppError::Validation("A valid email address is required".into()));
    }
    validate_new_password(password)?;

    if db::user_queries::fetch_by_username(pool, email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(password.to_string()).await?;
    let user = db::user_queries::insert(pool, email, email, &password_hash)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent registration of the same email.
            if is_unique_violation(&e) {
                AppError::Conflict("Email already registered".into())
            } else {
                AppError::Db(e)
            }
        })?;

    info!("Registered user {}", user.id);
    let token = tokens.issue(user.id)?;
    Ok((token, UserSummary::from(&user)))
}

/// Unknown user and wrong password fail identically.
pub async fn login(
    pool: &SqlitePool,
    tokens: &TokenIssuer,
    username: &str,
    password: &str,
) -> Result<(String, UserSummary), AppError> {
    let Some(user) = db::user_queries::fetch_by_username(pool, username).await? else {
        verify_password(password.to_string(), dummy_hash().await?.to_string()).await?;
        warn!("Login failed: invalid credentials");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(password.to_string(), user.password.clone()).await? {
        warn!("Login failed: invalid credentials");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    info!("User {} logged in", user.id);
    let token = tokens.issue(user.id)?;
    Ok((token, UserSummary::from(&user)))
}

async fn fetch_user(pool: &SqlitePool, user_id: i64) -> Result<User, AppError> {
    db::user_queries::fetch_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

pub async fn change_password(
    pool: &SqlitePool,
    user_id: i64,
    old_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let user = fetch_user(pool, user_id).await?;
    validate_new_password(new_password)?;

    if !verify_password(old_password.to_string(), user.password).await? {
        return Err(AppError::Validation("Current password is incorrect".into()));
    }

    let new_hash = hash_password(new_password.to_string()).await?;
    db::user_queries::update_password(pool, user_id, &new_hash).await?;
    info!("Password changed for user {}", user_id);
    Ok(())
}

pub async fn settings(pool: &SqlitePool, user_id: i64) -> Result<UserSettings, AppError> {
    fetch_user(pool, user_id).await.map(UserSettings::from)
}

/// Removes the user; the foreign key cascade removes every owned asset.
pub async fn delete_account(pool: &SqlitePool, user_id: i64) -> Result<(), AppError> {
    match db::user_queries::delete(pool, user_id).await? {
        0 => Err(AppError::NotFound("User not found".into())),
        _ => {
            info!("Deleted account {}", user_id);
            Ok(())
        }
    }
}
