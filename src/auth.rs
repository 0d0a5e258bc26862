use crate::errors::AppError;
use crate::models::{AppData, UserProfile, UserRecord};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_USER_ID: &str = "demo-user";
const DEMO_NAME: &str = "Demo User";

pub fn register(
    data: &mut AppData,
    name: &str,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<(String, UserProfile), AppError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::bad_request("name, email, and password are required"));
    }
    if email == DEMO_EMAIL || data.users.contains_key(email) {
        return Err(AppError::conflict("email already in use"));
    }

    let record = UserRecord {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let profile = UserProfile::from(&record);
    data.users.insert(email.to_string(), record);
    data.ensure_seed_items(&profile.id, now);
    let token = open_session(data, &profile.id);

    Ok((token, profile))
}

pub fn login(
    data: &mut AppData,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<(String, UserProfile), AppError> {
    let email = email.trim();

    let profile = if email == DEMO_EMAIL {
        // The demo account accepts any password and is materialized on
        // first use so profile edits behave like any other account.
        let record = data
            .users
            .entry(DEMO_EMAIL.to_string())
            .or_insert_with(|| UserRecord {
                id: DEMO_USER_ID.to_string(),
                name: DEMO_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                password: String::new(),
            });
        UserProfile::from(&*record)
    } else {
        let record = data
            .user_by_email(email)
            .filter(|record| record.password == password)
            .ok_or_else(|| AppError::unauthorized("invalid email or password"))?;
        UserProfile::from(record)
    };

    data.ensure_seed_items(&profile.id, now);
    let token = open_session(data, &profile.id);

    Ok((token, profile))
}

pub fn logout(data: &mut AppData, token: &str) {
    data.sessions.remove(token);
}

pub fn session_user_id(data: &AppData, token: &str) -> Result<String, AppError> {
    data.sessions
        .get(token)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("session expired or unknown"))
}

pub fn update_profile(
    data: &mut AppData,
    user_id: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<UserProfile, AppError> {
    let current_email = data
        .user_by_id(user_id)
        .map(|record| record.email.clone())
        .ok_or_else(|| AppError::not_found("no such user"))?;

    if let Some(new_email) = email.map(str::trim) {
        if new_email.is_empty() {
            return Err(AppError::bad_request("email must not be empty"));
        }
        if new_email != current_email {
            if new_email == DEMO_EMAIL || data.users.contains_key(new_email) {
                return Err(AppError::conflict("email already in use"));
            }
            let mut record = data
                .users
                .remove(&current_email)
                .ok_or_else(|| AppError::not_found("no such user"))?;
            record.email = new_email.to_string();
            data.users.insert(new_email.to_string(), record);
        }
    }

    let record = data
        .user_by_id_mut(user_id)
        .ok_or_else(|| AppError::not_found("no such user"))?;
    if let Some(new_name) = name.map(str::trim) {
        if new_name.is_empty() {
            return Err(AppError::bad_request("name must not be empty"));
        }
        record.name = new_name.to_string();
    }

    Ok(UserProfile::from(&*record))
}

pub fn update_password(
    data: &mut AppData,
    user_id: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    if new_password.is_empty() {
        return Err(AppError::bad_request("new password must not be empty"));
    }

    let record = data
        .user_by_id_mut(user_id)
        .ok_or_else(|| AppError::not_found("no such user"))?;
    // The demo account logs in with any password, so it changes with any too.
    if record.email != DEMO_EMAIL && record.password != current_password {
        return Err(AppError::unauthorized("current password is incorrect"));
    }
    record.password = new_password.to_string();

    Ok(())
}

fn open_session(data: &mut AppData, user_id: &str) -> String {
    let token = Uuid::new_v4().to_string();
    data.sessions.insert(token.clone(), user_id.to_string());
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_login_round_trips() {
        let mut data = AppData::default();
        let now = Utc::now();

        let (token, user) = register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        assert_eq!(session_user_id(&data, &token).unwrap(), user.id);
        assert_eq!(data.items_for(&user.id).len(), 2);

        let (_, again) = login(&mut data, "ada@example.com", "secret", now).unwrap();
        assert_eq!(again.id, user.id);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut data = AppData::default();
        let now = Utc::now();

        register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        let err = register(&mut data, "Eve", "ada@example.com", "other", now).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::CONFLICT);

        let err = register(&mut data, "Eve", DEMO_EMAIL, "other", now).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::CONFLICT);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut data = AppData::default();
        let now = Utc::now();

        register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        assert!(login(&mut data, "ada@example.com", "wrong", now).is_err());
        assert!(login(&mut data, "nobody@example.com", "secret", now).is_err());
    }

    #[test]
    fn demo_account_accepts_any_password() {
        let mut data = AppData::default();
        let now = Utc::now();

        let (_, user) = login(&mut data, DEMO_EMAIL, "whatever", now).unwrap();
        assert_eq!(user.id, "demo-user");
        assert_eq!(user.name, "Demo User");

        let (_, again) = login(&mut data, DEMO_EMAIL, "different", now).unwrap();
        assert_eq!(again.id, user.id);
    }

    #[test]
    fn logout_invalidates_the_session() {
        let mut data = AppData::default();
        let now = Utc::now();

        let (token, _) = register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        logout(&mut data, &token);
        assert!(session_user_id(&data, &token).is_err());
    }

    #[test]
    fn password_change_requires_the_current_one() {
        let mut data = AppData::default();
        let now = Utc::now();

        let (_, user) = register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        assert!(update_password(&mut data, &user.id, "wrong", "next").is_err());
        update_password(&mut data, &user.id, "secret", "next").unwrap();

        assert!(login(&mut data, "ada@example.com", "secret", now).is_err());
        assert!(login(&mut data, "ada@example.com", "next", now).is_ok());
    }

    #[test]
    fn email_change_re_keys_the_record() {
        let mut data = AppData::default();
        let now = Utc::now();

        let (_, user) = register(&mut data, "Ada", "ada@example.com", "secret", now).unwrap();
        let updated = update_profile(&mut data, &user.id, None, Some("ada@new.com")).unwrap();
        assert_eq!(updated.email, "ada@new.com");
        assert!(data.user_by_email("ada@example.com").is_none());
        assert!(login(&mut data, "ada@new.com", "secret", now).is_ok());
    }
}
