use chrono::Utc;
use thiserror::Error;

use crate::clients::store_client::{StoreError, UserStore};
use crate::models::user::NewUser;
use crate::service::validation::{self, ValidationError};

/// Everything the registration form collects. `about_me` may stay empty.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_name: String,
    pub about_me: String,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(u64),
    /// Deliberately silent about which field was wrong.
    WrongCredentials,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    UsernameTaken,
}

pub struct AccountService;

impl AccountService {
    /// Fetches the whole collection and scans for an exact, case-sensitive
    /// match on both fields. The store offers no query surface, so this is
    /// the login.
    pub async fn login(
        store: &dyn UserStore,
        user_name: &str,
        password: &str,
    ) -> Result<LoginOutcome, StoreError> {
        let users = store.list_users().await?;
        match users
            .iter()
            .find(|u| u.user_name == user_name && u.password == password)
        {
            Some(user) => Ok(LoginOutcome::LoggedIn(user.id)),
            None => Ok(LoginOutcome::WrongCredentials),
        }
    }

    /// Field rules in fixed order; the first failure wins and nothing is
    /// sent over the wire.
    pub fn validate(form: &RegistrationForm) -> Result<(), ValidationError> {
        if form.email.is_empty() || !validation::validate_email(&form.email) {
            return Err(ValidationError::Email);
        }
        if form.password.is_empty() || !validation::validate_password(&form.password) {
            return Err(ValidationError::Password);
        }
        if form.password != form.confirm_password {
            return Err(ValidationError::ConfirmPassword);
        }
        if !validation::validate_username(&form.user_name) {
            return Err(ValidationError::Username);
        }
        if !validation::validate_about_me(&form.about_me) {
            return Err(ValidationError::AboutMe);
        }
        Ok(())
    }

    pub async fn register(
        store: &dyn UserStore,
        form: &RegistrationForm,
    ) -> Result<RegisterOutcome, AccountError> {
        Self::validate(form)?;

        let users = store.list_users().await.map_err(AccountError::Store)?;
        if users.iter().any(|u| u.user_name == form.user_name) {
            return Ok(RegisterOutcome::UsernameTaken);
        }

        let new_user = NewUser {
            email: form.email.clone(),
            password: form.password.clone(),
            user_name: form.user_name.clone(),
            about_me: form.about_me.clone(),
            joined: Utc::now().timestamp(),
        };
        store
            .create_user(&new_user)
            .await
            .map_err(AccountError::Store)?;
        Ok(RegisterOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            email: "a@b.co".to_string(),
            password: "Abcde1".to_string(),
            confirm_password: "Abcde1".to_string(),
            user_name: "sam".to_string(),
            about_me: String::new(),
        }
    }

    #[test]
    fn validation_stops_at_the_first_broken_rule() {
        let mut form = valid_form();
        form.email = "nope".to_string();
        form.password = "bad".to_string();
        // Both email and password are wrong; email is reported.
        assert_eq!(AccountService::validate(&form), Err(ValidationError::Email));

        let mut form = valid_form();
        form.confirm_password = "Other1".to_string();
        assert_eq!(
            AccountService::validate(&form),
            Err(ValidationError::ConfirmPassword)
        );

        let mut form = valid_form();
        form.about_me = "short".to_string();
        assert_eq!(AccountService::validate(&form), Err(ValidationError::AboutMe));

        assert_eq!(AccountService::validate(&valid_form()), Ok(()));
    }

    #[test]
    fn empty_required_fields_fail_their_own_rule() {
        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(AccountService::validate(&form), Err(ValidationError::Email));

        let mut form = valid_form();
        form.password = String::new();
        form.confirm_password = String::new();
        assert_eq!(AccountService::validate(&form), Err(ValidationError::Password));

        let mut form = valid_form();
        form.user_name = String::new();
        assert_eq!(AccountService::validate(&form), Err(ValidationError::Username));
    }
}
