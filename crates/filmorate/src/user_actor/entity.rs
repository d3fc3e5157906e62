//! Entity trait implementation for the User domain type.
//!
//! Validation that only needs the request runs in `from_create_params`; the
//! checks that need the rest of the registry (email uniqueness) or the clock
//! (birthday) run in the hooks, inside the actor task.

use super::UserError;
use crate::model::{non_blank, User, UserCreate, UserId, UserUpdate};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Clock used to decide whether a birthday lies in the future.
pub type UserContext = Arc<dyn Clock + Send + Sync>;

/// Whole-string email shape: word characters with optional `-._` separators,
/// `@`, a dotted domain and a 2-4 letter suffix.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+([-._]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([-.][A-Za-z0-9_]+)*\.[A-Za-z]{2,4}$",
    )
    .unwrap()
});

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = UserContext;
    type Error = UserError;

    /// Builds a user from a create request.
    ///
    /// # Rules
    /// - `email`: required, email-shaped
    /// - `login`: required, no whitespace
    /// - `name`: defaults to `login` when absent or blank
    /// - `birthday`: required
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let email = non_blank(params.email)
            .ok_or_else(|| UserError::validation("email is required"))?;
        validate_email_shape(&email)?;

        let login = non_blank(params.login)
            .ok_or_else(|| UserError::validation("login must not be blank"))?;
        validate_login(&login)?;

        let name = non_blank(params.name).unwrap_or_else(|| login.clone());

        let birthday = params
            .birthday
            .ok_or_else(|| UserError::validation("birthday is required"))?;

        Ok(Self {
            id,
            email,
            login,
            name,
            birthday,
        })
    }

    async fn on_create(
        &mut self,
        peers: Peers<'_, Self>,
        clock: &UserContext,
    ) -> Result<(), UserError> {
        ensure_email_unused(peers, &self.email)?;
        validate_birthday(self.birthday, clock.as_ref())
    }

    /// Merges an update into the stored user.
    ///
    /// # Fields Updated
    /// - `email`: replaced when present and different; re-checked for shape and uniqueness
    /// - `login`: replaced when present
    /// - `name`: replaced when present; otherwise follows the login if it always had
    /// - `birthday`: replaced when present; must not be in the future
    async fn on_update(
        &mut self,
        update: UserUpdate,
        peers: Peers<'_, Self>,
        clock: &UserContext,
    ) -> Result<(), UserError> {
        let name_follows_login = self.name == self.login;

        if let Some(email) = non_blank(update.email) {
            if email != self.email {
                validate_email_shape(&email)?;
                ensure_email_unused(peers, &email)?;
                self.email = email;
            }
        }

        if let Some(login) = non_blank(update.login) {
            validate_login(&login)?;
            self.login = login;
        }

        match non_blank(update.name) {
            Some(name) => self.name = name,
            None if name_follows_login => self.name = self.login.clone(),
            None => {}
        }

        if let Some(birthday) = update.birthday {
            validate_birthday(birthday, clock.as_ref())?;
            self.birthday = birthday;
        }
        Ok(())
    }
}

fn validate_email_shape(email: &str) -> Result<(), UserError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserError::validation(format!("malformed email: {email}")));
    }
    Ok(())
}

fn ensure_email_unused(peers: Peers<'_, User>, email: &str) -> Result<(), UserError> {
    if peers.any(|user| user.email == email) {
        return Err(UserError::validation(format!(
            "a user with email {email} already exists"
        )));
    }
    Ok(())
}

fn validate_login(login: &str) -> Result<(), UserError> {
    if login.chars().any(char::is_whitespace) {
        return Err(UserError::validation("login must not contain spaces"));
    }
    Ok(())
}

fn validate_birthday(
    birthday: NaiveDate,
    clock: &(dyn Clock + Send + Sync),
) -> Result<(), UserError> {
    let today = clock.local().date_naive();
    if birthday > today {
        return Err(UserError::validation("birthday must not be in the future"));
    }
    Ok(())
}
