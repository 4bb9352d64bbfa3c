//! Sign-in for the demo dashboard.
//!
//! A [`Session`] is created by [`Session::sign_in`] and handed to the
//! application root, which passes it to whatever needs the current
//! user. [`Session::sign_out`] consumes it. There is no global "current
//! user".
//!
//! This is a credential check against a static list, not an
//! authentication system.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// The one password every demo account accepts.
pub const DEMO_PASSWORD: &str = "demo123";

/// What a user does in the company.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Dispatcher,
    Driver,
}

/// An account that can sign in to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account id.
    pub id: String,
    /// Sign-in name, matched exactly.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Job role.
    pub role: Role,
    /// Full display name.
    pub name: String,
}

impl User {
    fn demo(id: &str, username: &str, role: Role, name: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{}@deluxetransport.com", username),
            role,
            name: name.to_string(),
        }
    }
}

static DEMO_DIRECTORY: Lazy<UserDirectory> = Lazy::new(|| UserDirectory {
    users: vec![
        User::demo("1", "admin", Role::Admin, "Happy Saini"),
        User::demo("2", "manager", Role::Manager, "Sarah Johnson"),
        User::demo("3", "dispatcher", Role::Dispatcher, "Mike Rodriguez"),
        User::demo("4", "driver", Role::Driver, "Tom Wilson"),
    ],
    password: DEMO_PASSWORD.to_string(),
});

/// A fixed list of accounts sharing one password.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    password: String,
}

impl UserDirectory {
    /// A directory of `users` sharing `password`.
    pub fn new(users: Vec<User>, password: impl Into<String>) -> UserDirectory {
        UserDirectory {
            users,
            password: password.into(),
        }
    }

    /// The four demo accounts.
    pub fn demo() -> &'static UserDirectory {
        &DEMO_DIRECTORY
    }

    /// Accounts in directory order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the user when the password matches and the username is
    /// known. Usernames are case sensitive.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        if password != self.password {
            return None;
        }
        self.users.iter().find(|user| user.username == username)
    }
}

/// Proof of a successful sign-in. Only [`Session::sign_in`] creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    user: User,
    signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Checks the credentials and opens a session stamped with the
    /// current time.
    pub fn sign_in(
        directory: &UserDirectory,
        username: &str,
        password: &str,
    ) -> Result<Session, QuoteError> {
        match directory.authenticate(username, password) {
            Some(user) => {
                info!("signed in: {} ({:?})", user.username, user.role);
                Ok(Session {
                    user: user.clone(),
                    signed_in_at: Utc::now(),
                })
            }
            None => {
                warn!("sign-in rejected for {}", username);
                Err(QuoteError::InvalidCredentials)
            }
        }
    }

    /// The signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// When the session was opened.
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }

    /// Ends the session and returns the user who held it.
    pub fn sign_out(self) -> User {
        info!("signed out: {}", self.user.username);
        self.user
    }
}
