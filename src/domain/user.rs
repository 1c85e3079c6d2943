//! User domain entity and related types.

use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered person.
///
/// Identity is the `(first_name, last_name)` pair, compared exactly and
/// case-sensitively. The email is stored in its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: Mailbox,
}

impl User {
    /// Create a new user from already validated parts
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: Mailbox) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
        }
    }

    /// Check whether this user is identified by the given name pair
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Bare address of the stored mailbox (no display name)
    pub fn email_address(&self) -> String {
        self.email.email.to_string()
    }
}

/// User record as exchanged over HTTP.
///
/// Absent name fields deserialize to empty strings so that the registry,
/// not the decoder, decides what is valid. PascalCase keys are accepted
/// alongside camelCase ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserData {
    /// Given name
    #[serde(default, alias = "FirstName")]
    #[schema(example = "Test")]
    pub first_name: String,
    /// Family name
    #[serde(default, alias = "LastName")]
    #[schema(example = "Userman")]
    pub last_name: String,
    /// Email address
    #[serde(default, alias = "Email")]
    #[schema(example = "foo@bar.com")]
    pub email: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        let email = user.email_address();
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email,
        }
    }
}

/// Name pair used to look a user up.
///
/// Clients may send the full [`UserData`] shape; the email is accepted and
/// ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserLookup {
    #[serde(default, alias = "FirstName")]
    #[schema(example = "Test")]
    pub first_name: String,
    #[serde(default, alias = "LastName")]
    #[schema(example = "Userman")]
    pub last_name: String,
    #[serde(default, alias = "Email")]
    #[schema(example = "")]
    pub email: String,
}
