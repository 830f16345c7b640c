// This file is part of volleyball-club.
//
// volleyball-club is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// volleyball-club is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    role::Role,
    store::{Collection, Database, Document},
};

/// The profile kept for every signed-up user, keyed by uid.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    #[must_use]
    pub fn new(uid: &str, email: &str, username: &str, role: Role) -> Self {
        Self {
            uid: uid.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            display_name: username.to_string(),
            role,
            created_at: None,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.username, self.email, self.role)
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn collection(database: &Database) -> &Collection<Self> {
        &database.users
    }

    fn collection_mut(database: &mut Database) -> &mut Collection<Self> {
        &mut database.users
    }

    fn assign_id(&mut self, id: &str) {
        self.uid = id.to_string();
    }
}

/// Sign-in credentials, keyed by uid. Only the auth layer reads these.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Account {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Document for Account {
    const COLLECTION: &'static str = "accounts";

    fn collection(database: &Database) -> &Collection<Self> {
        &database.accounts
    }

    fn collection_mut(database: &mut Database) -> &mut Collection<Self> {
        &mut database.accounts
    }

    fn assign_id(&mut self, id: &str) {
        self.uid = id.to_string();
    }
}

/// The email a username signs in with.
#[must_use]
pub fn email_for(username: &str, domain: &str) -> String {
    format!("{username}@{domain}")
}

/// The part of an email before the `@`.
#[must_use]
pub fn username_of(email: &str) -> &str {
    email.split_once('@').map_or(email, |(username, _)| username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_and_emails() {
        assert_eq!(email_for("anna", "volleyball.ru"), "anna@volleyball.ru");
        assert_eq!(username_of("anna@volleyball.ru"), "anna");
        assert_eq!(username_of("anna"), "anna");
    }
}
