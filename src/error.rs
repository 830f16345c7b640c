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

use rust_i18n::t;
use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store: no document '{id}' in {collection}")]
    NotFound {
        collection: &'static str,
        id: String,
    },
    #[error("store: {0}")]
    Io(#[from] std::io::Error),
    #[error("store: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("store: {0}")]
    Serialize(#[from] ron::Error),
    #[error("store: the backend is unavailable")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth: the email is already in use")]
    EmailAlreadyInUse,
    #[error("auth: the email is invalid")]
    InvalidEmail,
    #[error("auth: wrong email or password")]
    InvalidCredentials,
    #[error("auth: the password is too weak")]
    WeakPassword,
    #[error("auth: hashing the password failed: {0}")]
    Hash(String),
    #[error("auth: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatchError {
    #[error("match: the match is completed, reopen it first")]
    Completed,
    #[error("match: the match is not completed")]
    NotCompleted,
    #[error("match: '{0}' does not take part in the match")]
    UnknownParticipant(String),
    #[error("match: a participant can't score against itself")]
    SelfOpponent,
    #[error("match: there is no set {0}")]
    InvalidSet(usize),
    #[error("match: a points match has 1 to 5 sets, not {0}")]
    InvalidSets(u8),
    #[error("match: at least 2 participants are needed")]
    TooFewParticipants,
    #[error("match: the match has a different format")]
    WrongFormat,
}

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("club: only admins may do that")]
    AdminOnly,
    #[error("club: you are not signed in")]
    NotSignedIn,
    #[error("club: fill in all fields")]
    EmptyFields,
    #[error("club: the username needs at least {0} characters")]
    UsernameTooShort(usize),
    #[error("club: the password needs at least {0} characters")]
    PasswordTooShort(usize),
    #[error("club: the username 'admin' is reserved")]
    ReservedUsername,
    #[error("club: a team needs at least {0} players")]
    TooFewPlayers(usize),
    #[error("club: the team '{0}' already exists")]
    TeamExists(String),
    #[error("club: no match '{0}'")]
    MatchNotFound(String),
    #[error("protocol: the client and server versions differ")]
    VersionMismatch,
    #[error("protocol: expected login, register or guest")]
    BadHandshake,
    #[error("protocol: {0}")]
    BadCommand(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClubError {
    /// The message shown to the user who triggered the action.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> String {
        let locale = locale.txt();

        match self {
            Self::AdminOnly => t!("error.admin_only", locale = locale).to_string(),
            Self::NotSignedIn => t!("error.not_signed_in", locale = locale).to_string(),
            Self::EmptyFields => t!("error.empty_fields", locale = locale).to_string(),
            Self::UsernameTooShort(min) => {
                t!("error.username_too_short", locale = locale, min = min).to_string()
            }
            Self::PasswordTooShort(min) => {
                t!("error.password_too_short", locale = locale, min = min).to_string()
            }
            Self::ReservedUsername => t!("error.reserved_username", locale = locale).to_string(),
            Self::TooFewPlayers(min) => {
                t!("error.too_few_players", locale = locale, min = min).to_string()
            }
            Self::TeamExists(name) => {
                t!("error.team_exists", locale = locale, name = name).to_string()
            }
            Self::MatchNotFound(_) => t!("error.match_not_found", locale = locale).to_string(),
            Self::VersionMismatch => t!("error.version_mismatch", locale = locale).to_string(),
            Self::BadHandshake => t!("error.bad_handshake", locale = locale).to_string(),
            Self::BadCommand(error) => {
                t!("error.bad_command", locale = locale, error = error).to_string()
            }
            Self::Auth(AuthError::EmailAlreadyInUse) => {
                t!("error.email_in_use", locale = locale).to_string()
            }
            Self::Auth(AuthError::InvalidCredentials) => {
                t!("error.invalid_credentials", locale = locale).to_string()
            }
            Self::Auth(AuthError::WeakPassword) => {
                t!("error.weak_password", locale = locale).to_string()
            }
            Self::Match(MatchError::Completed) => {
                t!("error.match_completed", locale = locale).to_string()
            }
            error => t!("error.other", locale = locale, error = error).to_string(),
        }
    }
}
