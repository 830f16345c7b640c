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

//! Email and password accounts.
//!
//! Passwords are stored as argon2 hashes in the `accounts` collection.
//! Whoever called [`Auth::subscribe`] hears about every sign in and sign out.

use std::sync::mpsc::{self, Receiver, Sender};

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use log::{info, warn};
use old_rand::rngs::OsRng;
use password_hash::SaltString;

use crate::{
    accounts::Account,
    error::AuthError,
    store::{Backend, generate_id},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthEvent {
    SignedIn(AuthUser),
    SignedOut { uid: String },
}

#[derive(Debug)]
pub struct Auth {
    current: Option<AuthUser>,
    listeners: Vec<Sender<AuthEvent>>,
    min_password: usize,
}

impl Default for Auth {
    fn default() -> Self {
        Self::new(MIN_PASSWORD_LENGTH)
    }
}

impl Auth {
    #[must_use]
    pub fn new(min_password: usize) -> Self {
        Self {
            current: None,
            listeners: Vec::new(),
            min_password,
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&AuthUser> {
        self.current.as_ref()
    }

    /// Receives every following auth state change.
    pub fn subscribe(&mut self) -> Receiver<AuthEvent> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    fn notify(&mut self, event: &AuthEvent) {
        self.listeners
            .retain(|listener| listener.send(event.clone()).is_ok());
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// If the email is invalid or taken, the password is too short, or the
    /// account can't be stored.
    pub fn sign_up<B: Backend>(
        &mut self,
        backend: &mut B,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < self.min_password {
            return Err(AuthError::WeakPassword);
        }
        if find_account(backend, &email)?.is_some() {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let uid = generate_id();
        backend.set(
            &uid,
            Account {
                uid: uid.clone(),
                email: email.clone(),
                password: hash_password(password)?,
            },
        )?;
        info!("{uid} created account {email}");

        Ok(self.signed_in(AuthUser { uid, email }))
    }

    /// # Errors
    ///
    /// If there is no such account, the password is wrong, or the store
    /// can't be read.
    pub fn sign_in<B: Backend>(
        &mut self,
        backend: &B,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let email = normalize_email(email)?;
        let Some(account) = find_account(backend, &email)? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &account.password) {
            warn!("{} failed to sign in", account.uid);
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.signed_in(AuthUser {
            uid: account.uid,
            email: account.email,
        }))
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current.take() {
            info!("{} signed out", user.uid);
            self.notify(&AuthEvent::SignedOut { uid: user.uid });
        }
    }

    fn signed_in(&mut self, user: AuthUser) -> AuthUser {
        info!("{} signed in", user.uid);
        self.current = Some(user.clone());
        self.notify(&AuthEvent::SignedIn(user.clone()));
        user
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((name, domain))
            if !name.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace) =>
        {
            Ok(email)
        }
        _ => Err(AuthError::InvalidEmail),
    }
}

fn find_account<B: Backend>(backend: &B, email: &str) -> Result<Option<Account>, AuthError> {
    Ok(backend
        .get_all::<Account>()?
        .into_iter()
        .find(|account| account.email == email))
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let ctx = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    ctx.hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| AuthError::Hash(error.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}
