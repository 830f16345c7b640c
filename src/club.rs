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

//! Data access for the club.
//!
//! Failures are logged here. Reads then fall back to an empty value so a
//! page can still be shown, writes hand the error back to the caller.

use std::collections::BTreeMap;

use chrono::Utc;
use log::{error, info};

use crate::{
    accounts::{User, username_of},
    auth::{Auth, AuthEvent},
    config::Config,
    error::ClubError,
    matches::Match,
    player::{DEFAULT_PLAYERS, Player},
    role::Role,
    state::Session,
    store::Backend,
    team::{Team, TeamPlayer},
};

#[derive(Debug)]
pub struct Club<B> {
    backend: B,
    auth: Auth,
    config: Config,
}

impl<B: Backend> Club<B> {
    #[must_use]
    pub fn new(backend: B, config: Config) -> Self {
        Self {
            backend,
            auth: Auth::new(config.min_password_length),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn subscribe(&mut self) -> std::sync::mpsc::Receiver<AuthEvent> {
        self.auth.subscribe()
    }

    // Players

    #[must_use]
    pub fn get_players(&self) -> Vec<Player> {
        self.backend.get_all().unwrap_or_else(|err| {
            error!("get_players: {err}");
            Vec::new()
        })
    }

    /// # Errors
    ///
    /// If the player can't be stored.
    pub fn add_player(&mut self, mut player: Player) -> Result<Player, ClubError> {
        if player.photo.is_empty() {
            player.photo.clone_from(&self.config.default_photo);
        }

        let id = self.backend.add(player.clone()).map_err(|err| {
            error!("add_player: {err}");
            err
        })?;
        player.id = id;

        Ok(player)
    }

    /// # Errors
    ///
    /// If the delete fails.
    pub fn delete_player(&mut self, id: &str) -> Result<(), ClubError> {
        self.backend.delete::<Player>(id).map_err(|err| {
            error!("delete_player: {err}");
            err.into()
        })
    }

    // Teams

    #[must_use]
    pub fn get_teams(&self) -> BTreeMap<String, Team> {
        match self.backend.get_all::<Team>() {
            Ok(teams) => teams
                .into_iter()
                .map(|team| (team.name.clone(), team))
                .collect(),
            Err(err) => {
                error!("get_teams: {err}");
                BTreeMap::new()
            }
        }
    }

    /// Overwrites whatever team has the same name.
    ///
    /// # Errors
    ///
    /// If the team can't be stored.
    pub fn save_team(&mut self, team: Team) -> Result<(), ClubError> {
        let name = team.name.clone();
        let count = team.player_count();

        self.backend.set(&name, team).map_err(|err| {
            error!("save_team: {err}");
            err
        })?;
        info!("team '{name}' saved with {count} players");

        Ok(())
    }

    /// Matches that refer to the team are left alone.
    ///
    /// # Errors
    ///
    /// If the delete fails.
    pub fn delete_team(&mut self, name: &str) -> Result<(), ClubError> {
        self.backend.delete::<Team>(name).map_err(|err| {
            error!("delete_team: {err}");
            err.into()
        })
    }

    /// The players of a team, or nothing if the team is gone.
    #[must_use]
    pub fn team_players(&self, name: &str) -> Vec<TeamPlayer> {
        match self.backend.get::<Team>(name) {
            Ok(team) => team.map(|team| team.players).unwrap_or_default(),
            Err(err) => {
                error!("team_players: {err}");
                Vec::new()
            }
        }
    }

    // Matches

    /// Newest first.
    #[must_use]
    pub fn get_matches(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = self.backend.get_all().unwrap_or_else(|err| {
            error!("get_matches: {err}");
            Vec::new()
        });
        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        matches
    }

    #[must_use]
    pub fn get_match(&self, id: &str) -> Option<Match> {
        self.backend.get(id).unwrap_or_else(|err| {
            error!("get_match: {err}");
            None
        })
    }

    /// Adds a new match or overwrites a stored one and returns its id.
    ///
    /// # Errors
    ///
    /// If the write fails, or the match has an id that is no longer stored.
    pub fn save_match(
        &mut self,
        game: &mut Match,
        created_by: Option<&str>,
    ) -> Result<String, ClubError> {
        let now = Utc::now();
        game.updated_at = Some(now);

        let result = if let Some(id) = game.id.clone() {
            let stored = game.clone();
            self.backend
                .update::<Match, _>(&id, |document| *document = stored)
                .map(|()| id)
        } else {
            game.created_at = Some(now);
            game.created_by = created_by.map(ToString::to_string);
            self.backend.add(game.clone()).inspect(|id| {
                game.id = Some(id.clone());
            })
        };

        result.map_err(|err| {
            error!("save_match: {err}");
            err.into()
        })
    }

    /// # Errors
    ///
    /// If the delete fails.
    pub fn delete_match(&mut self, id: &str) -> Result<(), ClubError> {
        self.backend.delete::<Match>(id).map_err(|err| {
            error!("delete_match: {err}");
            err.into()
        })
    }

    // Users

    #[must_use]
    pub fn get_user(&self, uid: &str) -> Option<User> {
        self.backend.get(uid).unwrap_or_else(|err| {
            error!("get_user: {err}");
            None
        })
    }

    /// # Errors
    ///
    /// If the user can't be stored.
    pub fn create_user(&mut self, mut user: User) -> Result<(), ClubError> {
        user.created_at = Some(Utc::now());
        let uid = user.uid.clone();

        self.backend.set(&uid, user).map_err(|err| {
            error!("create_user: {err}");
            err.into()
        })
    }

    /// # Errors
    ///
    /// If there is no such user or the write fails.
    pub fn update_user<F>(&mut self, uid: &str, change: F) -> Result<(), ClubError>
    where
        F: FnOnce(&mut User),
    {
        self.backend.update(uid, change).map_err(|err| {
            error!("update_user: {err}");
            err.into()
        })
    }

    // Authentication

    /// Signs in and makes sure the user has a profile. A first sign in with
    /// the configured admin email creates an admin.
    ///
    /// # Errors
    ///
    /// If the credentials are wrong or the profile can't be stored.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, ClubError> {
        let auth_user = self
            .auth
            .sign_in(&self.backend, email, password)
            .map_err(|err| {
                error!("login: {err}");
                err
            })?;

        let user = if let Some(user) = self.get_user(&auth_user.uid) {
            user
        } else {
            let role = if auth_user.email == self.config.admin_email.to_lowercase() {
                Role::Admin
            } else {
                Role::User
            };
            let user = User::new(
                &auth_user.uid,
                &auth_user.email,
                username_of(&auth_user.email),
                role,
            );
            self.create_user(user.clone())?;
            user
        };
        info!("{} logged in as {}", user.username, user.role);

        Ok(Session::from(user))
    }

    /// # Errors
    ///
    /// If the account can't be created.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Session, ClubError> {
        let auth_user = self
            .auth
            .sign_up(&mut self.backend, email, password)
            .map_err(|err| {
                error!("register: {err}");
                err
            })?;

        let user = User::new(&auth_user.uid, &auth_user.email, username, Role::User);
        self.create_user(user.clone())?;

        Ok(Session::from(user))
    }

    pub fn logout(&mut self) {
        self.auth.sign_out();
    }

    // Default data

    /// Seeds the default roster when there are no players yet.
    pub fn init_default_data(&mut self) {
        match self.backend.get_all::<Player>() {
            Ok(players) if players.is_empty() => {
                info!("creating the default players ...");
                if let Err(err) = self.create_default_players() {
                    error!("init_default_data: {err}");
                }
            }
            Ok(_) => {}
            Err(err) => error!("init_default_data: {err}"),
        }
    }

    /// # Errors
    ///
    /// If a player can't be stored.
    pub fn create_default_players(&mut self) -> Result<usize, ClubError> {
        for name in DEFAULT_PLAYERS {
            self.backend.add(Player::seeded(name))?;
        }
        info!("created {} default players", DEFAULT_PLAYERS.len());

        Ok(DEFAULT_PLAYERS.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemoryBackend;

    use super::*;

    fn club() -> Club<MemoryBackend> {
        Club::new(MemoryBackend::default(), Config::default())
    }

    #[test]
    fn reads_fall_back_to_empty() {
        let mut club = club();
        club.init_default_data();
        club.backend_mut().offline = true;

        assert!(club.get_players().is_empty());
        assert!(club.get_teams().is_empty());
        assert!(club.get_matches().is_empty());
        assert!(club.get_user("uid").is_none());
        assert!(club.team_players("team").is_empty());
    }

    #[test]
    fn writes_propagate_errors() {
        let mut club = club();
        club.backend_mut().offline = true;

        assert!(matches!(
            club.add_player(Player::new("Ann", None)),
            Err(ClubError::Store(_))
        ));
        assert!(club.delete_team("team").is_err());
        assert!(club.save_team(Team::default()).is_err());
    }

    #[test]
    fn default_players_are_seeded_once() {
        let mut club = club();

        club.init_default_data();
        assert_eq!(club.get_players().len(), DEFAULT_PLAYERS.len());

        club.init_default_data();
        assert_eq!(club.get_players().len(), DEFAULT_PLAYERS.len());

        let player = &club.get_players()[0];
        assert_eq!(player.photo, format!("images/{}.png", player.name));
    }

    #[test]
    fn login_creates_the_profile() -> anyhow::Result<()> {
        let mut club = club();

        club.register("anna@volleyball.ru", "secret1", "anna")?;
        club.logout();
        let session = club.login("anna@volleyball.ru", "secret1")?;
        assert_eq!(session.role, Role::User);
        assert_eq!(session.username, "anna");

        club.auth
            .sign_up(&mut club.backend, "admin@volleyball.ru", "secret1")?;
        let session = club.login("admin@volleyball.ru", "secret1")?;
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.username, "admin");
        assert!(club.get_user(&session.uid).is_some());

        Ok(())
    }

    #[test]
    fn matches_are_newest_first() -> anyhow::Result<()> {
        let mut club = club();

        for (description, timestamp) in [("old", 1), ("new", 3), ("mid", 2)] {
            let mut game = Match {
                description: description.to_string(),
                timestamp,
                ..Match::default()
            };
            club.save_match(&mut game, Some("uid"))?;
            assert!(game.id.is_some());
            assert_eq!(game.created_by.as_deref(), Some("uid"));
        }

        let descriptions: Vec<_> = club
            .get_matches()
            .into_iter()
            .map(|game| game.description)
            .collect();
        assert_eq!(descriptions, ["new", "mid", "old"]);

        Ok(())
    }

    #[test]
    fn saving_a_deleted_match_fails() -> anyhow::Result<()> {
        let mut club = club();
        let mut game = Match::default();
        let id = club.save_match(&mut game, None)?;

        club.delete_match(&id)?;
        assert!(matches!(
            club.save_match(&mut game, None),
            Err(ClubError::Store(_))
        ));

        Ok(())
    }
}
