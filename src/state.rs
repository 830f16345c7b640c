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

//! What one signed in user sees, and the actions they can take.
//!
//! Every action that changes the club checks for an admin session first.

use std::{collections::HashSet, fmt};

use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    accounts::{User, email_for},
    club::Club,
    error::{ClubError, MatchError},
    matches::{Match, Participant, ParticipantKind, ParticipantsType},
    player::Player,
    role::Role,
    standings::Standing,
    store::Backend,
    team::{MIN_TEAM_PLAYERS, Team, TeamPlayer},
};

const RESERVED_USERNAME: &str = "admin";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub username: String,
    pub role: Role,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid,
            email: user.email,
            username: user.username,
            role: user.role,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.username, self.role)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Dashboard {
    pub players: usize,
    pub teams: usize,
    pub matches: usize,
    pub online: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
}

impl AppState {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.role.is_admin())
    }

    fn admin(&self) -> Result<&Session, ClubError> {
        match &self.session {
            Some(session) if session.role.is_admin() => Ok(session),
            Some(_) => Err(ClubError::AdminOnly),
            None => Err(ClubError::NotSignedIn),
        }
    }

    // Authentication

    /// Passwords are trimmed at both ends. Whitespace inside them is kept.
    ///
    /// # Errors
    ///
    /// If a field is empty or the credentials are wrong.
    pub fn login<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        username: &str,
        password: &str,
    ) -> Result<&Session, ClubError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ClubError::EmptyFields);
        }

        let email = if username == RESERVED_USERNAME {
            club.config().admin_email.clone()
        } else {
            email_for(username, &club.config().email_domain)
        };

        let session = club.login(&email, password)?;
        self.load_all(club);

        Ok(&*self.session.insert(session))
    }

    /// # Errors
    ///
    /// If the input is invalid or the account can't be created.
    pub fn register<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        username: &str,
        password: &str,
    ) -> Result<&Session, ClubError> {
        let username = username.trim();
        let password = password.trim();
        let config = club.config();

        if username.is_empty() || password.is_empty() {
            return Err(ClubError::EmptyFields);
        }
        if username.chars().count() < config.min_username_length {
            return Err(ClubError::UsernameTooShort(config.min_username_length));
        }
        if password.chars().count() < config.min_password_length {
            return Err(ClubError::PasswordTooShort(config.min_password_length));
        }
        if username.to_lowercase() == RESERVED_USERNAME {
            return Err(ClubError::ReservedUsername);
        }

        let email = email_for(username, &config.email_domain);
        let session = club.register(&email, password, username)?;
        self.load_all(club);

        Ok(&*self.session.insert(session))
    }

    pub fn logout<B: Backend>(&mut self, club: &mut Club<B>) {
        club.logout();
        *self = Self::default();
    }

    pub fn load_all<B: Backend>(&mut self, club: &Club<B>) {
        self.players = club.get_players();
        self.teams = club.get_teams().into_values().collect();
        self.matches = club.get_matches();
    }

    // Players and teams

    /// # Errors
    ///
    /// If the session is not an admin, the name is empty, or the write fails.
    pub fn add_player<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        name: &str,
        photo: Option<&str>,
    ) -> Result<Player, ClubError> {
        self.admin()?;
        if name.trim().is_empty() {
            return Err(ClubError::EmptyFields);
        }

        let photo = photo.map(str::trim).filter(|photo| !photo.is_empty());
        let player = club.add_player(Player::new(name, photo))?;
        self.players = club.get_players();

        Ok(player)
    }

    /// # Errors
    ///
    /// If the session is not an admin or the delete fails.
    pub fn delete_player<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        id: &str,
    ) -> Result<(), ClubError> {
        self.admin()?;
        club.delete_player(id)?;
        self.players = club.get_players();

        Ok(())
    }

    /// Builds a team from players in the given order. Its name joins their
    /// names. A player picked twice is counted once.
    ///
    /// # Errors
    ///
    /// If the session is not an admin, too few known players are given, a
    /// team with the same name exists, or the write fails.
    pub fn create_team<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        player_ids: &[String],
    ) -> Result<Team, ClubError> {
        let uid = self.admin()?.uid.clone();

        let roster = club.get_players();
        let mut seen = HashSet::new();
        let players: Vec<Player> = player_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| roster.iter().find(|player| &player.id == id))
            .cloned()
            .collect();

        if players.len() < MIN_TEAM_PLAYERS {
            return Err(ClubError::TooFewPlayers(MIN_TEAM_PLAYERS));
        }

        let name = Team::name_for(&players);
        if club.get_teams().contains_key(&name) {
            return Err(ClubError::TeamExists(name));
        }

        let team = Team::new(&players, Some(uid), Utc::now());
        club.save_team(team.clone())?;
        self.teams = club.get_teams().into_values().collect();

        Ok(team)
    }

    /// # Errors
    ///
    /// If the session is not an admin or the delete fails.
    pub fn delete_team<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        name: &str,
    ) -> Result<(), ClubError> {
        self.admin()?;
        club.delete_team(name)?;
        self.teams = club.get_teams().into_values().collect();

        Ok(())
    }

    // Matches

    /// # Errors
    ///
    /// If the session is not an admin, a team is unknown, fewer than two
    /// teams are given, or the write fails.
    pub fn create_classic_match<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        description: Option<&str>,
        teams: Vec<String>,
    ) -> Result<Match, ClubError> {
        let uid = self.admin()?.uid.clone();

        let known = club.get_teams();
        if let Some(team) = teams.iter().find(|team| !known.contains_key(*team)) {
            return Err(MatchError::UnknownParticipant(team.clone()).into());
        }

        let mut game = Match::new_classic(description, teams, Utc::now())?;
        club.save_match(&mut game, Some(&uid))?;
        info!("created match {game}");
        self.matches = club.get_matches();

        Ok(game)
    }

    /// `ids` are player ids or team names depending on `participants_type`.
    ///
    /// # Errors
    ///
    /// If the session is not an admin, a participant is unknown, the sets
    /// are out of range, or the write fails.
    pub fn create_points_match<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        description: Option<&str>,
        participants_type: ParticipantsType,
        ids: &[String],
        sets: Option<u8>,
    ) -> Result<Match, ClubError> {
        let uid = self.admin()?.uid.clone();

        let mut seen = HashSet::new();
        let ids: Vec<&String> = ids.iter().filter(|id| seen.insert(*id)).collect();

        let participants = match participants_type {
            ParticipantsType::Players => {
                let roster = club.get_players();
                ids.into_iter()
                    .map(|id| {
                        roster
                            .iter()
                            .find(|player| &player.id == id)
                            .map(|player| Participant {
                                id: player.id.clone(),
                                name: player.name.clone(),
                                kind: ParticipantKind::Player,
                                players: vec![TeamPlayer::from(player)],
                            })
                            .ok_or_else(|| MatchError::UnknownParticipant(id.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            ParticipantsType::Teams => {
                let mut teams = club.get_teams();
                ids.into_iter()
                    .map(|id| {
                        teams
                            .remove(id)
                            .map(|team| Participant {
                                id: team.name.clone(),
                                name: team.name,
                                kind: ParticipantKind::Team,
                                players: team.players,
                            })
                            .ok_or_else(|| MatchError::UnknownParticipant(id.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let sets = sets.unwrap_or(club.config().default_points_sets);
        let mut game = Match::new_points(
            description,
            participants_type,
            participants,
            sets,
            Utc::now(),
        )?;
        club.save_match(&mut game, Some(&uid))?;
        info!("created match {game}");
        self.matches = club.get_matches();

        Ok(game)
    }

    /// Loads a match, applies `change` and saves it.
    fn edit_match<B, T, F>(
        &mut self,
        club: &mut Club<B>,
        id: &str,
        change: F,
    ) -> Result<(T, Match), ClubError>
    where
        B: Backend,
        F: FnOnce(&mut Match) -> Result<T, ClubError>,
    {
        self.admin()?;

        let mut game = club
            .get_match(id)
            .ok_or_else(|| ClubError::MatchNotFound(id.to_string()))?;
        let value = change(&mut game)?;
        club.save_match(&mut game, None)?;

        if let Some(cached) = self
            .matches
            .iter_mut()
            .find(|cached| cached.id.as_deref() == Some(id))
        {
            *cached = game.clone();
        } else {
            self.matches = club.get_matches();
        }

        Ok((value, game))
    }

    /// Sets a classic team's points by hand. Input that is not a number
    /// counts as 0.
    ///
    /// # Errors
    ///
    /// If the session is not an admin, the match can't be edited, or the
    /// write fails.
    pub fn update_team_points<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
        team: &str,
        value: &str,
    ) -> Result<u32, ClubError> {
        let points = parse_points(value);
        self.edit_match(club, match_id, |game| {
            game.update_team_points(team, points)?;
            Ok(points)
        })
        .map(|(points, _)| points)
    }

    /// Stores a set score such as `25:20` and returns the team's new points.
    ///
    /// # Errors
    ///
    /// If the session is not an admin, the match can't be edited, or the
    /// write fails.
    pub fn update_set_score<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
        team: &str,
        set: usize,
        value: &str,
    ) -> Result<u32, ClubError> {
        let rule = club.config().set_rule;
        self.edit_match(club, match_id, |game| {
            Ok(game.update_set_score(team, set, value, rule)?)
        })
        .map(|(points, _)| points)
    }

    /// Stores the points `participant` scored against `opponent` in a set
    /// and returns the participant's new total.
    ///
    /// # Errors
    ///
    /// If the session is not an admin, the match can't be edited, or the
    /// write fails.
    pub fn update_points_cell<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
        participant: &str,
        opponent: &str,
        set: usize,
        value: &str,
    ) -> Result<u32, ClubError> {
        let points = parse_points(value);
        self.edit_match(club, match_id, |game| {
            Ok(game.update_points_cell(participant, opponent, set, points)?)
        })
        .map(|(total, _)| total)
    }

    /// # Errors
    ///
    /// If the session is not an admin or the write fails.
    pub fn calculate_standings<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
    ) -> Result<Vec<Standing>, ClubError> {
        self.edit_match(club, match_id, |game| {
            Ok(game.calculate_standings().to_vec())
        })
        .map(|(standings, _)| standings)
    }

    /// # Errors
    ///
    /// If the session is not an admin, the match is already completed, or
    /// the write fails.
    pub fn finish_match<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
    ) -> Result<Match, ClubError> {
        let ((), game) = self.edit_match(club, match_id, |game| {
            Ok(game.complete(Utc::now())?)
        })?;
        info!("finished match {game}");

        Ok(game)
    }

    /// # Errors
    ///
    /// If the session is not an admin, the match is not completed, or the
    /// write fails.
    pub fn reopen_match<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
    ) -> Result<Match, ClubError> {
        let ((), game) = self.edit_match(club, match_id, |game| Ok(game.reopen()?))?;
        info!("reopened match {game}");

        Ok(game)
    }

    /// # Errors
    ///
    /// If the session is not an admin or the delete fails.
    pub fn delete_match<B: Backend>(
        &mut self,
        club: &mut Club<B>,
        match_id: &str,
    ) -> Result<(), ClubError> {
        self.admin()?;
        club.delete_match(match_id)?;
        self.matches = club.get_matches();

        Ok(())
    }

    // Views

    /// Completed matches, newest first.
    #[must_use]
    pub fn past_matches(&self) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|game| game.is_completed())
            .collect()
    }

    #[must_use]
    pub fn dashboard<B: Backend>(&self, club: &Club<B>) -> Dashboard {
        Dashboard {
            players: self.players.len(),
            teams: self.teams.len(),
            matches: self.matches.len(),
            online: club.backend().database().is_ok(),
        }
    }
}

/// Reads the leading digits of `value`. Anything else is 0, and numbers
/// too large for a `u32` stop at `u32::MAX`.
#[must_use]
pub fn parse_points(value: &str) -> u32 {
    let value = value.trim();
    let end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());

    match value.get(..end) {
        Some("") | None => 0,
        Some(digits) => digits.parse().unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, store::MemoryBackend};

    use super::*;

    fn admin() -> anyhow::Result<(Club<MemoryBackend>, AppState)> {
        let mut club = Club::new(MemoryBackend::default(), Config::default());
        club.init_default_data();
        let mut state = AppState::default();

        let mut auth = crate::auth::Auth::default();
        auth.sign_up(club.backend_mut(), "admin@volleyball.ru", "secret1")?;
        state.login(&mut club, "admin", "secret1")?;

        Ok((club, state))
    }

    fn player_ids(state: &AppState, count: usize) -> Vec<String> {
        state
            .players
            .iter()
            .take(count)
            .map(|player| player.id.clone())
            .collect()
    }

    #[test]
    fn points_input() {
        assert_eq!(parse_points("25"), 25);
        assert_eq!(parse_points(" 12abc"), 12);
        assert_eq!(parse_points("abc"), 0);
        assert_eq!(parse_points("-5"), 0);
        assert_eq!(parse_points(""), 0);
        assert_eq!(parse_points("99999999999"), u32::MAX);
    }

    #[test]
    fn register_validation() {
        let mut club = Club::new(MemoryBackend::default(), Config::default());
        let mut state = AppState::default();

        assert!(matches!(
            state.register(&mut club, "", "secret1"),
            Err(ClubError::EmptyFields)
        ));
        assert!(matches!(
            state.register(&mut club, "an", "secret1"),
            Err(ClubError::UsernameTooShort(3))
        ));
        assert!(matches!(
            state.register(&mut club, "anna", "12345"),
            Err(ClubError::PasswordTooShort(6))
        ));
        assert!(matches!(
            state.register(&mut club, "Admin", "secret1"),
            Err(ClubError::ReservedUsername)
        ));

        assert!(state.register(&mut club, "anna", "secret1").is_ok());
        assert_eq!(
            state.session.as_ref().map(|session| session.email.as_str()),
            Some("anna@volleyball.ru")
        );
        assert!(!state.is_admin());
    }

    #[test]
    fn passwords_keep_inner_whitespace() -> anyhow::Result<()> {
        let mut club = Club::new(MemoryBackend::default(), Config::default());
        let mut state = AppState::default();

        state.register(&mut club, "anna", " my  secret ")?;
        state.logout(&mut club);

        assert!(matches!(
            state.login(&mut club, "anna", "my secret"),
            Err(ClubError::Auth(_))
        ));
        assert_eq!(state.login(&mut club, "anna", "my  secret")?.username, "anna");

        Ok(())
    }

    #[test]
    fn users_can_not_change_the_club() -> anyhow::Result<()> {
        let mut club = Club::new(MemoryBackend::default(), Config::default());
        club.init_default_data();
        let mut state = AppState::default();

        assert!(matches!(
            state.add_player(&mut club, "Ann", None),
            Err(ClubError::NotSignedIn)
        ));

        state.register(&mut club, "anna", "secret1")?;
        let ids = player_ids(&state, 2);
        assert!(matches!(
            state.add_player(&mut club, "Ann", None),
            Err(ClubError::AdminOnly)
        ));
        assert!(matches!(
            state.create_team(&mut club, &ids),
            Err(ClubError::AdminOnly)
        ));
        assert!(matches!(
            state.delete_match(&mut club, "id"),
            Err(ClubError::AdminOnly)
        ));
        assert_eq!(club.get_players().len(), 25);

        Ok(())
    }

    #[test]
    fn admin_login_maps_to_admin_email() -> anyhow::Result<()> {
        let (_, state) = admin()?;

        assert!(state.is_admin());
        assert_eq!(state.players.len(), 25);

        Ok(())
    }

    #[test]
    fn teams_need_two_players_and_unique_names() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let ids = player_ids(&state, 2);

        assert!(matches!(
            state.create_team(&mut club, &ids[..1]),
            Err(ClubError::TooFewPlayers(2))
        ));

        let team = state.create_team(&mut club, &ids)?;
        assert_eq!(
            team.name,
            format!("{} + {}", state.players[0].name, state.players[1].name)
        );
        assert_eq!(state.teams.len(), 1);

        assert!(matches!(
            state.create_team(&mut club, &ids),
            Err(ClubError::TeamExists(_))
        ));

        Ok(())
    }

    #[test]
    fn repeated_ids_count_once() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let ids = player_ids(&state, 3);
        let twice = [ids[0].clone(), ids[0].clone()];

        assert!(matches!(
            state.create_team(&mut club, &twice),
            Err(ClubError::TooFewPlayers(2))
        ));
        assert!(matches!(
            state.create_points_match(&mut club, None, ParticipantsType::Players, &twice, None),
            Err(ClubError::Match(MatchError::TooFewParticipants))
        ));

        let team = state.create_team(&mut club, &ids[..2])?;
        assert!(matches!(
            state.create_classic_match(&mut club, None, vec![team.name.clone(), team.name.clone()]),
            Err(ClubError::Match(MatchError::TooFewParticipants))
        ));

        let game = state.create_points_match(
            &mut club,
            None,
            ParticipantsType::Players,
            &[ids[0].clone(), ids[1].clone(), ids[0].clone()],
            Some(1),
        )?;
        assert_eq!(game.participant_ids(), [ids[0].as_str(), ids[1].as_str()]);

        Ok(())
    }

    #[test]
    fn huge_points_do_not_overflow() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let ids = player_ids(&state, 3);
        let game = state.create_points_match(
            &mut club,
            None,
            ParticipantsType::Players,
            &ids,
            Some(1),
        )?;
        let id = game.id.unwrap_or_default();

        state.update_points_cell(&mut club, &id, &ids[0], &ids[1], 0, "4294967295")?;
        let total = state.update_points_cell(&mut club, &id, &ids[0], &ids[2], 0, "1")?;
        assert_eq!(total, u32::MAX);

        let standings = state.calculate_standings(&mut club, &id)?;
        assert_eq!(standings[0].points, u32::MAX);

        Ok(())
    }

    #[test]
    fn deleting_a_team_keeps_its_matches() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let first = state.create_team(&mut club, &player_ids(&state, 2))?;
        let ids: Vec<String> = player_ids(&state, 4).split_off(2);
        let second = state.create_team(&mut club, &ids)?;

        let game = state.create_classic_match(
            &mut club,
            None,
            vec![first.name.clone(), second.name.clone()],
        )?;
        state.delete_team(&mut club, &first.name)?;

        let id = game.id.unwrap_or_default();
        assert!(club.get_match(&id).is_some());
        assert!(club.team_players(&first.name).is_empty());
        assert_eq!(club.team_players(&second.name).len(), 2);

        Ok(())
    }

    #[test]
    fn classic_match_flow() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let first = state.create_team(&mut club, &player_ids(&state, 2))?;
        let second = state.create_team(&mut club, &player_ids(&state, 4).split_off(2))?;

        let game = state.create_classic_match(
            &mut club,
            Some("Friday"),
            vec![first.name.clone(), second.name.clone()],
        )?;
        let id = game.id.clone().unwrap_or_default();

        assert_eq!(state.update_set_score(&mut club, &id, &first.name, 1, "25:20")?, 2);
        assert_eq!(state.update_set_score(&mut club, &id, &first.name, 2, "20:25")?, 2);
        assert_eq!(state.update_set_score(&mut club, &id, &first.name, 3, "25:15")?, 4);
        assert_eq!(state.update_team_points(&mut club, &id, &second.name, "x")?, 0);

        let game = state.finish_match(&mut club, &id)?;
        assert!(game.is_completed());
        assert_eq!(game.winner().map(|winner| winner.points), Some(4));
        assert_eq!(state.past_matches().len(), 1);

        assert!(matches!(
            state.update_team_points(&mut club, &id, &second.name, "10"),
            Err(ClubError::Match(MatchError::Completed))
        ));

        let game = state.reopen_match(&mut club, &id)?;
        assert!(!game.is_completed());
        assert!(game.completed_at.is_none());
        assert!(state.past_matches().is_empty());

        Ok(())
    }

    #[test]
    fn points_match_flow() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;
        let ids = player_ids(&state, 3);

        assert!(matches!(
            state.create_points_match(
                &mut club,
                None,
                ParticipantsType::Players,
                &[ids[0].clone(), "missing".to_string()],
                None,
            ),
            Err(ClubError::Match(MatchError::UnknownParticipant(_)))
        ));

        let game = state.create_points_match(
            &mut club,
            None,
            ParticipantsType::Players,
            &ids,
            Some(2),
        )?;
        let id = game.id.clone().unwrap_or_default();
        assert!(game.description.starts_with("Tournament "));

        state.update_points_cell(&mut club, &id, &ids[0], &ids[1], 0, "3")?;
        state.update_points_cell(&mut club, &id, &ids[0], &ids[1], 1, "5")?;
        state.update_points_cell(&mut club, &id, &ids[0], &ids[2], 0, "2")?;
        let total = state.update_points_cell(&mut club, &id, &ids[0], &ids[2], 1, "1")?;
        assert_eq!(total, 11);

        let standings = state.calculate_standings(&mut club, &id)?;
        assert_eq!(standings[0].id, ids[0]);
        assert_eq!(standings[0].points, 11);

        let dashboard = state.dashboard(&club);
        assert_eq!(dashboard.matches, 1);
        assert!(dashboard.online);

        state.delete_match(&mut club, &id)?;
        assert!(state.matches.is_empty());

        Ok(())
    }

    #[test]
    fn missing_match() -> anyhow::Result<()> {
        let (mut club, mut state) = admin()?;

        assert!(matches!(
            state.finish_match(&mut club, "missing"),
            Err(ClubError::MatchNotFound(_))
        ));

        Ok(())
    }
}
