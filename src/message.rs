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

//! The commands a client sends after the handshake.
//!
//! Each command is one line of RON, for example
//! `UpdateSetScore(id: "x5Zq...", team: "Ann + Bob", set: 1, value: "25:20")`.
//! The server answers `= ` followed by a RON [`Reply`], or `? ` followed by a
//! message for the user.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    club::Club,
    error::ClubError,
    matches::{Match, ParticipantsType},
    player::Player,
    standings::Standing,
    state::{AppState, Dashboard, Session},
    store::Backend,
    team::{Team, TeamPlayer},
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Command {
    LoadAll,
    Dashboard,
    Session,
    Logout,
    AddPlayer {
        name: String,
        #[serde(default)]
        photo: Option<String>,
    },
    DeletePlayer {
        id: String,
    },
    CreateTeam {
        players: Vec<String>,
    },
    DeleteTeam {
        name: String,
    },
    TeamPlayers {
        name: String,
    },
    GetMatch {
        id: String,
    },
    PastMatches,
    CreateClassicMatch {
        #[serde(default)]
        description: Option<String>,
        teams: Vec<String>,
    },
    CreatePointsMatch {
        #[serde(default)]
        description: Option<String>,
        participants_type: ParticipantsType,
        ids: Vec<String>,
        #[serde(default)]
        sets: Option<u8>,
    },
    UpdateTeamPoints {
        id: String,
        team: String,
        value: String,
    },
    /// `set` counts from 1.
    UpdateSetScore {
        id: String,
        team: String,
        set: usize,
        value: String,
    },
    /// `set` counts from 0.
    UpdatePointsCell {
        id: String,
        participant: String,
        opponent: String,
        set: usize,
        value: String,
    },
    CalculateStandings {
        id: String,
    },
    FinishMatch {
        id: String,
    },
    ReopenMatch {
        id: String,
    },
    DeleteMatch {
        id: String,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Reply {
    Ok,
    Session(Option<Session>),
    All {
        players: Vec<Player>,
        teams: Vec<Team>,
        matches: Vec<Match>,
    },
    Dashboard(Dashboard),
    Player(Player),
    Team(Team),
    TeamPlayers(Vec<TeamPlayer>),
    Match(Match),
    Matches(Vec<Match>),
    Points(u32),
    Standings(Vec<Standing>),
}

impl Command {
    /// Runs the command for the session in `state`.
    ///
    /// # Errors
    ///
    /// If the action fails.
    pub fn execute<B: Backend>(
        self,
        state: &mut AppState,
        club: &mut Club<B>,
    ) -> Result<Reply, ClubError> {
        match self {
            Self::LoadAll => {
                state.load_all(club);
                Ok(Reply::All {
                    players: state.players.clone(),
                    teams: state.teams.clone(),
                    matches: state.matches.clone(),
                })
            }
            Self::Dashboard => {
                state.load_all(club);
                Ok(Reply::Dashboard(state.dashboard(club)))
            }
            Self::Session => Ok(Reply::Session(state.session.clone())),
            Self::Logout => {
                state.logout(club);
                Ok(Reply::Ok)
            }
            Self::AddPlayer { name, photo } => state
                .add_player(club, &name, photo.as_deref())
                .map(Reply::Player),
            Self::DeletePlayer { id } => state.delete_player(club, &id).map(|()| Reply::Ok),
            Self::CreateTeam { players } => state.create_team(club, &players).map(Reply::Team),
            Self::DeleteTeam { name } => state.delete_team(club, &name).map(|()| Reply::Ok),
            Self::TeamPlayers { name } => Ok(Reply::TeamPlayers(club.team_players(&name))),
            Self::GetMatch { id } => club
                .get_match(&id)
                .map(Reply::Match)
                .ok_or(ClubError::MatchNotFound(id)),
            Self::PastMatches => {
                state.load_all(club);
                Ok(Reply::Matches(
                    state.past_matches().into_iter().cloned().collect(),
                ))
            }
            Self::CreateClassicMatch { description, teams } => state
                .create_classic_match(club, description.as_deref(), teams)
                .map(Reply::Match),
            Self::CreatePointsMatch {
                description,
                participants_type,
                ids,
                sets,
            } => state
                .create_points_match(club, description.as_deref(), participants_type, &ids, sets)
                .map(Reply::Match),
            Self::UpdateTeamPoints { id, team, value } => state
                .update_team_points(club, &id, &team, &value)
                .map(Reply::Points),
            Self::UpdateSetScore {
                id,
                team,
                set,
                value,
            } => state
                .update_set_score(club, &id, &team, set, &value)
                .map(Reply::Points),
            Self::UpdatePointsCell {
                id,
                participant,
                opponent,
                set,
                value,
            } => state
                .update_points_cell(club, &id, &participant, &opponent, set, &value)
                .map(Reply::Points),
            Self::CalculateStandings { id } => state
                .calculate_standings(club, &id)
                .map(Reply::Standings),
            Self::FinishMatch { id } => state.finish_match(club, &id).map(Reply::Match),
            Self::ReopenMatch { id } => state.reopen_match(club, &id).map(Reply::Match),
            Self::DeleteMatch { id } => state.delete_match(club, &id).map(|()| Reply::Ok),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = ron::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{string}")
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        ron::from_str(string.trim()).map_err(|error| anyhow::Error::msg(error.to_string()))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = ron::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{string}")
    }
}

impl FromStr for Reply {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        ron::from_str(string.trim()).map_err(|error| anyhow::Error::msg(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, store::MemoryBackend};

    use super::*;

    #[test]
    fn commands_read_as_ron() -> anyhow::Result<()> {
        let command: Command =
            r#"UpdateSetScore(id: "m1", team: "Ann + Bob", set: 1, value: "25:20")"#.parse()?;
        assert_eq!(
            command,
            Command::UpdateSetScore {
                id: "m1".to_string(),
                team: "Ann + Bob".to_string(),
                set: 1,
                value: "25:20".to_string(),
            }
        );

        let command: Command = r#"AddPlayer(name: "Ann")"#.parse()?;
        assert_eq!(
            command,
            Command::AddPlayer {
                name: "Ann".to_string(),
                photo: None,
            }
        );

        assert!("Shutdown".parse::<Command>().is_err());

        Ok(())
    }

    #[test]
    fn guests_can_read_but_not_write() -> anyhow::Result<()> {
        let mut club = Club::new(MemoryBackend::default(), Config::default());
        club.init_default_data();
        let mut state = AppState::default();

        let Reply::All { players, .. } = Command::LoadAll.execute(&mut state, &mut club)? else {
            anyhow::bail!("expected all the data");
        };
        assert_eq!(players.len(), 25);

        let result = Command::DeletePlayer {
            id: players[0].id.clone(),
        }
        .execute(&mut state, &mut club);
        assert!(matches!(result, Err(ClubError::NotSignedIn)));

        assert!(matches!(
            Command::GetMatch {
                id: "missing".to_string()
            }
            .execute(&mut state, &mut club),
            Err(ClubError::MatchNotFound(_))
        ));

        Ok(())
    }

    #[test]
    fn reply_lines_parse_back() -> anyhow::Result<()> {
        let reply = Reply::Points(4);
        assert_eq!(reply.to_string().parse::<Reply>()?, reply);

        Ok(())
    }
}
