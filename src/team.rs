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
    player::{Player, default_photo},
    store::{Collection, Database, Document},
};

pub const MIN_TEAM_PLAYERS: usize = 2;
const NAME_SEPARATOR: &str = " + ";

/// A player as copied into a team when the team is saved.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TeamPlayer {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_photo")]
    pub photo: String,
}

impl From<&Player> for TeamPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: if player.id.is_empty() {
                None
            } else {
                Some(player.id.clone())
            },
            name: player.name.clone(),
            photo: if player.photo.is_empty() {
                default_photo()
            } else {
                player.photo.clone()
            },
        }
    }
}

/// Teams are keyed by their name, which is made from the member names.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Team {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub players: Vec<TeamPlayer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl Team {
    #[must_use]
    pub fn new(players: &[Player], created_by: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: Self::name_for(players),
            players: players.iter().map(TeamPlayer::from).collect(),
            created_at: Some(now),
            created_by,
        }
    }

    #[must_use]
    pub fn name_for(players: &[Player]) -> String {
        players
            .iter()
            .map(|player| player.name.as_str())
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.players.len())
    }
}

impl Document for Team {
    const COLLECTION: &'static str = "teams";

    fn collection(database: &Database) -> &Collection<Self> {
        &database.teams
    }

    fn collection_mut(database: &mut Database) -> &mut Collection<Self> {
        &mut database.teams
    }

    fn assign_id(&mut self, id: &str) {
        self.name = id.to_string();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn team_name_joins_player_names() {
        let players = [
            Player {
                id: "a".to_string(),
                name: "Ann".to_string(),
                photo: String::new(),
            },
            Player::new("Bob", Some("images/bob.png")),
        ];
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let team = Team::new(&players, Some("uid".to_string()), now);

        assert_eq!(team.name, "Ann + Bob");
        assert_eq!(team.player_count(), 2);
        assert_eq!(team.players[0].id.as_deref(), Some("a"));
        assert_eq!(team.players[0].photo, crate::player::DEFAULT_PHOTO);
        assert_eq!(team.players[1].id, None);
        assert_eq!(team.players[1].photo, "images/bob.png");
    }
}
