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

//! Standings for both tournament formats.
//!
//! A standing is the participants of a match ordered by descending points.
//! Equal totals keep the order the participants were entered in; there is no
//! secondary tiebreak.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matches::{ClassicMatch, PointsMatch};

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Standing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub points: u32,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.points)
    }
}

/// Cosmetic colour for the top three places.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// `rank` is one-based.
    #[must_use]
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Gold => "#ffd700",
            Self::Silver => "#c0c0c0",
            Self::Bronze => "#cd7f32",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Silver => write!(f, "silver"),
            Self::Bronze => write!(f, "bronze"),
        }
    }
}

/// Sorts by descending points. `sort_by` is stable, so ties stay in input
/// order.
#[must_use]
pub fn rank(mut standings: Vec<Standing>) -> Vec<Standing> {
    standings.sort_by(|a, b| b.points.cmp(&a.points));
    standings
}

#[must_use]
pub fn classic_standings(classic: &ClassicMatch) -> Vec<Standing> {
    rank(
        classic
            .teams
            .iter()
            .map(|team| Standing {
                id: team.clone(),
                name: team.clone(),
                points: classic.scores.get(team).map_or(0, |score| score.points),
            })
            .collect(),
    )
}

/// Totals are recomputed from the raw per-opponent cells rather than read
/// from the stored `total`.
#[must_use]
pub fn points_standings(points: &PointsMatch) -> Vec<Standing> {
    rank(
        points
            .participants
            .iter()
            .map(|participant| Standing {
                id: participant.id.clone(),
                name: participant.name.clone(),
                points: points.total_for(&participant.id),
            })
            .collect(),
    )
}

/// Whether `standings` orders exactly the given participant ids, each once.
#[must_use]
pub fn is_total_ordering<'a, I>(standings: &[Standing], ids: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expected: Vec<_> = ids.into_iter().collect();
    let mut actual: Vec<_> = standings.iter().map(|standing| standing.id.as_str()).collect();
    expected.sort_unstable();
    actual.sort_unstable();

    expected == actual
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: &str, points: u32) -> Standing {
        Standing {
            id: id.to_string(),
            name: id.to_uppercase(),
            points,
        }
    }

    #[test]
    fn rank_is_descending_and_stable() {
        let standings = rank(vec![
            standing("a", 2),
            standing("b", 6),
            standing("c", 2),
            standing("d", 6),
            standing("e", 0),
        ]);

        let ids: Vec<_> = standings.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn medals() {
        assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
        assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_rank(4), None);
        assert_eq!(Medal::for_rank(0), None);
    }

    #[test]
    fn total_ordering() {
        let standings = vec![standing("b", 1), standing("a", 0)];

        assert!(is_total_ordering(&standings, ["a", "b"]));
        assert!(!is_total_ordering(&standings, ["a", "b", "c"]));
        assert!(!is_total_ordering(&[], ["a"]));
    }
}
