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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of sets in a classic match.
pub const CLASSIC_SETS: u8 = 3;

/// What the deciding set is played to under [`SetRule::WinByTwo`] unless
/// the config says otherwise.
pub const DECIDING_SET_TARGET: u32 = 15;

/// Points a team earns for every set it wins in a classic match.
pub const POINTS_PER_SET_WON: u32 = 2;

/// The score of one set as entered by an admin, `"own:opponent"`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetScore {
    pub own: u32,
    pub opponent: u32,
}

impl SetScore {
    /// Parses an entered set score. Anything malformed is `None`.
    #[must_use]
    pub fn parse(entry: &str) -> Option<Self> {
        entry.parse().ok()
    }

    /// `set` is one-based.
    #[must_use]
    pub fn won(&self, rule: SetRule, set: usize) -> bool {
        rule.won(set, self.own, self.opponent)
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.own, self.opponent)
    }
}

impl FromStr for SetScore {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let Some((own, opponent)) = string.split_once(':') else {
            return Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a SetScore!"
            )));
        };

        Ok(Self {
            own: own.trim().parse()?,
            opponent: opponent.trim().parse()?,
        })
    }
}

/// Decides who won a set.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SetRule {
    /// Any higher score wins the set.
    #[default]
    HigherScore,
    /// Volleyball rules: reach the target and lead by two. The deciding
    /// set is played to `deciding_target`.
    WinByTwo {
        target: u32,
        #[serde(default = "default_deciding_target")]
        deciding_target: u32,
    },
}

impl SetRule {
    /// `set` is one-based. The last classic set is the deciding one.
    #[must_use]
    pub fn won(self, set: usize, own: u32, opponent: u32) -> bool {
        match self {
            Self::HigherScore => own > opponent,
            Self::WinByTwo {
                target,
                deciding_target,
            } => {
                let target = if set == usize::from(CLASSIC_SETS) {
                    deciding_target
                } else {
                    target
                };
                own >= target && own >= opponent.saturating_add(2)
            }
        }
    }
}

impl fmt::Display for SetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HigherScore => write!(f, "higher_score"),
            Self::WinByTwo {
                target,
                deciding_target,
            } => write!(f, "win_by_two {target} {deciding_target}"),
        }
    }
}

fn default_deciding_target() -> u32 {
    DECIDING_SET_TARGET
}

/// Classic-match points for a team's entered set scores, given in set
/// order.
///
/// Every set the team won is worth [`POINTS_PER_SET_WON`]; missing or
/// malformed entries are worth nothing.
#[must_use]
pub fn points_from_sets<'a, I>(sets: I, rule: SetRule) -> u32
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    sets.into_iter()
        .zip(1..)
        .filter_map(|(entry, set)| Some((set, SetScore::parse(entry?)?)))
        .filter(|(set, score)| score.won(rule, *set))
        .map(|_| POINTS_PER_SET_WON)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_set_scores() {
        assert_eq!(
            SetScore::parse("25:20"),
            Some(SetScore {
                own: 25,
                opponent: 20
            })
        );
        assert_eq!(
            SetScore::parse(" 7 : 25 "),
            Some(SetScore {
                own: 7,
                opponent: 25
            })
        );
        assert_eq!(SetScore::parse("abc"), None);
        assert_eq!(SetScore::parse("25-20"), None);
        assert_eq!(SetScore::parse("25:"), None);
        assert_eq!(SetScore::parse("25:20:1"), None);
        assert_eq!(SetScore::parse(""), None);
        assert_eq!(SetScore::parse("-1:3"), None);
    }

    #[test]
    fn two_points_per_set_won() {
        let sets = [Some("25:20"), Some("20:25"), Some("25:15")];
        assert_eq!(points_from_sets(sets, SetRule::HigherScore), 4);
    }

    #[test]
    fn malformed_sets_score_nothing() {
        let sets = [Some("abc"), None, Some("25:23")];
        assert_eq!(points_from_sets(sets, SetRule::HigherScore), 2);
    }

    #[test]
    fn win_by_two() {
        let rule = SetRule::WinByTwo {
            target: 25,
            deciding_target: 15,
        };

        assert!(!rule.won(1, 25, 24));
        assert!(rule.won(1, 26, 24));
        assert!(rule.won(2, 25, 10));
        assert!(!rule.won(1, 20, 10));
        assert!(SetRule::HigherScore.won(1, 25, 24));
    }

    #[test]
    fn the_deciding_set_is_shorter() {
        let rule = SetRule::WinByTwo {
            target: 25,
            deciding_target: 15,
        };

        assert!(!rule.won(1, 15, 13));
        assert!(rule.won(3, 15, 13));
        assert!(!rule.won(3, 15, 14));
        assert_eq!(points_from_sets([Some("15:13"), None, Some("15:13")], rule), 2);
        assert_eq!(points_from_sets([None, None, Some("15:13")], SetRule::HigherScore), 2);
    }

    #[test]
    fn deciding_target_defaults_to_fifteen() -> anyhow::Result<()> {
        let rule: SetRule = ron::from_str("WinByTwo(target: 21)")?;
        assert_eq!(
            rule,
            SetRule::WinByTwo {
                target: 21,
                deciding_target: DECIDING_SET_TARGET
            }
        );

        Ok(())
    }
}
