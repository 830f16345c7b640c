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

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    str::FromStr,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::MatchError,
    set_score::{CLASSIC_SETS, SetRule, points_from_sets},
    standings::{self, Standing},
    status::Status,
    store::{Collection, Database, Document},
    team::TeamPlayer,
};

pub const DEFAULT_POINTS_SETS: u8 = 3;
pub const MAX_POINTS_SETS: u8 = 5;
const MIN_PARTICIPANTS: usize = 2;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MatchType {
    #[default]
    Classic,
    Points,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Points => write!(f, "points"),
        }
    }
}

impl FromStr for MatchType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "classic" => Ok(Self::Classic),
            "points" => Ok(Self::Points),
            _ => Err(anyhow::Error::msg(format!("invalid match type: {value}"))),
        }
    }
}

/// A team's score in a classic match.
///
/// `sets` holds the entered `"a:b"` strings for sets 1 to 3.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClassicScore {
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub sets: [Option<String>; CLASSIC_SETS as usize],
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClassicMatch {
    pub teams: Vec<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, ClassicScore>,
}

impl ClassicMatch {
    #[must_use]
    pub fn new(teams: Vec<String>) -> Self {
        let scores = teams
            .iter()
            .map(|team| (team.clone(), ClassicScore::default()))
            .collect();

        Self { teams, scores }
    }

    fn score_mut(&mut self, team: &str) -> Result<&mut ClassicScore, MatchError> {
        if !self.teams.iter().any(|name| name == team) {
            return Err(MatchError::UnknownParticipant(team.to_string()));
        }

        Ok(self.scores.entry(team.to_string()).or_default())
    }

    /// Overrides the team's points with a value typed in by an admin.
    ///
    /// # Errors
    ///
    /// If the team is not in the match.
    pub fn set_team_points(&mut self, team: &str, points: u32) -> Result<(), MatchError> {
        self.score_mut(team)?.points = points;
        Ok(())
    }

    /// Stores a set score and re-derives the team's points from its sets.
    ///
    /// `set` is one-based. An empty `value` clears the set.
    ///
    /// # Errors
    ///
    /// If the team is not in the match or the set does not exist.
    pub fn set_set_score(
        &mut self,
        team: &str,
        set: usize,
        value: &str,
        rule: SetRule,
    ) -> Result<u32, MatchError> {
        let score = self.score_mut(team)?;
        let Some(entry) = set
            .checked_sub(1)
            .and_then(|index| score.sets.get_mut(index))
        else {
            return Err(MatchError::InvalidSet(set));
        };

        let value = value.trim();
        *entry = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        score.points = points_from_sets(score.sets.iter().map(Option::as_deref), rule);
        Ok(score.points)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ParticipantKind {
    #[default]
    Player,
    Team,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ParticipantsType {
    /// One on one.
    #[default]
    Players,
    Teams,
}

impl fmt::Display for ParticipantsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Players => write!(f, "players"),
            Self::Teams => write!(f, "teams"),
        }
    }
}

impl FromStr for ParticipantsType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "players" => Ok(Self::Players),
            "teams" => Ok(Self::Teams),
            _ => Err(anyhow::Error::msg(format!(
                "invalid participants type: {value}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ParticipantKind,
    /// For a team, the players at the time the match was created.
    #[serde(default)]
    pub players: Vec<TeamPlayer>,
}

/// A participant's points in a points match.
///
/// `against` holds the raw cells, one list of per-set points for every
/// opponent. `total` and `sets` are derived from it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ParticipantPoints {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub sets: Vec<u32>,
    #[serde(default)]
    pub against: BTreeMap<String, Vec<u32>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PointsMatch {
    #[serde(default)]
    pub participants_type: ParticipantsType,
    pub participants: Vec<Participant>,
    #[serde(default = "default_points_sets")]
    pub sets: u8,
    #[serde(default)]
    pub points: BTreeMap<String, ParticipantPoints>,
}

impl PointsMatch {
    /// # Errors
    ///
    /// If `sets` is not between 1 and 5.
    pub fn new(
        participants_type: ParticipantsType,
        participants: Vec<Participant>,
        sets: u8,
    ) -> Result<Self, MatchError> {
        if !(1..=MAX_POINTS_SETS).contains(&sets) {
            return Err(MatchError::InvalidSets(sets));
        }

        let points = participants
            .iter()
            .map(|participant| {
                (
                    participant.id.clone(),
                    ParticipantPoints {
                        total: 0,
                        sets: vec![0; usize::from(sets)],
                        against: BTreeMap::new(),
                    },
                )
            })
            .collect();

        Ok(Self {
            participants_type,
            participants,
            sets,
            points,
        })
    }

    fn is_participant(&self, id: &str) -> bool {
        self.participants.iter().any(|participant| participant.id == id)
    }

    /// Sums what `id` scored against every other participant over every set.
    ///
    /// Cells are not symmetric: what `id` scored against `q` says nothing
    /// about what `q` scored against `id`.
    #[must_use]
    pub fn total_for(&self, id: &str) -> u32 {
        saturating_sum(&self.per_set_for(id))
    }

    fn per_set_for(&self, id: &str) -> Vec<u32> {
        let sets = usize::from(self.sets);
        let mut per_set = vec![0; sets];

        let Some(points) = self.points.get(id) else {
            return per_set;
        };

        for opponent in &self.participants {
            if opponent.id == id {
                continue;
            }

            if let Some(cells) = points.against.get(&opponent.id) {
                for (sum, cell) in per_set.iter_mut().zip(cells.iter().take(sets)) {
                    *sum = sum.saturating_add(*cell);
                }
            }
        }

        per_set
    }

    /// Stores what `participant` scored against `opponent` in a set and
    /// returns the participant's new total.
    ///
    /// `set` is zero-based.
    ///
    /// # Errors
    ///
    /// If either side is not in the match, they are the same, or the set
    /// does not exist.
    pub fn set_cell(
        &mut self,
        participant: &str,
        opponent: &str,
        set: usize,
        value: u32,
    ) -> Result<u32, MatchError> {
        for id in [participant, opponent] {
            if !self.is_participant(id) {
                return Err(MatchError::UnknownParticipant(id.to_string()));
            }
        }
        if participant == opponent {
            return Err(MatchError::SelfOpponent);
        }

        let sets = usize::from(self.sets);
        if set >= sets {
            return Err(MatchError::InvalidSet(set));
        }

        let cells = self
            .points
            .entry(participant.to_string())
            .or_default()
            .against
            .entry(opponent.to_string())
            .or_insert_with(|| vec![0; sets]);
        cells.resize(sets, 0);
        if let Some(cell) = cells.get_mut(set) {
            *cell = value;
        }

        Ok(self.recalculate(participant))
    }

    /// Rewrites the derived `total` and `sets` for a participant.
    pub fn recalculate(&mut self, id: &str) -> u32 {
        let per_set = self.per_set_for(id);
        let total = saturating_sum(&per_set);

        let points = self.points.entry(id.to_string()).or_default();
        points.sets = per_set;
        points.total = total;

        total
    }

    pub fn recalculate_all(&mut self) {
        let ids: Vec<_> = self
            .participants
            .iter()
            .map(|participant| participant.id.clone())
            .collect();

        for id in ids {
            self.recalculate(&id);
        }
    }
}

/// Points stop at `u32::MAX` instead of wrapping.
fn saturating_sum(points: &[u32]) -> u32 {
    points.iter().fold(0, |sum, points| sum.saturating_add(*points))
}

fn default_points_sets() -> u8 {
    DEFAULT_POINTS_SETS
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Format {
    Classic(ClassicMatch),
    Points(PointsMatch),
}

impl Default for Format {
    fn default() -> Self {
        Self::Classic(ClassicMatch::default())
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Match {
    /// `None` until the match is stored.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    pub format: Format,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub standings: Vec<Standing>,
    #[serde(default)]
    pub date: String,
    /// Milliseconds since the Unix epoch, used for ordering.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Match {
    /// A team named twice plays once.
    ///
    /// # Errors
    ///
    /// If fewer than two different teams are given.
    pub fn new_classic(
        description: Option<&str>,
        mut teams: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, MatchError> {
        let mut seen = HashSet::new();
        teams.retain(|team| seen.insert(team.clone()));
        if teams.len() < MIN_PARTICIPANTS {
            return Err(MatchError::TooFewParticipants);
        }

        let description = non_empty(description)
            .unwrap_or_else(|| format!("Match {}", now.format("%d.%m.%Y")));

        Ok(Self::new(description, Format::Classic(ClassicMatch::new(teams)), now))
    }

    /// A participant given twice takes part once.
    ///
    /// # Errors
    ///
    /// If fewer than two different participants are given or `sets` is out
    /// of range.
    pub fn new_points(
        description: Option<&str>,
        participants_type: ParticipantsType,
        mut participants: Vec<Participant>,
        sets: u8,
        now: DateTime<Utc>,
    ) -> Result<Self, MatchError> {
        let mut seen = HashSet::new();
        participants.retain(|participant| seen.insert(participant.id.clone()));
        if participants.len() < MIN_PARTICIPANTS {
            return Err(MatchError::TooFewParticipants);
        }

        let description = non_empty(description)
            .unwrap_or_else(|| format!("Tournament {}", now.format("%d.%m.%Y")));
        let points = PointsMatch::new(participants_type, participants, sets)?;

        Ok(Self::new(description, Format::Points(points), now))
    }

    fn new(description: String, format: Format, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            description,
            format,
            status: Status::Active,
            standings: Vec::new(),
            date: now.format("%d.%m.%Y %H:%M:%S").to_string(),
            timestamp: now.timestamp_millis(),
            created_at: None,
            created_by: None,
            updated_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn match_type(&self) -> MatchType {
        match self.format {
            Format::Classic(_) => MatchType::Classic,
            Format::Points(_) => MatchType::Points,
        }
    }

    /// Team names or participant names, in entry order.
    #[must_use]
    pub fn participant_names(&self) -> Vec<String> {
        match &self.format {
            Format::Classic(classic) => classic.teams.clone(),
            Format::Points(points) => points
                .participants
                .iter()
                .map(|participant| participant.name.clone())
                .collect(),
        }
    }

    #[must_use]
    pub fn participant_ids(&self) -> Vec<&str> {
        match &self.format {
            Format::Classic(classic) => classic.teams.iter().map(String::as_str).collect(),
            Format::Points(points) => points
                .participants
                .iter()
                .map(|participant| participant.id.as_str())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    fn ensure_active(&self) -> Result<(), MatchError> {
        if self.is_completed() {
            Err(MatchError::Completed)
        } else {
            Ok(())
        }
    }

    /// # Errors
    ///
    /// If the match is completed, is not classic, or the team is unknown.
    pub fn update_team_points(&mut self, team: &str, points: u32) -> Result<(), MatchError> {
        self.ensure_active()?;
        match &mut self.format {
            Format::Classic(classic) => classic.set_team_points(team, points),
            Format::Points(_) => Err(MatchError::WrongFormat),
        }
    }

    /// # Errors
    ///
    /// If the match is completed, is not classic, or the set is invalid.
    pub fn update_set_score(
        &mut self,
        team: &str,
        set: usize,
        value: &str,
        rule: SetRule,
    ) -> Result<u32, MatchError> {
        self.ensure_active()?;
        match &mut self.format {
            Format::Classic(classic) => classic.set_set_score(team, set, value, rule),
            Format::Points(_) => Err(MatchError::WrongFormat),
        }
    }

    /// # Errors
    ///
    /// If the match is completed, is not a points match, or the cell is
    /// invalid.
    pub fn update_points_cell(
        &mut self,
        participant: &str,
        opponent: &str,
        set: usize,
        value: u32,
    ) -> Result<u32, MatchError> {
        self.ensure_active()?;
        match &mut self.format {
            Format::Points(points) => points.set_cell(participant, opponent, set, value),
            Format::Classic(_) => Err(MatchError::WrongFormat),
        }
    }

    /// Recomputes and stores the standings.
    pub fn calculate_standings(&mut self) -> &[Standing] {
        self.standings = match &mut self.format {
            Format::Classic(classic) => standings::classic_standings(classic),
            Format::Points(points) => {
                points.recalculate_all();
                standings::points_standings(points)
            }
        };

        &self.standings
    }

    /// Finishes an active match with final standings.
    ///
    /// # Errors
    ///
    /// If the match is already completed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), MatchError> {
        self.ensure_active()?;
        self.calculate_standings();
        self.status = Status::Completed;
        self.completed_at = Some(now);

        Ok(())
    }

    /// Makes a completed match editable again.
    ///
    /// # Errors
    ///
    /// If the match is not completed.
    pub fn reopen(&mut self) -> Result<(), MatchError> {
        if !self.is_completed() {
            return Err(MatchError::NotCompleted);
        }

        self.status = Status::Active;
        self.completed_at = None;

        Ok(())
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id.as_deref().unwrap_or("_"),
            self.match_type(),
            self.status,
            self.description
        )
    }
}

impl Document for Match {
    const COLLECTION: &'static str = "matches";

    fn collection(database: &Database) -> &Collection<Self> {
        &database.matches
    }

    fn collection_mut(database: &mut Database) -> &mut Collection<Self> {
        &mut database.matches
    }

    fn assign_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

fn non_empty(string: Option<&str>) -> Option<String> {
    string
        .map(str::trim)
        .filter(|string| !string.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 18, 30, 0).unwrap()
    }

    fn classic() -> Match {
        Match::new_classic(None, vec!["A".to_string(), "B".to_string()], now()).unwrap()
    }

    fn participant(id: &str) -> Participant {
        Participant {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind: ParticipantKind::Player,
            players: Vec::new(),
        }
    }

    fn points(ids: &[&str], sets: u8) -> Match {
        Match::new_points(
            Some("Cup"),
            ParticipantsType::Players,
            ids.iter().map(|id| participant(id)).collect(),
            sets,
            now(),
        )
        .unwrap()
    }

    #[test]
    fn classic_sets_give_two_points_each() -> anyhow::Result<()> {
        let mut game = classic();
        game.update_set_score("A", 1, "25:20", SetRule::HigherScore)?;
        game.update_set_score("A", 2, "20:25", SetRule::HigherScore)?;
        let points = game.update_set_score("A", 3, "25:15", SetRule::HigherScore)?;

        assert_eq!(points, 4);
        assert_eq!(game.calculate_standings()[0].id, "A");
        assert_eq!(game.standings[0].points, 4);
        assert_eq!(game.standings[1].points, 0);

        Ok(())
    }

    #[test]
    fn malformed_set_string_scores_zero() -> anyhow::Result<()> {
        let mut game = classic();

        assert_eq!(game.update_set_score("A", 1, "abc", SetRule::HigherScore)?, 0);
        assert_eq!(game.update_set_score("A", 2, "25:3", SetRule::HigherScore)?, 2);
        assert_eq!(game.update_set_score("A", 2, "", SetRule::HigherScore)?, 0);

        Ok(())
    }

    #[test]
    fn manual_points_override_sets() -> anyhow::Result<()> {
        let mut game = classic();
        game.update_set_score("B", 1, "25:20", SetRule::HigherScore)?;
        game.update_team_points("A", 7)?;

        let standings = game.calculate_standings();
        assert_eq!(standings[0].name, "A");
        assert_eq!(standings[0].points, 7);
        assert_eq!(standings[1].points, 2);

        Ok(())
    }

    #[test]
    fn classic_rejects_bad_input() {
        let mut game = classic();

        assert_eq!(
            game.update_set_score("C", 1, "25:20", SetRule::HigherScore),
            Err(MatchError::UnknownParticipant("C".to_string()))
        );
        assert_eq!(
            game.update_set_score("A", 4, "25:20", SetRule::HigherScore),
            Err(MatchError::InvalidSet(4))
        );
        assert_eq!(
            game.update_set_score("A", 0, "25:20", SetRule::HigherScore),
            Err(MatchError::InvalidSet(0))
        );
        assert_eq!(
            game.update_points_cell("A", "B", 0, 1),
            Err(MatchError::WrongFormat)
        );
    }

    #[test]
    fn too_few_participants() {
        assert_eq!(
            Match::new_classic(None, vec!["A".to_string()], now()),
            Err(MatchError::TooFewParticipants)
        );
        assert!(matches!(
            Match::new_points(
                None,
                ParticipantsType::Players,
                vec![participant("p"), participant("q")],
                6,
                now()
            ),
            Err(MatchError::InvalidSets(6))
        ));
    }

    #[test]
    fn repeated_participants_count_once() -> anyhow::Result<()> {
        assert_eq!(
            Match::new_classic(None, vec!["A".to_string(), "A".to_string()], now()),
            Err(MatchError::TooFewParticipants)
        );
        assert_eq!(
            Match::new_points(
                None,
                ParticipantsType::Players,
                vec![participant("p"), participant("p")],
                1,
                now()
            ),
            Err(MatchError::TooFewParticipants)
        );

        let mut game = points(&["p", "q", "p"], 1);
        assert_eq!(game.participant_ids(), ["p", "q"]);
        let Format::Points(points) = &game.format else {
            unreachable!();
        };
        assert_eq!(points.points.len(), 2);

        game.update_points_cell("q", "p", 0, 3)?;
        assert_eq!(game.calculate_standings().len(), 2);
        assert!(standings::is_total_ordering(
            &game.standings,
            game.participant_ids()
        ));

        Ok(())
    }

    #[test]
    fn points_total_sums_every_opponent_and_set() -> anyhow::Result<()> {
        let mut game = points(&["p", "x", "y"], 2);
        game.update_points_cell("p", "x", 0, 3)?;
        game.update_points_cell("p", "x", 1, 5)?;
        game.update_points_cell("p", "y", 0, 2)?;
        let total = game.update_points_cell("p", "y", 1, 1)?;

        assert_eq!(total, 11);

        let Format::Points(points) = &game.format else {
            unreachable!();
        };
        assert_eq!(points.points["p"].total, 11);
        assert_eq!(points.points["p"].sets, [5, 6]);

        Ok(())
    }

    #[test]
    fn points_are_not_symmetric() -> anyhow::Result<()> {
        let mut game = points(&["p", "q"], 1);
        game.update_points_cell("p", "q", 0, 25)?;

        let Format::Points(points) = &game.format else {
            unreachable!();
        };
        assert_eq!(points.total_for("p"), 25);
        assert_eq!(points.total_for("q"), 0);

        Ok(())
    }

    #[test]
    fn huge_points_stop_at_the_maximum() -> anyhow::Result<()> {
        let mut game = points(&["p", "x", "y"], 1);
        game.update_points_cell("p", "x", 0, u32::MAX)?;
        let total = game.update_points_cell("p", "y", 0, 1)?;

        assert_eq!(total, u32::MAX);
        assert_eq!(game.calculate_standings()[0].points, u32::MAX);

        Ok(())
    }

    #[test]
    fn points_rejects_bad_cells() {
        let mut game = points(&["p", "q"], 2);

        assert_eq!(
            game.update_points_cell("p", "p", 0, 1),
            Err(MatchError::SelfOpponent)
        );
        assert_eq!(
            game.update_points_cell("p", "z", 0, 1),
            Err(MatchError::UnknownParticipant("z".to_string()))
        );
        assert_eq!(
            game.update_points_cell("p", "q", 2, 1),
            Err(MatchError::InvalidSet(2))
        );
    }

    #[test]
    fn points_standings_are_stable() -> anyhow::Result<()> {
        let mut game = points(&["a", "b", "c", "d"], 1);
        game.update_points_cell("b", "a", 0, 4)?;
        game.update_points_cell("c", "a", 0, 4)?;

        let ids: Vec<_> = game
            .calculate_standings()
            .iter()
            .map(|standing| standing.id.clone())
            .collect();
        assert_eq!(ids, ["b", "c", "a", "d"]);
        assert!(standings::is_total_ordering(
            &game.standings,
            game.participant_ids()
        ));

        Ok(())
    }

    #[test]
    fn lifecycle() -> anyhow::Result<()> {
        let mut game = classic();
        game.update_team_points("B", 2)?;

        game.complete(now())?;
        assert_eq!(game.status, Status::Completed);
        assert_eq!(game.completed_at, Some(now()));
        assert_eq!(game.winner().map(|winner| winner.name.as_str()), Some("B"));

        assert_eq!(game.update_team_points("A", 9), Err(MatchError::Completed));
        assert_eq!(game.complete(now()), Err(MatchError::Completed));

        game.reopen()?;
        assert_eq!(game.status, Status::Active);
        assert_eq!(game.completed_at, None);
        assert_eq!(game.reopen(), Err(MatchError::NotCompleted));

        game.update_team_points("A", 9)?;

        Ok(())
    }

    #[test]
    fn default_descriptions() {
        assert_eq!(classic().description, "Match 01.05.2026");
        assert_eq!(points(&["p", "q"], 3).description, "Cup");
        assert_eq!(classic().timestamp, now().timestamp_millis());
    }
}
