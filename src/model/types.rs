use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};

pub const HOLES_PER_ROUND: u8 = 18;

/// A per-hole yes/no outcome that may not have been recorded yet.
///
/// Serialized as `null | true | false`; stored as `NULL | 1 | 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Mark {
    #[default]
    Unrecorded,
    Yes,
    No,
}

impl Mark {
    #[must_use]
    pub fn is_recorded(self) -> bool {
        self != Mark::Unrecorded
    }
}

impl From<Option<bool>> for Mark {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Mark::Unrecorded,
            Some(true) => Mark::Yes,
            Some(false) => Mark::No,
        }
    }
}

impl From<Mark> for Option<bool> {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Unrecorded => None,
            Mark::Yes => Some(true),
            Mark::No => Some(false),
        }
    }
}

impl ToSql for Mark {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self {
            Mark::Unrecorded => Value::Null,
            Mark::Yes => Value::Integer(1),
            Mark::No => Value::Integer(0),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

impl FromSql for Mark {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Mark::Unrecorded),
            ValueRef::Integer(0) => Ok(Mark::No),
            ValueRef::Integer(_) => Ok(Mark::Yes),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleState {
    Empty,
    Partial,
    Complete,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub id: i64,
    pub hole_number: u8,
    pub strokes: Option<u8>,
    pub putts: Option<u8>,
    pub fir: Mark,
    pub gir: Mark,
    pub in_play: Mark,
    pub updated_at: DateTime<Utc>,
}

impl Hole {
    #[must_use]
    pub fn state(&self) -> HoleState {
        let recorded = [
            self.strokes.is_some(),
            self.putts.is_some(),
            self.fir.is_recorded(),
            self.gir.is_recorded(),
            self.in_play.is_recorded(),
        ];
        match recorded.iter().filter(|r| **r).count() {
            0 => HoleState::Empty,
            n if n == recorded.len() => HoleState::Complete,
            _ => HoleState::Partial,
        }
    }

    /// The scoring fields as an update payload, i.e. what it would take to
    /// write this hole back unchanged.
    #[must_use]
    pub fn payload(&self) -> HolePayload {
        HolePayload {
            strokes: self.strokes,
            putts: self.putts,
            fir: self.fir,
            gir: self.gir,
            in_play: self.in_play,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: i64,
    pub started_at: DateTime<Utc>,
    pub course_name: Option<String>,
    pub course_rating: Option<f64>,
    pub slope: Option<u16>,
    pub differential: Option<f64>,
    pub holes: Vec<Hole>,
}

impl Round {
    /// True once all 18 holes have every field recorded. Never persisted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.holes.len() == usize::from(HOLES_PER_ROUND)
            && self.holes.iter().all(|h| h.state() == HoleState::Complete)
    }

    #[must_use]
    pub fn hole(&self, hole_number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.hole_number == hole_number)
    }
}

/// Course metadata for a new round. Ranges are checked at the HTTP boundary.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRound {
    pub course_name: String,
    pub course_rating: f64,
    pub slope: u16,
}

/// The five scoring fields of a hole update.
///
/// Applied as a full overwrite: a field left as `None`/`Unrecorded` clears
/// whatever was stored. Callers wanting a partial edit must merge with the
/// current hole first (see [`Hole::payload`]).
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HolePayload {
    pub strokes: Option<u8>,
    pub putts: Option<u8>,
    pub fir: Mark,
    pub gir: Mark,
    pub in_play: Mark,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub claimed_distance: Option<u32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    pub name: String,
    #[serde(default)]
    pub claimed_distance: Option<u32>,
}
