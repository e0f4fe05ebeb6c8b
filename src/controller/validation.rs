//! Request-body checks for the HTTP boundary. The storage and summary code
//! trust whatever comes out of here.

use serde_json::{Map, Value};

use crate::error::{CoreError, Issue};
use crate::model::{HolePayload, Mark, NewClub, NewRound};

pub const COURSE_RATING_RANGE: (f64, f64) = (60.0, 80.0);
pub const SLOPE_RANGE: (i64, i64) = (55, 155);
pub const STROKES_RANGE: (i64, i64) = (1, 20);
pub const PUTTS_RANGE: (i64, i64) = (0, 10);

/// # Errors
///
/// Will return `Err` listing every field that is missing or out of range
pub fn parse_new_round(body: &Value) -> Result<NewRound, CoreError> {
    let mut issues = Vec::new();
    let fields = as_object(body, &mut issues);

    let course_name = fields.and_then(|f| required_text(f, "courseName", &mut issues));
    let course_rating = fields.and_then(|f| {
        let rating = required(f, "courseRating", &mut issues)?;
        number_in_range(rating, "courseRating", COURSE_RATING_RANGE, &mut issues)
    });
    let slope = fields.and_then(|f| {
        let slope = required(f, "slope", &mut issues)?;
        integer_in_range(slope, "slope", SLOPE_RANGE, &mut issues)
    });

    match (course_name, course_rating, slope) {
        (Some(course_name), Some(course_rating), Some(slope)) if issues.is_empty() => {
            Ok(NewRound {
                course_name,
                course_rating,
                slope: u16::try_from(slope).map_err(|_| {
                    CoreError::InvalidInput(vec![Issue::new("slope", "out of range")])
                })?,
            })
        }
        _ => Err(CoreError::InvalidInput(issues)),
    }
}

/// Every one of the five fields must be present; `null` is how a caller
/// clears one. Leaving a key out is rejected so an edit of one field cannot
/// silently wipe the others.
///
/// # Errors
///
/// Will return `Err` listing every field that is missing or invalid
pub fn parse_hole_payload(body: &Value) -> Result<HolePayload, CoreError> {
    let mut issues = Vec::new();
    let Some(fields) = as_object(body, &mut issues) else {
        return Err(CoreError::InvalidInput(issues));
    };

    let strokes = nullable_count(fields, "strokes", STROKES_RANGE, &mut issues);
    let putts = nullable_count(fields, "putts", PUTTS_RANGE, &mut issues);
    let fir = nullable_mark(fields, "fir", &mut issues);
    let gir = nullable_mark(fields, "gir", &mut issues);
    let in_play = nullable_mark(fields, "inPlay", &mut issues);

    match (strokes, putts, fir, gir, in_play) {
        (Some(strokes), Some(putts), Some(fir), Some(gir), Some(in_play)) if issues.is_empty() => {
            Ok(HolePayload {
                strokes,
                putts,
                fir,
                gir,
                in_play,
            })
        }
        _ => Err(CoreError::InvalidInput(issues)),
    }
}

/// `claimedDistance` may be left out or `null`; when given it must be a
/// positive integer.
///
/// # Errors
///
/// Will return `Err` if the name is empty or the distance is not a positive integer
pub fn parse_new_club(body: &Value) -> Result<NewClub, CoreError> {
    let mut issues = Vec::new();
    let Some(fields) = as_object(body, &mut issues) else {
        return Err(CoreError::InvalidInput(issues));
    };

    let name = required_text(fields, "name", &mut issues);
    let claimed_distance = match fields.get("claimedDistance") {
        None | Some(Value::Null) => Some(None),
        Some(value) => {
            integer_in_range(value, "claimedDistance", (1, i64::from(u32::MAX)), &mut issues)
                .and_then(|d| u32::try_from(d).ok())
                .map(Some)
        }
    };

    match (name, claimed_distance) {
        (Some(name), Some(claimed_distance)) if issues.is_empty() => Ok(NewClub {
            name,
            claimed_distance,
        }),
        _ => Err(CoreError::InvalidInput(issues)),
    }
}

fn as_object<'a>(body: &'a Value, issues: &mut Vec<Issue>) -> Option<&'a Map<String, Value>> {
    let fields = body.as_object();
    if fields.is_none() {
        issues.push(Issue::new("", "expected a JSON object"));
    }
    fields
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    issues: &mut Vec<Issue>,
) -> Option<&'a Value> {
    match fields.get(key) {
        None | Some(Value::Null) => {
            issues.push(Issue::new(key, "required"));
            None
        }
        Some(value) => Some(value),
    }
}

fn required_text(fields: &Map<String, Value>, key: &str, issues: &mut Vec<Issue>) -> Option<String> {
    let value = required(fields, key, issues)?;
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        Some(_) => {
            issues.push(Issue::new(key, "must not be empty"));
            None
        }
        None => {
            issues.push(Issue::new(key, "expected a string"));
            None
        }
    }
}

fn number_in_range(
    value: &Value,
    key: &str,
    (min, max): (f64, f64),
    issues: &mut Vec<Issue>,
) -> Option<f64> {
    let Some(number) = value.as_f64() else {
        issues.push(Issue::new(key, "expected a number"));
        return None;
    };
    if !(min..=max).contains(&number) {
        issues.push(Issue::new(key, format!("must be between {min} and {max}")));
        return None;
    }
    Some(number)
}

/// Accepts `4` and `4.0`, rejects `4.5`.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
            .map(|f| f as i64)
    })
}

fn integer_in_range(
    value: &Value,
    key: &str,
    (min, max): (i64, i64),
    issues: &mut Vec<Issue>,
) -> Option<i64> {
    let Some(number) = as_integer(value) else {
        issues.push(Issue::new(key, "expected an integer"));
        return None;
    };
    if !(min..=max).contains(&number) {
        issues.push(Issue::new(key, format!("must be between {min} and {max}")));
        return None;
    }
    Some(number)
}

/// Outer `None` means the field was rejected.
fn nullable_count(
    fields: &Map<String, Value>,
    key: &str,
    range: (i64, i64),
    issues: &mut Vec<Issue>,
) -> Option<Option<u8>> {
    match fields.get(key) {
        None => {
            issues.push(Issue::new(key, "required (use null to clear)"));
            None
        }
        Some(Value::Null) => Some(None),
        Some(value) => integer_in_range(value, key, range, issues)
            .and_then(|n| u8::try_from(n).ok())
            .map(Some),
    }
}

fn nullable_mark(fields: &Map<String, Value>, key: &str, issues: &mut Vec<Issue>) -> Option<Mark> {
    match fields.get(key) {
        None => {
            issues.push(Issue::new(key, "required (use null to clear)"));
            None
        }
        Some(Value::Null) => Some(Mark::Unrecorded),
        Some(Value::Bool(flag)) => Some(Mark::from(Some(*flag))),
        Some(_) => {
            issues.push(Issue::new(key, "expected a boolean or null"));
            None
        }
    }
}
