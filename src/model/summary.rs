use serde::{Deserialize, Serialize};

use crate::model::types::{Hole, Mark, Round};

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub gross: u32,
    pub putts: u32,
    pub fir_percentage: f64,
    pub gir_percentage: f64,
    pub in_play_percentage: f64,
    pub differential: Option<f64>,
}

impl Summary {
    /// Derives totals, hit percentages and the handicap differential from the
    /// holes of `round`. Reads nothing but `round`; persisting the
    /// differential is up to the caller.
    #[must_use]
    pub fn from_round(round: &Round) -> Self {
        let gross = sum_recorded(round.holes.iter().map(|h| h.strokes));
        let putts = sum_recorded(round.holes.iter().map(|h| h.putts));

        Summary {
            gross,
            putts,
            fir_percentage: mark_percentage(&round.holes, |h| h.fir),
            gir_percentage: mark_percentage(&round.holes, |h| h.gir),
            in_play_percentage: mark_percentage(&round.holes, |h| h.in_play),
            differential: differential(gross, round.course_rating, round.slope),
        }
    }
}

/// Unplayed holes count as zero; an incomplete round totals what has been
/// entered so far.
fn sum_recorded(values: impl Iterator<Item = Option<u8>>) -> u32 {
    values.flatten().map(u32::from).sum()
}

/// Share of recorded holes where `field` is `Yes`, in percent and unrounded.
/// No recorded holes gives 0.
#[must_use]
pub fn mark_percentage(holes: &[Hole], field: impl Fn(&Hole) -> Mark) -> f64 {
    let (active, hits) = holes
        .iter()
        .map(field)
        .filter(|mark| mark.is_recorded())
        .fold((0_u32, 0_u32), |(active, hits), mark| {
            (active + 1, hits + u32::from(mark == Mark::Yes))
        });

    if active == 0 {
        return 0.0;
    }
    f64::from(hits) / f64::from(active) * 100.0
}

/// `(gross - rating) * 113 / slope`, rounded to one decimal place.
///
/// `None` when either rating is missing or the slope is zero.
#[must_use]
pub fn differential(gross: u32, course_rating: Option<f64>, slope: Option<u16>) -> Option<f64> {
    let course_rating = course_rating?;
    let slope = slope.filter(|s| *s != 0)?;
    let raw = (f64::from(gross) - course_rating) * STANDARD_SLOPE / f64::from(slope);
    Some(round_to_tenth(raw))
}

/// Half away from zero, so 18.25 -> 18.3 and -0.25 -> -0.3.
///
/// Anything that rounds to zero comes back as `+0.0`, never `-0.0`.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
