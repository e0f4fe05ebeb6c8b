use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{HolePayload, NewRound, Round, Summary};
use crate::storage::Storage;

const ROUND: &str = "Round";

/// Creates a round with all 18 holes present and empty.
///
/// # Errors
///
/// Will return `Err` if the insert fails; nothing is left behind in that case
pub async fn create_round(storage: &dyn Storage, new_round: &NewRound) -> Result<Round, CoreError> {
    let round = storage.create_round(new_round).await?;
    info!(
        round_id = round.id,
        course = %new_round.course_name,
        "created round with {} holes",
        round.holes.len()
    );
    Ok(round)
}

/// # Errors
///
/// Will return `Err` if the round does not exist or the read fails
pub async fn get_round(storage: &dyn Storage, round_id: i64) -> Result<Round, CoreError> {
    storage
        .get_round(round_id)
        .await?
        .ok_or(CoreError::NotFound(ROUND))
}

/// # Errors
///
/// Will return `Err` if the read fails
pub async fn list_rounds(storage: &dyn Storage) -> Result<Vec<Round>, CoreError> {
    Ok(storage.list_rounds().await?)
}

/// Overwrites one hole with `payload` and returns the whole round as stored
/// afterwards.
///
/// # Errors
///
/// Will return `Err` if no hole `hole_number` exists for `round_id`
pub async fn update_hole(
    storage: &dyn Storage,
    round_id: i64,
    hole_number: i64,
    payload: &HolePayload,
) -> Result<Round, CoreError> {
    let Ok(hole_number) = u8::try_from(hole_number) else {
        return Err(CoreError::NotFound(ROUND));
    };
    if !storage.update_hole(round_id, hole_number, payload).await? {
        return Err(CoreError::NotFound(ROUND));
    }

    let round = get_round(storage, round_id).await?;
    if let Some(hole) = round.hole(hole_number) {
        debug!(round_id, hole_number, state = ?hole.state(), "updated hole");
    }
    Ok(round)
}

/// Computes the round summary and stores the differential on the round
/// when there is one. Both happen against the same snapshot of the holes.
///
/// # Errors
///
/// Will return `Err` if the round does not exist or storage fails
pub async fn summarize_round(storage: &dyn Storage, round_id: i64) -> Result<Summary, CoreError> {
    let (round, summary) = storage
        .summarize_round(round_id)
        .await?
        .ok_or(CoreError::NotFound(ROUND))?;

    debug!(
        round_id,
        gross = summary.gross,
        differential = ?summary.differential,
        complete = round.is_complete(),
        "summarized round"
    );
    Ok(summary)
}
