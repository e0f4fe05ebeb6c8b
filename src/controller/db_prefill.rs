use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CoreError, Issue};
use crate::model::NewClub;
use crate::storage::Storage;

/// Clubs inserted by `--seed-default-clubs`.
#[must_use]
pub fn default_bag() -> Vec<NewClub> {
    [
        ("Driver", 250),
        ("4 Hybrid", 210),
        ("7 Iron", 160),
        ("Pitching Wedge", 110),
    ]
    .into_iter()
    .map(|(name, distance)| NewClub {
        name: name.to_string(),
        claimed_distance: Some(distance),
    })
    .collect()
}

/// format we expect is this:
/// [{ "name": "Driver", "claimedDistance": <int> }, { "name": "7 Iron", "claimedDistance": <int> }, ...]
///
/// # Errors
///
/// Will return `Err` if the json does not match that format
pub fn clubs_from_json(json: &Value) -> Result<Vec<NewClub>, CoreError> {
    serde_json::from_value(json.clone())
        .map_err(|e| CoreError::InvalidInput(vec![Issue::new("clubs", e.to_string())]))
}

/// Inserts each club whose name is not already in the bag. Returns how many
/// were added.
///
/// # Errors
///
/// Will return `Err` if a lookup or insert fails
pub async fn db_prefill(clubs: &[NewClub], storage: &dyn Storage) -> Result<usize, CoreError> {
    let mut added = 0;
    for club in clubs {
        if storage.find_club_by_name(&club.name).await?.is_some() {
            debug!("club {} already present, skipping", club.name);
            continue;
        }
        storage.create_club(club).await?;
        info!("Added {}", club.name);
        added += 1;
    }
    Ok(added)
}
