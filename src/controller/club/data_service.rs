use tracing::info;

use crate::error::CoreError;
use crate::model::{Club, NewClub};
use crate::storage::Storage;

const CLUB: &str = "Club";

/// # Errors
///
/// Will return `Err` if the read fails
pub async fn list_clubs(storage: &dyn Storage) -> Result<Vec<Club>, CoreError> {
    Ok(storage.list_clubs().await?)
}

/// # Errors
///
/// Will return `Err` if the insert fails
pub async fn create_club(storage: &dyn Storage, new_club: &NewClub) -> Result<Club, CoreError> {
    let club = storage.create_club(new_club).await?;
    info!(club_id = club.id, name = %club.name, "added club");
    Ok(club)
}

/// Replaces both name and claimed distance.
///
/// # Errors
///
/// Will return `Err` if the club does not exist or the update fails
pub async fn update_club(
    storage: &dyn Storage,
    club_id: i64,
    club: &NewClub,
) -> Result<Club, CoreError> {
    storage
        .update_club(club_id, club)
        .await?
        .ok_or(CoreError::NotFound(CLUB))
}

/// # Errors
///
/// Will return `Err` if the club does not exist or the delete fails
pub async fn delete_club(storage: &dyn Storage, club_id: i64) -> Result<(), CoreError> {
    if storage.delete_club(club_id).await? {
        info!(club_id, "removed club");
        Ok(())
    } else {
        Err(CoreError::NotFound(CLUB))
    }
}
