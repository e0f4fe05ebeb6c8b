use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Club, HolePayload, NewClub, NewRound, Round, Summary};

mod read;
pub mod sqlite;
mod write;

pub use sqlite::SqliteStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database connection lock was poisoned")]
    Poisoned,
    #[error("blocking database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Persistence for rounds, their holes and the club bag.
///
/// Every call is one short transaction; there is no cross-call locking, so two
/// writes to the same hole resolve last-write-wins.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts the round and holes 1..=18 atomically and reads the result back.
    async fn create_round(&self, round: &NewRound) -> Result<Round, StorageError>;
    /// Holes come back ordered by hole number.
    async fn get_round(&self, round_id: i64) -> Result<Option<Round>, StorageError>;
    /// Most recently started first.
    async fn list_rounds(&self) -> Result<Vec<Round>, StorageError>;
    /// Overwrites all five scoring fields of one hole. `false` when no
    /// `(round_id, hole_number)` row exists; never inserts.
    async fn update_hole(
        &self,
        round_id: i64,
        hole_number: u8,
        payload: &HolePayload,
    ) -> Result<bool, StorageError>;
    /// Reads the round, summarizes it and stores the differential when there
    /// is one, with no other write able to land in between. Returns the
    /// round as read alongside its summary.
    async fn summarize_round(
        &self,
        round_id: i64,
    ) -> Result<Option<(Round, Summary)>, StorageError>;

    async fn list_clubs(&self) -> Result<Vec<Club>, StorageError>;
    async fn find_club_by_name(&self, name: &str) -> Result<Option<Club>, StorageError>;
    async fn create_club(&self, club: &NewClub) -> Result<Club, StorageError>;
    async fn update_club(
        &self,
        club_id: i64,
        club: &NewClub,
    ) -> Result<Option<Club>, StorageError>;
    async fn delete_club(&self, club_id: i64) -> Result<bool, StorageError>;

    /// Runs arbitrary SQL in a single transaction. Used for startup scripts.
    async fn execute_batch(&self, sql: &str) -> Result<(), StorageError>;
}
