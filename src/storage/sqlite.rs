use async_trait::async_trait;
use chrono::Utc;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::{Storage, StorageError, read, write};
use crate::model::{Club, HolePayload, NewClub, NewRound, Round, Summary};

pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: [&str; 3] = [
    include_str!("../sql/schema/sqlite/00_clubs.sql"),
    include_str!("../sql/schema/sqlite/01_rounds.sql"),
    include_str!("../sql/schema/sqlite/02_holes.sql"),
];

/// [`Storage`] over a single SQLite connection.
///
/// Clones share the connection. Each call takes the lock on a blocking thread,
/// so one statement runs at a time.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `path` and applies the schema.
    /// `":memory:"` gives a private in-memory database.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema fails to apply
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = if path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            let conn = Connection::open(path)?;
            let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            debug!("opened {path} with journal_mode={mode}");
            conn
        };
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        for ddl in SCHEMA {
            conn.execute_batch(ddl)?;
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| StorageError::Poisoned)?;
            f(&mut *guard)
        })
        .await?
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_round(&self, round: &NewRound) -> Result<Round, StorageError> {
        let round = round.clone();
        self.with_connection(move |conn| {
            let round_id = write::insert_round(conn, &round, Utc::now())?;
            read::select_round(conn, round_id)?.ok_or(StorageError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            ))
        })
        .await
    }

    async fn get_round(&self, round_id: i64) -> Result<Option<Round>, StorageError> {
        self.with_connection(move |conn| Ok(read::select_round(conn, round_id)?))
            .await
    }

    async fn list_rounds(&self) -> Result<Vec<Round>, StorageError> {
        self.with_connection(|conn| Ok(read::select_rounds(conn)?))
            .await
    }

    async fn update_hole(
        &self,
        round_id: i64,
        hole_number: u8,
        payload: &HolePayload,
    ) -> Result<bool, StorageError> {
        let payload = *payload;
        self.with_connection(move |conn| {
            let changed = write::update_hole(conn, round_id, hole_number, &payload, Utc::now())?;
            Ok(changed > 0)
        })
        .await
    }

    async fn summarize_round(
        &self,
        round_id: i64,
    ) -> Result<Option<(Round, Summary)>, StorageError> {
        self.with_connection(move |conn| {
            let transaction = conn.transaction()?;
            let Some(round) = read::select_round(&transaction, round_id)? else {
                return Ok(None);
            };
            let summary = Summary::from_round(&round);
            if let Some(differential) = summary.differential {
                write::update_differential(&transaction, round_id, differential)?;
            }
            transaction.commit()?;
            Ok(Some((round, summary)))
        })
        .await
    }

    async fn list_clubs(&self) -> Result<Vec<Club>, StorageError> {
        self.with_connection(|conn| Ok(read::select_clubs(conn)?))
            .await
    }

    async fn find_club_by_name(&self, name: &str) -> Result<Option<Club>, StorageError> {
        let name = name.to_string();
        self.with_connection(move |conn| Ok(read::select_club_by_name(conn, &name)?))
            .await
    }

    async fn create_club(&self, club: &NewClub) -> Result<Club, StorageError> {
        let club = club.clone();
        self.with_connection(move |conn| {
            let club_id = write::insert_club(conn, &club, Utc::now())?;
            read::select_club(conn, club_id)?.ok_or(StorageError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            ))
        })
        .await
    }

    async fn update_club(
        &self,
        club_id: i64,
        club: &NewClub,
    ) -> Result<Option<Club>, StorageError> {
        let club = club.clone();
        self.with_connection(move |conn| {
            if write::update_club(conn, club_id, &club)? == 0 {
                return Ok(None);
            }
            Ok(read::select_club(conn, club_id)?)
        })
        .await
    }

    async fn delete_club(&self, club_id: i64) -> Result<bool, StorageError> {
        self.with_connection(move |conn| Ok(write::delete_club(conn, club_id)? > 0))
            .await
    }

    async fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        let sql = sql.to_string();
        self.with_connection(move |conn| Ok(write::execute_batch(conn, &sql)?))
            .await
    }
}
