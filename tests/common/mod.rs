#![allow(dead_code)]

use golf_rounds::model::{HolePayload, Mark, NewRound};
use golf_rounds::storage::{SqliteStorage, Storage, StorageError};

pub struct TestContext {
    pub storage: SqliteStorage,
}

/// A fresh in-memory database with the schema applied, then `fixture_sql`.
pub async fn setup_test_context(fixture_sql: &str) -> Result<TestContext, StorageError> {
    let storage = SqliteStorage::open(":memory:")?;
    if !fixture_sql.trim().is_empty() {
        storage.execute_batch(fixture_sql).await?;
    }
    Ok(TestContext { storage })
}

pub fn test_course() -> NewRound {
    NewRound {
        course_name: "Test Course".to_string(),
        course_rating: 72.0,
        slope: 113,
    }
}

pub fn full_hole(strokes: u8, putts: u8) -> HolePayload {
    HolePayload {
        strokes: Some(strokes),
        putts: Some(putts),
        fir: Mark::Yes,
        gir: Mark::No,
        in_play: Mark::Yes,
    }
}
