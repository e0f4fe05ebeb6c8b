use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::model::{HOLES_PER_ROUND, HolePayload, NewClub, NewRound};

/// Inserts the round row and its 18 empty holes in one transaction.
pub fn insert_round(conn: &mut Connection, round: &NewRound, now: DateTime<Utc>) -> Result<i64> {
    let transaction = conn.transaction()?;

    transaction.execute(
        "INSERT INTO rounds (started_at, course_name, course_rating, slope) VALUES (?1, ?2, ?3, ?4)",
        params![now, round.course_name, round.course_rating, round.slope],
    )?;
    let round_id = transaction.last_insert_rowid();

    {
        let mut statement = transaction.prepare(
            "
            INSERT INTO holes (round_id, hole_number, strokes, putts, fir, gir, in_play, updated_at)
            VALUES (?1, ?2, NULL, NULL, NULL, NULL, NULL, ?3)
            ",
        )?;
        for hole_number in 1..=HOLES_PER_ROUND {
            statement.execute(params![round_id, hole_number, now])?;
        }
    }

    transaction.commit()?;
    Ok(round_id)
}

/// Returns the number of rows matched, 0 or 1.
pub fn update_hole(
    conn: &Connection,
    round_id: i64,
    hole_number: u8,
    payload: &HolePayload,
    now: DateTime<Utc>,
) -> Result<usize> {
    conn.execute(
        "
        UPDATE holes
        SET strokes = ?1,
            putts = ?2,
            fir = ?3,
            gir = ?4,
            in_play = ?5,
            updated_at = ?6
        WHERE round_id = ?7 AND hole_number = ?8
        ",
        params![
            payload.strokes,
            payload.putts,
            payload.fir,
            payload.gir,
            payload.in_play,
            now,
            round_id,
            hole_number
        ],
    )
}

pub fn update_differential(conn: &Connection, round_id: i64, differential: f64) -> Result<usize> {
    conn.execute(
        "UPDATE rounds SET differential = ?1 WHERE id = ?2",
        params![differential, round_id],
    )
}

pub fn insert_club(conn: &Connection, club: &NewClub, now: DateTime<Utc>) -> Result<i64> {
    conn.execute(
        "INSERT INTO clubs (name, claimed_distance, created_at) VALUES (?1, ?2, ?3)",
        params![club.name, club.claimed_distance, now],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_club(conn: &Connection, club_id: i64, club: &NewClub) -> Result<usize> {
    conn.execute(
        "UPDATE clubs SET name = ?1, claimed_distance = ?2 WHERE id = ?3",
        params![club.name, club.claimed_distance, club_id],
    )
}

pub fn delete_club(conn: &Connection, club_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM clubs WHERE id = ?1", params![club_id])
}

pub fn execute_batch(conn: &mut Connection, sql: &str) -> Result<()> {
    let transaction = conn.transaction()?;
    transaction.execute_batch(sql)?;
    transaction.commit()
}
