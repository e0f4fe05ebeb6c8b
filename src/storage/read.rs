use rusqlite::{Connection, OptionalExtension as _, Result, Row, params};

use crate::model::{Club, Hole, Round};

const ROUND_COLUMNS: &str = "id, started_at, course_name, course_rating, slope, differential";
const CLUB_COLUMNS: &str = "id, name, claimed_distance, created_at";

fn round_from_row(row: &Row<'_>) -> Result<Round> {
    Ok(Round {
        id: row.get("id")?,
        started_at: row.get("started_at")?,
        course_name: row.get("course_name")?,
        course_rating: row.get("course_rating")?,
        slope: row.get("slope")?,
        differential: row.get("differential")?,
        holes: Vec::new(),
    })
}

fn hole_from_row(row: &Row<'_>) -> Result<Hole> {
    Ok(Hole {
        id: row.get("id")?,
        hole_number: row.get("hole_number")?,
        strokes: row.get("strokes")?,
        putts: row.get("putts")?,
        fir: row.get("fir")?,
        gir: row.get("gir")?,
        in_play: row.get("in_play")?,
        updated_at: row.get("updated_at")?,
    })
}

fn club_from_row(row: &Row<'_>) -> Result<Club> {
    Ok(Club {
        id: row.get("id")?,
        name: row.get("name")?,
        claimed_distance: row.get("claimed_distance")?,
        created_at: row.get("created_at")?,
    })
}

pub fn select_holes(conn: &Connection, round_id: i64) -> Result<Vec<Hole>> {
    let mut statement = conn.prepare_cached(
        "
        SELECT id, hole_number, strokes, putts, fir, gir, in_play, updated_at
        FROM holes
        WHERE round_id = ?1
        ORDER BY hole_number ASC
        ",
    )?;
    statement
        .query_map(params![round_id], hole_from_row)?
        .collect()
}

pub fn select_round(conn: &Connection, round_id: i64) -> Result<Option<Round>> {
    let round = conn
        .query_row(
            &format!("SELECT {ROUND_COLUMNS} FROM rounds WHERE id = ?1"),
            params![round_id],
            round_from_row,
        )
        .optional()?;

    let Some(mut round) = round else {
        return Ok(None);
    };
    round.holes = select_holes(conn, round.id)?;
    Ok(Some(round))
}

pub fn select_rounds(conn: &Connection) -> Result<Vec<Round>> {
    let mut statement = conn.prepare(&format!(
        "SELECT {ROUND_COLUMNS} FROM rounds ORDER BY julianday(started_at) DESC, id DESC"
    ))?;
    let mut rounds = statement
        .query_map([], round_from_row)?
        .collect::<Result<Vec<_>>>()?;

    for round in &mut rounds {
        round.holes = select_holes(conn, round.id)?;
    }
    Ok(rounds)
}

pub fn select_club(conn: &Connection, club_id: i64) -> Result<Option<Club>> {
    conn.query_row(
        &format!("SELECT {CLUB_COLUMNS} FROM clubs WHERE id = ?1"),
        params![club_id],
        club_from_row,
    )
    .optional()
}

pub fn select_club_by_name(conn: &Connection, name: &str) -> Result<Option<Club>> {
    conn.query_row(
        &format!("SELECT {CLUB_COLUMNS} FROM clubs WHERE name = ?1 ORDER BY id LIMIT 1"),
        params![name],
        club_from_row,
    )
    .optional()
}

pub fn select_clubs(conn: &Connection) -> Result<Vec<Club>> {
    let mut statement = conn.prepare(&format!(
        "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY julianday(created_at) DESC, id DESC"
    ))?;
    statement.query_map([], club_from_row)?.collect()
}
