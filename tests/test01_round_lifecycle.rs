mod common;

use golf_rounds::controller::round::{create_round, get_round, list_rounds, update_hole};
use golf_rounds::error::CoreError;
use golf_rounds::model::{HoleState, HolePayload, Mark, NewRound};
use std::error::Error;

#[tokio::test]
async fn test_create_round_has_18_empty_holes() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;

    let round = create_round(&ctx.storage, &common::test_course()).await?;

    assert_eq!(round.course_name.as_deref(), Some("Test Course"));
    assert_eq!(round.course_rating, Some(72.0));
    assert_eq!(round.slope, Some(113));
    assert_eq!(round.differential, None);
    assert_eq!(round.holes.len(), 18);
    for (i, hole) in round.holes.iter().enumerate() {
        assert_eq!(usize::from(hole.hole_number), i + 1);
        assert_eq!(hole.state(), HoleState::Empty);
        assert_eq!(hole.payload(), HolePayload::default());
    }
    assert!(!round.is_complete());
    Ok(())
}

#[tokio::test]
async fn test_get_round_matches_created_round() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;

    let created = create_round(&ctx.storage, &common::test_course()).await?;
    let fetched = get_round(&ctx.storage, created.id).await?;

    assert_eq!(created, fetched);
    let numbers: Vec<u8> = fetched.holes.iter().map(|h| h.hole_number).collect();
    assert_eq!(numbers, (1..=18).collect::<Vec<u8>>());
    Ok(())
}

#[tokio::test]
async fn test_get_unknown_round_is_not_found() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;

    let result = get_round(&ctx.storage, 4242).await;
    assert!(matches!(result, Err(CoreError::NotFound("Round"))));
    Ok(())
}

#[tokio::test]
async fn test_list_rounds_newest_first() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;

    let first = create_round(&ctx.storage, &common::test_course()).await?;
    let second = create_round(
        &ctx.storage,
        &NewRound {
            course_name: "Second Course".to_string(),
            course_rating: 70.1,
            slope: 128,
        },
    )
    .await?;

    let rounds = list_rounds(&ctx.storage).await?;
    let ids: Vec<i64> = rounds.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(rounds.iter().all(|r| r.holes.len() == 18));
    Ok(())
}

#[tokio::test]
async fn test_update_hole_returns_whole_round() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;

    let updated = update_hole(&ctx.storage, round.id, 1, &common::full_hole(4, 2)).await?;

    assert_eq!(updated.holes.len(), 18);
    let hole = updated.hole(1).ok_or("hole 1 missing")?;
    assert_eq!(hole.strokes, Some(4));
    assert_eq!(hole.putts, Some(2));
    assert_eq!(hole.fir, Mark::Yes);
    assert_eq!(hole.gir, Mark::No);
    assert_eq!(hole.in_play, Mark::Yes);
    assert_eq!(hole.state(), HoleState::Complete);
    assert!(hole.updated_at >= round.holes[0].updated_at);

    // the other 17 are untouched
    for hole in updated.holes.iter().skip(1) {
        assert_eq!(hole.state(), HoleState::Empty);
    }
    Ok(())
}

#[tokio::test]
async fn test_update_hole_overwrites_every_field() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;
    update_hole(&ctx.storage, round.id, 7, &common::full_hole(5, 2)).await?;

    let strokes_only = HolePayload {
        strokes: Some(6),
        ..HolePayload::default()
    };
    let updated = update_hole(&ctx.storage, round.id, 7, &strokes_only).await?;

    let hole = updated.hole(7).ok_or("hole 7 missing")?;
    assert_eq!(hole.strokes, Some(6));
    assert_eq!(hole.putts, None);
    assert_eq!(hole.fir, Mark::Unrecorded);
    assert_eq!(hole.gir, Mark::Unrecorded);
    assert_eq!(hole.in_play, Mark::Unrecorded);
    assert_eq!(hole.state(), HoleState::Partial);
    Ok(())
}

#[tokio::test]
async fn test_update_hole_merged_payload_keeps_other_fields() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;
    let round = update_hole(&ctx.storage, round.id, 3, &common::full_hole(3, 1)).await?;

    let mut payload = round.hole(3).ok_or("hole 3 missing")?.payload();
    payload.putts = Some(2);
    let updated = update_hole(&ctx.storage, round.id, 3, &payload).await?;

    let hole = updated.hole(3).ok_or("hole 3 missing")?;
    assert_eq!(hole.payload(), HolePayload {
        putts: Some(2),
        ..common::full_hole(3, 1)
    });
    Ok(())
}

#[tokio::test]
async fn test_update_hole_is_idempotent() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;
    let payload = HolePayload {
        strokes: Some(5),
        putts: None,
        fir: Mark::No,
        gir: Mark::Unrecorded,
        in_play: Mark::Yes,
    };

    let once = update_hole(&ctx.storage, round.id, 12, &payload).await?;
    let twice = update_hole(&ctx.storage, round.id, 12, &payload).await?;

    assert_eq!(once.holes.len(), twice.holes.len());
    for (a, b) in once.holes.iter().zip(&twice.holes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.hole_number, b.hole_number);
        assert_eq!(a.payload(), b.payload());
    }
    Ok(())
}

#[tokio::test]
async fn test_update_hole_unknown_round_or_hole() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;
    let payload = common::full_hole(4, 2);

    let missing = [
        (round.id + 1, 1),
        (round.id, 19),
        (round.id, 0),
        (round.id, -3),
        (round.id, 300),
    ];
    for (round_id, hole_number) in missing {
        let result = update_hole(&ctx.storage, round_id, hole_number, &payload).await;
        assert!(
            matches!(result, Err(CoreError::NotFound(_))),
            "round {round_id} hole {hole_number} should be not found"
        );
    }

    // nothing was created or changed
    let fetched = get_round(&ctx.storage, round.id).await?;
    assert_eq!(fetched.holes.len(), 18);
    assert!(fetched.holes.iter().all(|h| h.state() == HoleState::Empty));
    Ok(())
}

#[tokio::test]
async fn test_round_complete_after_all_holes_recorded() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context("").await?;
    let round = create_round(&ctx.storage, &common::test_course()).await?;

    let mut latest = round.clone();
    for hole_number in 1..=18 {
        latest = update_hole(&ctx.storage, round.id, hole_number, &common::full_hole(4, 2)).await?;
    }
    assert!(latest.is_complete());
    Ok(())
}

#[tokio::test]
async fn test_list_rounds_orders_mixed_timestamp_formats() -> Result<(), Box<dyn Error>> {
    let ctx = common::setup_test_context(
        "
        INSERT INTO rounds (id, started_at, course_name) VALUES
            (700, '2024-06-01T08:00:00', 'Early T separator'),
            (701, '2024-06-01 09:00:00', 'Later space separator'),
            (702, '2024-05-31 23:00:00.5+00:00', 'Previous evening');
        ",
    )
    .await?;
    let fresh = create_round(&ctx.storage, &common::test_course()).await?;

    let rounds = list_rounds(&ctx.storage).await?;
    let ids: Vec<i64> = rounds.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![fresh.id, 701, 700, 702]);
    Ok(())
}
