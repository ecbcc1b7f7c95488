//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{Gameweek, LeagueId, PlayerId, TeamId};
use crate::core::{backup_path, staging_path};
use crate::engine::{GameweekRecord, SeasonTotals};
use crate::error::DraftError;
use serde_json::json;
use tempfile::TempDir;

fn create_test_store() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    (dir, store)
}

fn record(team: u32, gameweek: u16, total: i32) -> GameweekRecord {
    let mut r = GameweekRecord::seeded(
        TeamId::new(team),
        format!("Team {team}"),
        "Ada Lovelace".to_string(),
        Gameweek::new(gameweek),
        total,
        total + 5,
        SeasonTotals::new(),
    );
    r.league_rank = 1;
    r.optimal_league_rank = 1;
    r
}

#[test]
fn test_missing_document_is_missing_input() {
    let (_dir, store) = create_test_store();

    match store.load_bootstrap() {
        Err(DraftError::MissingInput { path }) => assert!(path.ends_with("bootstrap-static.json")),
        other => panic!("Expected MissingInput, got {other:?}"),
    }
}

#[test]
fn test_malformed_document_is_json_error() {
    let (_dir, store) = create_test_store();
    crate::core::write_string(&store.layout().game_path(), "{ not json").unwrap();

    assert!(matches!(store.load_game_status(), Err(DraftError::Json(_))));
}

#[test]
fn test_write_and_read_provider_documents() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);

    store
        .write_json(
            &store.layout().game_path(),
            &json!({"current_event": 3, "current_event_finished": true}),
        )
        .unwrap();
    store
        .write_json(
            &store.layout().league_details_path(league),
            &json!({"league_entries": [{
                "entry_id": 7,
                "entry_name": "Seven",
                "player_first_name": "Grace",
                "player_last_name": "Hopper"
            }]}),
        )
        .unwrap();

    let status = store.load_game_status().unwrap();
    assert_eq!(status.last_finished_gameweek(), Some(Gameweek::new(3)));

    let details = store.load_league_details(league).unwrap();
    assert_eq!(details.team_ids(), vec![TeamId::new(7)]);
}

#[test]
fn test_score_index_is_memoised() {
    let (_dir, store) = create_test_store();
    let gw = Gameweek::new(1);
    let path = store.layout().live_gameweek_path(gw);

    store
        .write_json(&path, &json!({"elements": {"4": {"stats": {"total_points": 8}}}}))
        .unwrap();

    let first = store.score_index(gw).unwrap();
    assert_eq!(first.points(PlayerId::new(4)), 8);

    // Served from memory even once the file is gone
    std::fs::remove_file(&path).unwrap();
    let second = store.score_index(gw).unwrap();
    assert_eq!(second.points(PlayerId::new(4)), 8);

    assert!(store.score_index(Gameweek::new(2)).is_err());
}

#[test]
fn test_save_and_load_gameweek_records() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);
    let gw = Gameweek::new(2);
    let records = vec![record(1, 2, 40), record(2, 2, 55)];

    store.save_gameweek_records(league, gw, &records).unwrap();

    let loaded = store
        .load_gameweek_records(league, &[TeamId::new(1), TeamId::new(2)], gw)
        .unwrap();
    assert_eq!(loaded, records);

    let single: GameweekRecord = store
        .read_json(&store.layout().record_path(league, TeamId::new(2), gw))
        .unwrap();
    assert_eq!(single.total_points, 55);

    let final_path = store.layout().record_path(league, TeamId::new(1), gw);
    assert!(!staging_path(&final_path).exists());
    assert!(!backup_path(&final_path).exists());
}

#[test]
fn test_saved_record_keeps_field_names() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(3);
    store
        .save_gameweek_records(league, Gameweek::new(1), &[record(9, 1, 12)])
        .unwrap();

    let raw: serde_json::Value = store
        .read_json(&store.layout().record_path(league, TeamId::new(9), Gameweek::new(1)))
        .unwrap();
    assert_eq!(raw["team_id"], 9);
    assert_eq!(raw["gameweek"], 1);
    assert_eq!(raw["total_points"], 12);
    assert_eq!(raw["total_optimal_points"], 17);
    assert_eq!(raw["min_formation"], json!([1, 3, 2, 1]));
    assert_eq!(raw["max_formation"], json!([1, 5, 5, 3]));
    assert!(raw["total_player_stats"].is_array());
}

#[test]
fn test_missing_team_record_is_error() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);
    let gw = Gameweek::new(1);
    store.save_gameweek_records(league, gw, &[record(1, 1, 10)]).unwrap();

    let result = store.load_gameweek_records(league, &[TeamId::new(1), TeamId::new(2)], gw);
    match result {
        Err(DraftError::MissingRecord { path }) => assert!(path.ends_with("gw_1_adjusted.json")),
        other => panic!("Expected MissingRecord, got {other:?}"),
    }
}

#[test]
fn test_save_rejects_record_from_other_gameweek() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);

    let result = store.save_gameweek_records(
        league,
        Gameweek::new(3),
        &[record(1, 3, 10), record(2, 2, 10)],
    );
    assert!(matches!(result, Err(DraftError::Storage { .. })));

    // Nothing from the rejected batch became visible
    assert!(!store
        .layout()
        .record_path(league, TeamId::new(1), Gameweek::new(3))
        .exists());
}

/// Occupy a record's final path with a non-empty directory so renaming onto it fails.
fn block_record_path(store: &JsonStore, league: LeagueId, team: u32, gw: Gameweek) {
    let blocked = store.layout().record_path(league, TeamId::new(team), gw);
    std::fs::create_dir_all(&blocked).unwrap();
    std::fs::write(blocked.join("occupied"), "x").unwrap();
}

#[test]
fn test_failed_rename_restores_earlier_records() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);
    let gw = Gameweek::new(1);

    store.save_gameweek_records(league, gw, &[record(1, 1, 10)]).unwrap();
    block_record_path(&store, league, 2, gw);

    let result = store.save_gameweek_records(league, gw, &[record(1, 1, 99), record(2, 1, 99)]);
    match result {
        Err(DraftError::Storage { message }) => {
            assert!(message.contains("renaming"), "unexpected message: {message}");
            assert!(message.contains("gw_1_adjusted.json"));
        }
        other => panic!("Expected Storage error, got {other:?}"),
    }

    // Team 1 keeps the version from before the failed batch
    let kept = store.load_gameweek_records(league, &[TeamId::new(1)], gw).unwrap();
    assert_eq!(kept[0].total_points, 10);

    for team in [1, 2] {
        let path = store.layout().record_path(league, TeamId::new(team), gw);
        assert!(!staging_path(&path).exists(), "staged file left for team {team}");
        assert!(!backup_path(&path).exists(), "backup left for team {team}");
    }
}

#[test]
fn test_failed_rename_removes_new_records() {
    let (_dir, store) = create_test_store();
    let league = LeagueId::new(15937);
    let gw = Gameweek::new(1);
    block_record_path(&store, league, 2, gw);

    let result = store.save_gameweek_records(league, gw, &[record(1, 1, 10), record(2, 1, 20)]);
    assert!(result.is_err());

    let team1 = store.layout().record_path(league, TeamId::new(1), gw);
    assert!(!team1.exists());
    assert!(!staging_path(&team1).exists());
    assert!(!staging_path(&store.layout().record_path(league, TeamId::new(2), gw)).exists());
}
