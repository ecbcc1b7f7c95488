//! Integration tests for the season fold over in-memory inputs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fpl_draft::{
    engine::{
        DirectoryEntry, PlayerDirectory, RecordSink, RosterSlot, RosterSnapshot, ScoreIndex,
        SeasonData, SeasonRunner,
    },
    DraftError, Gameweek, GameweekRecord, PlayerId, Result, TeamId,
};

/// Squad order: GK, four DEF, four MID, two FWD, then GK, DEF, MID, FWD on the bench.
const SQUAD_ORDER: [u32; 15] = [1, 3, 4, 5, 6, 8, 9, 10, 11, 13, 14, 2, 7, 12, 15];

struct MemorySeason {
    team_ids: Vec<TeamId>,
    directory: PlayerDirectory,
    scores: HashMap<Gameweek, Arc<ScoreIndex>>,
    rosters: HashMap<(TeamId, Gameweek), RosterSnapshot>,
}

impl SeasonData for MemorySeason {
    fn team_ids(&self) -> Vec<TeamId> {
        self.team_ids.clone()
    }

    fn directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    fn score_index(&self, gameweek: Gameweek) -> Result<Arc<ScoreIndex>> {
        self.scores
            .get(&gameweek)
            .cloned()
            .ok_or_else(|| DraftError::MissingInput {
                path: format!("scores for gameweek {gameweek}"),
            })
    }

    fn roster(&self, team_id: TeamId, gameweek: Gameweek) -> Result<RosterSnapshot> {
        self.rosters
            .get(&(team_id, gameweek))
            .cloned()
            .ok_or_else(|| DraftError::MissingInput {
                path: format!("roster for team {team_id} gameweek {gameweek}"),
            })
    }
}

#[derive(Default)]
struct MemorySink {
    persisted: Mutex<Vec<(Gameweek, Vec<GameweekRecord>)>>,
}

impl RecordSink for MemorySink {
    fn persist_gameweek(&self, gameweek: Gameweek, records: &[GameweekRecord]) -> Result<()> {
        self.persisted
            .lock()
            .unwrap()
            .push((gameweek, records.to_vec()));
        Ok(())
    }
}

/// Two squads of the same shape: team 10 owns players 1-15, team 20 owns 16-30.
fn directory() -> PlayerDirectory {
    (1u32..=30)
        .map(|id| {
            let code = match (id - 1) % 15 + 1 {
                1..=2 => 1,
                3..=7 => 2,
                8..=12 => 3,
                _ => 4,
            };
            (
                PlayerId::new(id),
                DirectoryEntry {
                    first_name: "Player".to_string(),
                    second_name: id.to_string(),
                    category_code: code,
                },
            )
        })
        .collect()
}

fn roster(team: u32, offset: u32, gameweek: u16) -> RosterSnapshot {
    RosterSnapshot {
        team_id: TeamId::new(team),
        team_name: format!("Team {team}"),
        captain_name: format!("Manager {team}"),
        gameweek: Gameweek::new(gameweek),
        slots: SQUAD_ORDER
            .iter()
            .enumerate()
            .map(|(slot, &id)| RosterSlot::new(PlayerId::new(id + offset), slot as u8 + 1))
            .collect(),
    }
}

fn scores(gameweek: u16, points: &[(u32, i32)]) -> Arc<ScoreIndex> {
    Arc::new(ScoreIndex::new(
        Gameweek::new(gameweek),
        points
            .iter()
            .map(|&(id, pts)| (PlayerId::new(id), pts))
            .collect(),
    ))
}

/// Gameweek 1: everyone scores 2, except a 10-point benched forward for
/// team 10 and a 5-point keeper for team 20. Gameweek 2: only the two
/// starting keepers feature, with 3 each.
fn two_team_season() -> MemorySeason {
    let mut gw1: Vec<(u32, i32)> = (1u32..=30).map(|id| (id, 2)).collect();
    gw1[14].1 = 10;
    gw1[15].1 = 5;

    let mut rosters = HashMap::new();
    for gw in 1..=2 {
        rosters.insert((TeamId::new(10), Gameweek::new(gw)), roster(10, 0, gw));
        rosters.insert((TeamId::new(20), Gameweek::new(gw)), roster(20, 15, gw));
    }

    MemorySeason {
        team_ids: vec![TeamId::new(10), TeamId::new(20)],
        directory: directory(),
        scores: HashMap::from([
            (Gameweek::new(1), scores(1, &gw1)),
            (Gameweek::new(2), scores(2, &[(1, 3), (16, 3)])),
        ]),
        rosters,
    }
}

fn by_team(records: &[GameweekRecord], team: u32) -> &GameweekRecord {
    records
        .iter()
        .find(|r| r.team_id == TeamId::new(team))
        .unwrap()
}

#[test]
fn test_two_gameweek_fold() {
    let season = two_team_season();
    let sink = MemorySink::default();

    let latest = SeasonRunner::new(&season, &sink)
        .run(Gameweek::new(2))
        .unwrap();

    let persisted = sink.persisted.lock().unwrap();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].0, Gameweek::new(1));
    assert_eq!(persisted[1].0, Gameweek::new(2));
    assert_eq!(persisted[1].1, latest);

    // Gameweek 1
    let gw1 = &persisted[0].1;
    let t10 = by_team(gw1, 10);
    assert_eq!(t10.week_points, 22);
    assert_eq!(t10.benched_points, 16);
    assert_eq!(t10.optimal_points, 30);
    assert_eq!(t10.team_formation, [1, 4, 4, 2]);
    let t20 = by_team(gw1, 20);
    assert_eq!(t20.week_points, 25);
    assert_eq!(t20.benched_points, 8);
    assert_eq!(t20.optimal_points, 25);

    assert_eq!((t20.league_rank, t10.league_rank), (1, 2));
    assert_eq!((t10.optimal_league_rank, t20.optimal_league_rank), (1, 2));

    // Gameweek 2 carries the totals forward
    let t10 = by_team(&latest, 10);
    let t20 = by_team(&latest, 20);
    assert_eq!(t10.week_points, 3);
    assert_eq!(t10.total_points, 25);
    assert_eq!(t10.total_optimal_points, 33);
    assert_eq!(t20.total_points, 28);
    assert_eq!(t20.total_optimal_points, 28);
    assert_eq!((t20.league_rank, t10.league_rank), (1, 2));
    assert_eq!((t10.optimal_league_rank, t20.optimal_league_rank), (1, 2));

    let keeper = t10.total_player_stats.get(PlayerId::new(1)).unwrap();
    assert_eq!(keeper.total_points, 5);
    let benched_forward = t10.total_player_stats.get(PlayerId::new(15)).unwrap();
    assert_eq!(benched_forward.total_points, 0);
    assert_eq!(benched_forward.total_benched_points, 10);
    assert_eq!(
        t10.total_player_stats.iter().next().unwrap().player_id,
        PlayerId::new(1)
    );
}

#[test]
fn test_fold_properties_hold_every_gameweek() {
    let season = two_team_season();
    let sink = MemorySink::default();
    SeasonRunner::new(&season, &sink)
        .run(Gameweek::new(2))
        .unwrap();

    let persisted = sink.persisted.lock().unwrap();
    let mut previous: HashMap<TeamId, (i32, i32)> = HashMap::new();
    for (gameweek, records) in persisted.iter() {
        let mut ranks: Vec<u32> = records.iter().map(|r| r.league_rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2]);

        for record in records {
            assert_eq!(record.gameweek, *gameweek);
            assert!(record.is_ranked());
            assert!(record.optimal_points >= record.week_points);
            assert!(record.formation_is_legal());
            assert_eq!(record.player_stats.len(), 15);

            let (total, optimal) = previous.get(&record.team_id).copied().unwrap_or((0, 0));
            assert_eq!(record.total_points, total + record.week_points);
            assert_eq!(record.total_optimal_points, optimal + record.optimal_points);
            previous.insert(
                record.team_id,
                (record.total_points, record.total_optimal_points),
            );
        }
    }
}

#[test]
fn test_identical_teams_tie_break_by_team_id() {
    let mut season = two_team_season();
    // Team 20 gets the same scores as team 10 in both gameweeks
    season.scores = HashMap::from([
        (
            Gameweek::new(1),
            scores(1, &(1u32..=30).map(|id| (id, 2)).collect::<Vec<_>>()),
        ),
        (Gameweek::new(2), scores(2, &[(1, 3), (16, 3)])),
    ]);
    let sink = MemorySink::default();

    let latest = SeasonRunner::new(&season, &sink)
        .run(Gameweek::new(2))
        .unwrap();

    assert_eq!(by_team(&latest, 10).league_rank, 1);
    assert_eq!(by_team(&latest, 20).league_rank, 2);
    assert_eq!(by_team(&latest, 10).optimal_league_rank, 1);
    assert_eq!(by_team(&latest, 20).optimal_league_rank, 2);
}

#[test]
fn test_missing_roster_stops_the_fold() {
    let mut season = two_team_season();
    season.rosters.remove(&(TeamId::new(20), Gameweek::new(2)));
    let sink = MemorySink::default();

    let result = SeasonRunner::new(&season, &sink).run(Gameweek::new(2));
    assert!(matches!(result, Err(DraftError::MissingInput { .. })));

    // Gameweek 1 was complete and persisted, gameweek 2 was not
    let persisted = sink.persisted.lock().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].0, Gameweek::new(1));
}

#[test]
fn test_unknown_player_stops_the_fold() {
    let mut season = two_team_season();
    let mut bad = roster(10, 0, 1);
    bad.slots[0] = RosterSlot::new(PlayerId::new(999), 1);
    season.rosters.insert((TeamId::new(10), Gameweek::new(1)), bad);
    let sink = MemorySink::default();

    let result = SeasonRunner::new(&season, &sink).run(Gameweek::new(1));
    assert!(matches!(
        result,
        Err(DraftError::PlayerNotFound { player_id }) if player_id == PlayerId::new(999)
    ));
    assert!(sink.persisted.lock().unwrap().is_empty());
}
