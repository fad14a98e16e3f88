//! Integration tests for persistence: tolerant loading and file-backed storage.

use billiard_score_tracker::store::{load_matches, load_players, save_matches, save_players};
use billiard_score_tracker::{FileStore, MemoryStore, Player, Store, MATCHES_KEY, PLAYERS_KEY};

#[test]
fn missing_collections_load_as_empty() {
    let store = MemoryStore::new();
    assert!(load_players(&store).is_empty());
    assert!(load_matches(&store).is_empty());
}

#[test]
fn corrupt_collection_loads_as_empty() {
    let mut store = MemoryStore::new();
    store.set(PLAYERS_KEY, "{not json".to_string()).unwrap();
    store.set(MATCHES_KEY, "{\"id\": 1}".to_string()).unwrap();
    assert!(load_players(&store).is_empty());
    assert!(load_matches(&store).is_empty());
}

#[test]
fn malformed_records_are_skipped_and_missing_fields_defaulted() {
    let mut store = MemoryStore::new();
    let text = r#"[
        {"id": "1", "name": "Alice", "wins": 2, "losses": 1, "gamesPlayed": 3, "avatarUrl": "a.png"},
        {"name": "No id"},
        {"id": "2", "name": "Bob"}
    ]"#;
    store.set(PLAYERS_KEY, text.to_string()).unwrap();

    let players = load_players(&store);
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].avatar_url.as_deref(), Some("a.png"));
    assert_eq!(players[0].games_played, 3);
    assert_eq!(players[1].name, "Bob");
    assert_eq!((players[1].wins, players[1].losses, players[1].games_played), (0, 0, 0));
    assert_eq!(players[1].avatar_url, None);
}

#[test]
fn reads_match_history_written_by_the_browser_app() {
    let mut store = MemoryStore::new();
    let text = r#"[{
        "id": "1712345678901",
        "date": "2024-04-05T19:34:38.901Z",
        "players": [
            {"id": "1", "name": "Alice", "score": 7},
            {"id": "2", "name": "Bob", "score": 3, "avatarUrl": "b.png"}
        ],
        "winner": {"id": "1", "name": "Alice"}
    }]"#;
    store.set(MATCHES_KEY, text.to_string()).unwrap();

    let matches = load_matches(&store);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score_of("1"), Some(7));
    assert!(matches[0].is_winner("1"));
    assert_eq!(matches[0].players[1].avatar_url.as_deref(), Some("b.png"));
}

#[test]
fn players_serialize_with_camel_case_keys() {
    let mut store = MemoryStore::new();
    let players = vec![Player::new("1", "Alice", None)];
    save_players(&mut store, &players).unwrap();
    let text = store.get(PLAYERS_KEY).unwrap();
    assert!(text.contains("\"gamesPlayed\":0"));
    assert!(!text.contains("avatarUrl"));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");

    let mut store = FileStore::new(&data_dir);
    assert!(store.get(PLAYERS_KEY).is_none());
    let players = vec![Player::new("1", "Alice", Some("a.png".to_string()))];
    save_players(&mut store, &players).unwrap();
    save_matches(&mut store, &[]).unwrap();

    let reopened = FileStore::new(&data_dir);
    assert_eq!(load_players(&reopened), players);
    assert!(load_matches(&reopened).is_empty());
    assert!(data_dir.join("billiardPlayers.json").exists());
}

#[test]
fn players_breaking_invariants_are_skipped_or_repaired() {
    let mut store = MemoryStore::new();
    let text = r#"[
        {"id": "1", "name": "", "wins": 5, "losses": 0, "gamesPlayed": 1},
        {"id": "2", "name": "  Bob ", "wins": 5, "losses": 1, "gamesPlayed": 1},
        {"id": "3", "name": "Cleo", "wins": 4294967295, "losses": 1, "gamesPlayed": 0},
        {"id": "4", "name": "Dan", "wins": 1, "losses": 1, "gamesPlayed": 2, "avatarUrl": " "}
    ]"#;
    store.set(PLAYERS_KEY, text.to_string()).unwrap();

    let players = load_players(&store);
    let ids: Vec<_> = players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4"]);
    assert_eq!(players[0].name, "Bob");
    assert_eq!((players[0].wins, players[0].losses, players[0].games_played), (5, 1, 6));
    assert_eq!(players[1].avatar_url, None);

    let summary = billiard_score_tracker::summarize(&players, &[]);
    assert!(summary.players.iter().all(|s| s.win_rate <= 100.0));
}
