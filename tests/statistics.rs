//! Integration tests for derived statistics and history views.

use billiard_score_tracker::{
    best_player, compute_all_stats, compute_player_stats, format_match_date,
    highest_scoring_player, leaderboard, matches_newest_first, summarize, GameMatch, MatchPlayer,
    Player, Winner,
};
use chrono::{TimeZone, Utc};

fn player(id: &str, wins: u32, losses: u32) -> Player {
    let mut p = Player::new(id, format!("Player {id}"), None);
    p.wins = wins;
    p.losses = losses;
    p.games_played = wins + losses;
    p
}

fn game(id: &str, day: u32, scores: &[(&str, u32)], winner: &str) -> GameMatch {
    GameMatch {
        id: id.to_string(),
        date: Utc.with_ymd_and_hms(2025, 1, day, 20, 0, 0).unwrap(),
        players: scores
            .iter()
            .map(|(pid, score)| MatchPlayer {
                id: pid.to_string(),
                name: format!("Player {pid}"),
                score: *score,
                avatar_url: None,
            })
            .collect(),
        winner: Some(Winner {
            id: winner.to_string(),
            name: format!("Player {winner}"),
            avatar_url: None,
        }),
    }
}

#[test]
fn player_without_history_has_zero_stats() {
    let stats = compute_player_stats(&player("a", 0, 0), &[]);
    assert_eq!(stats.win_rate, 0.0);
    assert_eq!(stats.average_score, 0.0);
    assert_eq!(stats.highest_score, 0);
}

#[test]
fn stats_come_from_every_score_under_the_player_id() {
    let matches = vec![
        game("1", 1, &[("a", 4), ("b", 2)], "a"),
        game("2", 2, &[("a", 1), ("b", 7)], "b"),
        game("3", 3, &[("b", 3), ("c", 5)], "c"),
    ];
    let a = compute_player_stats(&player("a", 1, 1), &matches);
    assert_eq!(a.average_score, 2.5);
    assert_eq!(a.highest_score, 4);
    assert_eq!(a.win_rate, 50.0);

    let b = compute_player_stats(&player("b", 1, 2), &matches);
    assert_eq!(b.average_score, 4.0);
    assert_eq!(b.highest_score, 7);
    assert!((b.win_rate - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn best_and_highest_scoring_ties_go_to_first_in_collection() {
    let players = vec![player("a", 1, 1), player("b", 2, 2), player("c", 0, 1)];
    let matches = vec![
        game("1", 1, &[("a", 6), ("c", 1)], "a"),
        game("2", 2, &[("b", 6), ("c", 0)], "b"),
    ];
    let stats = compute_all_stats(&players, &matches);
    assert_eq!(best_player(&stats).unwrap().player.id, "a");
    assert_eq!(highest_scoring_player(&stats).unwrap().player.id, "a");
}

#[test]
fn headline_players_are_none_without_players() {
    assert!(best_player(&[]).is_none());
    assert!(highest_scoring_player(&[]).is_none());
}

#[test]
fn summary_ranks_by_win_rate_and_counts_matches() {
    let players = vec![player("a", 1, 3), player("b", 3, 1), player("c", 0, 0)];
    let matches = vec![game("1", 1, &[("a", 3), ("b", 9)], "b")];
    let summary = summarize(&players, &matches);

    assert_eq!(summary.total_matches, 1);
    let order: Vec<_> = summary.players.iter().map(|s| s.player.id.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
    assert_eq!(summary.best_player.unwrap().player.id, "b");
    assert_eq!(summary.highest_scoring_player.unwrap().player.id, "b");
}

#[test]
fn history_lists_newest_first() {
    let matches = vec![
        game("1", 1, &[("a", 1)], "a"),
        game("3", 3, &[("a", 1)], "a"),
        game("2", 2, &[("a", 1)], "a"),
    ];
    let ids: Vec<_> = matches_newest_first(&matches)
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
}

#[test]
fn leaderboard_sorts_by_wins_keeping_ties_in_order() {
    let players = vec![player("a", 1, 0), player("b", 4, 0), player("c", 1, 2)];
    let ids: Vec<_> = leaderboard(&players).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn match_date_is_formatted_day_first() {
    let date = Utc.with_ymd_and_hms(2025, 3, 7, 21, 45, 12).unwrap();
    assert_eq!(format_match_date(&date), "07/03/2025 21:45");
}

#[test]
fn summary_without_matches_has_no_headline_players() {
    let players = vec![player("a", 0, 0), player("b", 0, 0)];
    let summary = summarize(&players, &[]);
    assert_eq!(summary.total_matches, 0);
    assert_eq!(summary.players.len(), 2);
    assert!(summary.players.iter().all(|s| s.win_rate == 0.0));
    assert!(summary.best_player.is_none());
    assert!(summary.highest_scoring_player.is_none());
}
