//! Match runner and result log tests.

use std::path::PathBuf;

use rust_draughts::agents::{Agent, HumanAgent};
use rust_draughts::{
    EndReason, EvalWeights, GameMode, Match, MatchConfig, MatchEvent, Player, ResultLog, SelectorConfig,
};

fn temp_log(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("draughts-{name}-{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn computer_match(seed: u64, max_turns: u32) -> Match {
    let config = MatchConfig::new(GameMode::ComputerVsComputer)
        .with_seed(seed)
        .with_max_turns(max_turns);
    Match::from_config(config, |_| -> Box<dyn Agent> { Box::new(HumanAgent::new(&b""[..])) })
}

// =============================================================================
// Computer Matches
// =============================================================================

#[test]
fn test_computer_match_finishes() {
    for seed in [1, 2, 3] {
        let mut game = computer_match(seed, 300);
        let summary = game.run().unwrap();

        match summary.reason {
            EndReason::NoPieces | EndReason::NoMoves => assert!(summary.winner.is_some()),
            EndReason::Draw => assert!(summary.winner.is_none()),
            EndReason::PlayerExit => panic!("nobody asked to exit"),
        }
        assert!(summary.turns >= 1);
        assert_eq!(
            summary.captures[Player::White],
            12 - game.controller().board().piece_count(Player::Black)
        );
        assert_eq!(
            summary.captures[Player::Black],
            12 - game.controller().board().piece_count(Player::White)
        );
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut first = computer_match(77, 60);
    let mut second = computer_match(77, 60);

    assert_eq!(first.run().unwrap(), second.run().unwrap());
    let moves = |m: &Match| m.controller().history().iter().map(|r| r.mv).collect::<Vec<_>>();
    assert_eq!(moves(&first), moves(&second));
}

#[test]
fn test_human_side_reads_input() {
    let config = MatchConfig::new(GameMode::PlayerVsComputer).with_seed(5);
    let mut game = Match::from_config(config, |_| -> Box<dyn Agent> {
        Box::new(HumanAgent::new(&b"a3 b4\nexit\n"[..]))
    });

    assert!(matches!(game.step(), MatchEvent::Played(_)));
    assert!(matches!(game.step(), MatchEvent::Played(_)));
    let MatchEvent::Finished(summary) = game.step() else {
        panic!("the human typed exit");
    };
    assert_eq!(summary.winner, Some(Player::Black));
    assert_eq!(summary.reason, EndReason::PlayerExit);
    assert_eq!(game.label(), "Human vs Computer");
}

#[test]
fn test_two_humans_share_the_keyboard() {
    let seat = HumanAgent::new(&b"c3 d4\nf6 e5\nd4 f6\n"[..]);
    let mut game = Match::from_config(MatchConfig::new(GameMode::PlayerVsPlayer), |_| -> Box<dyn Agent> {
        Box::new(seat.clone())
    });

    for _ in 0..3 {
        assert!(matches!(game.step(), MatchEvent::Played(_)));
    }
    let players: Vec<Player> = game.controller().history().iter().map(|r| r.mv.player()).collect();
    assert_eq!(players, vec![Player::White, Player::Black, Player::White]);

    let MatchEvent::Finished(summary) = game.step() else {
        panic!("input ran out on Black's turn");
    };
    assert_eq!(summary.winner, Some(Player::White));
    assert_eq!(summary.reason, EndReason::PlayerExit);
}

// =============================================================================
// Result Log
// =============================================================================

#[test]
fn test_run_appends_result_lines() {
    let path = temp_log("append");
    let config = MatchConfig::new(GameMode::ComputerVsComputer)
        .with_seed(9)
        .with_max_turns(10)
        .with_result_log(&path);

    for _ in 0..2 {
        let mut game = Match::from_config(config.clone(), |_| -> Box<dyn Agent> {
            Box::new(HumanAgent::new(&b""[..]))
        });
        game.run().unwrap();
    }

    let entries = ResultLog::new(&path).entries().unwrap();
    assert_eq!(entries.len(), 2);
    for line in &entries {
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 7, "{line}");
        assert_eq!(fields[1], "Computer vs Computer");
        assert!(fields[4].parse::<u32>().is_ok());
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_serializes() {
    let config = MatchConfig::new(GameMode::PlayerVsComputer)
        .with_seed(3)
        .with_selector(SelectorConfig::default().with_weights(EvalWeights::default().with_king(300)));

    let json = serde_json::to_string(&config).unwrap();
    let back: MatchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.mode, GameMode::PlayerVsComputer);
    assert_eq!(back.seed, Some(3));
    assert_eq!(back.selector.weights.king, 300);
}
