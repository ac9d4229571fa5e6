//! Saving and resuming games through snapshots.
//!
//! A caller stores `Snapshot::to_json()` in whatever key-value store it
//! has and later restores it into a fresh engine.

use std::collections::HashMap;

use matryoshka_ttt::core::{Piece, Size, CELL_COUNT};
use matryoshka_ttt::{
    GameStatus, PlayerId, RandomStrategy, RulesEngine, Snapshot, SnapshotError, Strategy,
};

/// Play a few random moves from a seed.
fn engine_after(seed: u64, plies: usize) -> RulesEngine {
    let mut engine = RulesEngine::new();
    let mut strategy = RandomStrategy::new(seed);
    for _ in 0..plies {
        if engine.is_over() {
            break;
        }
        let mv = strategy.choose(&engine.legal_moves()).unwrap();
        engine.play(mv).unwrap();
    }
    engine
}

/// A mid-game save resumes with identical state and options.
#[test]
fn test_resume_from_string_store() {
    let mut store: HashMap<&str, String> = HashMap::new();

    let original = engine_after(11, 4);
    store.insert("gameState", original.snapshot().to_json().unwrap());

    let saved = store.get("gameState").unwrap();
    let mut resumed = RulesEngine::new();
    resumed.restore(&Snapshot::from_json(saved).unwrap()).unwrap();

    assert_eq!(resumed.snapshot(), original.snapshot());
    assert_eq!(resumed.legal_moves(), original.legal_moves());
    assert_eq!(resumed.status(), original.status());
}

/// Restored games keep playing by the same rules as the original.
#[test]
fn test_resumed_game_continues_identically() {
    let mut original = engine_after(23, 3);
    let mut resumed = RulesEngine::new();
    resumed.restore(&original.snapshot()).unwrap();

    let mut a = RandomStrategy::new(5);
    let mut b = RandomStrategy::new(5);
    while !original.is_over() && !original.is_blocked() {
        let mv = a.choose(&original.legal_moves()).unwrap();
        let mv2 = b.choose(&resumed.legal_moves()).unwrap();
        assert_eq!(mv, mv2);

        assert_eq!(original.play(mv), resumed.play(mv2));
    }
    assert_eq!(original.snapshot(), resumed.snapshot());
}

/// Binary and JSON forms decode to the same snapshot.
#[test]
fn test_binary_and_json_agree() {
    let snapshot = engine_after(42, 6).snapshot();

    let from_bytes = Snapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
    let from_json = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();

    assert_eq!(from_bytes, snapshot);
    assert_eq!(from_json, snapshot);
}

/// A finished game restores as finished.
#[test]
fn test_restore_finished_game() {
    let mut engine = RulesEngine::new();
    for (cell, size) in [(0, 5), (3, 1), (1, 4), (4, 2), (2, 3)] {
        engine.apply_move(cell, size).unwrap();
    }
    let json = engine.snapshot().to_json().unwrap();

    let mut resumed = RulesEngine::new();
    resumed.restore(&Snapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(resumed.status(), GameStatus::Won(PlayerId::P1));
    assert!(resumed.legal_moves().is_empty());
    assert!(resumed.apply_move(8, 1).is_err());
}

/// Hand-written JSON with the wrong number of cells is refused.
#[test]
fn test_wrong_shape_rejected() {
    let json = r#"{
        "board": [null, null, null],
        "inventories": [[1,2,3,4,5],[1,2,3,4,5]],
        "active_player": "P1"
    }"#;

    let snapshot = Snapshot::from_json(json).unwrap();
    let mut engine = RulesEngine::new();
    let err = engine.restore(&snapshot).unwrap_err();

    assert!(matches!(err, SnapshotError::BoardShape { expected: 9, found: 3 }));
    assert!(engine.board().is_empty());
    assert_eq!(err.to_string(), "board must have 9 cells, found 3");
}

/// A doll cannot be both on the board and in hand.
#[test]
fn test_inconsistent_inventory_rejected() {
    let mut board = vec![None; CELL_COUNT];
    board[2] = Some(Piece::new(PlayerId::P2, Size::new(4).unwrap()));
    let snapshot = Snapshot {
        board,
        inventories: vec![vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5]],
        active_player: PlayerId::P1,
        status: None,
    };

    let mut engine = RulesEngine::new();
    assert!(matches!(
        engine.restore(&snapshot),
        Err(SnapshotError::PlacedAndHeld {
            player: PlayerId::P2,
            cell: 2,
            ..
        })
    ));
}

/// Malformed text never reaches the engine.
#[test]
fn test_garbage_json_rejected() {
    assert!(matches!(
        Snapshot::from_json("{\"board\": 7}"),
        Err(SnapshotError::Json(_))
    ));
    assert!(matches!(Snapshot::from_json(""), Err(SnapshotError::Json(_))));
}
