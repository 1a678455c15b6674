//! Self-play smoke tests: the random policy only ever proposes legal
//! actions, and the board stays consistent while it plays.

use goban_rust::bot::random_action;
use goban_rust::constants::NUM_CELLS;
use goban_rust::game::GameState;

#[test]
fn test_random_play_stays_legal() {
    fastrand::seed(7);
    let mut game = GameState::new();

    for _ in 0..120 {
        if game.is_ended() {
            break;
        }
        let action = random_action(&game);
        game.apply(action).expect("policy action should be legal");
    }

    let stones = game.board().stones().count();
    let empties = game.board().empty_positions().count();
    assert_eq!(stones + empties, NUM_CELLS);
    assert!(stones <= 120);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = |seed: u64| {
        fastrand::seed(seed);
        let mut game = GameState::new();
        for _ in 0..40 {
            let action = random_action(&game);
            game.apply(action).expect("policy action should be legal");
        }
        game.board().clone()
    };

    assert_eq!(run(123), run(123));
    assert_ne!(run(123), run(456));
}
