//! Full-game scoring fixtures played through the public surface

use tenpin::core::Game;
use tenpin::types::{FRAMES_PER_GAME, PERFECT_SCORE};

/// Play the same pin count on both balls of every frame
fn all_open_game(pins: u8) -> Game {
    let mut game = Game::new();
    for frame in 1..=FRAMES_PER_GAME {
        game.play(frame, 1, pins);
        game.play(frame, 2, pins);
    }
    game
}

#[test]
fn test_new_game_scores_zero() {
    let game = Game::new();
    assert_eq!(game.score(), 0);
    assert_eq!(FRAMES_PER_GAME, 10);
}

#[test]
fn test_one_frame_played() {
    let mut game = Game::new();
    game.play(1, 1, 5);

    assert_eq!(game.frames_played(), 1);
    assert_eq!(game.score(), 5);
}

#[test]
fn test_lone_strike() {
    let mut game = Game::new();
    game.play(1, 1, 10);

    assert_eq!(game.frames_played(), 1);
    assert_eq!(game.score(), 10);
}

#[test]
fn test_strike_followed_by_open_frame() {
    let mut game = Game::new();
    game.play(1, 1, 10);
    game.play(2, 1, 4);
    game.play(2, 2, 2);

    assert_eq!(game.frames_played(), 2);
    assert_eq!(game.score(), 22);
}

#[test]
fn test_lone_spare() {
    let mut game = Game::new();
    game.play(1, 1, 6);
    game.play(1, 2, 4);

    assert_eq!(game.frames_played(), 1);
    assert_eq!(game.score(), 10);
}

#[test]
fn test_spare_followed_by_open_frame() {
    let mut game = Game::new();
    game.play(1, 1, 6);
    game.play(1, 2, 4);
    game.play(2, 1, 3);
    game.play(2, 2, 1);

    assert_eq!(game.frames_played(), 2);
    assert_eq!(game.score(), 17);
}

#[test]
fn test_all_open_frames() {
    assert_eq!(all_open_game(4).score(), 80);
}

#[test]
fn test_all_ones() {
    assert_eq!(all_open_game(1).score(), 20);
}

#[test]
fn test_all_misses() {
    assert_eq!(all_open_game(0).score(), 0);
}

#[test]
fn test_all_spares_of_five() {
    let mut game = Game::new();
    for frame in 1..=FRAMES_PER_GAME {
        game.play(frame, 1, 5);
        game.play(frame, 2, 5);
    }
    game.play(10, 3, 5);

    assert!(game.is_complete());
    assert_eq!(game.score(), 150);
}

#[test]
fn test_all_spares_of_four_and_six() {
    let mut game = Game::new();
    for frame in 1..=FRAMES_PER_GAME {
        game.play(frame, 1, 4);
        game.play(frame, 2, 6);
    }
    game.play(10, 3, 4);

    assert!(game.is_complete());
    assert_eq!(game.score(), 140);
}

#[test]
fn test_all_strikes_is_a_perfect_game() {
    let mut game = Game::new();
    for frame in 1..=9 {
        game.play(frame, 1, 10);
    }
    game.play(10, 1, 10);
    game.play(10, 2, 10);
    game.play(10, 3, 10);

    assert!(game.is_complete());
    assert_eq!(game.score(), PERFECT_SCORE);
}

#[test]
fn test_single_strike_among_open_frames() {
    let mut game = Game::new();
    for frame in 1..=FRAMES_PER_GAME {
        if frame == 6 {
            game.play(frame, 1, 10);
        } else {
            game.play(frame, 1, 2);
            game.play(frame, 2, 2);
        }
    }

    assert_eq!(game.score(), 50);
}

#[test]
fn test_single_spare_among_misses() {
    let mut game = Game::new();
    for frame in 1..=FRAMES_PER_GAME {
        match frame {
            4 => {
                game.play(frame, 1, 5);
                game.play(frame, 2, 5);
            }
            5 => {
                game.play(frame, 1, 5);
                game.play(frame, 2, 0);
            }
            _ => {
                game.play(frame, 1, 0);
                game.play(frame, 2, 0);
            }
        }
    }

    assert_eq!(game.score(), 20);
}

#[test]
fn test_partial_scores_grow_into_the_final_total() {
    let mut game = Game::new();
    let mut previous = 0;

    for frame in 1..=FRAMES_PER_GAME {
        game.play(frame, 1, 9);
        game.play(frame, 2, 1);

        // Mid-game totals only ever grow as bonuses resolve.
        let score = game.score();
        assert!(score >= previous);
        previous = score;
    }
    game.play(10, 3, 9);

    // 9/ in every frame with a final 9: ten frames of 19.
    assert_eq!(game.score(), 190);
}

#[test]
fn test_score_is_stable_between_plays() {
    let mut game = Game::new();
    game.play(1, 1, 10);
    game.play(2, 1, 7);
    game.play(2, 2, 3);

    let score = game.score();
    assert_eq!(game.score(), score);
    assert_eq!(game.score(), score);
}
