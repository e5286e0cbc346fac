//! Properties that must hold for any input, checked with proptest.

use proptest::prelude::*;

use zuul::engine::CommandWord;
use zuul::world::RoomId;
use zuul::{Game, default_world};

fn game() -> Game {
    Game::new(default_world().unwrap())
}

/// Exits of the current room sorted by label, so a strategy index picks a
/// deterministic one.
fn sorted_exits(game: &Game) -> Vec<(String, RoomId)> {
    let mut exits: Vec<(String, RoomId)> = game
        .world()
        .room(game.current_room())
        .exits()
        .map(|(d, id)| (d.to_string(), id))
        .collect();
    exits.sort();
    exits
}

proptest! {
    #[test]
    fn unknown_direction_never_moves(direction in "[a-zA-Z]{1,10}") {
        let mut game = game();
        let start = game.current_room();
        prop_assume!(game.world().room(start).exit(&direction).is_none());

        let (out, finished) = game.step(&format!("go {direction}"));
        prop_assert_eq!(out.to_string(), "There is no door!\n");
        prop_assert!(!finished);
        prop_assert_eq!(game.current_room(), start);
    }

    #[test]
    fn random_walk_follows_configured_exits(picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40)) {
        let mut game = game();
        for pick in picks {
            let exits = sorted_exits(&game);
            if exits.is_empty() {
                // the beach is a dead end
                let (out, _) = game.step("go north");
                prop_assert_eq!(out.to_string(), "There is no door!\n");
                break;
            }
            let (direction, target) = &exits[pick.index(exits.len())];

            let (out, _) = game.step(&format!("go {direction}"));
            prop_assert_eq!(game.current_room(), *target);

            let expected = format!("{}\n\n", game.world().room(*target).long_description());
            prop_assert_eq!(out.to_string(), expected);
        }
    }

    #[test]
    fn quit_with_second_word_never_ends(second in "[a-z]{1,8}") {
        let mut game = game();
        let (out, finished) = game.step(&format!("quit {second}"));
        prop_assert_eq!(out.to_string(), "Quit what?\n");
        prop_assert!(!finished);
        prop_assert!(!game.is_finished());
    }

    #[test]
    fn go_alone_never_moves(padding in "[ \t]{0,4}") {
        let mut game = game();
        let start = game.current_room();
        let (out, _) = game.step(&format!("{padding}go{padding}"));
        prop_assert_eq!(out.to_string(), "Go where?\n");
        prop_assert_eq!(game.current_room(), start);
    }

    #[test]
    fn words_outside_vocabulary_are_not_understood(line in "[a-zA-Z]{0,8}( [a-z]{1,6}){0,2}") {
        let first = line.split_whitespace().next().unwrap_or("");
        prop_assume!(CommandWord::from_token(first).is_none());

        let mut game = game();
        let start = game.current_room();
        let (out, finished) = game.step(&line);
        prop_assert_eq!(out.to_string(), "I don't know what you mean...\n");
        prop_assert!(!finished);
        prop_assert_eq!(game.current_room(), start);
    }
}

#[test]
fn quit_alone_always_ends() {
    for input in ["quit", "  quit  ", "quit\n"] {
        let mut game = game();
        let (_, finished) = game.step(input);
        assert!(finished, "{input:?} should end the game");
    }
}
