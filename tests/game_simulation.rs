//! Behavioral validation of the simulator and strategies

use evoxo::{
    simulator::{play_game, play_game_with_history},
    strategy::{RandomStrategy, Strategy, TableStrategy},
    tictactoe::{GameResult, ReachablePositions},
};
use rand::{SeedableRng, rngs::StdRng};

const CENTER_FIRST: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];
const CORNER_FIRST: [usize; 9] = [0, 2, 6, 8, 4, 1, 3, 5, 7];

#[test]
fn every_game_terminates_within_nine_plies() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(1001);
    let table = TableStrategy::random(&gene_space, &mut rng).unwrap();

    for _ in 0..300 {
        let (result, history) =
            play_game_with_history(&table, &RandomStrategy, &mut rng).unwrap();
        assert!(result.is_terminal());
        assert!(history.len() <= 9);
    }
}

#[test]
fn random_table_strategy_satisfies_move_contract() {
    // A table strategy's play never returns an index whose square is
    // occupied, for every position present in its mapping.
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(77);
    let table = TableStrategy::random(&gene_space, &mut rng).unwrap();

    assert_eq!(table.len(), gene_space.len());
    for pos in &gene_space {
        let index = table.choose_move(pos, &mut rng).unwrap();
        assert!(pos.is_blank(index), "occupied move at '{}'", pos.encode());
    }
}

#[test]
fn random_strategy_never_fails_mid_game() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let result = play_game(&RandomStrategy, &RandomStrategy, &mut rng).unwrap();
        assert!(matches!(
            result,
            GameResult::XWon | GameResult::OWon | GameResult::Draw
        ));
    }
}

fn count_wins(strategy: &TableStrategy, games: usize, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut wins = 0;
    for _ in 0..games {
        if play_game(strategy, &RandomStrategy, &mut rng).unwrap() == GameResult::XWon {
            wins += 1;
        }
    }
    wins
}

#[test]
fn center_first_outperforms_corner_first() {
    // Fitness differentiation: a fixed-order strategy opening in the center
    // completes its line two plies earlier than one hoarding corners, so it
    // must score strictly higher against the random opponent.
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let center = TableStrategy::from_preference(&gene_space, &CENTER_FIRST).unwrap();
    let corner = TableStrategy::from_preference(&gene_space, &CORNER_FIRST).unwrap();

    let center_wins = count_wins(&center, 300, 555);
    let corner_wins = count_wins(&corner, 300, 555);
    assert!(
        center_wins > corner_wins,
        "center-first won {center_wins}, corner-first won {corner_wins}"
    );
}

#[test]
fn win_counts_are_reproducible_for_a_fixed_seed() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let center = TableStrategy::from_preference(&gene_space, &CENTER_FIRST).unwrap();

    assert_eq!(count_wins(&center, 100, 9), count_wins(&center, 100, 9));
}
