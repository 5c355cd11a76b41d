//! End-to-end validation of the genetic optimizer

use evoxo::{
    evolution::{EvolutionConfig, GeneticOptimizer, breed},
    strategy::TableStrategy,
    tictactoe::ReachablePositions,
};
use rand::{SeedableRng, rngs::StdRng};

fn small_config() -> EvolutionConfig {
    EvolutionConfig {
        survivors: 3,
        num_games: 20,
        mutation_rate: 0.02,
        num_generations: 3,
    }
}

#[test]
fn every_generation_has_exactly_survivors_squared_plus_survivors_members() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(31);
    let mut optimizer = GeneticOptimizer::new(&gene_space, config, &mut rng).unwrap();

    assert_eq!(optimizer.generation().len(), 12);
    for _ in 0..3 {
        optimizer.step(&mut rng).unwrap();
        assert_eq!(
            optimizer.generation().len(),
            config.generation_size(),
            "population size must stay fixed"
        );
    }
}

#[test]
fn survivors_are_copied_forward_unchanged() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(17);
    let mut optimizer = GeneticOptimizer::new(&gene_space, small_config(), &mut rng).unwrap();

    let before: Vec<TableStrategy> = optimizer.generation().to_vec();
    optimizer.step(&mut rng).unwrap();

    for elite in &optimizer.generation()[..3] {
        assert!(
            before.iter().any(|member| member == elite),
            "elite individual was not present in the previous generation"
        );
    }
}

#[test]
fn report_carries_ranked_survivor_scores() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(3);
    let mut optimizer = GeneticOptimizer::new(&gene_space, config, &mut rng).unwrap();

    let report = optimizer.step(&mut rng).unwrap();
    assert_eq!(report.generation, 1);
    assert_eq!(report.survivor_scores.len(), config.survivors);
    assert!(report.survivor_scores.iter().all(|&s| s <= config.num_games));
    assert!(
        report
            .survivor_scores
            .windows(2)
            .all(|pair| pair[0] >= pair[1]),
        "survivor scores must be ranked best first"
    );
    assert_eq!(report.best_score(), report.survivor_scores[0]);
}

#[test]
fn run_executes_the_configured_number_of_generations() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(12);
    let mut optimizer = GeneticOptimizer::new(&gene_space, small_config(), &mut rng).unwrap();

    let mut reports = 0;
    optimizer.run(&mut rng, |_| reports += 1).unwrap();
    assert_eq!(reports, 3);
    assert_eq!(optimizer.generations_run(), 3);
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();

    let run = |seed: u64| -> Vec<Vec<usize>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut optimizer =
            GeneticOptimizer::new(&gene_space, small_config(), &mut rng).unwrap();
        let mut scores = Vec::new();
        optimizer
            .run(&mut rng, |report| scores.push(report.survivor_scores.clone()))
            .unwrap();
        scores
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn children_cover_the_whole_gene_space_with_legal_moves() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(5);
    let parent1 = TableStrategy::random(&gene_space, &mut rng).unwrap();
    let parent2 = TableStrategy::random(&gene_space, &mut rng).unwrap();

    let child = breed(&parent1, &parent2, &gene_space, 0.02, &mut rng).unwrap();
    assert_eq!(child.len(), gene_space.len());
    for pos in &gene_space {
        let index = child.get(pos).unwrap();
        assert!(pos.is_blank(index));
    }
}

#[test]
fn breeding_does_not_mutate_parents() {
    let positions = ReachablePositions::enumerate().unwrap();
    let gene_space = positions.gene_space();
    let mut rng = StdRng::seed_from_u64(6);
    let parent1 = TableStrategy::random(&gene_space, &mut rng).unwrap();
    let parent2 = TableStrategy::random(&gene_space, &mut rng).unwrap();
    let snapshot1 = parent1.clone();
    let snapshot2 = parent2.clone();

    let _child = breed(&parent1, &parent2, &gene_space, 0.5, &mut rng).unwrap();
    assert_eq!(parent1, snapshot1);
    assert_eq!(parent2, snapshot2);
}
