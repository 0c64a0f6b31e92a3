//! End-to-end checks over the public API

use binairo_core::{
    count_solutions, enumerate, is_valid_grid, is_valid_line, BinairoError, Dimension, Enumerator,
    EnumeratorConfig, Grid, Line, Strategy,
};
use std::collections::HashSet;

#[test]
fn test_every_solution_is_self_consistent() {
    for size in [2, 4, 6] {
        let dimension = Dimension::new(size).unwrap();
        for grid in enumerate(size).unwrap() {
            for row in grid.rows() {
                assert_eq!(is_valid_line(row, dimension), Ok(true));
            }
            assert_eq!(is_valid_grid(grid.rows()), Ok(true));
            assert!(grid.is_solution());
        }
    }
}

#[test]
fn test_known_solution_counts() {
    assert_eq!(enumerate(2).unwrap().count(), 2);
    assert_eq!(enumerate(4).unwrap().count(), 72);
    assert_eq!(enumerate(6).unwrap().count(), 4140);
}

#[test]
fn test_solutions_are_distinct_and_stable() {
    let first: Vec<Grid> = enumerate(6).unwrap().collect();
    let second: Vec<Grid> = enumerate(6).unwrap().collect();
    assert_eq!(first, second);

    let unique: HashSet<&Grid> = first.iter().collect();
    assert_eq!(unique.len(), first.len());
}

#[test]
fn test_solution_set_closed_under_transpose() {
    let solutions: HashSet<Grid> = enumerate(4).unwrap().collect();
    for grid in &solutions {
        assert!(solutions.contains(&grid.transpose()));
    }
}

#[test]
fn test_solutions_in_canonical_order() {
    let bits: Vec<Vec<Vec<u8>>> = enumerate(4).unwrap().map(|g| g.to_bits()).collect();
    for pair in bits.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_brute_force_matches_backtracking() {
    let config = EnumeratorConfig::new(4).with_strategy(Strategy::BruteForce);
    let brute: Vec<Grid> = Enumerator::new(config).unwrap().solutions().collect();
    let pruned: Vec<Grid> = enumerate(4).unwrap().collect();
    assert_eq!(brute.len(), 72);
    assert_eq!(brute, pruned);
}

#[test]
fn test_invalid_dimensions_fail_before_search() {
    for size in [0, 1, 3] {
        assert!(matches!(
            enumerate(size),
            Err(BinairoError::InvalidDimension { .. })
        ));
    }
    assert!(count_solutions(5, 10).is_err());
}

#[test]
fn test_lazy_sequence_can_be_abandoned() {
    let enumerator = Enumerator::new(EnumeratorConfig::new(6)).unwrap();
    let mut solutions = enumerator.solutions();
    let first = solutions.next().unwrap();
    drop(solutions);

    // a fresh run starts over from the same first solution
    assert_eq!(enumerator.solutions().next(), Some(first));
}

#[test]
fn test_line_examples() {
    let four = Dimension::new(4).unwrap();
    let six = Dimension::new(6).unwrap();
    let line = |s: &str| Line::from_string(s).unwrap();

    assert_eq!(is_valid_line(&line("0011"), four), Ok(true));
    assert_eq!(is_valid_line(&line("0101"), four), Ok(true));
    assert_eq!(is_valid_line(&line("0111"), four), Ok(false));
    assert_eq!(is_valid_line(&line("100011"), six), Ok(false));
}

#[test]
fn test_grid_examples() {
    let grid = |rows: [&str; 4]| -> Vec<Line> {
        rows.iter().map(|r| Line::from_string(r).unwrap()).collect()
    };

    assert_eq!(is_valid_grid(&grid(["1001", "0110", "0101", "1010"])), Ok(true));
    assert_eq!(is_valid_grid(&grid(["1001", "0110", "0101", "1001"])), Ok(false));
    assert_eq!(is_valid_grid(&grid(["1001", "0110", "0110", "1001"])), Ok(false));
}
