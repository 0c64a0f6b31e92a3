//! Basic example of using the Binairo engine

use binairo_core::{enumerate, is_valid_grid, Enumerator, EnumeratorConfig, Generator, Line};

fn main() {
    // Enumerate a few 6x6 solutions
    println!("First three 6x6 solutions:\n");
    for grid in enumerate(6).expect("6 is a valid dimension").take(3) {
        for row in grid.rows() {
            let cells: Vec<String> = row.cells().iter().map(|c| c.to_string()).collect();
            println!("{}", cells.join(" "));
        }
        println!();
    }

    // Inspect the row catalog
    let enumerator = Enumerator::new(EnumeratorConfig::new(6)).expect("valid config");
    println!("Valid 6-cell rows: {}", enumerator.catalog().len());
    println!("Total 6x6 solutions: {}", enumerator.solutions().count());

    // Verify a grid produced elsewhere
    let rows: Vec<Line> = ["1001", "0110", "0101", "1010"]
        .iter()
        .filter_map(|r| Line::from_string(r))
        .collect();
    println!("\nHand-made 4x4 grid valid: {:?}", is_valid_grid(&rows));

    // Draw a random solution
    let mut generator = Generator::with_seed(8, 42).expect("8 is a valid dimension");
    if let Some(grid) = generator.generate() {
        println!("\nRandom 8x8 solution:");
        for row in grid.rows() {
            let cells: Vec<String> = row.cells().iter().map(|c| c.to_string()).collect();
            println!("{}", cells.join(" "));
        }
    }
}
