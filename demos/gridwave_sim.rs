//! Offline routing demo.
//!
//! Run: cargo run --bin gridwave-sim [wave|bestfirst]

use gridwave_core::{Coord, Grid};
use gridwave_paths::{
    Algorithm, RouteQuery, Traversal, Walkable, create_grid, flood, manhattan, route, set_cell,
};

const SIZE: i32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Algorithm>()?,
        None => Algorithm::default(),
    };

    let mut grid = create_grid(SIZE, SIZE, 0u8)?;
    for c in [(4, 1), (3, 1), (3, 2), (3, 3)] {
        set_cell(&mut grid, Coord::from(c), 1);
    }
    draw(&grid);

    let (start, goal) = (Coord::new(4, 0), Coord::new(0, 4));
    let floor = Walkable(|v: &u8, _: Coord| *v == 0);
    let query = RouteQuery::new(start, goal).with_algorithm(algorithm);
    let found = route(&grid, &query, &floor)?;
    println!("{algorithm} route {start} -> {goal}:");
    for c in &found {
        print!(" {c}");
    }
    println!();
    let labels: Vec<String> = found.directions().iter().map(|d| d.to_string()).collect();
    println!("directions: {}", labels.join(" "));
    println!(
        "steps: {} (manhattan {})",
        found.distance(),
        manhattan(start, goal)
    );

    let mut t = Traversal::new(&grid, start);
    let straight = t.to(goal);
    println!("straight line: {} steps", straight.distance());

    let mut plus = create_grid(SIZE, SIZE, 0u8)?;
    for c in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)] {
        set_cell(&mut plus, Coord::from(c), 1);
    }
    let region = flood(&plus, Coord::new(2, 2), |&v, _| v > 0);
    println!("flood fill from (2, 2): {} cells", region.len());

    Ok(())
}

fn draw(grid: &Grid<u8>) {
    for j in 0..SIZE {
        let row: String = (0..SIZE)
            .map(|i| match grid.get(Coord::new(i, j)) {
                Some(0) => '.',
                Some(_) => '#',
                None => ' ',
            })
            .collect();
        println!("{row}");
    }
}
