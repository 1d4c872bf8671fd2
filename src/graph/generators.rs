use crate::waypoint::{Position, Waypoint, WaypointField};
use rand::prelude::*;

/// Generates a field of `n` intermediate waypoints scattered uniformly over a
/// `width` x `height` area. The start sits at the origin corner and the end at
/// the opposite corner; ids are 0 for start, 1 for end and 2.. for the rest.
pub fn generate_random_field<R: Rng>(
    rng: &mut R,
    n: usize,
    width: f64,
    height: f64,
) -> WaypointField {
    assert!(width > 0.0 && height > 0.0, "area must be positive");

    let start = Waypoint::new(0, Position::new(0.0, 0.0));
    let end = Waypoint::new(1, Position::new(width, height));

    let waypoints = (0..n).map(|i| {
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height);
        Waypoint::new(i as i32 + 2, Position::new(x, y))
    });

    WaypointField::new(start, end).with_waypoints(waypoints.collect::<Vec<_>>())
}

/// Same as [`generate_random_field`] with a fixed seed, for reproducible runs
pub fn generate_seeded_field(seed: u64, n: usize, width: f64, height: f64) -> WaypointField {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_field(&mut rng, n, width, height)
}

/// Generates a `cols` x `rows` lattice with the given spacing. The start is the
/// bottom-left lattice point and the end the top-right one.
pub fn generate_grid_field(cols: usize, rows: usize, spacing: f64) -> WaypointField {
    assert!(cols > 0 && rows > 0, "grid must have at least one point");
    assert!(cols * rows > 1, "grid needs distinct start and end points");

    // Helper function to get the id from grid coordinates
    let get_id = |col: usize, row: usize| -> i32 { (row * cols + col) as i32 };
    let position =
        |col: usize, row: usize| Position::new(col as f64 * spacing, row as f64 * spacing);

    let start = Waypoint::new(get_id(0, 0), position(0, 0));
    let end = Waypoint::new(get_id(cols - 1, rows - 1), position(cols - 1, rows - 1));

    let mut field = WaypointField::new(start, end);
    for row in 0..rows {
        for col in 0..cols {
            let id = get_id(col, row);
            if id != start.id() && id != end.id() {
                field.push(Waypoint::new(id, position(col, row)));
            }
        }
    }
    field
}
