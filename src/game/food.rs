use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::grid::{Grid, Position};

/// Placement failed because no cell on the grid is free
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoFreeCell;

impl std::fmt::Display for NoFreeCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no free cell left on the grid")
    }
}

impl std::error::Error for NoFreeCell {}

/// Produces collision-free random food positions
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic spawner for tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a uniformly random grid cell outside `excluded`.
    ///
    /// Rejection sampling terminates almost surely once at least one free
    /// cell exists; a fully covered grid is reported as `NoFreeCell` instead
    /// of looping forever.
    pub fn place<I>(&mut self, grid: &Grid, excluded: I) -> Result<Position, NoFreeCell>
    where
        I: IntoIterator<Item = Position>,
    {
        let occupied: HashSet<Position> = excluded
            .into_iter()
            .filter(|pos| grid.contains(*pos))
            .collect();

        if occupied.len() >= grid.area() {
            return Err(NoFreeCell);
        }

        loop {
            let pos = grid.random_position(&mut self.rng);
            if !occupied.contains(&pos) {
                return Ok(pos);
            }
        }
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_never_lands_on_excluded_cells() {
        let grid = Grid::new(6);
        let mut spawner = FoodSpawner::from_seed(7);

        let excluded: Vec<Position> = (0..6).map(|x| Position::new(x, 3)).collect();

        for _ in 0..200 {
            let pos = spawner.place(&grid, excluded.iter().copied()).unwrap();
            assert!(grid.contains(pos));
            assert!(!excluded.contains(&pos));
        }
    }

    #[test]
    fn test_full_grid_is_an_error() {
        let grid = Grid::new(4);
        let mut spawner = FoodSpawner::from_seed(0);

        let all_cells: Vec<Position> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Position::new(x, y)))
            .collect();

        assert_eq!(spawner.place(&grid, all_cells), Err(NoFreeCell));
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(3);
        let mut spawner = FoodSpawner::from_seed(1);

        let excluded: Vec<Position> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Position::new(x, y)))
            .filter(|pos| *pos != Position::new(2, 2))
            .collect();

        let pos = spawner.place(&grid, excluded).unwrap();
        assert_eq!(pos, Position::new(2, 2));
    }

    #[test]
    fn test_out_of_grid_exclusions_ignored() {
        let grid = Grid::new(2);
        let mut spawner = FoodSpawner::from_seed(2);

        // Off-grid positions must not count toward grid coverage.
        let excluded = vec![
            Position::new(-1, -1),
            Position::new(5, 5),
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
        ];

        let pos = spawner.place(&grid, excluded).unwrap();
        assert_eq!(pos, Position::new(1, 1));
    }

    proptest! {
        #[test]
        fn prop_placement_avoids_exclusions(
            seed in any::<u64>(),
            cells in prop::collection::hash_set((0i32..8, 0i32..8), 0..40),
        ) {
            let grid = Grid::new(8);
            let mut spawner = FoodSpawner::from_seed(seed);
            let excluded: Vec<Position> =
                cells.iter().map(|&(x, y)| Position::new(x, y)).collect();

            let pos = spawner.place(&grid, excluded.iter().copied()).unwrap();
            prop_assert!(grid.contains(pos));
            prop_assert!(!excluded.contains(&pos));
        }
    }
}
