use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::Grid;
use super::state::{Position, Snake};

/// Pick a uniformly random cell not covered by the snake.
///
/// Rejection sampling handles the common case. Once it has missed as many
/// times as there are cells, the free cells are enumerated and one is
/// chosen directly, so a crowded board still terminates. Returns `None`
/// only when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Position> {
    for _ in 0..grid.cells() {
        let pos = grid.random_cell(rng);
        if !snake.collides_with(pos) {
            return Some(pos);
        }
    }

    grid.positions()
        .filter(|pos| !snake.collides_with(*pos))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_food_avoids_snake() {
        let grid = Grid::new(5, 5);
        let snake = Snake::from_segments(
            (0..5).map(|x| Position::new(x, 2)).collect(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let food = place_food(&snake, &grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.collides_with(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(4, 4);
        let free = Position::new(2, 3);
        let body = grid.positions().filter(|p| *p != free).collect();
        let snake = Snake::from_segments(body).unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        assert_eq!(place_food(&snake, &grid, &mut rng), Some(free));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let grid = Grid::new(3, 2);
        let snake = Snake::from_segments(grid.positions().collect()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(place_food(&snake, &grid, &mut rng), None);
    }
}
