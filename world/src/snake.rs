//! Snake tokens and the unordered collection that stores them.

use snake_pit_core::{Bounds, CellCoord, Direction};

/// A single snake. Snakes carry no identity beyond their cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Snake {
    cell: CellCoord,
}

impl Snake {
    pub(crate) const fn new(cell: CellCoord) -> Self {
        Self { cell }
    }

    pub(crate) const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Moves one cell in `direction`, staying put when the wall is in the way.
    pub(crate) fn step(&mut self, direction: Direction, bounds: Bounds) {
        if let Some(next) = self.cell.step(direction, 1) {
            if bounds.contains(next) {
                self.cell = next;
            }
        }
    }
}

/// Unordered, growable snake population capped at a configured size.
#[derive(Clone, Debug)]
pub(crate) struct Nest {
    snakes: Vec<Snake>,
    capacity: usize,
}

impl Nest {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            snakes: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.snakes.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.snakes.len() >= self.capacity
    }

    pub(crate) fn push(&mut self, snake: Snake) {
        self.snakes.push(snake);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter()
    }

    pub(crate) fn count_at(&self, cell: CellCoord) -> usize {
        self.snakes.iter().filter(|snake| snake.cell() == cell).count()
    }

    /// Removes one snake on `cell`.
    ///
    /// Which of several co-located snakes goes is unspecified, and the
    /// removal swaps the last snake into the vacated slot, so storage order
    /// is not preserved.
    pub(crate) fn remove_one_at(&mut self, cell: CellCoord) -> bool {
        let Some(index) = self.snakes.iter().position(|snake| snake.cell() == cell) else {
            return false;
        };
        let _ = self.snakes.swap_remove(index);
        true
    }

    /// Steps the i-th snake in `directions[i]`.
    pub(crate) fn advance(&mut self, directions: &[Direction], bounds: Bounds) {
        for (snake, direction) in self.snakes.iter_mut().zip(directions) {
            snake.step(*direction, bounds);
        }
    }
}
