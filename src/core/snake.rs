//! Snake body - fixed-capacity ring buffer of occupied cells
//!
//! Uses a flat array for zero-allocation; capacity is the full grid area, the
//! theoretical maximum body length. The occupied window is `segments[..length]`
//! and `head_index` wraps at the window's end on plain movement, so growth
//! shifts the older tail segments up one slot to open a gap for the new head.

use crate::core::grid;
use crate::types::{Direction, Position, GRID_AREA, INITIAL_SNAKE_LENGTH};

#[derive(Debug, Clone)]
pub struct Snake {
    /// Occupied cells live in `segments[..length]`; slots past `length` are free.
    segments: [Position; GRID_AREA],
    length: usize,
    head_index: usize,
    direction: Direction,
}

impl Snake {
    /// Create the session-start snake: four cells laid out horizontally,
    /// head at (3, 0), heading right.
    pub fn new() -> Self {
        let mut segments = [Position::new(0, 0); GRID_AREA];
        for (x, segment) in segments[..INITIAL_SNAKE_LENGTH].iter_mut().enumerate() {
            segment.x = x as i32;
        }
        Self {
            segments,
            length: INITIAL_SNAKE_LENGTH,
            head_index: INITIAL_SNAKE_LENGTH - 1,
            direction: Direction::Right,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply a direction-change request.
    ///
    /// A request that is the exact opposite of the current heading is silently
    /// discarded, so the snake cannot reverse into its own neck. Returns
    /// whether the heading changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// The current head cell.
    pub fn head(&self) -> Position {
        self.segments[self.head_index]
    }

    /// The cell the head will occupy after the next advance.
    pub fn next_head(&self) -> Position {
        self.head().moved(self.direction)
    }

    /// Advance one cell without growing: the head pointer moves one slot
    /// forward (wrapping at the occupied window's end) and the old tail cell
    /// is implicitly abandoned by being overwritten.
    pub fn move_ahead(&mut self) {
        let next = self.next_head();
        self.head_index = if self.head_index == self.length - 1 {
            0
        } else {
            self.head_index + 1
        };
        self.segments[self.head_index] = next;
    }

    /// Advance one cell and keep the tail: the older segments between the head
    /// and the window's end shift up one slot to open a gap, the new head is
    /// written into the gap, and the window widens by one.
    pub fn grow(&mut self) {
        assert!(self.length < GRID_AREA, "snake length exceeded grid capacity");
        let next = self.next_head();
        self.segments
            .copy_within(self.head_index + 1..self.length, self.head_index + 2);
        self.head_index += 1;
        self.segments[self.head_index] = next;
        self.length += 1;
    }

    /// True iff any non-head occupied cell equals the head cell.
    /// O(length) scan; length is bounded by the grid area.
    pub fn self_intersects(&self) -> bool {
        let head = self.head();
        self.segments[..self.length]
            .iter()
            .enumerate()
            .any(|(i, &segment)| i != self.head_index && segment == head)
    }

    /// True iff the head has left the playfield.
    pub fn is_out_of_bounds(&self) -> bool {
        !grid::in_bounds(self.head())
    }

    /// Occupied cells, for rendering and collision queries.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments[..self.length].iter().copied()
    }

    #[cfg(test)]
    pub fn head_index(&self) -> usize {
        self.head_index
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
