//! Snake body model.
//!
//! The body is an ordered sequence of cells with the head at index 0 and the
//! tail at the last index. A freshly spawned snake has every segment stacked
//! on the head cell; the segments unfold one per move.

use std::collections::VecDeque;

use crate::types::{Bounds, Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    /// Heading used by the next move.
    direction: Direction,
    /// Heading of the last executed move.
    moved: Direction,
}

impl Snake {
    /// Spawn `length` segments stacked on `head`.
    pub fn spawn(head: Position, length: usize, direction: Direction) -> Self {
        let length = length.max(1);
        Self {
            body: std::iter::repeat(head).take(length).collect(),
            direction,
            moved: direction,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            moved: direction,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Request a new heading.
    ///
    /// A reversal is rejected against both the pending heading and the heading
    /// of the last move, so two quick turns within one tick cannot fold the
    /// snake back onto its neck. Returns whether the heading changed.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() || dir == self.moved.opposite() {
            return false;
        }
        let changed = dir != self.direction;
        self.direction = dir;
        changed
    }

    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Would moving the head to `pos` hit a wall or the body?
    ///
    /// The last segment moves away during the same step, so its cell only
    /// counts when another segment is stacked on it.
    pub fn would_collide(&self, pos: Position, bounds: Bounds) -> bool {
        if !bounds.contains(pos) {
            return true;
        }
        self.body.iter().take(self.body.len() - 1).any(|&p| p == pos)
    }

    /// Shift every segment onto its predecessor and put the head at `new_head`.
    ///
    /// Returns the cell the tail occupied before the shift.
    pub fn shift_to(&mut self, new_head: Position) -> Position {
        let old_tail = self.tail();
        self.body.pop_back();
        self.body.push_front(new_head);
        self.moved = self.direction;
        old_tail
    }

    /// Append `count` copies of the tail cell.
    pub fn grow(&mut self, count: usize) {
        let tail = self.tail();
        self.body.extend(std::iter::repeat(tail).take(count));
    }
}
