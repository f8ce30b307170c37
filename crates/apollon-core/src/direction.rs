//! Attachment directions for relationship endpoints.
//!
//! # Overview
//!
//! A relationship endpoint names the port of its element it attaches to with
//! one of twelve [`Direction`]s. Each direction belongs to one side of the
//! element boundary:
//!
//! ```text
//!           Upleft   Up   Upright
//!          ┌───────┬────┬───────┐
//!  Topleft │                    │ Topright
//!     Left │                    │ Right
//! Bottomleft                    │ Bottomright
//!          └───────┴────┴───────┘
//!         Downleft  Down  Downright
//! ```
//!
//! The wire strings are the variant names (`"Up"`, `"Topleft"`, ...).
//!
//! [`MessageDirection`] is unrelated to ports: it says which way a
//! communication message travels along its link.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Boundary, Point};

/// One of the twelve symbolic endpoint directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Upright,
    Upleft,
    Downright,
    Downleft,
    Topright,
    Topleft,
    Bottomright,
    Bottomleft,
}

/// The boundary side a [`Direction`] attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Returns true for the left and right sides.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 12] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Upright,
        Direction::Upleft,
        Direction::Downright,
        Direction::Downleft,
        Direction::Topright,
        Direction::Topleft,
        Direction::Bottomright,
        Direction::Bottomleft,
    ];

    /// Returns the opposite direction.
    ///
    /// Total and involutive: `d.inverted().inverted() == d` for every `d`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollon_core::direction::Direction;
    /// assert_eq!(Direction::Left.inverted(), Direction::Right);
    /// assert_eq!(Direction::Topleft.inverted(), Direction::Bottomleft);
    /// ```
    pub fn inverted(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Upleft => Direction::Upright,
            Direction::Upright => Direction::Upleft,
            Direction::Downleft => Direction::Downright,
            Direction::Downright => Direction::Downleft,
            Direction::Topleft => Direction::Bottomleft,
            Direction::Bottomleft => Direction::Topleft,
            Direction::Topright => Direction::Bottomright,
            Direction::Bottomright => Direction::Topright,
        }
    }

    /// Returns the boundary side this direction attaches to.
    pub fn side(self) -> Side {
        match self {
            Direction::Up | Direction::Upleft | Direction::Upright => Side::Top,
            Direction::Down | Direction::Downleft | Direction::Downright => Side::Bottom,
            Direction::Left | Direction::Topleft | Direction::Bottomleft => Side::Left,
            Direction::Right | Direction::Topright | Direction::Bottomright => Side::Right,
        }
    }

    /// Returns the attachment port on `bounds` for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollon_core::{direction::Direction, geometry::{Boundary, Point}};
    /// let bounds = Boundary::new(0.0, 0.0, 200.0, 100.0);
    /// assert_eq!(Direction::Up.port_position(bounds), Point::new(100.0, 0.0));
    /// assert_eq!(Direction::Upright.port_position(bounds), Point::new(150.0, 0.0));
    /// assert_eq!(Direction::Bottomleft.port_position(bounds), Point::new(0.0, 75.0));
    /// ```
    pub fn port_position(self, bounds: Boundary) -> Point {
        let (x, y) = (bounds.x(), bounds.y());
        let (w, h) = (bounds.width(), bounds.height());
        match self {
            Direction::Up => Point::new(x + w / 2.0, y),
            Direction::Upleft => Point::new(x + w / 4.0, y),
            Direction::Upright => Point::new(x + w * 3.0 / 4.0, y),
            Direction::Down => Point::new(x + w / 2.0, y + h),
            Direction::Downleft => Point::new(x + w / 4.0, y + h),
            Direction::Downright => Point::new(x + w * 3.0 / 4.0, y + h),
            Direction::Left => Point::new(x, y + h / 2.0),
            Direction::Topleft => Point::new(x, y + h / 4.0),
            Direction::Bottomleft => Point::new(x, y + h * 3.0 / 4.0),
            Direction::Right => Point::new(x + w, y + h / 2.0),
            Direction::Topright => Point::new(x + w, y + h / 4.0),
            Direction::Bottomright => Point::new(x + w, y + h * 3.0 / 4.0),
        }
    }

    /// Infers the side through which a path travelling along `travel` enters
    /// an element.
    ///
    /// Used when an endpoint carries no explicit direction. A path heading
    /// down enters through the top, so the result is [`Direction::Up`].
    /// Returns `None` for the zero vector.
    pub fn entered_by(travel: Point) -> Option<Direction> {
        if travel.is_zero() {
            return None;
        }
        let direction = if travel.x().abs() > travel.y().abs() {
            if travel.x() > 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if travel.y() > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(direction)
    }

    /// Returns the wire string of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Upright => "Upright",
            Direction::Upleft => "Upleft",
            Direction::Downright => "Downright",
            Direction::Downleft => "Downleft",
            Direction::Topright => "Topright",
            Direction::Topleft => "Topleft",
            Direction::Bottomright => "Bottomright",
            Direction::Bottomleft => "Bottomleft",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel direction of a communication message along its link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    /// From the link source towards the target
    Source,
    /// From the link target towards the source
    Target,
}
