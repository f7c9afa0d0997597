//! Board region: a `width x height` rectangle of axial coordinates

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::hex::Hex;

/// Fixed set of playable hexes: every `(q, r)` with `0 <= q < width` and
/// `0 <= r < height`. On screen this renders as a skewed parallelogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidBoardSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of hexes on the board
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this hex is on the board
    pub fn contains(&self, hex: Hex) -> bool {
        (0..self.width).contains(&hex.q) && (0..self.height).contains(&hex.r)
    }

    /// Iterate every hex on the board, column by column
    pub fn coordinates(&self) -> impl Iterator<Item = Hex> + '_ {
        (0..self.width).flat_map(move |q| (0..self.height).map(move |r| Hex::new(q, r)))
    }

    /// Adjacent hexes that are on the board
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> + '_ {
        hex.neighbors().filter(move |&n| self.contains(n))
    }

    /// All board hexes within `radius` of `center` (center included)
    pub fn coordinates_within(&self, center: Hex, radius: u32) -> Vec<Hex> {
        self.coordinates()
            .filter(|&h| center.distance_to(h) <= radius)
            .collect()
    }

    pub fn distance(&self, a: Hex, b: Hex) -> u32 {
        a.distance_to(b)
    }
}
