//! Hex geometry with axial coordinates

use serde::{Deserialize, Serialize};

/// Axial hex coordinates (cube `s = -q - r` is implied)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implied third cube coordinate
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance between two hexes, saturating at `u32::MAX`
    pub fn distance_to(&self, other: Hex) -> u32 {
        let dq = (self.q as i64 - other.q as i64).abs();
        let dr = (self.r as i64 - other.r as i64).abs();
        let ds = ((self.q as i64 + self.r as i64) - (other.q as i64 + other.r as i64)).abs();
        // dq + dr + ds is always even for axial pairs
        u32::try_from((dq + dr + ds) / 2).unwrap_or(u32::MAX)
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Hex {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Hex::new(self.q + dq, self.r + dr)
    }

    /// All six neighbors, unfiltered
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        (0..6).map(move |dir| self.neighbor(dir))
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Hex::new(q, r)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Round fractional axial coordinates to the nearest hex.
///
/// All three cube components are rounded; the one with the largest rounding
/// error is then rebuilt from the other two so that `q + r + s == 0`.
/// Halves round to even.
pub fn round_fractional(qf: f64, rf: f64) -> Hex {
    let sf = -qf - rf;

    let mut q = qf.round_ties_even();
    let mut r = rf.round_ties_even();
    let s = sf.round_ties_even();

    let q_diff = (q - qf).abs();
    let r_diff = (r - rf).abs();
    let s_diff = (s - sf).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }
    // else: s absorbs the error and is dropped

    Hex::new(q as i32, r as i32)
}

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Pixel centre of a hex for a pointy-top layout with the given hex radius.
/// Any screen offset is the caller's concern.
pub fn hex_to_pixel(hex: Hex, size: f64) -> (f64, f64) {
    let x = size * (SQRT_3 * hex.q as f64 + SQRT_3 / 2.0 * hex.r as f64);
    let y = size * (1.5 * hex.r as f64);
    (x, y)
}

/// Fractional axial coordinates under a pointy-top layout
pub fn pixel_to_fractional(x: f64, y: f64, size: f64) -> (f64, f64) {
    let q = (SQRT_3 / 3.0 * x - y / 3.0) / size;
    let r = (2.0 / 3.0 * y) / size;
    (q, r)
}

/// Map a pixel position (relative to the grid origin) to the hex under it
pub fn pixel_to_hex(x: f64, y: f64, size: f64) -> Hex {
    let (q, r) = pixel_to_fractional(x, y, size);
    round_fractional(q, r)
}
