//! Defines the `CompassDirection` enum, mapping a wind direction in degrees to one of the
//! eight cardinal and intercardinal compass labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight 45° compass sectors, centered on N (0°), NE (45°), ... NW (315°).
///
/// # Examples
///
/// ```rust
/// use windscope::CompassDirection;
///
/// assert_eq!(CompassDirection::from_degrees(0.0), CompassDirection::N);
/// assert_eq!(CompassDirection::from_degrees(23.0), CompassDirection::NE);
/// assert_eq!(CompassDirection::from_degrees(180.0), CompassDirection::S);
/// assert_eq!(CompassDirection::from_degrees(360.0), CompassDirection::N);
/// assert_eq!(CompassDirection::SW.to_string(), "SW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    /// All sectors, ordered clockwise starting at north.
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];

    /// Maps a direction in degrees (clockwise from true north) to the nearest sector.
    ///
    /// The sector index is `round(degrees / 45) mod 8`. Exact half-way values such as
    /// 22.5° go to the next sector clockwise, and 360° wraps back to `N`. Values outside
    /// `[0, 360)` are wrapped with a Euclidean modulo, so -45° is `NW`.
    pub fn from_degrees(degrees: f64) -> Self {
        let index = (degrees / 45.0).round() as i64;
        Self::ALL[index.rem_euclid(8) as usize]
    }

    /// The center of the sector in degrees.
    pub fn degrees(&self) -> f64 {
        (*self as u8) as f64 * 45.0
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NE => "NE",
            CompassDirection::E => "E",
            CompassDirection::SE => "SE",
            CompassDirection::S => "S",
            CompassDirection::SW => "SW",
            CompassDirection::W => "W",
            CompassDirection::NW => "NW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
