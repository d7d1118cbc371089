// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::ParseOrbitAxisError;

/// Axis with full 360° orbit freedom.
///
/// The orbit rotation (`rotation_orbit`) is applied about this axis after the
/// `rotation_x` tilt. See [`crate::OrbitViewportParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrbitAxis {
    /// Orbit about the vertical (Y) axis.
    Y,
    /// Orbit about the depth (Z) axis.
    #[default]
    Z,
}

impl fmt::Display for OrbitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Y => "Y",
            Self::Z => "Z",
        })
    }
}

impl FromStr for OrbitAxis {
    type Err = ParseOrbitAxisError;

    /// Parses `"Y"` or `"Z"` (case-insensitive). Any other value is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            _ => Err(ParseOrbitAxisError),
        }
    }
}

/// Vertical convention of pixel coordinates.
///
/// Native pixels grow upward, so [`PixelOrigin::TopLeft`] is the flip to the
/// usual UI convention. This is the reverse of deck.gl, whose base viewport
/// produces top-left pixels natively and flips to bottom-left on request.
///
/// This mode is consulted by [`crate::OrbitViewport::project`],
/// [`crate::OrbitViewport::unproject`] and the other pixel-space queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PixelOrigin {
    /// Pixel `y` grows upward from the bottom edge of the screen.
    ///
    /// This is the native convention of the pixel-projection matrix.
    #[default]
    BottomLeft,
    /// Pixel `y` grows downward from the top edge of the screen.
    ///
    /// Coordinates are flipped with `y' = height - y` after projection (and
    /// before unprojection).
    TopLeft,
}

impl PixelOrigin {
    /// Converts `y` between this convention and the native one.
    ///
    /// The flip is its own inverse, so the same call serves both directions.
    #[must_use]
    pub fn flip_y(self, y: f64, height: f64) -> f64 {
        match self {
            Self::BottomLeft => y,
            Self::TopLeft => height - y,
        }
    }
}
