// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for viewport construction.

use core::fmt;

/// Error returned when an [`OrbitViewport`](crate::OrbitViewport) cannot be
/// built from the given parameters.
///
/// Every variant is a caller or configuration error. The engine never clamps
/// or corrects parameters on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// Width or height is zero.
    InvalidSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Camera distance is not strictly positive.
    InvalidDistance(f64),
    /// Field of view is not strictly between 0 and 180 degrees.
    InvalidFov(f64),
    /// Clip planes do not satisfy `0 < near < far`.
    InvalidClipPlanes {
        /// Near clip distance.
        near: f64,
        /// Far clip distance.
        far: f64,
    },
    /// Zoom is not strictly positive.
    InvalidZoom(f64),
    /// The up vector is zero or parallel to the viewing direction.
    InvalidUp,
    /// A parameter is NaN or infinite.
    NonFinite(&'static str),
    /// The pixel-projection matrix cannot be inverted.
    ///
    /// Besides truly degenerate frusta, this is also reported when valid but
    /// extreme parameters (for example a zoom around `1e-110`, or clip planes
    /// spanning many orders of magnitude) make the determinant underflow to
    /// zero or the inverse overflow in `f64`.
    SingularProjection,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size {width}x{height} must be non-zero")
            }
            Self::InvalidDistance(d) => write!(f, "camera distance {d} must be positive"),
            Self::InvalidFov(fov) => {
                write!(f, "field of view {fov} must be between 0 and 180 degrees")
            }
            Self::InvalidClipPlanes { near, far } => {
                write!(
                    f,
                    "clip planes near={near} far={far} must satisfy 0 < near < far"
                )
            }
            Self::InvalidZoom(z) => write!(f, "zoom {z} must be positive"),
            Self::InvalidUp => {
                f.write_str("up vector must be non-zero and not parallel to the view direction")
            }
            Self::NonFinite(name) => write!(f, "parameter `{name}` must be finite"),
            Self::SingularProjection => f.write_str("pixel-projection matrix is not invertible"),
        }
    }
}

impl core::error::Error for ViewportError {}

/// Error returned when parsing an [`OrbitAxis`](crate::OrbitAxis) from a string
/// other than `"Y"` or `"Z"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOrbitAxisError;

impl fmt::Display for ParseOrbitAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("orbit axis must be \"Y\" or \"Z\"")
    }
}

impl core::error::Error for ParseOrbitAxisError {}
