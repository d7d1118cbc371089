// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix derivation shared by orbit-style cameras.
//!
//! All matrices are column-major [`DMat4`] values acting on column vectors, so
//! `a * b` applies `b` first. Angles are in degrees.

use glam::{DMat4, DVec3};

use crate::modes::OrbitAxis;

const DEGREES_TO_RADIANS: f64 = core::f64::consts::PI / 180.0;

/// Converts degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

/// Rotation applied to world geometry for the given tilt and orbit angles.
///
/// The angles describe how far the scene appears rotated relative to a fixed
/// camera, so both are negated: `Rx(-rotation_x) * Rz(-rotation_orbit)` (or
/// `Ry` when orbiting about [`OrbitAxis::Y`]).
#[must_use]
pub fn rotation_matrix(rotation_x: f64, rotation_orbit: f64, orbit_axis: OrbitAxis) -> DMat4 {
    let tilt = DMat4::from_rotation_x(to_radians(-rotation_x));
    let orbit = to_radians(-rotation_orbit);
    let orbit = match orbit_axis {
        OrbitAxis::Z => DMat4::from_rotation_z(orbit),
        OrbitAxis::Y => DMat4::from_rotation_y(orbit),
    };
    tilt * orbit
}

/// Moves `look_at` to the origin, then scales uniformly by `zoom`.
#[must_use]
pub fn translate_scale_matrix(zoom: f64, look_at: DVec3) -> DMat4 {
    DMat4::from_scale(DVec3::splat(zoom)) * DMat4::from_translation(-look_at)
}

/// Complete orbit view matrix.
///
/// Right-handed look-at from `(0, 0, distance)` toward the origin, applied
/// after the rotation, which is applied after the translate/scale step:
/// `look_at * (rotation * translate_scale)`.
#[must_use]
pub fn orbit_view_matrix(
    distance: f64,
    rotation_x: f64,
    rotation_orbit: f64,
    orbit_axis: OrbitAxis,
    look_at: DVec3,
    up: DVec3,
    zoom: f64,
) -> DMat4 {
    let rotation = rotation_matrix(rotation_x, rotation_orbit, orbit_axis);
    let translate_scale = translate_scale_matrix(zoom, look_at);
    let base = DMat4::look_at_rh(DVec3::new(0.0, 0.0, distance), DVec3::ZERO, up);
    base * (rotation * translate_scale)
}

/// OpenGL-style perspective projection (NDC depth in `[-1, 1]`).
#[must_use]
pub fn perspective_matrix(fov: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    DMat4::perspective_rh_gl(to_radians(fov), aspect, near, far)
}

/// Maps normalized device coordinates onto `[0, width] x [0, height]` pixels.
///
/// `y` grows upward (bottom-left origin). Depth passes through unchanged.
#[must_use]
pub fn ndc_to_pixel_matrix(width: f64, height: f64) -> DMat4 {
    DMat4::from_scale(DVec3::new(width / 2.0, height / 2.0, 1.0))
        * DMat4::from_translation(DVec3::new(1.0, 1.0, 0.0))
}
