// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use glam::DVec3;

use crate::error::ViewportError;
use crate::modes::OrbitAxis;

/// Default label given to viewports that are not explicitly named.
pub const DEFAULT_VIEWPORT_ID: &str = "orbit-viewport";

/// Construction parameters for an [`OrbitViewport`](crate::OrbitViewport).
///
/// Only the screen extent and camera distance are required; every other field
/// has a default matching [`OrbitViewportParams::new`]. With the `serde`
/// feature enabled, missing fields in a deserialized record fall back to the
/// same defaults.
///
/// Angles are in degrees. Parameters are validated when the viewport is built,
/// not when they are set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrbitViewportParams {
    /// Opaque label. Not used by any computation.
    #[cfg_attr(feature = "serde", serde(default = "default_id"))]
    pub id: String,
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Distance from the eye to the look-at point.
    pub distance: f64,
    /// Tilt about the horizontal (X) axis.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation_x: f64,
    /// Rotation about [`OrbitViewportParams::orbit_axis`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation_orbit: f64,
    /// Axis with full orbit freedom.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orbit_axis: OrbitAxis,
    /// World-space point the camera targets.
    #[cfg_attr(feature = "serde", serde(default))]
    pub look_at: DVec3,
    /// Up direction of the base look-at transform.
    #[cfg_attr(feature = "serde", serde(default = "default_up"))]
    pub up: DVec3,
    /// Vertical field of view.
    #[cfg_attr(feature = "serde", serde(default = "default_fov"))]
    pub fov: f64,
    /// Near clip distance.
    #[cfg_attr(feature = "serde", serde(default = "default_near"))]
    pub near: f64,
    /// Far clip distance.
    #[cfg_attr(feature = "serde", serde(default = "default_far"))]
    pub far: f64,
    /// Uniform scale applied to the scene around the look-at point.
    #[cfg_attr(feature = "serde", serde(default = "default_zoom"))]
    pub zoom: f64,
}

fn default_id() -> String {
    String::from(DEFAULT_VIEWPORT_ID)
}

fn default_up() -> DVec3 {
    DVec3::Y
}

fn default_fov() -> f64 {
    75.0
}

fn default_near() -> f64 {
    1.0
}

fn default_far() -> f64 {
    100.0
}

fn default_zoom() -> f64 {
    1.0
}

impl OrbitViewportParams {
    /// Creates parameters for a `width` x `height` screen with the camera
    /// `distance` units away from the look-at point.
    ///
    /// - No rotation, orbiting about [`OrbitAxis::Z`].
    /// - Looking at the world origin with `+Y` up.
    /// - 75° field of view, clip planes at `1` and `100`, zoom `1`.
    #[must_use]
    pub fn new(width: u32, height: u32, distance: f64) -> Self {
        Self {
            id: default_id(),
            width,
            height,
            distance,
            rotation_x: 0.0,
            rotation_orbit: 0.0,
            orbit_axis: OrbitAxis::default(),
            look_at: DVec3::ZERO,
            up: default_up(),
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
            zoom: default_zoom(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the screen extent.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the camera distance.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the tilt and orbit angles, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotation_x: f64, rotation_orbit: f64) -> Self {
        self.rotation_x = rotation_x;
        self.rotation_orbit = rotation_orbit;
        self
    }

    /// Sets the orbit axis.
    #[must_use]
    pub fn with_orbit_axis(mut self, axis: OrbitAxis) -> Self {
        self.orbit_axis = axis;
        self
    }

    /// Sets the look-at point.
    #[must_use]
    pub fn with_look_at(mut self, look_at: DVec3) -> Self {
        self.look_at = look_at;
        self
    }

    /// Sets the up direction.
    #[must_use]
    pub fn with_up(mut self, up: DVec3) -> Self {
        self.up = up;
        self
    }

    /// Sets the vertical field of view, in degrees.
    #[must_use]
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Sets the near and far clip distances.
    #[must_use]
    pub fn with_clip_planes(mut self, near: f64, far: f64) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Sets the zoom factor.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Returns `width / height`.
    ///
    /// Only meaningful for parameters that pass [`OrbitViewportParams::validate`].
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Checks every construction precondition.
    ///
    /// Pixel-projection invertibility depends on the derived matrices and is
    /// checked separately by [`OrbitViewport::new`](crate::OrbitViewport::new).
    pub fn validate(&self) -> Result<(), ViewportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewportError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("distance", self.distance),
            ("rotation_x", self.rotation_x),
            ("rotation_orbit", self.rotation_orbit),
            ("fov", self.fov),
            ("near", self.near),
            ("far", self.far),
            ("zoom", self.zoom),
        ] {
            if !value.is_finite() {
                return Err(ViewportError::NonFinite(name));
            }
        }
        if !self.look_at.is_finite() {
            return Err(ViewportError::NonFinite("look_at"));
        }
        if !self.up.is_finite() {
            return Err(ViewportError::NonFinite("up"));
        }
        if self.distance <= 0.0 {
            return Err(ViewportError::InvalidDistance(self.distance));
        }
        if self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(ViewportError::InvalidFov(self.fov));
        }
        if self.near <= 0.0 || self.near >= self.far {
            return Err(ViewportError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if self.zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(self.zoom));
        }
        // The base look-at views along -Z; an up vector along Z leaves the
        // camera's right axis undefined.
        if self.up.truncate().length_squared() <= f64::EPSILON * self.up.length_squared() {
            return Err(ViewportError::InvalidUp);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::{DEFAULT_VIEWPORT_ID, OrbitViewportParams};
    use crate::{OrbitAxis, ViewportError};

    #[test]
    fn defaults_match_documented_values() {
        let p = OrbitViewportParams::new(800, 600, 10.0);
        assert_eq!(p.id, DEFAULT_VIEWPORT_ID);
        assert_eq!(p.rotation_x, 0.0);
        assert_eq!(p.rotation_orbit, 0.0);
        assert_eq!(p.orbit_axis, OrbitAxis::Z);
        assert_eq!(p.look_at, DVec3::ZERO);
        assert_eq!(p.up, DVec3::Y);
        assert_eq!(p.fov, 75.0);
        assert_eq!(p.near, 1.0);
        assert_eq!(p.far, 100.0);
        assert_eq!(p.zoom, 1.0);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_each_precondition() {
        let base = OrbitViewportParams::new(800, 600, 10.0);

        assert_eq!(
            base.clone().with_size(800, 0).validate(),
            Err(ViewportError::InvalidSize {
                width: 800,
                height: 0
            })
        );
        assert_eq!(
            base.clone().with_distance(0.0).validate(),
            Err(ViewportError::InvalidDistance(0.0))
        );
        assert_eq!(
            base.clone().with_fov(180.0).validate(),
            Err(ViewportError::InvalidFov(180.0))
        );
        assert_eq!(
            base.clone().with_fov(0.0).validate(),
            Err(ViewportError::InvalidFov(0.0))
        );
        assert_eq!(
            base.clone().with_clip_planes(10.0, 10.0).validate(),
            Err(ViewportError::InvalidClipPlanes {
                near: 10.0,
                far: 10.0
            })
        );
        assert_eq!(
            base.clone().with_clip_planes(0.0, 10.0).validate(),
            Err(ViewportError::InvalidClipPlanes {
                near: 0.0,
                far: 10.0
            })
        );
        assert_eq!(
            base.clone().with_zoom(-1.0).validate(),
            Err(ViewportError::InvalidZoom(-1.0))
        );
        assert_eq!(
            base.clone().with_up(DVec3::Z).validate(),
            Err(ViewportError::InvalidUp)
        );
        assert_eq!(
            base.clone().with_up(DVec3::ZERO).validate(),
            Err(ViewportError::InvalidUp)
        );
        assert_eq!(
            base.clone().with_rotation(f64::NAN, 0.0).validate(),
            Err(ViewportError::NonFinite("rotation_x"))
        );
        assert_eq!(
            base.clone().with_distance(f64::NAN).validate(),
            Err(ViewportError::NonFinite("distance"))
        );
        assert_eq!(
            base.clone().with_fov(f64::INFINITY).validate(),
            Err(ViewportError::NonFinite("fov"))
        );
        assert_eq!(
            base.clone().with_zoom(f64::NAN).validate(),
            Err(ViewportError::NonFinite("zoom"))
        );
        assert_eq!(
            base.clone().with_up(DVec3::new(0.0, f64::NAN, 0.0)).validate(),
            Err(ViewportError::NonFinite("up"))
        );
        assert_eq!(
            base.with_look_at(DVec3::new(0.0, f64::INFINITY, 0.0)).validate(),
            Err(ViewportError::NonFinite("look_at"))
        );
    }

    #[test]
    fn aspect_is_width_over_height() {
        let p = OrbitViewportParams::new(800, 600, 1.0);
        assert!((p.aspect() - 4.0 / 3.0).abs() < 1e-12);
    }
}
