// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use glam::{DMat4, DVec2, DVec3};
use kurbo::{Point, Rect, Size};

use crate::error::ViewportError;
use crate::matrices::{ndc_to_pixel_matrix, orbit_view_matrix, perspective_matrix, to_radians};
use crate::modes::{OrbitAxis, PixelOrigin};
use crate::params::OrbitViewportParams;

/// 3D orbit camera over a pixel screen.
///
/// `OrbitViewport` is an immutable value: all matrices are derived once in
/// [`OrbitViewport::new`], and every query borrows `self`. It can be used to:
/// - Feed view and projection matrices to a renderer.
/// - Convert points between world space and pixel space.
/// - Cast picking rays from the cursor.
/// - Reframe the camera around a bounding box with [`OrbitViewport::fit_bounds`].
///
/// To change the camera, build new [`OrbitViewportParams`] (for example from
/// [`OrbitViewport::params`]) and construct a new viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitViewport {
    params: OrbitViewportParams,
    view: DMat4,
    projection: DMat4,
    view_projection: DMat4,
    pixel_projection: DMat4,
    pixel_unprojection: DMat4,
    focal_depth: f64,
}

impl OrbitViewport {
    /// Builds a viewport, deriving all matrices from `params`.
    ///
    /// Fails if any precondition in [`OrbitViewportParams::validate`] is
    /// violated, or if the resulting pixel-projection matrix cannot be
    /// inverted.
    pub fn new(params: OrbitViewportParams) -> Result<Self, ViewportError> {
        if let Err(err) = params.validate() {
            log::debug!("rejected orbit viewport `{}`: {err}", params.id);
            return Err(err);
        }

        let view = orbit_view_matrix(
            params.distance,
            params.rotation_x,
            params.rotation_orbit,
            params.orbit_axis,
            params.look_at,
            params.up,
            params.zoom,
        );
        let projection = perspective_matrix(params.fov, params.aspect(), params.near, params.far);
        let view_projection = projection * view;
        let pixel_projection =
            ndc_to_pixel_matrix(f64::from(params.width), f64::from(params.height))
                * view_projection;

        let det = pixel_projection.determinant();
        if det == 0.0 || !det.is_finite() {
            log::debug!("rejected orbit viewport `{}`: determinant {det}", params.id);
            return Err(ViewportError::SingularProjection);
        }
        let pixel_unprojection = pixel_projection.inverse();
        if !pixel_unprojection.is_finite() {
            return Err(ViewportError::SingularProjection);
        }

        // Eye-space depth of the look-at point is always `-distance`.
        let focal_depth = projection
            .project_point3(DVec3::new(0.0, 0.0, -params.distance))
            .z;

        log::trace!(
            "orbit viewport `{}`: {}x{} distance={} rotation=({}, {}) axis={}",
            params.id,
            params.width,
            params.height,
            params.distance,
            params.rotation_x,
            params.rotation_orbit,
            params.orbit_axis,
        );

        Ok(Self {
            params,
            view,
            projection,
            view_projection,
            pixel_projection,
            pixel_unprojection,
            focal_depth,
        })
    }

    /// Returns the parameters this viewport was built from.
    #[must_use]
    pub fn params(&self) -> &OrbitViewportParams {
        &self.params
    }

    /// Returns the viewport label.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.params.id
    }

    /// Screen width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.params.width
    }

    /// Screen height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.params.height
    }

    /// Distance from the eye to the look-at point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.params.distance
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f64 {
        self.params.fov
    }

    /// Axis with full orbit freedom.
    #[must_use]
    pub fn orbit_axis(&self) -> OrbitAxis {
        self.params.orbit_axis
    }

    /// World-space point the camera targets.
    #[must_use]
    pub fn look_at(&self) -> DVec3 {
        self.params.look_at
    }

    /// Returns `width / height`.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.params.aspect()
    }

    /// Screen extent as a size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        Size::new(f64::from(self.params.width), f64::from(self.params.height))
    }

    /// Screen extent as a rectangle anchored at the origin.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen_size().to_rect()
    }

    /// Returns `true` if `pixel` lies on the screen (edges inclusive).
    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        let r = self.screen_rect();
        pixel.x >= r.x0 && pixel.x <= r.x1 && pixel.y >= r.y0 && pixel.y <= r.y1
    }

    /// World → eye transform.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.view
    }

    /// Eye → clip transform.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    /// World → clip transform (`projection * view`).
    #[must_use]
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.view_projection
    }

    /// World → pixel transform (bottom-left origin, NDC depth in `z`).
    #[must_use]
    pub fn pixel_projection_matrix(&self) -> DMat4 {
        self.pixel_projection
    }

    /// Pixel → world transform; the inverse of
    /// [`OrbitViewport::pixel_projection_matrix`].
    #[must_use]
    pub fn pixel_unprojection_matrix(&self) -> DMat4 {
        self.pixel_unprojection
    }

    /// World-space position of the eye.
    ///
    /// The eye sits `distance / zoom` world units from the look-at point.
    #[must_use]
    pub fn camera_position(&self) -> DVec3 {
        self.view.inverse().transform_point3(DVec3::ZERO)
    }

    /// NDC depth of the look-at plane.
    ///
    /// Used as the depth for pixels that carry no captured depth value.
    #[must_use]
    pub fn focal_depth(&self) -> f64 {
        self.focal_depth
    }

    /// Projects a world-space point to pixel coordinates.
    ///
    /// Returns `[x, y, z]` where `z` is the NDC depth (in `[-1, 1]` between
    /// the clip planes) and can be used for depth comparisons. `y` follows
    /// `origin`.
    #[must_use]
    pub fn project(&self, world: DVec3, origin: PixelOrigin) -> DVec3 {
        let p = self.pixel_projection.project_point3(world);
        DVec3::new(p.x, origin.flip_y(p.y, f64::from(self.params.height)), p.z)
    }

    /// Projects a point on the `z = 0` world plane.
    #[must_use]
    pub fn project_2d(&self, world: DVec2, origin: PixelOrigin) -> DVec3 {
        self.project(world.extend(0.0), origin)
    }

    /// Converts pixel coordinates with a captured depth back to world space.
    ///
    /// `pixel.z` is the NDC depth as returned by [`OrbitViewport::project`].
    #[must_use]
    pub fn unproject(&self, pixel: DVec3, origin: PixelOrigin) -> DVec3 {
        let y = origin.flip_y(pixel.y, f64::from(self.params.height));
        self.pixel_unprojection
            .project_point3(DVec3::new(pixel.x, y, pixel.z))
    }

    /// Converts pixel coordinates without depth back to world space.
    ///
    /// The point is placed on the look-at plane, so the screen center maps to
    /// the look-at point.
    #[must_use]
    pub fn unproject_2d(&self, pixel: Point, origin: PixelOrigin) -> DVec3 {
        self.unproject(DVec3::new(pixel.x, pixel.y, self.focal_depth), origin)
    }

    /// Returns a world-space picking ray through `pixel`.
    ///
    /// The ray starts on the near clip plane and its direction is normalized,
    /// pointing toward the far clip plane.
    #[must_use]
    pub fn pixel_ray(&self, pixel: Point, origin: PixelOrigin) -> (DVec3, DVec3) {
        let near = self.unproject(DVec3::new(pixel.x, pixel.y, -1.0), origin);
        let far = self.unproject(DVec3::new(pixel.x, pixel.y, 1.0), origin);
        (near, (far - near).normalize())
    }

    /// Returns the camera distance that frames a box of the given size.
    ///
    /// A sphere of radius `max(size) / 2` is inscribed in the view frustum's
    /// half angle: `max(size) / 2 / tan(fov / 2)`, with `fov` in degrees.
    ///
    /// A box with all sides zero yields `0`, which is not a usable camera
    /// distance; passing it to [`OrbitViewport::fit_bounds`] fails.
    #[must_use]
    pub fn fit_distance(bounding_box: DVec3, fov: f64) -> f64 {
        let half_max_side = bounding_box.max_element() / 2.0;
        half_max_side / (to_radians(fov) / 2.0).tan()
    }

    /// Returns a new viewport whose distance frames a box of the given size
    /// centered at the look-at point.
    ///
    /// All other parameters, including the label, are kept.
    pub fn fit_bounds(&self, bounding_box: DVec3) -> Result<Self, ViewportError> {
        let distance = Self::fit_distance(bounding_box, self.params.fov);
        log::debug!(
            "fitting orbit viewport `{}` to box {bounding_box}: distance {} -> {distance}",
            self.params.id,
            self.params.distance,
        );
        Self::new(self.params.clone().with_distance(distance))
    }

    /// Returns a new viewport for a resized screen.
    pub fn with_size(&self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(self.params.clone().with_size(width, height))
    }

    /// Snapshot of the derived viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> OrbitViewportDebugInfo {
        OrbitViewportDebugInfo {
            screen_size: self.screen_size(),
            aspect: self.aspect(),
            distance: self.params.distance,
            zoom: self.params.zoom,
            orbit_axis: self.params.orbit_axis,
            look_at: self.params.look_at,
            camera_position: self.camera_position(),
            focal_depth: self.focal_depth,
        }
    }
}

/// Debug snapshot of an [`OrbitViewport`].
#[derive(Clone, Copy, Debug)]
pub struct OrbitViewportDebugInfo {
    /// Screen extent in pixels.
    pub screen_size: Size,
    /// `width / height`.
    pub aspect: f64,
    /// Eye to look-at distance.
    pub distance: f64,
    /// Zoom factor.
    pub zoom: f64,
    /// Orbit axis.
    pub orbit_axis: OrbitAxis,
    /// World-space look-at point.
    pub look_at: DVec3,
    /// World-space eye position.
    pub camera_position: DVec3,
    /// NDC depth of the look-at plane.
    pub focal_depth: f64,
}
