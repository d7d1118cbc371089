// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit viewport walkthrough.
//!
//! Simulates a few drag events on an orbit camera, rebuilding the viewport for
//! each one, then frames a bounding box and picks a pixel.
//!
//! Run with `RUST_LOG=trace cargo run -p understory_demos --bin orbit_fit`
//! to also see the viewport's own log output.

use glam::DVec3;
use kurbo::Point;
use understory_view3d::{OrbitAxis, OrbitViewport, OrbitViewportParams, PixelOrigin};

/// Interactive camera state owned by the application, not by the viewport.
struct OrbitController {
    params: OrbitViewportParams,
    max_tilt: f64,
}

impl OrbitController {
    /// Applies a drag in degrees and returns the viewport for the new pose.
    fn drag(&mut self, d_tilt: f64, d_orbit: f64) -> OrbitViewport {
        // Tilt limits are application policy; the viewport never clamps.
        let tilt = (self.params.rotation_x + d_tilt).clamp(-self.max_tilt, self.max_tilt);
        let orbit = (self.params.rotation_orbit + d_orbit).rem_euclid(360.0);
        self.params = self.params.clone().with_rotation(tilt, orbit);
        OrbitViewport::new(self.params.clone()).expect("controller keeps parameters valid")
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut controller = OrbitController {
        params: OrbitViewportParams::new(1280, 720, 20.0)
            .with_id("infovis")
            .with_orbit_axis(OrbitAxis::Y)
            .with_rotation(-30.0, 30.0),
        max_tilt: 60.0,
    };

    let mut viewport = OrbitViewport::new(controller.params.clone()).expect("valid parameters");
    log::info!("initial eye at {:.3}", viewport.camera_position());
    for (d_tilt, d_orbit) in [(10.0, 45.0), (-80.0, 90.0), (-40.0, 300.0)] {
        viewport = controller.drag(d_tilt, d_orbit);
        let info = viewport.debug_info();
        log::info!(
            "pose tilt={:.1} orbit={:.1}: eye at {:.3}",
            viewport.params().rotation_x,
            viewport.params().rotation_orbit,
            info.camera_position,
        );
    }

    let bounds = DVec3::new(12.0, 4.0, 8.0);
    let fitted = match viewport.fit_bounds(bounds) {
        Ok(v) => v,
        Err(err) => {
            log::error!("cannot frame {bounds}: {err}");
            return;
        }
    };
    log::info!(
        "framed {bounds} at distance {:.3} (was {:.3})",
        fitted.distance(),
        viewport.distance()
    );

    let label_anchor = DVec3::new(6.0, 2.0, 0.0);
    let px = fitted.project(label_anchor, PixelOrigin::TopLeft);
    log::info!("label anchor {label_anchor} drawn at ({:.1}, {:.1})", px.x, px.y);

    let cursor = Point::new(640.0, 360.0);
    let (origin, dir) = fitted.pixel_ray(cursor, PixelOrigin::TopLeft);
    log::info!("cursor {cursor:?} casts ray from {origin:.3} along {dir:.3}");
    log::info!(
        "cursor on the look-at plane is {:.3}",
        fitted.unproject_2d(cursor, PixelOrigin::TopLeft)
    );
}
