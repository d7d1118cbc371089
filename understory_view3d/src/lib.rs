// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View 3D: orbit camera viewport primitives.
//!
//! This crate provides a small, headless model of a 3D orbit camera looking at
//! a scene through a pixel screen. It focuses on:
//! - Deriving view and projection matrices from orbit parameters (distance,
//!   tilt, orbit angle, field of view, clip planes, zoom).
//! - Coordinate conversion between world space and device (pixel) space, in
//!   both directions, so picking and overlays line up with rendered geometry.
//! - Computing the camera distance that frames a bounding box.
//!
//! The individual derivation steps (rotation, translate/scale, look-at,
//! perspective, NDC to pixels) are exposed in [`matrices`] for other camera
//! models that share them.
//!
//! It does **not** own any scene graph, GPU resources, or rendering backend.
//! Callers are expected to:
//! - Build an [`OrbitViewport`] per camera pose and hand its matrices to
//!   their renderer.
//! - Keep interactive state (pointer drags, pitch limits, transitions) in a
//!   controller at a higher layer, constructing a fresh viewport per update.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use understory_view3d::{OrbitViewport, OrbitViewportParams, PixelOrigin};
//!
//! // 800x600 screen, camera 10 units from the origin.
//! let params = OrbitViewportParams::new(800, 600, 10.0);
//! let view = OrbitViewport::new(params).unwrap();
//!
//! // The look-at point lands in the middle of the screen.
//! let px = view.project(DVec3::ZERO, PixelOrigin::TopLeft);
//! assert!((px.x - 400.0).abs() < 1e-9 && (px.y - 300.0).abs() < 1e-9);
//!
//! // Unprojecting with the captured depth recovers the world point.
//! let world = view.unproject(px, PixelOrigin::TopLeft);
//! assert!(world.length() < 1e-9);
//! ```
//!
//! ## Fitting a bounding box
//!
//! ```rust
//! use glam::DVec3;
//! use understory_view3d::{OrbitAxis, OrbitViewport, OrbitViewportParams};
//!
//! let params = OrbitViewportParams::new(800, 600, 1.0)
//!     .with_rotation(-30.0, 30.0)
//!     .with_orbit_axis(OrbitAxis::Y)
//!     .with_fov(90.0);
//! let view = OrbitViewport::new(params).unwrap();
//!
//! // A 10x10x10 box needs the camera 5 units away at a 90° field of view.
//! let fitted = view.fit_bounds(DVec3::splat(10.0)).unwrap();
//! assert!((fitted.distance() - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Viewports are immutable values. Every parameter change, including
//!   [`OrbitViewport::fit_bounds`], produces a new viewport.
//! - Rotation angles describe how far the *scene* appears rotated in front
//!   of a fixed camera, so they are applied negated to world geometry.
//! - Invalid parameters are rejected with a [`ViewportError`]; nothing is
//!   clamped or corrected.
//! - Native pixel coordinates have a bottom-left origin; pass
//!   [`PixelOrigin::TopLeft`] for the usual UI convention.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select the float math backend for `glam` and
//!   `kurbo`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`OrbitViewportParams`]
//!   and [`OrbitAxis`], with missing fields taking their defaults.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod matrices;
mod modes;
mod orbit;
mod params;

pub use error::{ParseOrbitAxisError, ViewportError};
pub use modes::{OrbitAxis, PixelOrigin};
pub use orbit::{OrbitViewport, OrbitViewportDebugInfo};
pub use params::{DEFAULT_VIEWPORT_ID, OrbitViewportParams};
