/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Tunables for brush reconstruction.
//!
//! The defaults match the tolerances the game itself uses when it draws collision
//! brushes, so there's rarely a reason to change them.

use crate::types::{ClipError, Result};

/// Maximum number of vertices a single brush may produce.
pub const MAX_BRUSH_POINTS: usize = 1024;

/// How faces of a rebuilt brush are given materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialMode {
    /// Every face gets the one material picked for the whole brush.
    PerBrush,

    /// Every face keeps the material of the side it came from.
    PerFace,
}

impl Default for MaterialMode {
    fn default() -> Self {
        MaterialMode::PerBrush
    }
}

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(public, default, build_fn(validate = "Self::validate"))]
pub struct ReconstructOptions {
    /// Grid intersection points are snapped to.
    pub snap_grid: f32,

    /// Largest per-axis move snapping is allowed to make.
    pub snap_epsilon: f32,

    /// How far outside a plane a vertex may be before it's discarded.
    pub plane_epsilon: f32,

    /// Per-axis distance under which two vertices of a face are the same point.
    pub point_epsilon: f32,

    /// Vertex cap for a single brush.
    pub max_brush_points: usize,

    pub material_mode: MaterialMode,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        ReconstructOptions {
            snap_grid: 0.25,
            snap_epsilon: 0.009_999_999_8,
            plane_epsilon: 0.1,
            point_epsilon: 0.1,
            max_brush_points: MAX_BRUSH_POINTS,
            material_mode: MaterialMode::PerBrush,
        }
    }
}

impl ReconstructOptions {
    /// Check options constructed by hand rather than through the builder.
    pub fn check(&self) -> Result<()> {
        check(
            self.snap_grid,
            self.snap_epsilon,
            self.plane_epsilon,
            self.point_epsilon,
            self.max_brush_points,
        )
        .map_err(ClipError::InvalidOptions)
    }

    pub fn validated(self) -> Result<Self> {
        self.check()?;
        Ok(self)
    }
}

impl ReconstructOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        let defaults = ReconstructOptions::default();
        check(
            self.snap_grid.unwrap_or(defaults.snap_grid),
            self.snap_epsilon.unwrap_or(defaults.snap_epsilon),
            self.plane_epsilon.unwrap_or(defaults.plane_epsilon),
            self.point_epsilon.unwrap_or(defaults.point_epsilon),
            self.max_brush_points.unwrap_or(defaults.max_brush_points),
        )
    }
}

fn check(
    snap_grid: f32,
    snap_epsilon: f32,
    plane_epsilon: f32,
    point_epsilon: f32,
    max_brush_points: usize,
) -> std::result::Result<(), String> {
    if !(snap_grid > 0.0) {
        return Err(format!("snap grid must be positive, got {}", snap_grid));
    }
    if !(snap_epsilon >= 0.0) || !(plane_epsilon >= 0.0) || !(point_epsilon >= 0.0) {
        return Err("epsilons must not be negative".to_string());
    }
    if max_brush_points < 4 {
        return Err(format!(
            "a brush needs at least 4 vertices, cap was {}",
            max_brush_points
        ));
    }

    Ok(())
}

#[test]
fn options_builder_defaults() {
    let options = ReconstructOptionsBuilder::default().build().unwrap();
    assert_eq!(options, ReconstructOptions::default());
}

#[test]
fn options_builder_overrides() {
    let options = ReconstructOptionsBuilder::default()
        .snap_grid(1.0)
        .material_mode(MaterialMode::PerFace)
        .build()
        .unwrap();

    assert_eq!(options.snap_grid, 1.0);
    assert_eq!(options.material_mode, MaterialMode::PerFace);
    assert_eq!(options.max_brush_points, MAX_BRUSH_POINTS);
}

#[test]
fn options_builder_rejects_bad_values() {
    assert!(ReconstructOptionsBuilder::default()
        .snap_grid(0.0)
        .build()
        .is_err());
    assert!(ReconstructOptionsBuilder::default()
        .max_brush_points(3)
        .build()
        .is_err());

    let bad = ReconstructOptions {
        point_epsilon: -1.0,
        ..Default::default()
    };
    assert_eq!(
        bad.validated(),
        Err(ClipError::InvalidOptions(
            "epsilons must not be negative".to_string()
        ))
    );
}
