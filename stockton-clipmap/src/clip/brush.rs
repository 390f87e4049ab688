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

//! Turning a collision brush into a list of faces.

use log::{debug, trace};
use na::Vector3;
use serde::{Deserialize, Serialize};

use super::axial::{BrushPlanes, PlaneId};
use super::materials::{brush_material, side_material};
use super::vertices::generate_vertices;
use super::winding::Winding;
use crate::options::{MaterialMode, ReconstructOptions};
use crate::traits::{Brush, Material};
use crate::types::Result;

/// A brush rebuilt into explicit faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipBrush {
    /// Index of the brush this was built from.
    pub index: u32,
    pub sides: Vec<ClipBrushSide>,
}

/// One face of a rebuilt brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipBrushSide {
    /// Outward facing normal
    pub normal: Vector3<f32>,

    /// The plane of the source brush this face lies on.
    pub plane: PlaneId,

    pub material: String,

    /// Convex polygon, clockwise when seen from in front. The first point isn't repeated.
    pub verts: Vec<Vector3<f32>>,
}

impl ClipBrush {
    /// Every vertex of every face. Corners shared between faces appear once per face.
    pub fn verts_iter(&self) -> impl Iterator<Item = &Vector3<f32>> {
        self.sides.iter().flat_map(|s| s.verts.iter())
    }
}

/// Rebuild the faces of `brush`.
///
/// Returns `Ok(None)` if the brush has too few corners to enclose any volume.
/// Faces that collapse are left out rather than failing the whole brush.
pub fn reconstruct_brush(
    brush: &Brush,
    index: u32,
    materials: &[Material],
    options: &ReconstructOptions,
) -> Result<Option<ClipBrush>> {
    options.check()?;

    let planes = BrushPlanes::new(brush);
    let vertices = generate_vertices(&planes, options)?;

    if vertices.len() < 4 {
        debug!("Brush {} only has {} vertices", index, vertices.len());
        return Ok(None);
    }

    let mut sides = Vec::with_capacity(planes.len());
    for id in planes.ids() {
        let normal = planes.get(id).normal;
        match Winding::for_face(&vertices, id, &normal, options) {
            Some(winding) => sides.push(ClipBrushSide {
                normal,
                plane: id,
                material: side_material(brush, id, materials).to_owned(),
                verts: winding.into_points(),
            }),
            None => trace!("Brush {} has no face on plane {:?}", index, id),
        }
    }

    if options.material_mode == MaterialMode::PerBrush {
        let material = brush_material(brush, materials);
        for side in sides.iter_mut() {
            side.material = material.to_owned();
        }
    }

    debug!(
        "Rebuilt brush {} with {} faces from {} vertices",
        index,
        sides.len(),
        vertices.len()
    );

    Ok(Some(ClipBrush { index, sides }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReconstructOptionsBuilder;
    use crate::traits::{BrushSide, Plane};
    use crate::types::ClipError;

    fn materials() -> Vec<Material> {
        vec![
            Material::new("caulk", 0x80, 1),
            Material::new("brick", 0x1, 1),
            Material::new("glass", 0x2, 1),
        ]
    }

    #[test]
    fn flat_box_keeps_only_caps() {
        let brush = Brush::from_bounds(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 4.0, 0.0),
            0x1,
        );

        // The corners all exist, but with no height the four walls are only lines
        let rebuilt = reconstruct_brush(&brush, 0, &materials(), &ReconstructOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(rebuilt.sides.len(), 2);
        assert!(rebuilt.sides.iter().all(|s| s.plane.0 >= 4));
    }

    #[test]
    fn inverted_box_has_no_vertices() {
        let brush = Brush::from_bounds(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(-4.0, 4.0, 4.0),
            0x1,
        );

        assert_eq!(
            reconstruct_brush(&brush, 0, &materials(), &ReconstructOptions::default()),
            Ok(None)
        );
    }

    #[test]
    fn overflow_is_an_error() {
        let brush = Brush::from_bounds(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 4.0, 4.0),
            0x1,
        );
        let options = ReconstructOptionsBuilder::default()
            .max_brush_points(4)
            .build()
            .unwrap();

        assert_eq!(
            reconstruct_brush(&brush, 0, &materials(), &options),
            Err(ClipError::TooManyVertices { limit: 4 })
        );
    }

    #[test]
    fn hand_built_options_are_checked() {
        let brush = Brush::from_bounds(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(8.0, 8.0, 8.0),
            0x1,
        );

        for options in [
            ReconstructOptions {
                max_brush_points: 0,
                ..Default::default()
            },
            ReconstructOptions {
                snap_grid: 0.0,
                ..Default::default()
            },
            ReconstructOptions {
                plane_epsilon: f32::NAN,
                ..Default::default()
            },
        ]
        .iter()
        {
            match reconstruct_brush(&brush, 0, &materials(), options) {
                Err(ClipError::InvalidOptions(_)) => {}
                other => panic!("expected invalid options, got {:?}", other),
            }
        }
    }

    #[test]
    fn material_modes() {
        let mut brush = Brush::from_bounds(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(4.0, 4.0, 4.0),
            0x80,
        );
        brush.axial_surface[0][2] = 0x2;
        brush.sides = vec![BrushSide {
            plane: Plane::new(Vector3::new(0.0, 0.0, 1.0), 2.0),
            surface: 0x1,
        }]
        .into_boxed_slice();

        let per_brush =
            reconstruct_brush(&brush, 3, &materials(), &ReconstructOptions::default())
                .unwrap()
                .unwrap();
        assert_eq!(per_brush.index, 3);
        assert!(per_brush.sides.iter().all(|s| s.material == "brick"));

        let options = ReconstructOptionsBuilder::default()
            .material_mode(MaterialMode::PerFace)
            .build()
            .unwrap();
        let per_face = reconstruct_brush(&brush, 3, &materials(), &options)
            .unwrap()
            .unwrap();

        let material_of = |id: PlaneId| {
            per_face
                .sides
                .iter()
                .find(|s| s.plane == id)
                .map(|s| s.material.as_str())
        };
        assert_eq!(material_of(PlaneId(0)), Some("glass"));
        assert_eq!(material_of(PlaneId(2)), Some("caulk"));
        assert_eq!(material_of(PlaneId::side(0)), Some("brick"));

        // The box's own top is cut away entirely
        assert_eq!(material_of(PlaneId(5)), None);
    }
}
