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

//! Finding the corners of a brush by intersecting its planes.

use log::trace;
use na::Vector3;

use super::axial::{BrushPlanes, PlaneId};
use super::snap::snap_point;
use crate::options::ReconstructOptions;
use crate::traits::Plane;
use crate::types::{ClipError, Result};

/// A corner of a brush and the three planes that meet there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateVertex {
    pub point: Vector3<f32>,
    pub planes: [PlaneId; 3],
}

impl CandidateVertex {
    /// Whether this vertex was produced by the given plane.
    pub fn touches(&self, id: PlaneId) -> bool {
        self.planes.contains(&id)
    }
}

/// Intersect every triple of planes bounding the brush, keeping points that lie
/// inside all the other planes.
///
/// Fails with [`ClipError::TooManyVertices`] if the brush yields so many points the
/// input is almost certainly broken.
pub fn generate_vertices(
    planes: &BrushPlanes<'_>,
    options: &ReconstructOptions,
) -> Result<Vec<CandidateVertex>> {
    let count = planes.len();
    let limit = options.max_brush_points;
    let mut vertices = Vec::new();

    for i0 in 0..count.saturating_sub(2) {
        let p0 = planes.get(PlaneId(i0));

        for i1 in i0 + 1..count - 1 {
            let p1 = planes.get(PlaneId(i1));

            for i2 in i1 + 1..count {
                let p2 = planes.get(PlaneId(i2));
                let ids = [PlaneId(i0), PlaneId(i1), PlaneId(i2)];

                let point = match Plane::intersect(p0, p1, p2) {
                    Some(point) => point,
                    None => continue,
                };
                let point = snap_point(
                    &point,
                    [p0, p1, p2],
                    options.snap_grid,
                    options.snap_epsilon,
                );

                if is_inside(planes, &ids, &point, options.plane_epsilon) {
                    if vertices.len() < limit {
                        vertices.push(CandidateVertex { point, planes: ids });
                    }
                } else {
                    trace!("Discarding vertex {:?} from planes {:?}", point, ids);
                }

                // One slot is kept spare
                if vertices.len() >= limit.saturating_sub(1) {
                    return Err(ClipError::TooManyVertices { limit });
                }
            }
        }
    }

    Ok(vertices)
}

/// Whether `point` is behind (or within `epsilon` of) every plane of the brush.
/// The bounding box is always checked; sides in `ids` are skipped since the point is on them.
fn is_inside(
    planes: &BrushPlanes<'_>,
    ids: &[PlaneId; 3],
    point: &Vector3<f32>,
    epsilon: f32,
) -> bool {
    if planes
        .axial()
        .iter()
        .any(|plane| plane.distance_to(point) > epsilon)
    {
        return false;
    }

    planes
        .sides()
        .iter()
        .enumerate()
        .filter(|(n, _)| !ids.contains(&PlaneId::side(*n)))
        .all(|(_, side)| side.plane.distance_to(point) <= epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReconstructOptionsBuilder;
    use crate::traits::{Brush, BrushSide};

    fn unit_box() -> Brush {
        Brush::from_bounds(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), 0)
    }

    #[test]
    fn box_has_eight_corners() {
        let brush = unit_box();
        let planes = BrushPlanes::new(&brush);
        let vertices = generate_vertices(&planes, &ReconstructOptions::default()).unwrap();

        assert_eq!(vertices.len(), 8);
        for vertex in vertices.iter() {
            for axis in 0..3 {
                assert!(vertex.point[axis] == 0.0 || vertex.point[axis] == 1.0);
            }

            // One plane from each axis pair
            let mut axes: Vec<usize> = vertex.planes.iter().map(|id| id.0 / 2).collect();
            axes.sort();
            assert_eq!(axes, vec![0, 1, 2]);
        }
    }

    #[test]
    fn cut_corner_is_removed() {
        let mut brush = unit_box();
        let n = Vector3::new(1.0, 1.0, 1.0).normalize();
        brush.sides = vec![BrushSide {
            plane: Plane::new(n, n.dot(&Vector3::new(1.0, 1.0, 0.5))),
            surface: 0,
        }]
        .into_boxed_slice();

        let planes = BrushPlanes::new(&brush);
        let vertices = generate_vertices(&planes, &ReconstructOptions::default()).unwrap();

        assert!(vertices
            .iter()
            .all(|v| (v.point - Vector3::new(1.0, 1.0, 1.0)).norm() > 0.1));
        assert_eq!(
            vertices
                .iter()
                .filter(|v| v.touches(PlaneId::side(0)))
                .count(),
            3
        );
    }

    #[test]
    fn duplicate_sides_stay_distinct() {
        let mut brush = unit_box();
        let top = BrushSide {
            plane: Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.5),
            surface: 0,
        };
        brush.sides = vec![top, top].into_boxed_slice();

        let planes = BrushPlanes::new(&brush);
        let vertices = generate_vertices(&planes, &ReconstructOptions::default()).unwrap();

        // Both copies of the plane produce their own four corners
        assert_eq!(
            vertices.iter().filter(|v| v.touches(PlaneId::side(0))).count(),
            4
        );
        assert_eq!(
            vertices.iter().filter(|v| v.touches(PlaneId::side(1))).count(),
            4
        );
        assert!(vertices.iter().all(|v| v.point.z <= 0.5));
    }

    #[test]
    fn too_many_vertices() {
        let brush = unit_box();
        let planes = BrushPlanes::new(&brush);
        let options = ReconstructOptionsBuilder::default()
            .max_brush_points(6)
            .build()
            .unwrap();

        assert_eq!(
            generate_vertices(&planes, &options),
            Err(ClipError::TooManyVertices { limit: 6 })
        );
    }
}
