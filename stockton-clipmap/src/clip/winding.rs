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

//! Wrapping the corners of one brush face into an ordered convex polygon.
//!
//! The face's points are projected onto the two axes the face normal is least aligned
//! with, and a convex hull is built up one point at a time in that 2D space.

use log::trace;
use na::Vector3;

use super::axial::PlaneId;
use super::vertices::CandidateVertex;
use crate::options::ReconstructOptions;
use crate::traits::Plane;

/// Signed areas within this of zero count as colinear.
const COLINEAR_EPSILON: f32 = 0.001;

/// Faces whose largest triangle is smaller than this are degenerate.
const MIN_FACE_AREA: f32 = 0.001;

/// An ordered, convex, planar polygon.
/// Seen from in front of the face, the points run clockwise, so the plane through
/// any three consecutive points (see [`Plane::from_points`]) faces the same way as the face.
#[derive(Debug, Clone, PartialEq)]
pub struct Winding {
    points: Vec<Vector3<f32>>,
}

impl Winding {
    /// Build the winding for one face of a brush from the brush's vertices.
    ///
    /// Returns `None` if the face has fewer than three distinct points or collapses
    /// to a line.
    pub fn for_face(
        vertices: &[CandidateVertex],
        id: PlaneId,
        normal: &Vector3<f32>,
        options: &ReconstructOptions,
    ) -> Option<Winding> {
        let points = face_points(vertices, id, options.point_epsilon, options.max_brush_points);
        if points.len() < 3 {
            trace!("Face {:?} only has {} distinct points", id, points.len());
            return None;
        }

        let (i, j) = projection_axes(normal);

        let mut winding = Winding {
            points: points[..2].to_vec(),
        };
        for point in points[2..].iter() {
            winding.add_exterior_point(point, i, j);
        }

        let (area, [i0, i1, i2]) = winding.representative_triangle(normal);
        if area < MIN_FACE_AREA {
            trace!("Face {:?} is degenerate (area {})", id, area);
            return None;
        }

        let plane = Plane::from_points(
            &winding.points[i0],
            &winding.points[i1],
            &winding.points[i2],
        )?;
        if plane.normal.dot(normal) < 0.0 {
            winding.points.reverse();
        }

        Some(winding)
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Vector3<f32>> {
        self.points
    }

    /// Grow the hull to include `point`, or drop it if it's already inside.
    fn add_exterior_point(&mut self, point: &Vector3<f32>, i: usize, j: usize) {
        let n = self.points.len();

        // Find the edge the point is furthest outside of
        let mut best = 0;
        let mut best_area = f32::MAX;
        let mut prev = n - 1;
        for (index, current) in self.points.iter().enumerate() {
            let area = signed_area(&self.points[prev], point, current, i, j);
            if area < best_area {
                best_area = area;
                best = index;
            }
            prev = index;
        }

        if best_area < -COLINEAR_EPSILON {
            self.points.insert(best, *point);
        } else if best_area <= COLINEAR_EPSILON {
            self.add_colinear_point(point, i, j, (best + n - 1) % n, best);
        }
    }

    /// `point` is on the line through the edge `index0 -> index1`. If it lies past either
    /// end, it replaces that end.
    fn add_colinear_point(
        &mut self,
        point: &Vector3<f32>,
        i: usize,
        j: usize,
        index0: usize,
        index1: usize,
    ) {
        let start = self.points[index0];
        let end = self.points[index1];

        let delta_i = end[i] - start[i];
        let delta_j = end[j] - start[j];
        let (axis, delta) = if delta_i.abs() < delta_j.abs() {
            (j, delta_j)
        } else {
            (i, delta_i)
        };

        if delta <= 0.0 {
            if point[axis] <= start[axis] {
                if end[axis] > point[axis] {
                    self.points[index1] = *point;
                }
            } else {
                self.points[index0] = *point;
            }
        } else if start[axis] <= point[axis] {
            if point[axis] > end[axis] {
                self.points[index1] = *point;
            }
        } else {
            self.points[index0] = *point;
        }
    }

    /// The triangle of hull points with the largest area along `normal`.
    fn representative_triangle(&self, normal: &Vector3<f32>) -> (f32, [usize; 3]) {
        let mut best_area = 0.0;
        let mut best = [0, 1, 2];

        for k in 2..self.points.len() {
            for j in 1..k {
                let vb = self.points[k] - self.points[j];
                for i in 0..j {
                    let va = self.points[i] - self.points[j];
                    let area = vb.cross(&va).dot(normal).abs();
                    if area > best_area {
                        best_area = area;
                        best = [i, j, k];
                    }
                }
            }
        }

        (best_area, best)
    }
}

/// The distinct points of every vertex touching face `id`, in vertex order.
/// Points within `epsilon` of each other on every axis are treated as the same.
fn face_points(
    vertices: &[CandidateVertex],
    id: PlaneId,
    epsilon: f32,
    limit: usize,
) -> Vec<Vector3<f32>> {
    let epsilon_sq = epsilon * epsilon;
    let mut points: Vec<Vector3<f32>> = Vec::new();

    for vertex in vertices.iter().filter(|v| v.touches(id)) {
        let exists = points.iter().any(|p| {
            (0..3).all(|axis| {
                let diff = p[axis] - vertex.point[axis];
                diff * diff <= epsilon_sq
            })
        });
        if exists {
            continue;
        }

        if points.len() == limit {
            break;
        }
        points.push(vertex.point);
    }

    points
}

/// Pick the two axes to project a face onto, dropping the one its normal is most aligned with.
/// Ties go to the lower axis.
fn projection_axes(normal: &Vector3<f32>) -> (usize, usize) {
    let mut k = 0;
    if normal.y.abs() > normal.x.abs() {
        k = 1;
    }
    if normal.z.abs() > normal[k].abs() {
        k = 2;
    }

    (!k & 1, !k & 2)
}

/// Twice the signed area of a triangle projected onto axes `i` and `j`.
fn signed_area(
    p0: &Vector3<f32>,
    p1: &Vector3<f32>,
    p2: &Vector3<f32>,
    i: usize,
    j: usize,
) -> f32 {
    (p2[j] - p1[j]) * p0[i] + (p0[j] - p2[j]) * p1[i] + (p1[j] - p0[j]) * p2[i]
}
