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

//! Planes and the bits of plane algebra brush reconstruction needs.

use na::Vector3;
use serde::{Deserialize, Serialize};

/// Below this the three planes are parallel or otherwise don't meet at one point.
const DETERMINANT_EPSILON: f32 = 0.001;

/// Relative squared-area tolerance for a triangle to count as degenerate.
const DEGENERATE_EPSILON: f32 = 0.000_001_000_000_1;

/// Generic plane, referenced by brush sides.
/// Points on the plane satisfy `normal . p = dist`; the normal points out of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal
    pub normal: Vector3<f32>,

    /// Distance from origin to plane along normal
    pub dist: f32,
}

impl Plane {
    pub fn new(normal: Vector3<f32>, dist: f32) -> Plane {
        Plane { normal, dist }
    }

    /// Signed distance from the plane. Positive is in front (outside the brush).
    pub fn distance_to(&self, point: &Vector3<f32>) -> f32 {
        self.normal.dot(point) - self.dist
    }

    /// Find the single point where three planes meet, using Cramer's rule.
    /// Returns `None` if the planes are parallel or degenerate.
    pub fn intersect(p0: &Plane, p1: &Plane, p2: &Plane) -> Option<Vector3<f32>> {
        let c12 = p1.normal.cross(&p2.normal);
        let c20 = p2.normal.cross(&p0.normal);
        let c01 = p0.normal.cross(&p1.normal);

        let determinant = p0.normal.dot(&c12);
        if determinant.abs() < DETERMINANT_EPSILON {
            return None;
        }

        Some((c12 * p0.dist + c20 * p1.dist + c01 * p2.dist) / determinant)
    }

    /// Build the plane through three points, with normal `(c - a) x (b - a)`.
    ///
    /// Near-collinear triangles are retried with the vertex order rotated, since the
    /// cross product of two long thin edges loses precision. Returns `None` if both
    /// orders are degenerate.
    pub fn from_points(a: &Vector3<f32>, b: &Vector3<f32>, c: &Vector3<f32>) -> Option<Plane> {
        let mut edge_b = b - a;
        let mut edge_c = c - a;
        let mut normal = edge_c.cross(&edge_b);
        let mut length_sq = normal.norm_squared();

        if length_sq < 2.0 {
            if length_sq == 0.0 {
                return None;
            }

            if is_sliver(&edge_b, &edge_c, length_sq) {
                edge_b = c - b;
                edge_c = a - b;
                normal = edge_c.cross(&edge_b);
                length_sq = normal.norm_squared();

                if is_sliver(&edge_b, &edge_c, length_sq) {
                    return None;
                }
            }
        }

        let normal = normal / length_sq.sqrt();
        Some(Plane {
            normal,
            dist: normal.dot(a),
        })
    }
}

/// Whether the cross product of two edges is too small relative to their lengths to trust.
fn is_sliver(edge_b: &Vector3<f32>, edge_c: &Vector3<f32>, cross_length_sq: f32) -> bool {
    edge_c.norm_squared() * edge_b.norm_squared() * DEGENERATE_EPSILON >= cross_length_sq
}

#[test]
fn planes_intersect_axis_aligned() {
    let x = Plane::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
    let y = Plane::new(Vector3::new(0.0, 1.0, 0.0), -3.0);
    let z = Plane::new(Vector3::new(0.0, 0.0, -1.0), 4.0);

    let point = Plane::intersect(&x, &y, &z).unwrap();
    assert_eq!(point, Vector3::new(2.0, -3.0, -4.0));
    assert_eq!(x.distance_to(&point), 0.0);
}

#[test]
fn planes_intersect_parallel() {
    let a = Plane::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
    let b = Plane::new(Vector3::new(-1.0, 0.0, 0.0), 2.0);
    let c = Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.0);

    assert!(Plane::intersect(&a, &b, &c).is_none());
    assert!(Plane::intersect(&a, &a, &c).is_none());
}

#[test]
fn planes_intersect_slanted() {
    let s = 0.5f32.sqrt();
    let slant = Plane::new(Vector3::new(s, 0.0, s), 8.0 * s);
    let y = Plane::new(Vector3::new(0.0, 1.0, 0.0), 1.0);
    let z = Plane::new(Vector3::new(0.0, 0.0, 1.0), 2.0);

    let point = Plane::intersect(&slant, &y, &z).unwrap();
    assert!((point - Vector3::new(6.0, 1.0, 2.0)).norm() < 1e-4);
}

#[test]
fn planes_from_points_orientation() {
    let a = Vector3::new(0.0, 0.0, 5.0);
    let b = Vector3::new(1.0, 0.0, 5.0);
    let c = Vector3::new(0.0, 1.0, 5.0);

    // (c - a) x (b - a) points down for a counter-clockwise triangle seen from above
    let plane = Plane::from_points(&a, &b, &c).unwrap();
    assert_eq!(plane.normal, Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(plane.dist, -5.0);

    let flipped = Plane::from_points(&a, &c, &b).unwrap();
    assert_eq!(flipped.normal, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn planes_from_points_degenerate() {
    let a = Vector3::new(0.0, 0.0, 0.0);
    let b = Vector3::new(1.0, 1.0, 1.0);
    let c = Vector3::new(2.0, 2.0, 2.0);

    assert!(Plane::from_points(&a, &b, &c).is_none());
    assert!(Plane::from_points(&a, &a, &b).is_none());
}
