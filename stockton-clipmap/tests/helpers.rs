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

#![allow(dead_code)]

use nalgebra::Vector3;

use stockton_clipmap::clip::BrushPlanes;
use stockton_clipmap::{Brush, BrushSide, ClipBrush, Material, Plane};

pub const CAULK: i32 = 0x80;
pub const BRICK: i32 = 0x1;
pub const GRASS: i32 = 0x4;
pub const METAL: i32 = 0x8;

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("brick", BRICK, 1),
        Material::new("caulk", CAULK, 1),
        Material::new("grass", GRASS, 1),
        Material::new("metal", METAL, 1),
    ]
}

pub fn v(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

/// A side whose plane passes through `point`.
pub fn side_through(normal: Vector3<f32>, point: Vector3<f32>, surface: i32) -> BrushSide {
    let normal = normal.normalize();
    BrushSide {
        plane: Plane::new(normal, normal.dot(&point)),
        surface,
    }
}

/// 64 unit cube cut diagonally so that `z <= x`.
pub fn wedge() -> Brush {
    let mut brush = Brush::from_bounds(v(0.0, 0.0, 0.0), v(64.0, 64.0, 64.0), CAULK);
    brush.sides =
        vec![side_through(v(-1.0, 0.0, 1.0), v(0.0, 0.0, 0.0), GRASS)].into_boxed_slice();
    brush
}

/// A column with its four vertical edges bevelled off.
pub fn octagon() -> Brush {
    let mut brush = Brush::from_bounds(v(-32.0, -32.0, -32.0), v(32.0, 32.0, 32.0), BRICK);
    brush.sides = vec![
        side_through(v(1.0, 1.0, 0.0), v(32.0, 16.0, 0.0), METAL),
        side_through(v(-1.0, 1.0, 0.0), v(-32.0, 16.0, 0.0), METAL),
        side_through(v(-1.0, -1.0, 0.0), v(-32.0, -16.0, 0.0), METAL),
        side_through(v(1.0, -1.0, 0.0), v(32.0, -16.0, 0.0), METAL),
    ]
    .into_boxed_slice();
    brush
}

/// A box whose upper half is cut into a four sided point.
pub fn pyramid() -> Brush {
    let apex = v(0.0, 0.0, 16.0);
    let mut brush = Brush::from_bounds(v(-16.0, -16.0, -16.0), v(16.0, 16.0, 16.0), CAULK);
    brush.sides = vec![
        side_through(v(1.0, 0.0, 1.0), apex, BRICK),
        side_through(v(-1.0, 0.0, 1.0), apex, BRICK),
        side_through(v(0.0, 1.0, 1.0), apex, METAL),
        side_through(v(0.0, -1.0, 1.0), apex, METAL),
    ]
    .into_boxed_slice();
    brush
}

pub fn translated(brush: &Brush, offset: Vector3<f32>) -> Brush {
    let mut moved = brush.clone();
    moved.mins += offset;
    moved.maxs += offset;
    for side in moved.sides.iter_mut() {
        side.plane.dist += side.plane.normal.dot(&offset);
    }
    moved
}

/// Check every face is a convex polygon lying on its plane, inside the brush, and
/// wound the right way round.
pub fn assert_well_formed(brush: &Brush, rebuilt: &ClipBrush) {
    let planes = BrushPlanes::new(brush);

    for side in rebuilt.sides.iter() {
        let verts = &side.verts;
        let plane = planes.get(side.plane);
        assert!(verts.len() >= 3, "face {:?} has {} verts", side.plane, verts.len());
        assert_eq!(side.normal, plane.normal);

        for vert in verts.iter() {
            assert!(plane.distance_to(vert).abs() <= 0.1, "{:?} is off its plane", vert);
            for id in planes.ids() {
                assert!(
                    planes.get(id).distance_to(vert) <= 0.1,
                    "{:?} is outside {:?}",
                    vert,
                    id
                );
            }
        }

        for n in 0..verts.len() {
            let a = verts[n];
            let b = verts[(n + 1) % verts.len()];

            // Every other point is on the inner side of each edge
            for c in verts.iter() {
                assert!((c - a).cross(&(b - a)).dot(&side.normal) >= -0.01);
            }

            let c = verts[(n + 2) % verts.len()];
            if let Some(tri) = Plane::from_points(&a, &b, &c) {
                assert!(
                    tri.normal.dot(&side.normal) > 0.0,
                    "face {:?} is wound backwards",
                    side.plane
                );
            }
        }
    }
}

/// The distinct corners of a rebuilt brush.
pub fn corners(rebuilt: &ClipBrush) -> Vec<Vector3<f32>> {
    let mut corners: Vec<Vector3<f32>> = Vec::new();
    for vert in rebuilt.verts_iter() {
        if !corners.iter().any(|c| (c - vert).norm() < 0.01) {
            corners.push(*vert);
        }
    }
    corners
}
