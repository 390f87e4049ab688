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

//! Snapping plane intersections onto the map grid.

use na::Vector3;

use crate::traits::Plane;

/// Round each axis of `point` to the nearest multiple of `grid`, where doing so
/// moves it by no more than `epsilon`.
///
/// The snapped point is only used if it's at least as close to the three planes that
/// produced it as the unsnapped point. The unsnapped error is never taken as less than
/// `epsilon`, so snapping may always spend that much.
pub fn snap_point(
    point: &Vector3<f32>,
    planes: [&Plane; 3],
    grid: f32,
    epsilon: f32,
) -> Vector3<f32> {
    let inv_grid = 1.0 / grid;
    let snapped = point.map(|v| {
        let rounded = (v * inv_grid).round() * grid;
        if (rounded - v).abs() <= epsilon {
            rounded
        } else {
            v
        }
    });

    if snapped == *point {
        return snapped;
    }

    let mut snap_err = 0.0f32;
    let mut base_err = epsilon;
    for plane in planes.iter() {
        snap_err = snap_err.max(plane.distance_to(&snapped).abs());
        base_err = base_err.max(plane.distance_to(point).abs());
    }

    if snap_err <= base_err {
        snapped
    } else {
        *point
    }
}

#[cfg(test)]
fn axis_planes(x: f32, y: f32, z: f32) -> [Plane; 3] {
    [
        Plane::new(Vector3::new(1.0, 0.0, 0.0), x),
        Plane::new(Vector3::new(0.0, 1.0, 0.0), y),
        Plane::new(Vector3::new(0.0, 0.0, 1.0), z),
    ]
}

#[test]
fn snap_removes_noise() {
    let planes = axis_planes(1.0, 2.0, 3.0);
    let point = Vector3::new(1.004, 1.997, 3.0);

    let snapped = snap_point(&point, [&planes[0], &planes[1], &planes[2]], 0.25, 0.01);
    assert_eq!(snapped, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn snap_leaves_far_axes() {
    let planes = axis_planes(1.1, 2.0, 3.0);
    let point = Vector3::new(1.1, 2.0, 3.0);

    let snapped = snap_point(&point, [&planes[0], &planes[1], &planes[2]], 0.25, 0.01);
    assert_eq!(snapped, point);
}

#[test]
fn snap_rejected_when_worse() {
    let s = 0.5f32.sqrt();
    let planes = [
        Plane::new(Vector3::new(s, s, 0.0), 2.016 * s),
        Plane::new(Vector3::new(0.0, 0.0, 1.0), 3.0),
        Plane::new(Vector3::new(s, -s, 0.0), 0.0),
    ];
    let point = Vector3::new(1.008, 1.008, 3.0);

    // Each axis is within epsilon of the grid, but together they move the point
    // further than epsilon off the slanted plane.
    let snapped = snap_point(&point, [&planes[0], &planes[1], &planes[2]], 0.25, 0.01);
    assert_eq!(snapped, point);
}

#[test]
fn snap_accepted_within_epsilon() {
    let planes = axis_planes(1.004, 2.0, 3.0);
    let point = Vector3::new(1.004, 2.0, 3.0);

    let snapped = snap_point(&point, [&planes[0], &planes[1], &planes[2]], 0.25, 0.01);
    assert_eq!(snapped, Vector3::new(1.0, 2.0, 3.0));
}
