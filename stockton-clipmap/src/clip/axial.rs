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

//! The planes bounding a brush, addressed by a single index.
//!
//! The six bounding box planes come first, in the order -X, +X, -Y, +Y, -Z, +Z.
//! The brush's own sides follow, so side `n` has id `n + 6`.

use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::traits::{Brush, BrushSide, Plane};

/// Number of bounding box planes every brush has.
pub const AXIAL_PLANES: usize = 6;

/// Identifies one plane of a brush by position.
/// Two sides with numerically equal planes still have different ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlaneId(pub usize);

impl PlaneId {
    pub fn axial(n: usize) -> PlaneId {
        debug_assert!(n < AXIAL_PLANES);
        PlaneId(n)
    }

    pub fn side(n: usize) -> PlaneId {
        PlaneId(n + AXIAL_PLANES)
    }

    pub fn is_axial(self) -> bool {
        self.0 < AXIAL_PLANES
    }

    /// The index into the brush's sides, if this isn't a bounding box plane.
    pub fn side_index(self) -> Option<usize> {
        self.0.checked_sub(AXIAL_PLANES)
    }
}

/// Build the six bounding box planes of a brush.
pub fn axial_planes(mins: &Vector3<f32>, maxs: &Vector3<f32>) -> [Plane; AXIAL_PLANES] {
    [
        Plane::new(Vector3::new(-1.0, 0.0, 0.0), -mins.x),
        Plane::new(Vector3::new(1.0, 0.0, 0.0), maxs.x),
        Plane::new(Vector3::new(0.0, -1.0, 0.0), -mins.y),
        Plane::new(Vector3::new(0.0, 1.0, 0.0), maxs.y),
        Plane::new(Vector3::new(0.0, 0.0, -1.0), -mins.z),
        Plane::new(Vector3::new(0.0, 0.0, 1.0), maxs.z),
    ]
}

/// Every plane bounding one brush.
#[derive(Debug, Clone)]
pub struct BrushPlanes<'a> {
    axial: [Plane; AXIAL_PLANES],
    sides: &'a [BrushSide],
}

impl<'a> BrushPlanes<'a> {
    pub fn new(brush: &'a Brush) -> BrushPlanes<'a> {
        BrushPlanes {
            axial: axial_planes(&brush.mins, &brush.maxs),
            sides: &brush.sides,
        }
    }

    pub fn len(&self) -> usize {
        AXIAL_PLANES + self.sides.len()
    }

    /// # Panics
    /// If `id` is past the last side of the brush.
    pub fn get(&self, id: PlaneId) -> &Plane {
        match id.side_index() {
            Some(n) => &self.sides[n].plane,
            None => &self.axial[id.0],
        }
    }

    pub fn axial(&self) -> &[Plane; AXIAL_PLANES] {
        &self.axial
    }

    pub fn sides(&self) -> &'a [BrushSide] {
        self.sides
    }

    /// All plane ids, bounding box planes first.
    pub fn ids(&self) -> impl Iterator<Item = PlaneId> {
        (0..self.len()).map(PlaneId)
    }
}

#[test]
fn axial_plane_ids() {
    assert!(PlaneId::axial(5).is_axial());
    assert!(!PlaneId::side(0).is_axial());
    assert_eq!(PlaneId::side(3), PlaneId(9));
    assert_eq!(PlaneId(9).side_index(), Some(3));
    assert_eq!(PlaneId(2).side_index(), None);
}

#[test]
fn axial_planes_contain_bounds() {
    let mins = Vector3::new(-1.0, -2.0, -3.0);
    let maxs = Vector3::new(4.0, 5.0, 6.0);

    for plane in axial_planes(&mins, &maxs).iter() {
        assert_eq!(plane.distance_to(&mins).max(plane.distance_to(&maxs)), 0.0);
        assert!(plane.distance_to(&((mins + maxs) / 2.0)) < 0.0);
    }
}
