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

//! Collision brushes as stored in a clip map.

use na::Vector3;
use serde::{Deserialize, Serialize};

use super::planes::Plane;

/// One collision brush.
/// The volume is the bounding box `mins..maxs` cut down further by every side's plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub mins: Vector3<f32>,
    pub maxs: Vector3<f32>,

    /// Cutting planes beyond the bounding box.
    pub sides: Box<[BrushSide]>,

    /// Surface flags for the six bounding box faces, indexed `[min/max][axis]`.
    pub axial_surface: [[i32; 3]; 2],
}

/// Bounding surface for brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSide {
    pub plane: Plane,

    /// Surface flags, used to find this side's material.
    pub surface: i32,
}

impl Brush {
    /// A plain box with every face given the same surface flags.
    pub fn from_bounds(mins: Vector3<f32>, maxs: Vector3<f32>, surface: i32) -> Brush {
        Brush {
            mins,
            maxs,
            sides: Box::new([]),
            axial_surface: [[surface; 3]; 2],
        }
    }
}

pub trait HasBrushes {
    type BrushesIter<'a>: Iterator<Item = &'a Brush>
    where
        Self: 'a;

    fn brushes_iter(&self) -> Self::BrushesIter<'_>;
    fn brushes_len(&self) -> u32;
    fn get_brush(&self, index: u32) -> Option<&Brush>;
}
