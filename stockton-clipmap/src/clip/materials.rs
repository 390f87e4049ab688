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

//! Picking material names for rebuilt brushes.
//!
//! Brushes are mostly covered in the filler material, which is invisible in game.
//! When a brush is shown it should get whatever real material it has, preferring
//! the surface facing most upwards.

use super::axial::PlaneId;
use crate::traits::{Brush, Material, FILLER_MATERIAL};

/// Flags used for the filler material when the table doesn't have one.
pub const MISSING_FILLER_FLAGS: i32 = 0x7FFF_FFFE;

/// Flags for a face that doesn't exist on the brush.
pub const UNKNOWN_FLAGS: i32 = 0x7FFF_FFFF;

/// Surface flags of each bounding box face, as `[min/max][axis]` indices into
/// [`Brush::axial_surface`], in bounding plane order.
const AXIAL_SURFACE_INDEX: [(usize, usize); 6] = [
    (0, 2), // bottom
    (1, 2), // top
    (0, 1), // left
    (1, 0), // right
    (1, 1), // front
    (0, 0), // back
];

/// Name of the first material with exactly these surface flags, or the filler if none do.
pub fn material_name(surface: i32, materials: &[Material]) -> &str {
    materials
        .iter()
        .find(|m| m.surface == surface)
        .map(|m| m.name.as_str())
        .unwrap_or(FILLER_MATERIAL)
}

/// Surface flags of the filler material in this table.
pub fn filler_surface_flags(materials: &[Material]) -> i32 {
    materials
        .iter()
        .find(|m| m.is_filler())
        .map(|m| m.surface)
        .unwrap_or(MISSING_FILLER_FLAGS)
}

/// Surface flags for one face of a brush.
pub fn side_surface_flags(brush: &Brush, id: PlaneId) -> i32 {
    match id.side_index() {
        Some(n) => brush.sides.get(n).map(|s| s.surface).unwrap_or(UNKNOWN_FLAGS),
        None => {
            let (k, m) = AXIAL_SURFACE_INDEX[id.0];
            brush.axial_surface[k][m]
        }
    }
}

/// Material name for one face of a brush.
pub fn side_material<'a>(brush: &Brush, id: PlaneId, materials: &'a [Material]) -> &'a str {
    material_name(side_surface_flags(brush, id), materials)
}

/// Surface flags to use for the brush as a whole.
///
/// The top face wins unless it's filler. Then the most upward facing non-filler side
/// is used, then the first non-filler bounding box face, and only then the filler.
pub fn brush_surface_flags(brush: &Brush, filler: i32) -> i32 {
    let top = brush.axial_surface[1][2];
    if top != filler {
        return top;
    }

    let mut best: Option<(f32, i32)> = None;
    for side in brush.sides.iter().filter(|s| s.surface != filler) {
        let up = side.plane.normal.z;
        if best.map_or(true, |(best_up, _)| up > best_up) {
            best = Some((up, side.surface));
        }
    }
    if let Some((_, surface)) = best {
        return surface;
    }

    brush
        .axial_surface
        .iter()
        .flat_map(|row| row.iter())
        .copied()
        .find(|&s| s != filler)
        .unwrap_or(filler)
}

/// Material name to use for the brush as a whole.
pub fn brush_material<'a>(brush: &Brush, materials: &'a [Material]) -> &'a str {
    let filler = filler_surface_flags(materials);
    material_name(brush_surface_flags(brush, filler), materials)
}
