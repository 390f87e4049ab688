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

//! Rebuilds explicit faces from clip map collision brushes.
//!
//! A collision brush is only stored as a bounding box plus a set of cutting planes.
//! This crate intersects those planes to find the brush's corners, wraps the corners
//! of each plane into an ordered convex winding, and picks a material name for the
//! whole brush so it can be exported or drawn.

extern crate nalgebra as na;

#[macro_use]
extern crate derive_builder;

pub mod clip;
pub mod options;
pub mod traits;
pub mod types;

pub use crate::clip::brush::{reconstruct_brush, ClipBrush, ClipBrushSide};
pub use crate::clip::file::ClipMap;
pub use crate::options::{MaterialMode, ReconstructOptions, ReconstructOptionsBuilder};
pub use crate::traits::{Brush, BrushSide, HasBrushes, HasMaterials, Material, Plane};
pub use crate::types::{ClipError, Result};
