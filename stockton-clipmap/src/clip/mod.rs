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

//! Rebuilding faces from clip map brushes

pub mod axial;
pub mod brush;
pub mod file;
pub mod materials;
pub mod snap;
pub mod vertices;
pub mod winding;

pub use self::axial::{BrushPlanes, PlaneId};
pub use self::vertices::{generate_vertices, CandidateVertex};
pub use self::winding::Winding;
