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

//! Materials brush faces can be given.

use serde::{Deserialize, Serialize};

/// Name of the filler material that brushes fall back on.
pub const FILLER_MATERIAL: &str = "caulk";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A material from a clip map.
/// Surfaces refer to materials by their surface flags, not their position in the table.
pub struct Material {
    pub name: String,
    pub surface: i32,
    pub contents: i32,
}

impl Material {
    pub fn new<S: Into<String>>(name: S, surface: i32, contents: i32) -> Material {
        Material {
            name: name.into(),
            surface,
            contents,
        }
    }

    /// Whether this is the filler material.
    pub fn is_filler(&self) -> bool {
        self.name == FILLER_MATERIAL
    }
}

pub trait HasMaterials {
    fn materials(&self) -> &[Material];

    fn get_material(&self, idx: u32) -> Option<&Material> {
        self.materials().get(idx as usize)
    }
}
