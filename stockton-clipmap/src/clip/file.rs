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

//! A clip map's materials and brushes, and rebuilding all of them at once.

use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::brush::{reconstruct_brush, ClipBrush};
use crate::options::ReconstructOptions;
use crate::traits::{Brush, HasBrushes, HasMaterials, Material};
use crate::types::{ClipError, Result};

/// The collision part of a map: a material table and the brushes using it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipMap {
    pub materials: Box<[Material]>,
    pub brushes: Box<[Brush]>,
}

impl ClipMap {
    pub fn new(materials: Vec<Material>, brushes: Vec<Brush>) -> ClipMap {
        ClipMap {
            materials: materials.into_boxed_slice(),
            brushes: brushes.into_boxed_slice(),
        }
    }

    /// Rebuild the brush at `index`. See [`reconstruct_brush`].
    pub fn reconstruct_brush(
        &self,
        index: u32,
        options: &ReconstructOptions,
    ) -> Result<Option<ClipBrush>> {
        let brush = self.get_brush(index).ok_or(ClipError::BrushIndex(index))?;
        reconstruct_brush(brush, index, &self.materials, options)
    }

    /// Rebuild every brush, in parallel.
    ///
    /// Brushes without geometry, or that overflow the vertex cap, are skipped.
    /// The rest come back in the order they're stored in.
    pub fn reconstruct_brushes(&self, options: &ReconstructOptions) -> Result<Vec<ClipBrush>> {
        options.check()?;
        let start = Instant::now();

        let brushes: Vec<ClipBrush> = self
            .brushes
            .par_iter()
            .enumerate()
            .filter_map(|(n, brush)| {
                match reconstruct_brush(brush, n as u32, &self.materials, options) {
                    Ok(rebuilt) => rebuilt,
                    Err(err) => {
                        warn!("Skipping brush {}: {}", n, err);
                        None
                    }
                }
            })
            .collect();

        debug!(
            "Rebuilt {} of {} brushes in {:?}",
            brushes.len(),
            self.brushes.len(),
            start.elapsed()
        );

        Ok(brushes)
    }
}

impl HasBrushes for ClipMap {
    type BrushesIter<'a> = std::slice::Iter<'a, Brush>;

    fn brushes_iter(&self) -> Self::BrushesIter<'_> {
        self.brushes.iter()
    }

    fn brushes_len(&self) -> u32 {
        self.brushes.len() as u32
    }

    fn get_brush(&self, index: u32) -> Option<&Brush> {
        self.brushes.get(index as usize)
    }
}

impl HasMaterials for ClipMap {
    fn materials(&self) -> &[Material] {
        &self.materials
    }
}
