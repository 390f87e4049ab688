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

//! Error types used while rebuilding brushes.

use thiserror::Error;

/// An error encountered while rebuilding a brush.
///
/// Most geometric problems are not errors: a plane triple that doesn't meet or a face
/// that collapses is simply left out of the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// More plane intersections survived than a sane brush can have.
    #[error("Brush produced more than {limit} vertices")]
    TooManyVertices { limit: usize },

    #[error("No brush with index {0}")]
    BrushIndex(u32),

    #[error("Invalid reconstruction options: {0}")]
    InvalidOptions(String),
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, ClipError>;
