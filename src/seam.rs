// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams and their orientation.
//!
//! A seam is just a list of coordinates: for a vertical seam, the x
//! coordinate of the pixel to drop in each row; for a horizontal seam,
//! the y coordinate to drop in each column.  Zipping it with the range
//! (0..height) or (0..width) gives back the full XY path.

use crate::error::SeamError;
use std::fmt;

/// One index per row (vertical) or per column (horizontal).
pub type Seam = Vec<u32>;

/// Which way a seam runs through the image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top-to-bottom; removing it makes the image narrower.
    Vertical,
    /// Left-to-right; removing it makes the image shorter.
    Horizontal,
}

impl Orientation {
    /// Given an image's dimensions, returns (seam length, index bound)
    /// for a seam running this way.
    pub fn extents(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Check that `seam` is a connected path across an image of the given
/// dimensions.  Nothing gets removed until this has passed.
pub fn check_seam(
    seam: &[u32],
    orientation: Orientation,
    width: u32,
    height: u32,
) -> Result<(), SeamError> {
    let invalid = |reason: String| SeamError::InvalidSeam {
        orientation,
        reason,
    };
    let (length, bound) = orientation.extents(width, height);

    if seam.len() != length as usize {
        return Err(invalid(format!(
            "length is {}, expected {}",
            seam.len(),
            length
        )));
    }

    if let Some((i, idx)) = seam.iter().enumerate().find(|(_, idx)| **idx >= bound) {
        return Err(invalid(format!(
            "index {} at position {} is not below {}",
            idx, i, bound
        )));
    }

    if let Some((i, pair)) = seam
        .windows(2)
        .enumerate()
        .find(|(_, pair)| (pair[0] as i64 - pair[1] as i64).abs() > 1)
    {
        return Err(invalid(format!(
            "jumps from {} to {} at position {}",
            pair[0],
            pair[1],
            i + 1
        )));
    }

    Ok(())
}
