// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carving request can go wrong.
//!
//! Every one of these is a contract violation by the caller.  None of
//! them are transient, and a failed removal never touches the image.

use crate::seam::Orientation;
use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum SeamError {
    /// Asked for the energy of a pixel that isn't in the image.
    #[fail(
        display = "pixel ({}, {}) is outside of a {}x{} image",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Images (and carving targets) need at least one pixel each way.
    #[fail(display = "a {}x{} image has no pixels", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// Asked to remove a seam without supplying one.
    #[fail(display = "no seam was supplied for removal")]
    MissingSeam,

    /// The seam doesn't describe a path through the current image.
    #[fail(display = "invalid {} seam: {}", orientation, reason)]
    InvalidSeam {
        orientation: Orientation,
        reason: String,
    },

    /// The dimension the seam would shrink is already a single pixel.
    #[fail(display = "cannot remove a {} seam from an image one pixel across", orientation)]
    AtMinimum { orientation: Orientation },

    /// Seam carving only shrinks images.
    #[fail(
        display = "cannot upscale a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}
