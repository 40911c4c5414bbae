// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the carver's intermediate products, for when you want
//! to see what it's thinking.

use crate::seam::Orientation;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma, Pixel};
use num_traits::NumCast;

/// Render an energy map as a greyscale image, scaled so the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        let scaled = if factor > 0.0 {
            (energy[(x, y)] * 255.0 / factor).round()
        } else {
            0.0
        };
        Luma([NumCast::from(scaled.max(0.0).min(255.0)).unwrap_or(0u8)])
    })
}

/// A copy of `image` with the pixels of `seam` painted over in
/// `color`.  Indices that fall outside the image are skipped, so a
/// stale seam paints what it can.
pub fn paint_seam<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    seam: &[u32],
    orientation: Orientation,
    color: P,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
{
    let mut out = image.clone();
    let (width, height) = out.dimensions();
    for (i, idx) in seam.iter().enumerate() {
        let (x, y) = match orientation {
            Orientation::Vertical => (*idx, i as u32),
            Orientation::Horizontal => (i as u32, *idx),
        };
        if x < width && y < height {
            out.put_pixel(x, y, color);
        }
    }
    out
}
