// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Uses the dual-gradient energy function: for every interior pixel,
//! the squared color gradient across its left/right neighbors is added
//! to the squared color gradient across its up/down neighbors, and the
//! square root of the sum is the pixel's energy.  Pixels on the border
//! of the image don't have both neighbors, and are given a fixed, high
//! energy so that seams never prefer to run along the edge.

use crate::error::SeamError;
use crate::pixelpairs::squared_gradient;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// The energy assigned to every pixel on the border of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

// Callers guarantee (x, y) is in the image.
fn energy_at<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
        return BORDER_ENERGY;
    }

    let dx = squared_gradient(&image.get_pixel(x - 1, y), &image.get_pixel(x + 1, y));
    let dy = squared_gradient(&image.get_pixel(x, y - 1), &image.get_pixel(x, y + 1));
    (dx as f64 + dy as f64).sqrt()
}

/// The energy of a single pixel.  Fails if (x, y) isn't in the image.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> Result<f64, SeamError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(SeamError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(energy_at(image, x, y))
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  The map is the
/// same size as the image and is only good for as long as the image
/// is unchanged.
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_at(image, x, y);
    }
    emap
}
