// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A proxy for the image crate's `GenericImageView` that maps the
//! width to the original height, and vice versa, as well as every x to
//! y and vice versa.  Reading every pixel of the proxy into a fresh
//! buffer transposes the image, which is how the horizontal seam
//! operations get to reuse the vertical ones.

use image::{GenericImageView, ImageBuffer, Pixel};

pub struct Flipper<'a, I: GenericImageView> {
    pub image: &'a I,
}

impl<'a, I: GenericImageView> GenericImageView for Flipper<'a, I> {
    type Pixel = I::Pixel;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn get_pixel(&self, x: u32, y: u32) -> I::Pixel {
        self.image.get_pixel(y, x)
    }
}

/// A new image with the dimensions swapped and the pixel at (x, y)
/// moved to (y, x).  Doing this twice gives back the original.
pub fn transpose<I, P>(image: &I) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
{
    let flipped = Flipper { image };
    let (width, height) = flipped.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| flipped.get_pixel(x, y))
}
