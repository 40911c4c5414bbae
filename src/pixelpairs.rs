// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given two pixels, the gradient between them is the squared
//! distance between the colors that make them up, the classic
//! d(R)² + d(G)² + d(B)².

use image::{Pixel, Primitive};
use num_traits::NumCast;
use std::iter::zip;

/// (Pixel, Pixel) -> squared gradient
///
/// Takes the channels (R,G,B) from two pixels, squares the difference
/// between each channel, and sums them all up:
///
/// ```text
/// |Δ|² = (Δr)² + (Δg)² + (Δb)²
/// ```
///
/// Only the first three channels count; alpha, if present, is ignored.
#[inline]
pub fn squared_gradient<P, S>(p1: &P, p2: &P) -> u64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    zip(p1.channels(), p2.channels())
        .take(3)
        .map(|(c1, c2)| {
            let c1s: i64 = NumCast::from(*c1).unwrap_or(0);
            let c2s: i64 = NumCast::from(*c2).unwrap_or(0);
            (c1s - c2s).pow(2)
        })
        .fold(0, |a, c| a + <u64 as NumCast>::from(c).unwrap_or(0))
}
