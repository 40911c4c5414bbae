// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main engine
//!
//! The carver owns the picture being resized.  Every removal (and
//! every transpose) builds a brand new buffer and swaps it in, since
//! the dimensions change each time.  Horizontal seams are found and
//! removed by transposing, doing the vertical operation, and
//! transposing back.

use crate::energy::{calculate_energy, pixel_energy};
use crate::error::SeamError;
use crate::flipper::transpose;
use crate::seam::{check_seam, Orientation, Seam};
use crate::seamfinder::{energy_to_vertical_seam, SeamFinder};
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use log::debug;

// Drop one pixel from every row.  The caller has already validated
// the seam against this image.
fn remove_vertical_seam(image: &RgbImage, seam: &[u32]) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let skip = seam[y as usize];
        for (newx, x) in (0..width).filter(|x| *x != skip).enumerate() {
            imgbuf.put_pixel(newx as u32, y, *image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: RgbImage,
}

impl SeamCarver {
    /// Creates a new SeamCarver that takes ownership of the picture.
    /// Fails if the picture is zero pixels wide or high.
    pub fn new(picture: RgbImage) -> Result<Self, SeamError> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        Ok(SeamCarver { picture })
    }

    /// Creates a new SeamCarver from any decoded image.  Alpha is
    /// dropped and deeper channels are narrowed to eight bits.
    pub fn from_image(image: &DynamicImage) -> Result<Self, SeamError> {
        SeamCarver::new(image.to_rgb8())
    }

    /// The current picture.
    pub fn picture(&self) -> &RgbImage {
        &self.picture
    }

    /// Give up the carver and keep the picture.
    pub fn into_picture(self) -> RgbImage {
        self.picture
    }

    /// Width of the current picture, in pixels.
    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    /// Height of the current picture, in pixels.
    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// The color of the pixel at column x, row y.  Panics if (x, y) is
    /// not in the current picture.
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.picture.get_pixel(x, y)
    }

    /// The dual-gradient energy of the pixel at column x, row y.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, SeamError> {
        pixel_energy(&self.picture, x, y)
    }

    fn transpose(&mut self) {
        self.picture = transpose(&self.picture);
    }

    /// Remove a top-to-bottom seam, making the picture one pixel
    /// narrower.  On error the picture is unchanged.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        if seam.is_empty() {
            return Err(SeamError::MissingSeam);
        }
        if self.width() <= 1 {
            return Err(SeamError::AtMinimum {
                orientation: Orientation::Vertical,
            });
        }
        check_seam(seam, Orientation::Vertical, self.width(), self.height())?;

        self.picture = remove_vertical_seam(&self.picture, seam);
        debug!(
            "removed vertical seam, now {}x{}",
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Remove a left-to-right seam, making the picture one pixel
    /// shorter.  On error the picture is unchanged.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        if seam.is_empty() {
            return Err(SeamError::MissingSeam);
        }
        if self.height() <= 1 {
            return Err(SeamError::AtMinimum {
                orientation: Orientation::Horizontal,
            });
        }
        check_seam(seam, Orientation::Horizontal, self.width(), self.height())?;

        // Once transposed the seam is a valid vertical one, so this
        // can't fail.
        let turned = transpose(&self.picture);
        self.picture = transpose(&remove_vertical_seam(&turned, seam));
        debug!(
            "removed horizontal seam, now {}x{}",
            self.width(),
            self.height()
        );
        Ok(())
    }

    // The entire energy map and seam digraph are recalculated for
    // every seam.  It should be possible to find the span of columns
    // affected by the carve and recalculate only those.

    /// Repeatedly carve seams out of the picture until it is
    /// `new_width` by `new_height`: all the vertical seams first, then
    /// all the horizontal ones.  An impossible target is refused before
    /// any seam is removed.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), SeamError> {
        let (width, height) = (self.width(), self.height());
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::EmptyImage {
                width: new_width,
                height: new_height,
            });
        }
        if new_width > width || new_height > height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }

        while self.width() > new_width {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam)?;
        }
        while self.height() > new_height {
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam)?;
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_vertical_seam(&mut self) -> Seam {
        energy_to_vertical_seam(&calculate_energy(&self.picture))
    }

    fn find_horizontal_seam(&mut self) -> Seam {
        self.transpose();
        let seam = self.find_vertical_seam();
        self.transpose();
        seam
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::BORDER_ENERGY;

    fn gradient(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x * 37 % 256) as u8, (y * 59 % 256) as u8, ((x + y) * 13 % 256) as u8])
        })
    }

    // A 3x4 grey image with one bright pixel at (1, 2).
    fn bright_spot() -> RgbImage {
        let mut image = ImageBuffer::from_pixel(3, 4, Rgb([100, 100, 100]));
        image.put_pixel(1, 2, Rgb([250, 250, 250]));
        image
    }

    #[test]
    fn vertical_seam_through_the_bright_spot() {
        let mut carver = SeamCarver::new(bright_spot()).unwrap();
        let seam = carver.find_vertical_seam();
        assert_eq!(seam.len(), 4);
        assert_eq!(seam[2], 1);
        assert_eq!(seam, vec![1, 1, 1, 0]);

        let emap = calculate_energy(carver.picture());
        let paths = crate::seamfinder::ShortestPaths::new(&emap);
        let along: f64 = seam
            .iter()
            .enumerate()
            .map(|(y, x)| carver.energy(*x, y as u32).unwrap())
            .sum();
        assert_eq!(paths.cost(paths.min_endpoint(), 3), along);
        // Border rows at both ends, the pixel above the spot, and the
        // spot itself, whose up and down neighbors match.
        let above = (3.0f64 * 150.0 * 150.0).sqrt();
        assert!((along - (2.0 * BORDER_ENERGY + above)).abs() < 1e-9);
    }

    #[test]
    fn vertical_seams_are_connected_and_in_range() {
        let mut carver = SeamCarver::new(gradient(9, 6)).unwrap();
        let seam = carver.find_vertical_seam();
        assert_eq!(seam.len(), carver.height() as usize);
        assert_eq!(check_seam(&seam, Orientation::Vertical, 9, 6), Ok(()));
    }

    #[test]
    fn horizontal_seams_are_connected_and_in_range() {
        let image = gradient(9, 6);
        let mut carver = SeamCarver::new(image.clone()).unwrap();
        let seam = carver.find_horizontal_seam();
        assert_eq!(seam.len(), carver.width() as usize);
        assert_eq!(check_seam(&seam, Orientation::Horizontal, 9, 6), Ok(()));
        // Searching leaves the picture exactly as it was.
        assert_eq!(carver.picture(), &image);
    }

    #[test]
    fn removing_a_vertical_seam_drops_one_pixel_per_row() {
        let image = gradient(5, 3);
        let mut carver = SeamCarver::new(image.clone()).unwrap();
        let seam = vec![1, 2, 3];
        carver.remove_vertical_seam(&seam).unwrap();
        assert_eq!((carver.width(), carver.height()), (4, 3));
        for y in 0..3 {
            let expected: Vec<Rgb<u8>> = (0..5)
                .filter(|x| *x != seam[y as usize])
                .map(|x| *image.get_pixel(x, y))
                .collect();
            let got: Vec<Rgb<u8>> = (0..4).map(|x| carver.get_pixel(x, y)).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn removing_a_horizontal_seam_drops_one_pixel_per_column() {
        let image = gradient(3, 4);
        let mut carver = SeamCarver::new(image.clone()).unwrap();
        let seam = vec![3, 2, 2];
        carver.remove_horizontal_seam(&seam).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 3));
        for x in 0..3 {
            let expected: Vec<Rgb<u8>> = (0..4)
                .filter(|y| *y != seam[x as usize])
                .map(|y| *image.get_pixel(x, y))
                .collect();
            let got: Vec<Rgb<u8>> = (0..3).map(|y| carver.get_pixel(x, y)).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn rejected_removals_leave_the_picture_alone() {
        let image = gradient(4, 4);
        let mut carver = SeamCarver::new(image.clone()).unwrap();
        assert_eq!(carver.remove_vertical_seam(&[]), Err(SeamError::MissingSeam));
        assert_eq!(carver.remove_horizontal_seam(&[]), Err(SeamError::MissingSeam));
        assert!(matches!(
            carver.remove_vertical_seam(&[0, 2, 2, 2]),
            Err(SeamError::InvalidSeam { .. })
        ));
        assert!(matches!(
            carver.remove_horizontal_seam(&[0, 1, 2]),
            Err(SeamError::InvalidSeam { .. })
        ));
        assert!(matches!(
            carver.remove_horizontal_seam(&[0, 1, 2, 4]),
            Err(SeamError::InvalidSeam { .. })
        ));
        assert_eq!(carver.picture(), &image);
    }

    #[test]
    fn stale_seams_are_rejected() {
        let mut carver = SeamCarver::new(gradient(6, 4)).unwrap();
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
        let horizontal = carver.find_horizontal_seam();
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
        assert!(matches!(
            carver.remove_horizontal_seam(&horizontal),
            Err(SeamError::InvalidSeam { .. })
        ));
    }

    #[test]
    fn single_column_cannot_lose_a_vertical_seam() {
        let mut carver = SeamCarver::new(gradient(1, 5)).unwrap();
        let seam = carver.find_vertical_seam();
        assert_eq!(seam, vec![0; 5]);
        assert_eq!(
            carver.remove_vertical_seam(&seam),
            Err(SeamError::AtMinimum {
                orientation: Orientation::Vertical
            })
        );
        assert_eq!(carver.width(), 1);
    }

    #[test]
    fn horizontal_removal_runs_down_to_one_row() {
        let mut carver = SeamCarver::new(gradient(4, 6)).unwrap();
        for expected in (1..6).rev() {
            let seam = carver.find_horizontal_seam();
            carver.remove_horizontal_seam(&seam).unwrap();
            assert_eq!((carver.width(), carver.height()), (4, expected));
        }
        let seam = carver.find_horizontal_seam();
        assert_eq!(
            carver.remove_horizontal_seam(&seam),
            Err(SeamError::AtMinimum {
                orientation: Orientation::Horizontal
            })
        );
    }

    #[test]
    fn corners_and_edges_are_border_energy() {
        let carver = SeamCarver::new(gradient(5, 4)).unwrap();
        for y in 0..4 {
            assert_eq!(carver.energy(0, y), Ok(BORDER_ENERGY));
        }
        for x in 0..5 {
            assert_eq!(carver.energy(x, 0), Ok(BORDER_ENERGY));
        }
        assert!(carver.energy(5, 0).is_err());
    }

    #[test]
    fn carve_reaches_the_target_size() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut carver = SeamCarver::new(gradient(10, 8)).unwrap();
        carver.carve(7, 5).unwrap();
        assert_eq!((carver.width(), carver.height()), (7, 5));
        carver.carve(7, 5).unwrap();
        assert_eq!(carver.into_picture().dimensions(), (7, 5));
    }

    #[test]
    fn carve_refuses_to_upscale() {
        let mut carver = SeamCarver::new(gradient(4, 4)).unwrap();
        assert!(matches!(
            carver.carve(5, 3),
            Err(SeamError::Upscale { .. })
        ));
        assert_eq!((carver.width(), carver.height()), (4, 4));
    }

    #[test]
    fn empty_pictures_are_refused() {
        assert_eq!(
            SeamCarver::new(RgbImage::new(0, 3)).unwrap_err(),
            SeamError::EmptyImage {
                width: 0,
                height: 3
            }
        );
        assert!(matches!(
            SeamCarver::new(RgbImage::new(4, 0)),
            Err(SeamError::EmptyImage { .. })
        ));
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(SeamCarver::from_image(&empty).is_err());
    }

    #[test]
    fn carve_to_nothing_leaves_the_picture_alone() {
        let image = gradient(5, 4);
        let mut carver = SeamCarver::new(image.clone()).unwrap();
        assert_eq!(
            carver.carve(0, 4),
            Err(SeamError::EmptyImage {
                width: 0,
                height: 4
            })
        );
        assert!(matches!(
            carver.carve(5, 0),
            Err(SeamError::EmptyImage { .. })
        ));
        assert_eq!(carver.picture(), &image);
    }
}
