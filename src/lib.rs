// #![deny(missing_docs)]

//! Content-aware image resizing.
//!
//! A [`SeamCarver`] owns a picture and shrinks it one seam at a time: a
//! connected top-to-bottom (or left-to-right) path of the pixels with
//! the least energy, found by dynamic programming over the picture's
//! dual-gradient energy map.

pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixelpairs;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use dump::{energy_to_image, paint_seam};
pub use energy::{calculate_energy, pixel_energy, BORDER_ENERGY};
pub use error::SeamError;
pub use seam::{check_seam, Orientation, Seam};
pub use seamcarver::SeamCarver;
pub use seamfinder::{energy_to_vertical_seam, SeamFinder, ShortestPaths};
