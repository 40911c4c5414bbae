// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy map -> seam
//!
//! The energy map is treated as a directed acyclic graph in which
//! every pixel points at the (up to) three pixels below it.  Rows are
//! already a topological order, so a single pass from top to bottom
//! finds the cheapest path into every pixel.

use crate::seam::Seam;
use crate::twodmap::{CostAndBackPointer, TwoDimensionalMap};

/// This trait defines how we will get seams out of an image.  Just
/// enough to make room for more than one carver.
pub trait SeamFinder {
    /// The next left-to-right seam: one y coordinate per column.
    fn find_horizontal_seam(&mut self) -> Seam;

    /// The next top-to-bottom seam: one x coordinate per row.
    fn find_vertical_seam(&mut self) -> Seam;
}

/// The filled-in seam digraph for one energy map: the cheapest
/// cumulative cost into every pixel, and where it came from.
#[derive(Debug)]
pub struct ShortestPaths {
    paths: TwoDimensionalMap<CostAndBackPointer>,
}

impl ShortestPaths {
    /// Run the dynamic program over an energy map.
    ///
    /// Of the three candidate parents, directly above is the default;
    /// up-left and then up-right replace it only when strictly cheaper,
    /// so exact ties always resolve the same way.
    pub fn new(energy: &TwoDimensionalMap<f64>) -> Self {
        let (width, height) = (energy.width, energy.height);
        let mut paths: TwoDimensionalMap<CostAndBackPointer> =
            TwoDimensionalMap::new(width, height);

        // Populate the first row with their native energies.
        for x in 0..width {
            paths[(x, 0)] = CostAndBackPointer {
                cost: energy[(x, 0)],
                parent: x,
            };
        }

        for y in 1..height {
            for x in 0..width {
                let erg = energy[(x, y)];
                let mut best = CostAndBackPointer {
                    cost: paths[(x, y - 1)].cost + erg,
                    parent: x,
                };

                if x > 0 {
                    let up_left = paths[(x - 1, y - 1)].cost + erg;
                    if up_left < best.cost {
                        best = CostAndBackPointer {
                            cost: up_left,
                            parent: x - 1,
                        };
                    }
                }

                if x + 1 < width {
                    let up_right = paths[(x + 1, y - 1)].cost + erg;
                    if up_right < best.cost {
                        best = CostAndBackPointer {
                            cost: up_right,
                            parent: x + 1,
                        };
                    }
                }

                paths[(x, y)] = best;
            }
        }

        ShortestPaths { paths }
    }

    /// The cost of the cheapest path from the top row into (x, y).
    pub fn cost(&self, x: u32, y: u32) -> f64 {
        self.paths[(x, y)].cost
    }

    /// The bottom-row column with the cheapest cumulative cost.  The
    /// leftmost one wins a tie.
    pub fn min_endpoint(&self) -> u32 {
        let last = self.paths.row(self.paths.height - 1);
        let mut seam_col = 0;
        for (x, cell) in last.iter().enumerate().skip(1) {
            if cell.cost < last[seam_col].cost {
                seam_col = x;
            }
        }
        seam_col as u32
    }

    /// Working backwards from a bottom-row column, generate the x
    /// coordinates of the path that ends there, top row first.
    pub fn trace(&self, endpoint: u32) -> Seam {
        let mut seam_col = endpoint;
        let mut seam: Seam = (0..self.paths.height)
            .rev()
            .map(|y| {
                let here = seam_col;
                seam_col = self.paths[(here, y)].parent;
                here
            })
            .collect();
        seam.reverse();
        seam
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// zipped with the range (0..height), give the XY coordinates of the
/// cheapest top-to-bottom seam.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Seam {
    let paths = ShortestPaths::new(energy);
    paths.trace(paths.min_endpoint())
}
