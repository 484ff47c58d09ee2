// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, addressable two-dimensional map.
//!
//! Used for the cumulative cost map and the forward-energy accumulator,
//! both of which are rebuilt at the image's current dimensions after
//! every structural change, so a `Grid` is always allocated at exactly
//! the width it describes.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // The number one rule of this game is to keep the index math in a
    // singular location and never, ever mess with it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// One full row as a slice; the seam trace scans rows this way.
    pub fn row(&self, y: usize) -> &[P] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
