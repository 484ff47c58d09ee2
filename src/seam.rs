// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam extraction.
//!
//! Given the cost map, start from the cheapest entry in the first row
//! and walk downward, at each row considering only the up-to-three
//! cells vertically adjacent to the previous choice, so the result is
//! always connected.  Every minimum is resolved to the first (leftmost)
//! index that achieves it, both in the first row and inside every
//! window — one tie-break rule everywhere makes the whole extraction a
//! pure function of the map.
//!
//! The walk is inherently sequential: each row's window depends on the
//! previous row's decision.

use crate::cq;
use crate::gridmap::Grid;

/// Index of the first minimum in `row`.
pub(crate) fn argmin(row: &[i32]) -> usize {
    let mut best = 0;
    for (x, value) in row.iter().enumerate().skip(1) {
        if *value < row[best] {
            best = x;
        }
    }
    best
}

/// Trace one seam through the map: one column index per row, adjacent
/// entries differing by at most one.
pub(crate) fn trace(map: &Grid<i32>) -> Vec<usize> {
    let (width, height) = (map.width(), map.height());
    let mut path = Vec::with_capacity(height);
    let mut col = argmin(map.row(0));
    path.push(col);
    for y in 1..height {
        let row = map.row(y);
        let lo = cq!(col == 0, 0, col - 1);
        let hi = cq!(col == width - 1, col, col + 1);
        col = lo + argmin(&row[lo..=hi]);
        path.push(col);
    }
    path
}
