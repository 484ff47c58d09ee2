// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid orientation transforms.
//!
//! The engine only ever carves vertical seams.  Horizontal carving is
//! the caller's transform: mirror then transpose the grid on the way
//! in, and invert (transpose then mirror) on the way out.  Keeping the
//! transform outside the engine keeps every inner loop row-major.

use crate::parallel;

/// Swap rows and columns; the output's row `y` collects the input's
/// column `y`.
pub fn transpose(image: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let height = image.len();
    let width = image.first().map_or(0, Vec::len);
    let mut out = vec![vec![0u32; height]; width];
    parallel::for_each_row(&mut out, |y, row| {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = image[x][y];
        }
    });
    out
}

/// Reverse every row in place.
pub fn mirror(image: &mut [Vec<u32>]) {
    parallel::for_each_row(image, |_, row| row.reverse());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_axes() {
        let image = vec![vec![1u32, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(&image), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn mirror_then_transpose_inverts_with_transpose_then_mirror() {
        let original = vec![vec![1u32, 2, 3], vec![4, 5, 6]];
        let mut inbound = original.clone();
        mirror(&mut inbound);
        let inbound = transpose(&inbound);
        let mut outbound = transpose(&inbound);
        mirror(&mut outbound);
        assert_eq!(outbound, original);
    }
}
