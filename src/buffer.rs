// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-wise carving of the pixel and energy grids, and snapshot
//! flattening.
//!
//! A seam touches every row exactly once, and each row is its own
//! independently resizable `Vec`, so removal and reinsertion are
//! shift-based edits fanned out across rows.  The O(width) shift per
//! row matches the cost profile the engine is designed around; nothing
//! fancier is warranted.

use crate::cq;
use crate::parallel;
use itertools::izip;

/// Delete the pixel and energy value at `path[y]` in every row,
/// narrowing each row by one.  Returns the removed values in row order,
/// captured for the history stack.
pub(crate) fn remove_along(
    image: &mut [Vec<u32>],
    energy: &mut [Vec<i32>],
    path: &[usize],
) -> (Vec<u32>, Vec<i32>) {
    let mut pixels = vec![0u32; path.len()];
    let mut removed = vec![0i32; path.len()];
    {
        let mut rows: Vec<_> = izip!(
            image.iter_mut(),
            energy.iter_mut(),
            pixels.iter_mut(),
            removed.iter_mut(),
            path.iter().cloned()
        )
        .collect();
        parallel::for_each_row(&mut rows, |_, row| {
            let (image_row, energy_row, pixel, cost, at) = row;
            **pixel = image_row.remove(*at);
            **cost = energy_row.remove(*at);
        });
    }
    (pixels, removed)
}

/// Inverse of [`remove_along`]: put the recorded values back at the
/// recorded indices, widening each row by one.
pub(crate) fn insert_along(
    image: &mut [Vec<u32>],
    energy: &mut [Vec<i32>],
    path: &[usize],
    pixels: &[u32],
    costs: &[i32],
) {
    let mut rows: Vec<_> = izip!(
        image.iter_mut(),
        energy.iter_mut(),
        path.iter().cloned(),
        pixels.iter().cloned(),
        costs.iter().cloned()
    )
    .collect();
    parallel::for_each_row(&mut rows, |_, row| {
        let (image_row, energy_row, at, pixel, cost) = row;
        image_row.insert(*at, *pixel);
        energy_row.insert(*at, *cost);
    });
}

/// Flatten the row grid into the row-major snapshot buffer.
pub(crate) fn flatten(image: &[Vec<u32>], width: usize, data: &mut Vec<u32>) {
    data.clear();
    data.resize(width * image.len(), 0);
    let mut stripes: Vec<_> = data.chunks_mut(width).zip(image.iter()).collect();
    parallel::for_each_row(&mut stripes, |_, stripe| {
        let (out, row) = stripe;
        out.copy_from_slice(&row[..]);
    });
}

/// Flatten, then paint the seam column and its two horizontal neighbors
/// (clamped to the grid) in `color`.  Only the snapshot buffer is
/// touched; the row grids stay pristine.
pub(crate) fn flatten_highlight(
    image: &[Vec<u32>],
    width: usize,
    path: &[usize],
    color: u32,
    data: &mut Vec<u32>,
) {
    data.clear();
    data.resize(width * image.len(), 0);
    let mut stripes: Vec<_> = data.chunks_mut(width).zip(image.iter()).collect();
    parallel::for_each_row(&mut stripes, |y, stripe| {
        let (out, row) = stripe;
        out.copy_from_slice(&row[..]);
        let at = path[y];
        let lo = cq!(at == 0, 0, at - 1);
        let hi = cq!(at + 1 < width, at + 1, width - 1);
        for x in lo..=hi {
            out[x] = color;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_then_insert_restores_both_grids() {
        let image: Vec<Vec<u32>> = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let energy: Vec<Vec<i32>> = vec![vec![-1, -2, -3], vec![-4, -5, -6], vec![-7, -8, -9]];
        let path = vec![2, 1, 0];

        let mut carved_image = image.clone();
        let mut carved_energy = energy.clone();
        let (pixels, costs) = remove_along(&mut carved_image, &mut carved_energy, &path);
        assert_eq!(pixels, vec![3, 5, 7]);
        assert_eq!(costs, vec![-3, -5, -7]);
        assert_eq!(carved_image, vec![vec![1, 2], vec![4, 6], vec![8, 9]]);
        assert_eq!(carved_energy, vec![vec![-1, -2], vec![-4, -6], vec![-8, -9]]);

        insert_along(&mut carved_image, &mut carved_energy, &path, &pixels, &costs);
        assert_eq!(carved_image, image);
        assert_eq!(carved_energy, energy);
    }

    #[test]
    fn flatten_is_row_major() {
        let image = vec![vec![1u32, 2], vec![3, 4]];
        let mut data = Vec::new();
        flatten(&image, 2, &mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn highlight_paints_three_wide_clamped() {
        let image = vec![vec![0u32; 4]; 3];
        let path = vec![0, 2, 3];
        let mut data = Vec::new();
        flatten_highlight(&image, 4, &path, 9, &mut data);
        assert_eq!(
            data,
            vec![
                9, 9, 0, 0, // clamped at the left edge
                0, 9, 9, 9, // full three-wide band
                0, 0, 9, 9, // clamped at the right edge
            ]
        );
    }
}
