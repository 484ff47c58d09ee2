// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Striped row parallelism.
//!
//! Every data-parallel stage in the engine (grayscale, padding, the
//! gradient, row-wise seam removal/insertion, snapshot flattening) is a
//! loop over rows in which each row is read and written independently.
//! With the `threaded` feature enabled, the rows are split into one
//! contiguous stripe per available core and each stripe is handed to a
//! scoped worker thread; the scope is the fan-in barrier.  No stripe is
//! touched by more than one worker.
//!
//! The row-sequential stages (the cumulative-map recurrence and the seam
//! trace) never come through here: each of their rows depends on the
//! previous one.
//!
//! Without the feature the same closure runs serially, so the feature is
//! purely a throughput knob and every result is identical either way.

/// Apply `f` to every element of `rows`, receiving the element's index.
#[cfg(feature = "threaded")]
pub fn for_each_row<T, F>(rows: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    if rows.is_empty() {
        return;
    }
    let workers = num_cpus::get().max(1);
    let size = (rows.len() + workers - 1) / workers;
    let f = &f;
    crossbeam::thread::scope(|scope| {
        for (stripe, chunk) in rows.chunks_mut(size).enumerate() {
            scope.spawn(move |_| {
                for (offset, row) in chunk.iter_mut().enumerate() {
                    f(stripe * size + offset, row);
                }
            });
        }
    })
    .unwrap();
}

/// Apply `f` to every element of `rows`, receiving the element's index.
#[cfg(not(feature = "threaded"))]
pub fn for_each_row<T, F>(rows: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    for (y, row) in rows.iter_mut().enumerate() {
        f(y, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_visited_once_with_its_own_index() {
        let mut rows: Vec<usize> = vec![0; 37];
        for_each_row(&mut rows, |y, row| *row = y + 1);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(*row, y + 1);
        }
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut rows: Vec<usize> = Vec::new();
        for_each_row(&mut rows, |_, _| panic!("must not be called"));
    }
}
