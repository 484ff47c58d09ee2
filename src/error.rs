// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Engine errors.
//!
//! Only construction can fail hard.  Hitting a carving limit (minimum
//! width, empty history) is an expected terminal condition and is
//! reported as a normal `false`/zero return, never as an error.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The input grid is too small to carve, or its rows are ragged.
    /// `width` is the length of the first row.
    #[fail(
        display = "image must be a rectangular grid at least 2 wide and 1 tall, got {}x{}",
        width, height
    )]
    InvalidDimension { width: usize, height: usize },
}
