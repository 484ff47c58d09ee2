// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.
//!
//! A seam is a connected, one-pixel-per-row path through an image whose
//! removal shrinks the image by one column without uniform scaling or
//! cropping.  The [`Carver`] engine finds seams of minimal visual
//! importance under one of two energy models, removes or reinserts them
//! one at a time, and keeps an exact undo history so every removal can
//! be replayed in reverse.
//!
//! The engine consumes a decoded pixel grid (packed `0x00RRGGBB` values,
//! one `Vec` per row) and produces flattened row-major snapshots; codecs,
//! windowing, and coordinate mapping belong to the caller.

extern crate image;

mod ternary;

pub mod buffer;
pub mod carver;
pub mod energy;
pub mod error;
pub mod gridmap;
pub mod history;
pub mod orient;
pub mod parallel;
pub mod preprocess;
pub mod seam;

pub use carver::{Carver, MIN_WIDTH};
pub use energy::EnergyMode;
pub use error::CarveError;
pub use orient::{mirror, transpose};
pub use preprocess::{grayscale, luma, sobel};
