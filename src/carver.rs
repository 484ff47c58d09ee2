// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving engine.
//!
//! Orchestrates the preprocessor, energy model, cost map, seam trace,
//! row buffers, and undo history.  One engine owns one image for its
//! whole lifetime; operations mutate it in place and either fully
//! complete or fully reject, so the grid is never left with ragged
//! rows.
//!
//! The engine is a single-writer structure: callers serialize access to
//! an instance.  Batch operations honor a cancellation flag *between*
//! seam operations, never mid-seam.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::buffer;
use crate::energy::{EnergyMode, EnergyModel};
use crate::error::CarveError;
use crate::gridmap::Grid;
use crate::history::{History, RemovedSeam};
use crate::seam;

/// Carving stops here: a two-column image refuses further removal.
pub const MIN_WIDTH: usize = 2;

#[derive(Debug)]
pub struct Carver {
    width: usize,
    height: usize,
    /// When false, per-operation snapshot refresh is suppressed (the
    /// lazy-update knob and the interior of batch calls).  Purely a
    /// performance toggle; the seam sequence is unaffected.
    update: bool,
    model: EnergyModel,
    image: Vec<Vec<u32>>,
    map: Grid<i32>,
    /// The image flattened row-major, maintained for cheap snapshots.
    data: Vec<u32>,
    history: History,
    cancel: Option<Arc<AtomicBool>>,
}

impl Carver {
    /// Build an engine over a decoded pixel grid.  Fails with
    /// [`CarveError::InvalidDimension`] when the grid is empty,
    /// narrower than two columns, or ragged.
    pub fn new(image: Vec<Vec<u32>>, mode: EnergyMode) -> Result<Self, CarveError> {
        let height = image.len();
        let width = image.first().map_or(0, Vec::len);
        if height < 1 || width < MIN_WIDTH || image.iter().any(|row| row.len() != width) {
            return Err(CarveError::InvalidDimension { width, height });
        }

        let model = EnergyModel::new(mode, &image);
        let mut carver = Carver {
            width,
            height,
            update: true,
            model,
            image,
            map: Grid::new(0, 0),
            data: Vec::new(),
            history: History::new(),
            cancel: None,
        };
        carver.model.rebuild_map(carver.width, &mut carver.map);
        buffer::flatten(&carver.image, carver.width, &mut carver.data);
        Ok(carver)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> EnergyMode {
        self.model.mode()
    }

    /// Net number of removals that can still be undone.
    pub fn seams_removed(&self) -> usize {
        self.history.len()
    }

    /// The most recently removed seam's path, without disturbing undo
    /// state.
    pub fn last_seam(&self) -> Option<&[usize]> {
        self.history.peek().map(|seam| &seam.path[..])
    }

    /// The snapshot buffer as last maintained.  Under lazy update this
    /// may lag the grid; [`Carver::snapshot`] always regenerates.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Regenerate and return the flattened row-major snapshot.  With
    /// `highlight`, the history-top seam's column and its two neighbors
    /// are painted in `color`; the underlying rows are never touched,
    /// so a later plain snapshot shows the true pixels.
    pub fn snapshot(&mut self, highlight: bool, color: u32) -> &[u32] {
        match self.history.peek() {
            Some(seam) if highlight => {
                buffer::flatten_highlight(&self.image, self.width, &seam.path, color, &mut self.data)
            }
            _ => buffer::flatten(&self.image, self.width, &mut self.data),
        }
        &self.data
    }

    /// When enabled, seam operations stop refreshing the snapshot
    /// buffer; call [`Carver::snapshot`] to resync.  No effect on which
    /// seams are chosen.
    pub fn set_lazy_update(&mut self, enabled: bool) {
        self.update = !enabled;
    }

    /// Install a flag that batch operations poll between seams; set it
    /// from another thread to stop a long batch at the next seam
    /// boundary.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    /// Override one energy cell.  Takes effect at the next operation's
    /// map rebuild — no recompute happens here.  Negative values
    /// attract seams, large positive values repel them.  Out-of-range
    /// coordinates write nothing and return false.
    pub fn set_energy_at(&mut self, x: usize, y: usize, value: i32) -> bool {
        self.model.set_at(x, y, value)
    }

    /// Remove the current minimum-cost seam.  Returns false (and
    /// changes nothing) once the image is [`MIN_WIDTH`] wide.
    pub fn remove_seam(&mut self, highlight: bool, color: u32) -> bool {
        if self.width == MIN_WIDTH {
            return false;
        }

        let path = seam::trace(&self.map);
        let (pixels, energy) =
            buffer::remove_along(&mut self.image, self.model.rows_mut(), &path);
        self.width -= 1;

        if self.update {
            if highlight {
                buffer::flatten_highlight(&self.image, self.width, &path, color, &mut self.data);
            } else {
                buffer::flatten(&self.image, self.width, &mut self.data);
            }
        }
        self.history.push(RemovedSeam { path, pixels, energy });
        self.model.rebuild_map(self.width, &mut self.map);
        true
    }

    /// Reinsert the most recently removed seam at its recorded indices.
    /// Returns false (and changes nothing) when the history is empty.
    pub fn add_seam(&mut self, highlight: bool, color: u32) -> bool {
        let seam = match self.history.pop() {
            Some(seam) => seam,
            None => return false,
        };

        buffer::insert_along(
            &mut self.image,
            self.model.rows_mut(),
            &seam.path,
            &seam.pixels,
            &seam.energy,
        );
        self.width += 1;

        if self.update {
            if highlight {
                buffer::flatten_highlight(&self.image, self.width, &seam.path, color, &mut self.data);
            } else {
                buffer::flatten(&self.image, self.width, &mut self.data);
            }
        }
        self.model.rebuild_map(self.width, &mut self.map);
        true
    }

    /// Remove up to `count` seams, refreshing the snapshot only after
    /// the final one.  Returns the number actually removed; stops early
    /// at the minimum width or when the cancellation flag is raised.
    pub fn remove_seams(&mut self, count: usize, highlight: bool, color: u32) -> usize {
        if count == 0 || self.width == MIN_WIDTH {
            return 0;
        }
        let live = self.update;
        self.update = false;
        let mut carved = 0;
        while carved + 1 < count && self.width > MIN_WIDTH + 1 {
            if self.cancelled() {
                self.update = live;
                if live {
                    self.snapshot(highlight, color);
                }
                return carved;
            }
            self.remove_seam(highlight, color);
            carved += 1;
        }
        self.update = live;
        if self.remove_seam(highlight, color) {
            carved += 1;
        }
        carved
    }

    /// Reinsert up to `count` seams, refreshing the snapshot only after
    /// the final one.  Returns the number actually restored; stops
    /// early on empty history or when the cancellation flag is raised.
    pub fn add_seams(&mut self, count: usize, highlight: bool, color: u32) -> usize {
        if count == 0 || self.history.is_empty() {
            return 0;
        }
        let live = self.update;
        self.update = false;
        let mut restored = 0;
        while restored + 1 < count && self.history.len() > 1 {
            if self.cancelled() {
                self.update = live;
                if live {
                    self.snapshot(highlight, color);
                }
                return restored;
            }
            self.add_seam(highlight, color);
            restored += 1;
        }
        self.update = live;
        if self.add_seam(highlight, color) {
            restored += 1;
        }
        restored
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}
