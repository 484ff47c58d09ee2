// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two energy models and their cumulative cost maps.
//!
//! *Backward* energy scores a pixel by the gradient magnitude of the
//! image as it currently stands.  *Forward* energy scores the removal of
//! a pixel by the new adjacencies that removal would create, which
//! avoids the stair-step artifacts backward energy can introduce.
//!
//! Each model owns the grid it needs for the lifetime of the engine:
//! gradient magnitudes for backward, plain grayscale for forward.  That
//! grid is carved and restored in lockstep with the image — it is never
//! rederived from the pixels, which is what keeps history reinsertion
//! exact and painted priority overrides alive across carving.  Only the
//! cost map (and forward's accumulator) is rebuilt, in full, after every
//! structural change.

use crate::gridmap::Grid;
use crate::preprocess;

/// Which energy model a [`crate::Carver`] uses, chosen once at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyMode {
    Backward,
    Forward,
}

/// Model state: the retained per-pixel grid, plus forward's auxiliary
/// accumulator.
#[derive(Debug)]
pub(crate) enum EnergyModel {
    /// Gradient magnitudes; the map accumulates them bottom-up.
    Backward { grid: Vec<Vec<i32>> },
    /// Retained grayscale; removal costs are derived on the fly from
    /// live neighbor differences and accumulated top-down in `mins`.
    Forward { gray: Vec<Vec<i32>>, mins: Grid<i32> },
}

impl EnergyModel {
    pub fn new(mode: EnergyMode, image: &[Vec<u32>]) -> Self {
        match mode {
            EnergyMode::Backward => EnergyModel::Backward {
                grid: preprocess::sobel(image),
            },
            EnergyMode::Forward => EnergyModel::Forward {
                gray: preprocess::grayscale(image),
                mins: Grid::new(0, 0),
            },
        }
    }

    pub fn mode(&self) -> EnergyMode {
        match self {
            EnergyModel::Backward { .. } => EnergyMode::Backward,
            EnergyModel::Forward { .. } => EnergyMode::Forward,
        }
    }

    /// The carved per-row grid, whatever it holds for this model.
    pub fn rows(&self) -> &Vec<Vec<i32>> {
        match self {
            EnergyModel::Backward { grid } => grid,
            EnergyModel::Forward { gray, .. } => gray,
        }
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Vec<i32>> {
        match self {
            EnergyModel::Backward { grid } => grid,
            EnergyModel::Forward { gray, .. } => gray,
        }
    }

    /// Override a single cell in place.  For the backward model this is
    /// a direct edit of the cost a seam pays to pass through the cell;
    /// for the forward model it perturbs the retained grayscale, so the
    /// same override value steers seams with different strength.  The
    /// asymmetry is inherent to the models and deliberately not papered
    /// over.
    ///
    /// Out-of-range coordinates write nothing and report `false`.
    pub fn set_at(&mut self, x: usize, y: usize, value: i32) -> bool {
        let rows = self.rows_mut();
        match rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Rebuild the cost map (and forward's accumulator) from scratch at
    /// the current width.
    pub fn rebuild_map(&mut self, width: usize, map: &mut Grid<i32>) {
        match self {
            EnergyModel::Backward { grid } => backward_map(grid, width, map),
            EnergyModel::Forward { gray, mins } => forward_map(gray, width, map, mins),
        }
    }
}

fn min3(a: i32, b: i32, c: i32) -> i32 {
    a.min(b).min(c)
}

/// Bottom-up recurrence: `map[y][x]` is the cheapest total cost of a
/// connected path from `(x, y)` to the last row.  Boundary columns drop
/// the out-of-range neighbor.  Rows above depend on the row below, so
/// the row loop is strictly sequential.
pub(crate) fn backward_map(energy: &[Vec<i32>], width: usize, map: &mut Grid<i32>) {
    let height = energy.len();
    *map = Grid::new(width, height);
    for x in 0..width {
        map[(x, height - 1)] = energy[height - 1][x];
    }
    for y in (0..height - 1).rev() {
        let row = &energy[y];
        map[(0, y)] = row[0] + map[(0, y + 1)].min(map[(1, y + 1)]);
        for x in 1..width - 1 {
            map[(x, y)] =
                row[x] + min3(map[(x - 1, y + 1)], map[(x, y + 1)], map[(x + 1, y + 1)]);
        }
        map[(width - 1, y)] =
            row[width - 1] + map[(width - 2, y + 1)].min(map[(width - 1, y + 1)]);
    }
}

/// Top-down forward recurrence.  Horizontal neighbors wrap around the
/// row ends; the wraparound is pinned behavior, not an oversight.
///
/// `mins[y][x]` accumulates the cheapest total cost of reaching the
/// cell.  The candidate totals come from the three predecessors, each
/// paying its own local adjacency cost (`c_up` for a straight drop,
/// `c_left`/`c_right` adding the new vertical edge a diagonal step
/// exposes).  `map` keeps the *local* cost belonging to the winning
/// candidate — not the cheapest of the three local costs — because that
/// is the edge the chosen seam actually creates, and it is what the
/// trace walks.  Ties resolve up, then left, then right, by value.
pub(crate) fn forward_map(
    gray: &[Vec<i32>],
    width: usize,
    map: &mut Grid<i32>,
    mins: &mut Grid<i32>,
) {
    let height = gray.len();
    *map = Grid::new(width, height);
    *mins = Grid::new(width, height);
    for x in 0..width {
        let left = (x + width - 1) % width;
        let right = (x + 1) % width;
        let c_up = (gray[0][right] - gray[0][left]).abs();
        mins[(x, 0)] = c_up;
        map[(x, 0)] = c_up;
    }
    for y in 1..height {
        for x in 0..width {
            let left = (x + width - 1) % width;
            let right = (x + 1) % width;

            let c_up = (gray[y][right] - gray[y][left]).abs();
            let c_left = (gray[y - 1][x] - gray[y][left]).abs() + c_up;
            let c_right = (gray[y - 1][x] - gray[y][right]).abs() + c_up;

            let m_up = mins[(x, y - 1)] + c_up;
            let m_left = mins[(left, y - 1)] + c_left;
            let m_right = mins[(right, y - 1)] + c_right;

            let best = min3(m_up, m_left, m_right);
            map[(x, y)] = if best == m_up {
                c_up
            } else if best == m_left {
                c_left
            } else {
                c_right
            };
            mins[(x, y)] = best;
        }
    }
}
