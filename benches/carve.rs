// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-seam throughput for both energy models.  Construction is
//! inside the timed body on purpose: a removal always pays for a full
//! map rebuild, and the constructor is the cleanest way to measure
//! that rebuild at a known width.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use recarve::preprocess::pack;
use recarve::{Carver, EnergyMode};

fn scene(width: usize, height: usize) -> Vec<Vec<u32>> {
    let mut state: u32 = 0x9e37_79b9;
    let mut grid = Vec::with_capacity(height);
    for _ in 0..height {
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            row.push(pack(
                (state >> 24) as u8,
                (state >> 16) as u8,
                (state >> 8) as u8,
            ));
        }
        grid.push(row);
    }
    grid
}

fn remove_backward(c: &mut Criterion) {
    let grid = scene(160, 120);
    c.bench_function("remove one seam, backward, 160x120", move |b| {
        b.iter(|| {
            let mut carver = Carver::new(grid.clone(), EnergyMode::Backward).unwrap();
            carver.remove_seam(false, 0)
        })
    });
}

fn remove_forward(c: &mut Criterion) {
    let grid = scene(160, 120);
    c.bench_function("remove one seam, forward, 160x120", move |b| {
        b.iter(|| {
            let mut carver = Carver::new(grid.clone(), EnergyMode::Forward).unwrap();
            carver.remove_seam(false, 0)
        })
    });
}

fn batch_round_trip(c: &mut Criterion) {
    let grid = scene(96, 72);
    c.bench_function("remove and restore 16 seams, backward, 96x72", move |b| {
        b.iter(|| {
            let mut carver = Carver::new(grid.clone(), EnergyMode::Backward).unwrap();
            carver.remove_seams(16, false, 0);
            carver.add_seams(16, false, 0)
        })
    });
}

criterion_group!(benches, remove_backward, remove_forward, batch_round_trip);
criterion_main!(benches);
