// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end runs of the `recarve` binary against real PNG files.

use assert_cmd::prelude::*;
use image::Pixel;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

/// An 8x6 test card with enough texture that seam choices are stable.
fn write_test_image(path: &Path) {
    let mut img = image::RgbImage::new(8, 6);
    for y in 0..6u32 {
        for x in 0..8u32 {
            let r = (x * 30) as u8;
            let g = (y * 40) as u8;
            let b = ((x * y * 9) % 251) as u8;
            img.put_pixel(x, y, *image::Rgb::from_slice(&[r, g, b]));
        }
    }
    img.save(path).unwrap();
}

#[test]
fn carves_vertical_seams_and_writes_a_narrower_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("narrow.png");
    write_test_image(&input);

    Command::cargo_bin("recarve")
        .unwrap()
        .arg(&input)
        .args(&["--seams", "3", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 seams carved"));

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (5, 6));
}

#[test]
fn horizontal_flag_shrinks_height_instead() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("short.png");
    write_test_image(&input);

    Command::cargo_bin("recarve")
        .unwrap()
        .arg(&input)
        .args(&["--seams", "2", "--horizontal", "--forward", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 seams carved"));

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (8, 4));
}

#[test]
fn energy_mode_dumps_a_gradient_map_of_equal_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("energy.png");
    write_test_image(&input);

    Command::cargo_bin("recarve")
        .unwrap()
        .arg(&input)
        .arg("--energy")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy map saved"));

    let map = image::open(&output).unwrap().to_luma();
    assert_eq!(map.dimensions(), (8, 6));
}

#[test]
fn missing_input_fails_with_a_message() {
    Command::cargo_bin("recarve")
        .unwrap()
        .arg("no-such-file.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("recarve:"));
}
