// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carve seams out of an image from the command line.
//!
//! The engine itself never touches a codec; this binary owns decode,
//! orientation, and encode.  Horizontal carving is mirror+transpose on
//! the way in and the inverse on the way out, so the engine only ever
//! sees vertical seams.

use clap::{App, Arg};
use failure::format_err;
use image::Pixel;

use recarve::preprocess::{self, channels, pack};
use recarve::{mirror, sobel, transpose, Carver, EnergyMode};

fn main() {
    if let Err(err) = run() {
        eprintln!("recarve: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), failure::Error> {
    let matches = App::new("recarve")
        .version("0.1.0")
        .about("Content-aware image resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("carved.png"),
        )
        .arg(
            Arg::with_name("seams")
                .help("Number of seams to remove")
                .short("n")
                .long("seams")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("horizontal")
                .help("Carve horizontal seams (shrink height)")
                .short("H")
                .long("horizontal"),
        )
        .arg(
            Arg::with_name("forward")
                .help("Use the forward energy model")
                .long("forward"),
        )
        .arg(
            Arg::with_name("highlight")
                .help("Paint the last seam in this R,G,B color")
                .long("highlight")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the normalized gradient map instead of carving")
                .long("energy"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let seams: usize = matches.value_of("seams").unwrap().parse()?;
    let horizontal = matches.is_present("horizontal");

    let decoded = image::open(input)?.to_rgb();
    let (width, height) = decoded.dimensions();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height as usize);
    for y in 0..height {
        grid.push(
            (0..width)
                .map(|x| {
                    let c = decoded.get_pixel(x, y).channels();
                    pack(c[0], c[1], c[2])
                })
                .collect(),
        );
    }

    if matches.is_present("energy") {
        let bytes = preprocess::energy_to_bytes(&sobel(&grid));
        let map = image::GrayImage::from_raw(width, height, bytes)
            .ok_or_else(|| format_err!("energy buffer does not match image dimensions"))?;
        map.save(output)?;
        println!("Energy map saved as {}.", output);
        return Ok(());
    }

    let (highlight, color) = match matches.value_of("highlight") {
        Some(rgb) => (true, parse_color(rgb)?),
        None => (false, 0),
    };
    let mode = if matches.is_present("forward") {
        EnergyMode::Forward
    } else {
        EnergyMode::Backward
    };

    if horizontal {
        mirror(&mut grid);
        grid = transpose(&grid);
    }

    let mut carver = Carver::new(grid, mode)?;
    println!("Carving...");
    let carved = carver.remove_seams(seams, highlight, color);
    println!("{} seams carved from {}.", carved, input);

    let out_width = carver.width();
    let flat = carver.snapshot(highlight, color).to_vec();
    let mut rows: Vec<Vec<u32>> = flat.chunks(out_width).map(|row| row.to_vec()).collect();
    if horizontal {
        rows = transpose(&rows);
        mirror(&mut rows);
    }

    let (final_width, final_height) = (rows[0].len(), rows.len());
    let mut bytes = Vec::with_capacity(final_width * final_height * 3);
    for row in &rows {
        for pixel in row {
            let (r, g, b) = channels(*pixel);
            bytes.extend_from_slice(&[r, g, b]);
        }
    }
    let carved_image =
        image::RgbImage::from_raw(final_width as u32, final_height as u32, bytes)
            .ok_or_else(|| format_err!("carved buffer does not match image dimensions"))?;
    carved_image.save(output)?;
    println!("Carved image saved as {}.", output);
    Ok(())
}

fn parse_color(rgb: &str) -> Result<u32, failure::Error> {
    let parts: Vec<&str> = rgb.split(',').collect();
    if parts.len() != 3 {
        return Err(format_err!("highlight color must be R,G,B, got {:?}", rgb));
    }
    let r: u8 = parts[0].trim().parse()?;
    let g: u8 = parts[1].trim().parse()?;
    let b: u8 = parts[2].trim().parse()?;
    Ok(pack(r, g, b))
}
