extern crate image;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use image::png::PNGEncoder;
use image::ColorType;
use mandelbrot::{render_parallel, PlaneMapper, Region};
use num::Complex;
use std::fs::File;
use std::str::FromStr;

/// Given a string and a separator, returns the two values
/// separated by the separator.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn write_image(
    filename: &str,
    pixels: &[u8],
    bounds: (usize, usize),
) -> Result<(), std::io::Error> {
    let output = File::create(filename)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}

pub fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 5 {
        eprintln!("Usage: mandelbrot FILE PIXELS UPPERLEFT LOWERRIGHT");
        eprintln!("Example: {} mandel.png 1000x750 -2.5,1.25 1.0,-1.25", args[0]);
        std::process::exit(1);
    }

    let bounds: (usize, usize) =
        parse_pair(&args[2], 'x').expect("Error parsing image dimensions");
    let upper_left = parse_complex(&args[3]).expect("Error parsing upper left corner point");
    let lower_right = parse_complex(&args[4]).expect("Error parsing lower right corner point");

    let plane = PlaneMapper::new(
        Region {
            width: bounds.0,
            height: bounds.1,
        },
        upper_left,
        lower_right,
    )
    .expect("Error sizing the image plane");

    let pixels = match render_parallel(&plane, num_cpus::get()) {
        Ok(pixels) => pixels,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    write_image(&args[1], &pixels, bounds).expect("Error writing the output file");
}
