extern crate clap;
#[macro_use]
extern crate failure;
extern crate image;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use image::png::PNGEncoder;
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use mandelbrot::{render_parallel, PlaneMapper, Region};
use num::Complex;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const UPPERLEFT: &str = "upperleft";
const LOWERRIGHT: &str = "lowerright";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot escape-time renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x750")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(UPPERLEFT)
                .required(false)
                .long(UPPERLEFT)
                .short("u")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5,1.25")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse upper left corner"))
                .help("Upper left corner of the complex window"),
        )
        .arg(
            Arg::with_name(LOWERRIGHT)
                .required(false)
                .long(LOWERRIGHT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,-1.25")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse lower right corner"))
                .help("Lower right corner of the complex window"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of render threads (defaults to the CPU count)"),
        )
        .get_matches()
}

/// The PNM graymap encoder handles .pnm and .pgm output paths; every
/// other extension gets a grayscale PNG.
fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("pnm") | Some("pgm") => {
            let mut encoder =
                PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
            encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
        }
        _ => {
            let encoder = PNGEncoder::new(output);
            encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
        }
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let matches = args();

    // The validators have already vetted every parse below.
    let image_size = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .ok_or_else(|| format_err!("Could not parse output image size"))?;
    let upper_left = parse_complex(matches.value_of(UPPERLEFT).unwrap())
        .ok_or_else(|| format_err!("Could not parse upper left corner"))?;
    let lower_right = parse_complex(matches.value_of(LOWERRIGHT).unwrap())
        .ok_or_else(|| format_err!("Could not parse lower right corner"))?;
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s).context("Could not parse thread count")?,
        None => num_cpus::get(),
    };

    let plane = PlaneMapper::new(
        Region {
            width: image_size.0,
            height: image_size.1,
        },
        upper_left,
        lower_right,
    )
    .map_err(|e| format_err!("{}", e))?;

    let pixels = render_parallel(&plane, threads).map_err(|e| format_err!("{}", e))?;

    let outfile = matches.value_of(OUTPUT).unwrap();
    write_image(outfile, &pixels, image_size)
        .with_context(|_| format!("Could not write {}", outfile))?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("mandel: {}", e);
        std::process::exit(1);
    }
}
