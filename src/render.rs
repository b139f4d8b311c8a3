// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rasterizer: fills a grayscale pixel buffer with escape times,
//! either as a single band or as a fan of per-thread horizontal
//! bands over one shared buffer.

use crossbeam;
use escape::{escape_time, Escape};
use itertools::iproduct;
use planes::{Pixel, PlaneMapper, Region};

/// The per-point iteration budget.  255 is chosen so that every
/// escape count fits in a single grayscale byte.
pub const ESCAPE_LIMIT: usize = 255;

/// Given a plane and a buffer sized to it, write one grayscale byte
/// per pixel: 255 - count for a point that escaped after count
/// iterations, 0 for a point contained for the whole budget.  The
/// fastest escapes render near-white, the slowest near-black, and
/// the set itself black.
pub fn render(plane: &PlaneMapper, pixels: &mut [u8]) {
    assert!(pixels.len() == plane.len());
    let Region { width, height } = plane.bounds;
    for (top, left) in iproduct!(0..height, 0..width) {
        let point = plane.pixel_to_point(Pixel { left, top });
        pixels[top * width + left] = match escape_time(point, ESCAPE_LIMIT) {
            Escape::Escaped(count) => 255 - count as u8,
            Escape::Contained => 0,
        };
    }
}

/// Render the whole plane across up to `threads` parallel workers.
///
/// The buffer is cut into horizontal bands of ceil(height / threads)
/// rows, the last band keeping whatever rows remain.  Each band's
/// corners are mapped through the *full* image's frame, so the bands
/// tile the window seamlessly, and each worker renders its band
/// through a mapper local to it.  `chunks_mut` hands every worker an
/// exclusive, disjoint slice of the one buffer, so the workers need
/// no locks; the scope joins them all before the buffer is returned.
pub fn render_parallel(plane: &PlaneMapper, threads: usize) -> Result<Vec<u8>, String> {
    assert!(threads > 0);
    let Region { width, height } = plane.bounds;
    let mut pixels = vec![0 as u8; plane.len()];
    let rows_per_band = (height + threads - 1) / threads;

    // Partition first, spawn second: every band descriptor, slice
    // included, exists before any worker starts.
    let mut bands = Vec::new();
    for (i, band) in pixels.chunks_mut(rows_per_band * width).enumerate() {
        let top = i * rows_per_band;
        let band_height = band.len() / width;
        let band_plane = PlaneMapper::new(
            Region {
                width,
                height: band_height,
            },
            plane.pixel_to_point(Pixel { left: 0, top }),
            plane.pixel_to_point(Pixel {
                left: width,
                top: top + band_height,
            }),
        )?;
        bands.push((band_plane, band));
    }

    crossbeam::scope(|spawner| {
        for (band_plane, band) in bands {
            spawner.spawn(move |_| {
                render(&band_plane, band);
            });
        }
    })
    .map_err(|_| "A render worker panicked.".to_string())?;

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn whole_set_plane(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper::new(
            Region { width, height },
            Complex::new(-2.5, 1.0),
            Complex::new(1.0, -1.0),
        )
        .unwrap()
    }

    #[test]
    fn contained_points_render_black() {
        // A window centered on the origin: the middle of the buffer
        // sits deep inside the set.
        let plane = PlaneMapper::new(
            Region {
                width: 9,
                height: 9,
            },
            Complex::new(-0.5, 0.5),
            Complex::new(0.5, -0.5),
        )
        .unwrap();
        let mut pixels = vec![0xff as u8; plane.len()];
        render(&plane, &mut pixels);
        assert_eq!(pixels[4 * 9 + 4], 0);
    }

    #[test]
    fn fast_escapes_render_near_white() {
        // A window far outside the radius: every point escapes on
        // the first check.
        let plane = PlaneMapper::new(
            Region {
                width: 4,
                height: 4,
            },
            Complex::new(10.0, 1.0),
            Complex::new(11.0, 0.0),
        )
        .unwrap();
        let mut pixels = vec![0 as u8; plane.len()];
        render(&plane, &mut pixels);
        assert!(pixels.iter().all(|&p| p == 255));
    }

    #[test]
    fn rendering_is_idempotent() {
        let plane = whole_set_plane(40, 32);
        let mut first = vec![0 as u8; plane.len()];
        let mut second = vec![0 as u8; plane.len()];
        render(&plane, &mut first);
        render(&plane, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_bands_match_a_single_band() {
        let plane = whole_set_plane(40, 32);
        let mut single = vec![0 as u8; plane.len()];
        render(&plane, &mut single);
        for threads in &[1, 2, 3, 4, 8] {
            let banded = render_parallel(&plane, *threads).unwrap();
            assert_eq!(banded, single);
        }
    }

    #[test]
    fn uneven_band_splits_cover_the_whole_buffer() {
        // 32 rows over 7 workers makes six 5-row bands and one
        // 2-row remainder.
        let plane = whole_set_plane(8, 32);
        let mut single = vec![0 as u8; plane.len()];
        render(&plane, &mut single);
        let banded = render_parallel(&plane, 7).unwrap();
        assert_eq!(banded.len(), plane.len());
        assert_eq!(banded, single);
    }

    #[test]
    fn more_workers_than_rows_still_renders() {
        let plane = whole_set_plane(16, 4);
        let mut single = vec![0 as u8; plane.len()];
        render(&plane, &mut single);
        assert_eq!(render_parallel(&plane, 16).unwrap(), single);
    }
}
