#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set lives on the complex plane: a point `c` belongs
//! to it when the iteration `z ← z² + c`, started from zero, stays
//! bounded forever.  Points outside the set escape past magnitude 2
//! after some number of iterations, and that number, the "escape
//! time", is the value used to render the image: the faster a point
//! escapes, the brighter its pixel, while points that never escape
//! within the iteration budget are drawn black.
//!
//! The image is produced by mapping every pixel of the output raster
//! to its point on a caller-chosen window of the complex plane,
//! measuring the escape time there, and writing one grayscale byte
//! per pixel.  Rows are independent of each other, so the raster is
//! cut into horizontal bands and the bands are rendered on separate
//! threads, each owning its own disjoint slice of the one shared
//! pixel buffer.

extern crate crossbeam;
extern crate itertools;
extern crate num;

pub mod escape;
pub mod planes;
pub mod render;

pub use escape::{escape_time, Escape};
pub use planes::{Pixel, PlaneMapper, Region};
pub use render::{render, render_parallel, ESCAPE_LIMIT};
