//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral pixel plane with an origin at
//! 0,0 in its upper-left corner, and a rectangle on the complex
//! plane with an arbitrary pair of corners defining the upper-left
//! and lower-right corners of the visible window.

use num::Complex;

/// Describes the width and height of a plane.  Over `usize` it is a
/// pixel grid assumed to start at 0,0; over `f64` it is the span of
/// a window on the complex plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region<T> {
    /// Extent along the x (real) axis.
    pub width: T,
    /// Extent along the y (imaginary) axis.
    pub height: T,
}

/// Describes the column and row of a point on the pixel plane,
/// measured rightward and downward from the upper-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel {
    /// Column, from the left edge.
    pub left: usize,
    /// Row, from the top edge.
    pub top: usize,
}

/// Contains the definitions of two planes: an integral pixel plane,
/// and a complex cartesian plane.  Maps points from the first to the
/// second.  Pixel rows grow downward while the imaginary axis grows
/// upward, so the mapping flips the vertical direction.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The pixel extent of the image.  The upper-left pixel is 0,0.
    pub bounds: Region<usize>,
    /// The upper-left corner of the complex window.
    origin: Complex<f64>,
    /// The full real and imaginary spans of the complex window, both
    /// positive for a conventional, non-mirrored view.
    span: Region<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes a region describing the pixel plane, and
    /// the upper-left and lower-right corners of the complex window
    /// it displays.  A zero-width or zero-height pixel plane has no
    /// defined mapping and is rejected.
    pub fn new(
        bounds: Region<usize>,
        upper_left: Complex<f64>,
        lower_right: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if bounds.width == 0 || bounds.height == 0 {
            return Err("The image must be at least one pixel wide and one pixel tall.".to_string());
        }

        Ok(PlaneMapper {
            bounds,
            origin: upper_left,
            span: Region {
                width: lower_right.re - upper_left.re,
                height: upper_left.im - lower_right.im,
            },
        })
    }

    /// The total number of points in the pixel grid.  Used to size
    /// the image buffer.
    pub fn len(&self) -> usize {
        self.bounds.width * self.bounds.height
    }

    /// Whether the pixel grid holds no points.  Always false for a
    /// constructed mapper, which rejects zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.bounds.width == 0 || self.bounds.height == 0
    }

    /// Given a pixel on the integral plane, return the complex number
    /// at the equivalent location on the complex plane.  The map is
    /// a plain linear interpolation across each axis; the vertical
    /// term is subtracted to account for the flipped row direction.
    /// Pixel W,H is a valid argument and lands exactly on the
    /// lower-right corner.
    pub fn pixel_to_point(&self, pixel: Pixel) -> Complex<f64> {
        Complex {
            re: self.origin.re + (pixel.left as f64) * self.span.width / (self.bounds.width as f64),
            im: self.origin.im - (pixel.top as f64) * self.span.height / (self.bounds.height as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper::new(
            Region { width, height },
            Complex::new(-1.0, 1.0),
            Complex::new(1.0, -1.0),
        )
        .unwrap()
    }

    #[test]
    fn planemapper_fails_on_zero_dimensions() {
        let corners = (Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(PlaneMapper::new(Region { width: 0, height: 4 }, corners.0, corners.1).is_err());
        assert!(PlaneMapper::new(Region { width: 4, height: 0 }, corners.0, corners.1).is_err());
        assert!(PlaneMapper::new(Region { width: 4, height: 4 }, corners.0, corners.1).is_ok());
    }

    #[test]
    fn corner_pixels_map_to_corner_points() {
        let pm = mapper(100, 200);
        assert_eq!(
            pm.pixel_to_point(Pixel { left: 0, top: 0 }),
            Complex::new(-1.0, 1.0)
        );
        assert_eq!(
            pm.pixel_to_point(Pixel { left: 100, top: 200 }),
            Complex::new(1.0, -1.0)
        );
    }

    #[test]
    fn interior_pixels_interpolate_linearly() {
        let pm = mapper(100, 200);
        assert_eq!(
            pm.pixel_to_point(Pixel { left: 25, top: 175 }),
            Complex::new(-0.5, -0.75)
        );
        assert_eq!(
            pm.pixel_to_point(Pixel { left: 50, top: 100 }),
            Complex::new(0.0, 0.0)
        );
    }

    #[test]
    fn rows_grow_downward_on_the_imaginary_axis() {
        let pm = mapper(10, 10);
        let upper = pm.pixel_to_point(Pixel { left: 5, top: 2 });
        let lower = pm.pixel_to_point(Pixel { left: 5, top: 8 });
        assert!(upper.im > lower.im);
        assert_eq!(upper.re, lower.re);
    }

    #[test]
    fn len_counts_the_whole_grid() {
        let pm = mapper(100, 200);
        assert_eq!(pm.len(), 20000);
        assert!(!pm.is_empty());
    }
}
