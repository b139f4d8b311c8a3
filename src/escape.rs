//! The escape-time test at the heart of the renderer: decide
//! whether, and how quickly, a point of the complex plane leaves the
//! circle of radius 2 under the iteration `z ← z² + c`.

use num::Complex;

/// The outcome of the boundedness test for a single point.  A point
/// either leaves the escape radius at a known iteration, or survives
/// the whole budget and is presumed to belong to the set.  The two
/// cases are distinct variants so that "never escaped" can not be
/// mistaken for "escaped at iteration zero".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// The point's magnitude exceeded 2 after this many iterations,
    /// counted from zero: a point already outside the radius escapes
    /// at 0.
    Escaped(usize),
    /// The point stayed within the radius for the entire iteration
    /// budget.
    Contained,
}

/// Iterate `z = z * z + c` from `z = 0` at most `limit` times,
/// reporting the 0-based count of the iteration whose result first
/// left the escape radius.  The comparison is against the squared
/// magnitude, `norm_sqr`, so the hot loop never takes a square root;
/// the threshold 4.0 is exactly the proven escape radius of 2,
/// squared.  The returned count is always strictly less than
/// `limit`.
pub fn escape_time(c: Complex<f64>, limit: usize) -> Escape {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > 4.0 {
            return Escape::Escaped(i);
        }
    }
    Escape::Contained
}
