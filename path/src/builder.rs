//! Tools to build path objects from a sequence of imperative commands.
//!
//! ## Examples
//!
//! ```
//! use contour_path::Path;
//! use contour_path::math::point;
//! use contour_path::builder::*;
//!
//! let mut builder = Path::builder();
//!
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//! builder.cubic_bezier_to(point(2.0, 2.0), point(0.0, 2.0), point(0.0, 0.0));
//! builder.close();
//!
//! let path = builder.build();
//! ```

use crate::geom::Arc;
use crate::math::Point;
use crate::path::Path;

/// The interface the parser and other path producers build against.
///
/// All positions are absolute.
pub trait PathBuilder {
    /// Sets the current position in preparation for the next sub-path.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment to the current sub-path.
    fn line_to(&mut self, to: Point);

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point);

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Adds an elliptical arc starting at the current position. The arc's
    /// start point is expected to coincide with it.
    fn arc(&mut self, arc: &Arc);

    /// Closes the current sub-path, going back to its first position.
    fn close(&mut self);
}

/// The types of objects that are created by a builder.
pub trait Build {
    type PathType;

    /// Builds a path object, consuming the builder.
    fn build(self) -> Self::PathType;
}

#[inline]
fn nan_check(p: Point) {
    debug_assert!(!p.x.is_nan());
    debug_assert!(!p.y.is_nan());
}

/// Builds a [Path](../struct.Path.html) object.
///
/// See the [builder module](index.html) documentation.
pub struct Builder {
    path: Path,
    current_position: Point,
    first_position: Point,
}

impl Builder {
    pub fn new() -> Self {
        Builder::with_capacity(16)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Builder {
            path: Path::with_capacity(cap),
            current_position: Point::new(0.0, 0.0),
            first_position: Point::new(0.0, 0.0),
        }
    }

    /// The last position passed to this builder, or the start of the
    /// sub-path right after a close.
    pub fn current_position(&self) -> Point {
        self.current_position
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl PathBuilder for Builder {
    fn move_to(&mut self, to: Point) {
        nan_check(to);
        self.first_position = to;
        self.current_position = to;
        self.path.push_move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        nan_check(to);
        self.current_position = to;
        self.path.push_line_to(to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        nan_check(ctrl);
        nan_check(to);
        self.current_position = to;
        self.path.push_quadratic_bezier_to(ctrl, to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);
        self.current_position = to;
        self.path.push_cubic_bezier_to(ctrl1, ctrl2, to);
    }

    fn arc(&mut self, arc: &Arc) {
        nan_check(arc.center);
        nan_check(arc.radii.to_point());
        debug_assert!(!arc.start_angle.get().is_nan());
        debug_assert!(!arc.sweep_angle.get().is_nan());
        debug_assert!(!arc.x_rotation.get().is_nan());
        self.current_position = arc.to();
        self.path.push_arc(arc);
    }

    fn close(&mut self) {
        self.current_position = self.first_position;
        self.path.push_close();
    }
}

impl Build for Builder {
    type PathType = Path;

    fn build(self) -> Path {
        self.path
    }
}
