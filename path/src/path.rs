//! The default path data structure.

use crate::builder::Builder;
use crate::geom::Arc;
use crate::math::{point, Angle, Point};
use crate::PathEvent;

use std::iter::IntoIterator;

/// Enumeration corresponding to the [PathEvent](enum.PathEvent.html) enum
/// without the parameters.
///
/// This is used by the [Path](struct.Path.html) data structure to store
/// path events a tad more efficiently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    QuadraticTo,
    CubicTo,
    Arc,
    Close,
}

/// A simple path data structure.
///
/// It can be created using a [Builder](builder/struct.Builder.html) and
/// can be iterated over. The points owned by each verb are packed in a
/// separate vector: one point for a move or line, two for a quadratic
/// curve, three for a cubic curve, four for an arc (center, radii,
/// (start angle, sweep angle) and (x-rotation, unused)).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Vec<Point>,
    verbs: Vec<Verb>,
}

/// An immutable view over a Path.
#[derive(Copy, Clone, Debug)]
pub struct PathSlice<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
}

impl Path {
    /// Creates a [Builder](builder/struct.Builder.html) to create a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn new() -> Path {
        Path {
            points: Vec::new(),
            verbs: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Path {
        Path {
            points: Vec::with_capacity(cap),
            verbs: Vec::with_capacity(cap),
        }
    }

    pub fn as_slice(&self) -> PathSlice {
        PathSlice {
            points: &self.points[..],
            verbs: &self.verbs[..],
        }
    }

    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }

    /// The number of segments in the path.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points[..]
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs[..]
    }

    pub(crate) fn push_move_to(&mut self, to: Point) {
        self.points.push(to);
        self.verbs.push(Verb::MoveTo);
    }

    pub(crate) fn push_line_to(&mut self, to: Point) {
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
    }

    pub(crate) fn push_quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.points.push(ctrl);
        self.points.push(to);
        self.verbs.push(Verb::QuadraticTo);
    }

    pub(crate) fn push_cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
    }

    pub(crate) fn push_arc(&mut self, arc: &Arc) {
        self.points.push(arc.center);
        self.points.push(arc.radii.to_point());
        self.points
            .push(point(arc.start_angle.get(), arc.sweep_angle.get()));
        self.points.push(point(arc.x_rotation.get(), 0.0));
        self.verbs.push(Verb::Arc);
    }

    pub(crate) fn push_close(&mut self) {
        self.verbs.push(Verb::Close);
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl<'l> PathSlice<'l> {
    pub fn new(points: &'l [Point], verbs: &'l [Verb]) -> PathSlice<'l> {
        PathSlice { points, verbs }
    }

    pub fn iter(&self) -> Iter<'l> {
        Iter::new(self.points, self.verbs)
    }

    pub fn points(&self) -> &[Point] {
        self.points
    }

    pub fn verbs(&self) -> &[Verb] {
        self.verbs
    }
}

/// An iterator over the events of a path.
#[derive(Clone, Debug)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
}

impl<'l> Iter<'l> {
    pub fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
        }
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;
    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(&Verb::MoveTo) => {
                let to = *self.points.next().unwrap();
                Some(PathEvent::MoveTo(to))
            }
            Some(&Verb::LineTo) => {
                let to = *self.points.next().unwrap();
                Some(PathEvent::LineTo(to))
            }
            Some(&Verb::QuadraticTo) => {
                let ctrl = *self.points.next().unwrap();
                let to = *self.points.next().unwrap();
                Some(PathEvent::QuadraticTo(ctrl, to))
            }
            Some(&Verb::CubicTo) => {
                let ctrl1 = *self.points.next().unwrap();
                let ctrl2 = *self.points.next().unwrap();
                let to = *self.points.next().unwrap();
                Some(PathEvent::CubicTo(ctrl1, ctrl2, to))
            }
            Some(&Verb::Arc) => {
                let center = *self.points.next().unwrap();
                let radii = self.points.next().unwrap().to_vector();
                let angles = *self.points.next().unwrap();
                let rotation = *self.points.next().unwrap();
                Some(PathEvent::Arc(Arc {
                    center,
                    radii,
                    start_angle: Angle::radians(angles.x),
                    sweep_angle: Angle::radians(angles.y),
                    x_rotation: Angle::radians(rotation.x),
                }))
            }
            Some(&Verb::Close) => Some(PathEvent::Close),
            None => None,
        }
    }
}
