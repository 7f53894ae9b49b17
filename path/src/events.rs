use crate::geom::Arc;
use crate::math::Point;

/// One segment of a path, in draw order.
///
/// Positions are absolute; curve variants carry their control points and
/// the arc variant carries the full center parameterization of the
/// ellipse it traces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathEvent {
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo(Point, Point),
    CubicTo(Point, Point, Point),
    Arc(Arc),
    Close,
}

impl PathEvent {
    /// The position this event leaves the path at, if it has one of its
    /// own (`Close` goes back to the start of the sub-path instead).
    pub fn destination(self) -> Option<Point> {
        match self {
            PathEvent::MoveTo(to) => Some(to),
            PathEvent::LineTo(to) => Some(to),
            PathEvent::QuadraticTo(_, to) => Some(to),
            PathEvent::CubicTo(_, _, to) => Some(to),
            PathEvent::Arc(arc) => Some(arc.to()),
            PathEvent::Close => None,
        }
    }
}
