use crate::math::{point, Point, Vector};

/// An infinite line defined by a point and a direction vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line {
    pub point: Point,
    pub vector: Vector,
}

impl Line {
    /// Computes the intersection of two lines, if any.
    ///
    /// Returns `None` when the lines are parallel or very close to it.
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        let epsilon = 0.000001;
        let det = self.vector.cross(other.vector);
        if det.abs() <= epsilon {
            return None;
        }
        let inv_det = 1.0 / det;
        let self_p2 = self.point + self.vector;
        let other_p2 = other.point + other.vector;
        let a = self.point.to_vector().cross(self_p2.to_vector());
        let b = other.point.to_vector().cross(other_p2.to_vector());

        Some(point(
            (b * self.vector.x - a * other.vector.x) * inv_det,
            (b * self.vector.y - a * other.vector.y) * inv_det,
        ))
    }
}

#[cfg(test)]
use crate::math::vector;

#[test]
fn intersection() {
    let l1 = Line {
        point: point(0.0, 0.0),
        vector: vector(1.0, 1.0),
    };
    let l2 = Line {
        point: point(10.0, 0.0),
        vector: vector(0.0, 1.0),
    };

    assert_eq!(l1.intersection(&l2), Some(point(10.0, 10.0)));

    let parallel = Line {
        point: point(0.0, 5.0),
        vector: vector(2.0, 2.0),
    };
    assert_eq!(l1.intersection(&parallel), None);
}
