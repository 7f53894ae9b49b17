//! Elliptic arc related maths and tools.

use crate::line::Line;
use crate::math::{point, vector, Angle, Point, Rotation, Vector};

use std::f64::consts::{FRAC_PI_4, PI};

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arcs, pick the one spanning more than half a
    /// turn.
    pub large_arc: bool,
    /// Of the four candidate arcs, pick one of the two going in the
    /// positive angle direction.
    pub sweep: bool,
}

/// An elliptical arc in endpoint form, the way path strings describe it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

/// An elliptical arc in center form.
///
/// The arc is expressed in the ellipse's own unrotated frame: sampling
/// applies the `x_rotation` about `center`, so consumers get screen-space
/// points without extra work.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radii: Vector,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
    pub x_rotation: Angle,
}

impl Arc {
    /// Converts from the endpoint parameterization to the center
    /// parameterization, following the SVG specification notes (F.6.5).
    ///
    /// When the endpoints are out of reach of the given radii, both radii
    /// are scaled up uniformly until the ellipse passes through them, so
    /// the conversion cannot fail for finite inputs. Degenerate arcs
    /// (zero radius, coincident endpoints) must be diverted beforehand,
    /// see [`SvgArc::is_straight_line`].
    pub fn from_svg_arc(arc: &SvgArc) -> Arc {
        debug_assert!(!arc.from.x.is_nan());
        debug_assert!(!arc.from.y.is_nan());
        debug_assert!(!arc.to.x.is_nan());
        debug_assert!(!arc.to.y.is_nan());
        debug_assert!(!arc.radii.x.is_nan());
        debug_assert!(!arc.radii.y.is_nan());
        debug_assert!(!arc.x_rotation.get().is_nan());

        let xr = arc.x_rotation.get() % (2.0 * PI);
        let cos_phi = xr.cos();
        let sin_phi = xr.sin();
        let hd_x = (arc.from.x - arc.to.x) / 2.0;
        let hd_y = (arc.from.y - arc.to.y) / 2.0;
        let hs_x = (arc.from.x + arc.to.x) / 2.0;
        let hs_y = (arc.from.y + arc.to.y) / 2.0;

        // F.6.5.1
        let p = point(
            cos_phi * hd_x + sin_phi * hd_y,
            -sin_phi * hd_x + cos_phi * hd_y,
        );

        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();

        // Scale the radii up if the endpoints are not reachable (F.6.6),
        // with a small margin that keeps the center computation below away
        // from a negative square root.
        let radii_check = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if radii_check > 0.99999 {
            let scale = radii_check.sqrt() * 1.00001;
            rx *= scale;
            ry *= scale;
        }

        let rxry = rx * ry;
        let rxpy = rx * p.y;
        let rypx = ry * p.x;
        let sum_of_sq = rxpy * rxpy + rypx * rypx;

        debug_assert_ne!(sum_of_sq, 0.0);

        // F.6.5.2, with the sign rule picking one of the two candidate
        // centers.
        let sign_coe = if arc.flags.large_arc == arc.flags.sweep {
            -1.0
        } else {
            1.0
        };
        let coe = sign_coe * (((rxry * rxry - sum_of_sq) / sum_of_sq).max(0.0)).sqrt();

        let transformed_cx = coe * rxpy / ry;
        let transformed_cy = -coe * rypx / rx;

        // F.6.5.3
        let center = point(
            cos_phi * transformed_cx - sin_phi * transformed_cy + hs_x,
            sin_phi * transformed_cx + cos_phi * transformed_cy + hs_y,
        );

        let a = vector((p.x - transformed_cx) / rx, (p.y - transformed_cy) / ry);
        let b = vector((-p.x - transformed_cx) / rx, (-p.y - transformed_cy) / ry);

        // F.6.5.5
        let start_angle = a.angle_from_x_axis();

        // F.6.5.6: the signed angle between the start and end vectors,
        // with the sign taken from the cross product and adjusted by a
        // full turn so that it agrees with the sweep flag.
        let dot = a.dot(b) / (a.length() * b.length());
        let mut extent = dot.max(-1.0).min(1.0).acos();
        if a.cross(b) < 0.0 {
            extent = -extent;
        }
        if !arc.flags.sweep && extent > 0.0 {
            extent -= 2.0 * PI;
        } else if arc.flags.sweep && extent < 0.0 {
            extent += 2.0 * PI;
        }
        extent %= 2.0 * PI;

        Arc {
            center,
            radii: vector(rx, ry),
            start_angle,
            sweep_angle: Angle::radians(extent),
            x_rotation: arc.x_rotation,
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        let angle = self.get_angle(t);
        self.center + sample_ellipse(self.radii, self.x_rotation, angle).to_vector()
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: f64) -> Angle {
        self.start_angle + Angle::radians(self.sweep_angle.get() * t)
    }

    #[inline]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.sample(0.0)
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.sample(1.0)
    }

    /// Sample the curve's tangent at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample_tangent(&self, t: f64) -> Vector {
        self.tangent_at_angle(self.get_angle(t))
    }

    /// Approximates the arc with a sequence of quadratic béziers, invoking
    /// a callback with the control point and endpoint of each of them.
    ///
    /// Each subdivision covers at most a quarter turn; the control point
    /// is where the tangents at the subdivision's ends meet.
    pub fn for_each_quadratic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(Point, Point),
    {
        let sweep = self.sweep_angle.get();
        if sweep == 0.0 {
            return;
        }

        let n_steps = (sweep.abs() / FRAC_PI_4).ceil();
        let step = sweep / n_steps;

        for i in 0..n_steps as i32 {
            let a1 = self.start_angle.get() + step * i as f64;
            let a2 = self.start_angle.get() + step * (i + 1) as f64;

            let v1 = sample_ellipse(self.radii, self.x_rotation, Angle::radians(a1)).to_vector();
            let v2 = sample_ellipse(self.radii, self.x_rotation, Angle::radians(a2)).to_vector();
            let p1 = self.center + v1;
            let p2 = self.center + v2;
            let l1 = Line {
                point: p1,
                vector: self.tangent_at_angle(Angle::radians(a1)),
            };
            let l2 = Line {
                point: p2,
                vector: self.tangent_at_angle(Angle::radians(a2)),
            };
            let ctrl = l2.intersection(&l1).unwrap();

            cb(ctrl, p2);
        }
    }

    #[inline]
    fn tangent_at_angle(&self, angle: Angle) -> Vector {
        let a = angle.get();
        Rotation::new(self.x_rotation)
            .transform_vector(vector(-self.radii.x * a.sin(), self.radii.y * a.cos()))
    }
}

impl SvgArc {
    /// Converts to the center parameterization.
    pub fn to_arc(&self) -> Arc {
        Arc::from_svg_arc(self)
    }

    /// Whether the arc degenerates to a straight line segment, which is
    /// the case when a radius is zero or the endpoints coincide.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x.abs() < 1e-9 || self.radii.y.abs() < 1e-9 || self.from == self.to
    }
}

impl From<SvgArc> for Arc {
    fn from(arc: SvgArc) -> Arc {
        arc.to_arc()
    }
}

fn sample_ellipse(radii: Vector, x_rotation: Angle, angle: Angle) -> Point {
    Rotation::new(x_rotation).transform_point(point(
        radii.x * angle.get().cos(),
        radii.y * angle.get().sin(),
    ))
}

#[cfg(test)]
fn assert_approx_eq(a: Point, b: Point) {
    if (a.x - b.x).abs() > 0.000001 || (a.y - b.y).abs() > 0.000001 {
        panic!("{:?} != {:?}", a, b);
    }
}

#[cfg(test)]
fn svg_arc(from: Point, to: Point, r: f64, large_arc: bool, sweep: bool) -> SvgArc {
    SvgArc {
        from,
        to,
        radii: vector(r, r),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags { large_arc, sweep },
    }
}

#[test]
fn from_svg_arc_circle_flags() {
    // The quarter circle of radius 10 between (10, 0) and (0, 10) has two
    // candidate centers, (0, 0) and (10, 10), and each flag combination
    // selects a distinct arc between them.
    let from = point(10.0, 0.0);
    let to = point(0.0, 10.0);

    let arc = svg_arc(from, to, 10.0, false, true).to_arc();
    assert_approx_eq(arc.center, point(0.0, 0.0));
    assert!((arc.start_angle.to_degrees() - 0.0).abs() < 0.001);
    assert!((arc.sweep_angle.to_degrees() - 90.0).abs() < 0.001);

    let arc = svg_arc(from, to, 10.0, true, true).to_arc();
    assert_approx_eq(arc.center, point(10.0, 10.0));
    assert!((arc.start_angle.to_degrees() + 90.0).abs() < 0.001);
    assert!((arc.sweep_angle.to_degrees() - 270.0).abs() < 0.001);

    let arc = svg_arc(from, to, 10.0, false, false).to_arc();
    assert_approx_eq(arc.center, point(10.0, 10.0));
    assert!((arc.sweep_angle.to_degrees() + 90.0).abs() < 0.001);

    let arc = svg_arc(from, to, 10.0, true, false).to_arc();
    assert_approx_eq(arc.center, point(0.0, 0.0));
    assert!((arc.sweep_angle.to_degrees() + 270.0).abs() < 0.001);

    // All four land on the requested endpoints.
    for &(large_arc, sweep) in &[(false, true), (true, true), (false, false), (true, false)] {
        let arc = svg_arc(from, to, 10.0, large_arc, sweep).to_arc();
        assert_approx_eq(arc.from(), from);
        assert_approx_eq(arc.to(), to);
        assert!((arc.radii.x - 10.0).abs() < 0.001);
        assert!((arc.radii.y - 10.0).abs() < 0.001);
    }
}

#[test]
fn from_svg_arc_scales_radii_up() {
    // The endpoints are 20 apart but the requested radius is only 5: the
    // radii must grow until the ellipse reaches both endpoints.
    let from = point(0.0, 0.0);
    let to = point(20.0, 0.0);
    let arc = svg_arc(from, to, 5.0, false, true).to_arc();

    assert!(arc.radii.x >= 10.0);
    assert!(arc.radii.y >= 10.0);
    assert_approx_eq(arc.from(), from);
    assert_approx_eq(arc.to(), to);
}

#[test]
fn from_svg_arc_rotated() {
    let from = point(0.0, 0.0);
    let to = point(10.0, 10.0);
    let arc = SvgArc {
        from,
        to,
        radii: vector(10.0, 5.0),
        x_rotation: Angle::degrees(30.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    }
    .to_arc();

    assert_approx_eq(arc.from(), from);
    assert_approx_eq(arc.to(), to);
    assert_eq!(arc.x_rotation, Angle::degrees(30.0));
}

#[test]
fn sweep_angle_stays_within_a_turn() {
    for &(large_arc, sweep) in &[(false, false), (false, true), (true, false), (true, true)] {
        let arc = svg_arc(point(1.0, 0.0), point(0.0, 1.0), 1.0, large_arc, sweep).to_arc();
        let extent = arc.sweep_angle.to_degrees();
        assert!(extent > -360.0 && extent < 360.0);
        if sweep {
            assert!(extent > 0.0);
        } else {
            assert!(extent < 0.0);
        }
    }
}

#[test]
fn quadratic_beziers_follow_the_arc() {
    let arc = svg_arc(point(10.0, 0.0), point(0.0, 10.0), 10.0, false, true).to_arc();

    let mut prev = arc.from();
    let mut count = 0;
    arc.for_each_quadratic_bezier(&mut |ctrl, to| {
        // Each endpoint lies on the circle and the control point is
        // outside of it.
        assert!((to.to_vector().length() - 10.0).abs() < 0.001);
        assert!(ctrl.to_vector().length() > 10.0);
        assert!((to - prev).length() > 0.0);
        prev = to;
        count += 1;
    });

    assert_eq!(count, 2);
    assert_approx_eq(prev, point(0.0, 10.0));
}

#[test]
fn straight_line_arcs() {
    let flags = ArcFlags::default();
    assert!(SvgArc {
        from: point(0.0, 0.0),
        to: point(1.0, 0.0),
        radii: vector(0.0, 1.0),
        x_rotation: Angle::radians(0.0),
        flags,
    }
    .is_straight_line());
    assert!(SvgArc {
        from: point(2.0, 3.0),
        to: point(2.0, 3.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::radians(0.0),
        flags,
    }
    .is_straight_line());
    assert!(!svg_arc(point(0.0, 0.0), point(1.0, 0.0), 1.0, false, false).is_straight_line());
}
