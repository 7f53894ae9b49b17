use crate::builder::*;
use crate::geom::{Arc, ArcFlags, SvgArc};
use crate::math::{point, vector, Angle};
use crate::{Path, PathEvent};

#[test]
fn test_path_builder_simple() {
    let mut p = Path::builder();
    p.move_to(point(0.0, 0.0));
    p.line_to(point(1.0, 0.0));
    p.line_to(point(2.0, 0.0));
    p.quadratic_bezier_to(point(3.0, 0.0), point(3.0, 1.0));
    p.cubic_bezier_to(point(4.0, 0.0), point(4.0, 1.0), point(4.0, 2.0));
    p.close();

    p.move_to(point(10.0, 0.0));
    p.line_to(point(11.0, 0.0));
    p.close();

    let path = p.build();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(0.0, 0.0))));
    assert_eq!(it.next(), Some(PathEvent::LineTo(point(1.0, 0.0))));
    assert_eq!(it.next(), Some(PathEvent::LineTo(point(2.0, 0.0))));
    assert_eq!(
        it.next(),
        Some(PathEvent::QuadraticTo(point(3.0, 0.0), point(3.0, 1.0)))
    );
    assert_eq!(
        it.next(),
        Some(PathEvent::CubicTo(
            point(4.0, 0.0),
            point(4.0, 1.0),
            point(4.0, 2.0)
        ))
    );
    assert_eq!(it.next(), Some(PathEvent::Close));
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(10.0, 0.0))));
    assert_eq!(it.next(), Some(PathEvent::LineTo(point(11.0, 0.0))));
    assert_eq!(it.next(), Some(PathEvent::Close));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_path_builder_empty() {
    let path = Path::builder().build();
    let mut it = path.iter();
    assert!(path.is_empty());
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_path_builder_empty_move_to() {
    let mut p = Path::builder();
    p.move_to(point(1.0, 2.0));
    p.move_to(point(3.0, 4.0));
    p.move_to(point(5.0, 6.0));

    let path = p.build();
    assert_eq!(path.len(), 3);
    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(1.0, 2.0))));
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(3.0, 4.0))));
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(5.0, 6.0))));
    assert_eq!(it.next(), None);
}

#[test]
fn test_close_resets_position() {
    let mut p = Path::builder();
    p.move_to(point(1.0, 1.0));
    p.line_to(point(5.0, 1.0));
    p.line_to(point(5.0, 5.0));
    p.close();

    assert_eq!(p.current_position(), point(1.0, 1.0));
}

#[test]
fn test_arc_round_trips_through_storage() {
    let arc = SvgArc {
        from: point(10.0, 0.0),
        to: point(0.0, 10.0),
        radii: vector(10.0, 10.0),
        x_rotation: Angle::degrees(15.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    }
    .to_arc();

    let mut p = Path::builder();
    p.move_to(point(10.0, 0.0));
    p.arc(&arc);
    let path = p.build();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(10.0, 0.0))));
    match it.next() {
        Some(PathEvent::Arc(stored)) => {
            assert_eq!(stored.center, arc.center);
            assert_eq!(stored.radii, arc.radii);
            assert_eq!(stored.start_angle, arc.start_angle);
            assert_eq!(stored.sweep_angle, arc.sweep_angle);
            assert_eq!(stored.x_rotation, arc.x_rotation);
        }
        other => panic!("expected an arc event, got {:?}", other),
    }
    assert_eq!(it.next(), None);
}

#[test]
fn test_path_slice_iterates_like_the_path() {
    let mut p = Path::builder();
    p.move_to(point(0.0, 0.0));
    p.line_to(point(1.0, 1.0));
    p.close();
    let path = p.build();

    let slice = path.as_slice();
    assert!(slice.iter().eq(path.iter()));
    assert_eq!(slice.points(), path.points());
    assert_eq!(slice.verbs(), path.verbs());
}

#[test]
fn test_event_destination() {
    assert_eq!(
        PathEvent::LineTo(point(1.0, 2.0)).destination(),
        Some(point(1.0, 2.0))
    );
    assert_eq!(PathEvent::Close.destination(), None);

    let arc = Arc {
        center: point(0.0, 0.0),
        radii: vector(10.0, 10.0),
        start_angle: Angle::degrees(0.0),
        sweep_angle: Angle::degrees(90.0),
        x_rotation: Angle::degrees(0.0),
    };
    let to = PathEvent::Arc(arc).destination().unwrap();
    assert!((to.x - 0.0).abs() < 0.000001);
    assert!((to.y - 10.0).abs() < 0.000001);
}
