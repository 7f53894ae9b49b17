//! # Contour
//!
//! Parsing of the SVG path-data mini-language into renderable 2D vector
//! paths: an ordered sequence of move/line/curve/arc/close segments with
//! explicit endpoints and control points.
//!
//! The facade reexports the crates of the contour workspace:
//!
//! - [contour_geom](https://docs.rs/contour_geom/): points, vectors,
//!   angles and the elliptical arc math.
//! - [contour_path](https://docs.rs/contour_path/): the `Path` data
//!   structure, its builder and iterator.
//! - [contour_svg](https://docs.rs/contour_svg/): the path string parser
//!   and the optional parse cache.
//!
//! # Examples
//!
//! ```
//! use contour::parse_path;
//! use contour::path::PathEvent;
//! use contour::math::point;
//!
//! let path = parse_path("M 10 10 h 10 v 10 h -10 z").unwrap();
//!
//! let mut it = path.iter();
//! assert_eq!(it.next(), Some(PathEvent::MoveTo(point(10.0, 10.0))));
//! assert_eq!(it.next(), Some(PathEvent::LineTo(point(20.0, 10.0))));
//! assert_eq!(it.next(), Some(PathEvent::LineTo(point(20.0, 20.0))));
//! assert_eq!(it.next(), Some(PathEvent::LineTo(point(10.0, 20.0))));
//! assert_eq!(it.next(), Some(PathEvent::Close));
//! assert_eq!(it.next(), None);
//! ```
//!
//! Parsing failures carry the byte offset and the input, and the tolerant
//! entry points keep the segments built before the fault:
//!
//! ```
//! use contour::svg::parser::parse_path_tolerant;
//!
//! let (path, error) = parse_path_tolerant("M 0 0 L 10 0 L 10");
//! assert_eq!(path.len(), 2);
//! assert!(error.is_some());
//! ```

pub use contour_geom as geom;
pub use contour_path as path;
pub use contour_svg as svg;

pub use crate::geom::math;
pub use crate::path::{Path, PathEvent};
pub use crate::svg::{parse_path, parse_path_tolerant, ParseCache, ParseError};
