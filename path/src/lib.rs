//! # Contour path
//!
//! A path data structure for vector outlines: an ordered sequence of
//! move/line/curve/arc/close segments, built through the
//! [builder](builder/index.html) module and consumed by iterating over
//! [PathEvent](enum.PathEvent.html)s.
//!
//! This crate is reexported in [contour](https://docs.rs/contour/).
//!
//! # Examples
//!
//! ```
//! use contour_path::Path;
//! use contour_path::math::point;
//! use contour_path::builder::*;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 2.0));
//! builder.line_to(point(2.0, 0.0));
//! builder.close();
//!
//! let path = builder.build();
//!
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! ```

pub use contour_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod builder;
mod events;
mod path;

#[cfg(test)]
mod builder_tests;

pub use crate::events::*;
pub use crate::geom::math;
pub use crate::geom::ArcFlags;
pub use crate::path::*;
