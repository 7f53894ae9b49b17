//! 2D geometry for vector paths: points, vectors, angles and the
//! elliptical arc math needed to turn path commands into renderable
//! curves.
//!
//! This crate is reexported in [contour](https://docs.rs/contour/).

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod line;
pub mod math;

pub use crate::arc::{Arc, ArcFlags, SvgArc};
pub use crate::line::Line;

pub use euclid;
