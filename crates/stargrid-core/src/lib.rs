//! **stargrid-core** — core value types for the stargrid engine.
//!
//! Both callers of the path search engine — tactical unit movement on the
//! combat arena and fleet navigation on the strategic starmap — describe
//! positions with the same two primitives: [`Coord`], an integer cell
//! coordinate, and [`Rect`], a half-open rectangle of cells.

pub mod geom;

pub use geom::{Coord, Rect};
