#![warn(clippy::all)]

//! Typed, dimension-indexed access to columnar point data
//!
//! The central type of this crate is the [`PointView`](crate::containers::PointView), a table of points whose
//! columns are the registered dimensions of its [`PointLayout`](crate::layout::PointLayout). Each dimension is
//! stored in one of a closed set of scalar types, and every read or write converts between that storage type and
//! the requested Rust type following a single conversion policy (see [`layout::get_field_converter`]).

pub mod containers;
/// Defines dimensions, their storage types and the layout of a point view
pub mod layout;
/// Data structures for handling point cloud metadata
pub mod meta;

mod error;
pub use self::error::*;

#[cfg(test)]
mod test_utils;
