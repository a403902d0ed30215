//! Containers for point data.
//!
//! A [`PointView`] stores points in a columnar memory layout: all values of one dimension are stored together in
//! memory, similar to how a column-oriented database stores its records. Which dimensions a view stores, and with
//! which storage types, is described by its [`PointLayout`](crate::layout::PointLayout).
//!
//! Field access works through the typed accessors `get_field`/`set_field`, which convert between the requested Rust
//! type and the declared storage type of the dimension, or through the type-erased
//! [`FieldValue`](crate::layout::FieldValue) accessors `get_field_value`/`set_field_value`.
//!
//! A pipeline run produces a [`PointViewSet`], an ordered collection of views that is traversed with a
//! [`PointViewSetIter`].

mod point_view;
pub use self::point_view::*;

mod point_view_set;
pub use self::point_view_set::*;
