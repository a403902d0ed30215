use crate::error::{PointViewError, Result};

use super::PointView;

/// An ordered collection of point views, as produced by a pipeline run. Views are ordered by their id. The set can
/// only be built from an iterator and offers no mutable access afterwards
#[derive(Debug, Default)]
pub struct PointViewSet {
    views: Vec<PointView>,
}

impl PointViewSet {
    /// Creates an empty `PointViewSet`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of views in this set
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Returns the view at `index`, or `None` if `index` is out of bounds
    pub fn get(&self, index: usize) -> Option<&PointView> {
        self.views.get(index)
    }

    /// Returns the first view of this set, if any
    pub fn first(&self) -> Option<&PointView> {
        self.views.first()
    }

    /// Returns the total number of points over all views in this set
    pub fn point_count(&self) -> usize {
        self.views.iter().map(|view| view.len()).sum()
    }

    /// Returns an iterator over all views in this set
    pub fn iter(&self) -> PointViewSetIter<'_> {
        PointViewSetIter::new(self)
    }

    /// Consumes this set and returns the views in order
    pub fn into_views(self) -> Vec<PointView> {
        self.views
    }
}

impl FromIterator<PointView> for PointViewSet {
    fn from_iter<I: IntoIterator<Item = PointView>>(iter: I) -> Self {
        let mut views = iter.into_iter().collect::<Vec<_>>();
        views.sort_by_key(|view| view.id());
        Self { views }
    }
}

impl<'a> IntoIterator for &'a PointViewSet {
    type Item = &'a PointView;
    type IntoIter = PointViewSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, single-pass cursor over a `PointViewSet`. The cursor borrows the set, so the set outlives it.
///
/// Besides the `Iterator` implementation, the cursor offers [`has_next`](PointViewSetIter::has_next) and
/// [`try_next`](PointViewSetIter::try_next), which reports exhaustion as an error instead of `None`. Once exhausted,
/// the cursor stays exhausted.
/// ```
/// # use pointview_core::containers::*;
/// let set = vec![PointView::new(), PointView::new()]
///     .into_iter()
///     .collect::<PointViewSet>();
/// let mut cursor = set.iter();
/// while cursor.has_next() {
///     let view = cursor.try_next().unwrap();
///     # assert_eq!(0, view.len());
/// }
/// assert!(cursor.try_next().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PointViewSetIter<'a> {
    views: &'a [PointView],
    current_index: usize,
}

impl<'a> PointViewSetIter<'a> {
    /// Creates a new cursor at the first element of `set`
    pub fn new(set: &'a PointViewSet) -> Self {
        Self {
            views: set.views.as_slice(),
            current_index: 0,
        }
    }

    /// Returns true if the cursor has not reached the end of the set
    pub fn has_next(&self) -> bool {
        self.current_index < self.views.len()
    }

    /// Returns the view at the cursor and advances the cursor. Fails with `PointViewError::IteratorExhausted` if
    /// there are no more views
    pub fn try_next(&mut self) -> Result<&'a PointView> {
        let view = self
            .views
            .get(self.current_index)
            .ok_or(PointViewError::IteratorExhausted)?;
        self.current_index += 1;
        Ok(view)
    }
}

impl<'a> Iterator for PointViewSetIter<'a> {
    type Item = &'a PointView;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.views.len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PointViewSetIter<'a> {}
