use pointview_core::containers::{PointView, PointViewSet};

/// A reader stage whose points come from caller-provided views instead of a file. Adding a view moves it into the
/// reader, so the caller keeps no handle through which the view could change while a pipeline runs on it
#[derive(Debug, Default)]
pub struct BufferReader {
    views: Vec<PointView>,
}

impl BufferReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `view` to the views this reader provides
    pub fn add_view(&mut self, view: PointView) {
        self.views.push(view);
    }

    /// Returns the views of this reader in the order they were added
    pub fn views(&self) -> &[PointView] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Returns the total number of points over all views of this reader
    pub fn point_count(&self) -> usize {
        self.views.iter().map(|view| view.len()).sum()
    }

    /// Consumes this reader and returns its views as a `PointViewSet`
    pub fn into_view_set(self) -> PointViewSet {
        self.views.into_iter().collect()
    }
}

impl From<PointView> for BufferReader {
    fn from(view: PointView) -> Self {
        Self { views: vec![view] }
    }
}
