use std::{
    collections::HashMap,
    ops::Deref,
    sync::atomic::{AtomicUsize, Ordering},
};

use log::debug;

use crate::{
    error::{PointViewError, Result},
    layout::{DimTypeId, DimensionId, DimensionType, FieldValue, PointLayout, PrimitiveType},
    meta::SpatialReference,
};

/// Index of a single point within a `PointView`
pub type PointId = usize;

static NEXT_VIEW_ID: AtomicUsize = AtomicUsize::new(0);

/// A columnar table of points. Every registered dimension is stored in its own contiguous column, using the storage
/// type it was registered with. All field access is typed and checked: reading or writing a dimension that is not
/// registered, or a point that does not exist, is an error.
///
/// A `PointView` exclusively owns its storage. Handing a view to a pipeline moves it, so there is never a second
/// handle through which the storage could be mutated.
#[derive(Debug)]
pub struct PointView {
    id: usize,
    point_layout: PointLayout,
    columns: HashMap<DimensionId, Vec<u8>>,
    length: usize,
    spatial_reference: SpatialReference,
}

impl PointView {
    /// Creates a new empty `PointView` with no registered dimensions and zero points
    /// ```
    /// # use pointview_core::containers::*;
    /// let view = PointView::new();
    /// # assert_eq!(0, view.len());
    /// # assert!(view.layout().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            id: NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed),
            point_layout: PointLayout::new(),
            columns: HashMap::new(),
            length: 0,
            spatial_reference: SpatialReference::default(),
        }
    }

    /// Creates a new empty `PointView` with all dimensions of `point_layout` registered
    pub fn with_layout(point_layout: PointLayout) -> Self {
        let columns = point_layout
            .dimensions()
            .map(|dim| (dim.id(), Vec::default()))
            .collect();
        Self {
            point_layout,
            columns,
            ..Self::new()
        }
    }

    /// Returns the identifier of this view. Identifiers are unique within the running process and increase in
    /// creation order
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of points in this view
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn spatial_reference(&self) -> &SpatialReference {
        &self.spatial_reference
    }

    pub fn set_spatial_reference(&mut self, spatial_reference: SpatialReference) {
        self.spatial_reference = spatial_reference;
    }

    /// Returns the spatial reference of this view as proj4 text, or an empty string if there is none
    pub fn spatial_reference_as_proj4(&self) -> &str {
        self.spatial_reference.proj4()
    }

    /// Returns the spatial reference of this view as WKT, or an empty string if there is none
    pub fn spatial_reference_as_wkt(&self) -> &str {
        self.spatial_reference.wkt()
    }

    /// Returns the layout of this view. The borrow ties the layout to the lifetime of the view
    pub fn layout(&self) -> &PointLayout {
        &self.point_layout
    }

    /// Returns a mutable handle to the layout of this view. The handle only permits registering dimensions, which
    /// keeps the layout and the stored columns in sync
    pub fn layout_mut(&mut self) -> PointLayoutMut<'_> {
        PointLayoutMut { view: self }
    }

    /// Registers all `dimensions` on this view, in the given order. See [`PointLayoutMut::register_dimensions`]
    /// ```
    /// # use pointview_core::containers::*;
    /// # use pointview_core::layout::*;
    /// let mut view = PointView::new();
    /// view.register_dimensions(&[DimensionId::X.into(), DimensionId::Classification.into()]).unwrap();
    /// assert!(view.layout().has_dimension(DimensionId::Classification));
    /// ```
    pub fn register_dimensions(&mut self, dimensions: &[DimTypeId]) -> Result<()> {
        self.layout_mut().register_dimensions(dimensions)
    }

    /// Returns the sum of the storage widths of the given dimensions, in bytes
    pub fn point_size_for_dimensions(&self, dimensions: &[DimensionId]) -> Result<usize> {
        self.point_layout.point_size_for_dimensions(dimensions)
    }

    /// Appends a new point with all fields set to zero and returns its `PointId`
    pub fn append_point(&mut self) -> PointId {
        let id = self.length;
        self.resize(self.length + 1);
        id
    }

    /// Resizes this view to `count` points. New points have all fields set to zero
    ///
    /// # Panics
    ///
    /// If the byte size of a column for `count` points overflows `usize`
    pub fn resize(&mut self, count: usize) {
        for dim in self.point_layout.dimensions() {
            let column_size = count
                .checked_mul(dim.size())
                .unwrap_or_else(|| panic!("Column size of {} for {} points overflows", dim, count));
            let column = self.columns.entry(dim.id()).or_default();
            column.resize(column_size, 0);
        }
        self.length = count;
    }

    /// Reads the given field of the point `point`, converted into `T`
    ///
    /// Fails if `dimension` is not registered on this view or if `point` is out of range
    /// ```
    /// # use pointview_core::containers::*;
    /// # use pointview_core::layout::*;
    /// let mut view = PointView::new();
    /// view.register_dimensions(&[DimensionId::Intensity.into()]).unwrap();
    /// let point = view.append_point();
    /// view.set_field(DimensionId::Intensity, point, 512_u16).unwrap();
    /// assert_eq!(512.0, view.get_field::<f64>(DimensionId::Intensity, point).unwrap());
    /// assert_eq!(u8::MAX, view.get_field::<u8>(DimensionId::Intensity, point).unwrap());
    /// ```
    pub fn get_field<T: PrimitiveType>(&self, dimension: DimensionId, point: PointId) -> Result<T> {
        let (datatype, bytes) = self.field_bytes(dimension, point)?;
        Ok(T::read_converted(datatype, bytes))
    }

    /// Writes `value` into the given field of the point `point`, converted into the declared storage type of
    /// `dimension`
    ///
    /// Fails if `dimension` is not registered on this view or if `point` is out of range
    pub fn set_field<T: PrimitiveType>(
        &mut self,
        dimension: DimensionId,
        point: PointId,
        value: T,
    ) -> Result<()> {
        let (datatype, bytes) = self.field_bytes_mut(dimension, point)?;
        value.write_converted(datatype, bytes);
        Ok(())
    }

    /// Reads the given field of the point `point` in its declared storage type
    pub fn get_field_value(&self, dimension: DimensionId, point: PointId) -> Result<FieldValue> {
        let (datatype, bytes) = self.field_bytes(dimension, point)?;
        Ok(FieldValue::from_bytes(datatype, bytes))
    }

    /// Type-erased version of [`set_field`](PointView::set_field)
    pub fn set_field_value(
        &mut self,
        dimension: DimensionId,
        point: PointId,
        value: FieldValue,
    ) -> Result<()> {
        let (datatype, bytes) = self.field_bytes_mut(dimension, point)?;
        value.write_converted(datatype, bytes);
        Ok(())
    }

    fn check_point(&self, point: PointId) -> Result<()> {
        if point >= self.length {
            return Err(PointViewError::PointOutOfRange {
                point,
                len: self.length,
            });
        }
        Ok(())
    }

    fn field_bytes(&self, dimension: DimensionId, point: PointId) -> Result<(DimensionType, &[u8])> {
        let datatype = self
            .point_layout
            .dimension_type(dimension)
            .ok_or(PointViewError::UnregisteredDimension(dimension))?;
        self.check_point(point)?;
        let column = self
            .columns
            .get(&dimension)
            .ok_or(PointViewError::UnregisteredDimension(dimension))?;
        let size = datatype.size();
        Ok((datatype, &column[(point * size)..((point + 1) * size)]))
    }

    fn field_bytes_mut(
        &mut self,
        dimension: DimensionId,
        point: PointId,
    ) -> Result<(DimensionType, &mut [u8])> {
        let datatype = self
            .point_layout
            .dimension_type(dimension)
            .ok_or(PointViewError::UnregisteredDimension(dimension))?;
        self.check_point(point)?;
        let column = self
            .columns
            .get_mut(&dimension)
            .ok_or(PointViewError::UnregisteredDimension(dimension))?;
        let size = datatype.size();
        Ok((datatype, &mut column[(point * size)..((point + 1) * size)]))
    }
}

impl Default for PointView {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable handle to the layout of a `PointView`. It dereferences to the [`PointLayout`] for inspection and allows
/// registering further dimensions on the view.
pub struct PointLayoutMut<'a> {
    view: &'a mut PointView,
}

impl<'a> PointLayoutMut<'a> {
    /// Registers a single dimension on the view. Registering an identical `DimTypeId` twice is a no-op. Registering
    /// a known dimension with a different type replaces its type (the last registration wins).
    ///
    /// New dimensions and type changes are only accepted while the view holds no points, otherwise
    /// `PointViewError::LayoutFinalized` is returned
    pub fn register_dimension(&mut self, dimension: DimTypeId) -> Result<()> {
        self.check_registration(&dimension)?;
        self.view.point_layout.register_dimension(dimension);
        self.view.columns.entry(dimension.id()).or_default();
        Ok(())
    }

    /// Registers all `dimensions` in the given order. Either all dimensions are registered or, on error, none
    pub fn register_dimensions(&mut self, dimensions: &[DimTypeId]) -> Result<()> {
        for dimension in dimensions {
            self.check_registration(dimension)?;
        }
        for dimension in dimensions {
            self.view.point_layout.register_dimension(*dimension);
            self.view.columns.entry(dimension.id()).or_default();
        }
        debug!(
            "Registered {} dimensions on point view {}",
            dimensions.len(),
            self.view.id
        );
        Ok(())
    }

    fn check_registration(&self, dimension: &DimTypeId) -> Result<()> {
        let unchanged = self.view.point_layout.get_dimension(dimension.id()) == Some(dimension);
        if !unchanged && !self.view.is_empty() {
            return Err(PointViewError::LayoutFinalized {
                dimension: *dimension,
            });
        }
        Ok(())
    }
}

impl<'a> Deref for PointLayoutMut<'a> {
    type Target = PointLayout;

    fn deref(&self) -> &Self::Target {
        &self.view.point_layout
    }
}
