use std::fmt::Display;

use itertools::Itertools;

use super::{DimTypeId, DimensionId, DimensionType};
use crate::error::{PointViewError, Result};

/// Describes the registered dimensions of a point view. Dimensions are kept in registration order, each with the
/// storage type it was declared with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
///
/// With the `serde` feature, a layout serializes as its list of dimensions. Deserializing registers them one by one,
/// so duplicates collapse the same way as with [`register_dimension`](PointLayout::register_dimension)
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<DimTypeId>", into = "Vec<DimTypeId>")
)]
pub struct PointLayout {
    dimensions: Vec<DimTypeId>,
    dimension_offsets: Vec<usize>,
}

/// One entry of the schema of a `PointLayout`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DimensionSchema {
    pub name: &'static str,
    pub size: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub base_type: &'static str,
}

impl PointLayout {
    /// Creates a new empty PointLayout
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::new();
    /// # assert_eq!(0, layout.dimensions().count());
    /// ```
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Creates a new PointLayout from the given sequence of dimensions. Registration follows the same rules as
    /// [`register_dimension`](PointLayout::register_dimension)
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::from_dimensions(&[DimensionId::X.into(), DimensionId::Intensity.into()]);
    /// # assert_eq!(2, layout.dimensions().count());
    /// ```
    pub fn from_dimensions(dimensions: &[DimTypeId]) -> Self {
        dimensions.iter().copied().collect()
    }

    /// Registers the given dimension on this PointLayout. Registering a dimension that is already part of this
    /// layout keeps its position, but the storage type of the last registration wins. Returns the previous
    /// storage type if the dimension was already registered
    /// ```
    /// # use pointview_core::layout::*;
    /// let mut layout = PointLayout::new();
    /// layout.register_dimension(DimensionId::Intensity.into());
    /// let previous = layout.register_dimension(DimTypeId::new(DimensionId::Intensity, DimensionType::F32));
    /// assert_eq!(Some(DimensionType::U16), previous);
    /// assert_eq!(Some(DimensionType::F32), layout.dimension_type(DimensionId::Intensity));
    /// ```
    pub fn register_dimension(&mut self, dimension: DimTypeId) -> Option<DimensionType> {
        match self.index_of(dimension.id()) {
            Some(index) => {
                let previous = self.dimensions[index].datatype();
                if previous != dimension.datatype() {
                    self.dimensions[index] = dimension;
                    self.update_offsets();
                }
                Some(previous)
            }
            None => {
                // The new dimension starts where the previous dimension ends
                let offset = self.point_size();
                self.dimensions.push(dimension);
                self.dimension_offsets.push(offset);
                None
            }
        }
    }

    /// Returns true if the given dimension is registered on this PointLayout
    pub fn has_dimension(&self, dimension: DimensionId) -> bool {
        self.index_of(dimension).is_some()
    }

    /// Returns the registered `DimTypeId` for the given dimension, or `None` if it is not registered
    pub fn get_dimension(&self, dimension: DimensionId) -> Option<&DimTypeId> {
        self.dimensions.iter().find(|dim| dim.id() == dimension)
    }

    /// Returns the declared storage type of the given dimension
    pub fn dimension_type(&self, dimension: DimensionId) -> Option<DimensionType> {
        self.get_dimension(dimension).map(|dim| dim.datatype())
    }

    /// Returns the size in bytes of a single value of the given dimension
    pub fn dimension_size(&self, dimension: DimensionId) -> Option<usize> {
        self.get_dimension(dimension).map(|dim| dim.size())
    }

    /// Returns an iterator over all dimensions in registration order
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::from_dimensions(&[DimensionId::X.into(), DimensionId::Y.into()]);
    /// let names = layout.dimensions().map(|dim| dim.name()).collect::<Vec<_>>();
    /// assert_eq!(vec!["X", "Y"], names);
    /// ```
    pub fn dimensions(&self) -> impl Iterator<Item = &DimTypeId> + '_ {
        self.dimensions.iter()
    }

    /// Returns the number of registered dimensions
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns the size in bytes of a single point with all registered dimensions
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::from_dimensions(&[DimensionId::X.into(), DimensionId::Intensity.into()]);
    /// assert_eq!(10, layout.point_size());
    /// ```
    pub fn point_size(&self) -> usize {
        self.dimensions.iter().map(|dim| dim.size()).sum()
    }

    /// Returns the sum of the storage widths of the given dimensions, in bytes. Fails if any of the dimensions
    /// is not registered on this layout
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::from_dimensions(&[
    ///     DimensionId::X.into(),
    ///     DimensionId::Intensity.into(),
    ///     DimensionId::Classification.into(),
    /// ]);
    /// let size = layout.point_size_for_dimensions(&[DimensionId::X, DimensionId::Classification]);
    /// assert_eq!(Ok(9), size);
    /// ```
    pub fn point_size_for_dimensions(&self, dimensions: &[DimensionId]) -> Result<usize> {
        dimensions.iter().try_fold(0, |size, &dimension| {
            self.dimension_size(dimension)
                .map(|dimension_size| size + dimension_size)
                .ok_or(PointViewError::UnregisteredDimension(dimension))
        })
    }

    /// Returns the index of the given dimension in registration order
    pub fn index_of(&self, dimension: DimensionId) -> Option<usize> {
        self.dimensions.iter().position(|dim| dim.id() == dimension)
    }

    /// Returns the offset in bytes to the given dimension within a single point, assuming tightly packed
    /// dimensions in registration order
    /// ```
    /// # use pointview_core::layout::*;
    /// let layout = PointLayout::from_dimensions(&[DimensionId::X.into(), DimensionId::Intensity.into()]);
    /// assert_eq!(Some(8), layout.offset_of(DimensionId::Intensity));
    /// assert_eq!(None, layout.offset_of(DimensionId::Z));
    /// ```
    pub fn offset_of(&self, dimension: DimensionId) -> Option<usize> {
        self.index_of(dimension)
            .map(|index| self.dimension_offsets[index])
    }

    /// Returns the schema of this layout: name, size and base type of every dimension in registration order
    pub fn schema(&self) -> Vec<DimensionSchema> {
        self.dimensions
            .iter()
            .map(|dim| DimensionSchema {
                name: dim.name(),
                size: dim.size(),
                base_type: dim.datatype().base_name(),
            })
            .collect()
    }

    fn update_offsets(&mut self) {
        self.dimension_offsets = self
            .dimensions
            .iter()
            .scan(0, |offset, dim| {
                let current = *offset;
                *offset += dim.size();
                Some(current)
            })
            .collect();
    }
}

impl FromIterator<DimTypeId> for PointLayout {
    fn from_iter<T: IntoIterator<Item = DimTypeId>>(iter: T) -> Self {
        let mut layout = Self::new();
        for dimension in iter {
            layout.register_dimension(dimension);
        }
        layout
    }
}

impl From<Vec<DimTypeId>> for PointLayout {
    fn from(dimensions: Vec<DimTypeId>) -> Self {
        dimensions.into_iter().collect()
    }
}

impl From<PointLayout> for Vec<DimTypeId> {
    fn from(layout: PointLayout) -> Self {
        layout.dimensions
    }
}

impl Display for PointLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PointLayout {{{}}}", self.dimensions.iter().join(", "))
    }
}
