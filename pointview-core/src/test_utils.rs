use rand::{prelude::Distribution, thread_rng, Rng};

use crate::{
    containers::PointView,
    layout::{DimensionType, FieldValue, PointLayout},
};

/// Samples random values of a fixed storage type
pub(crate) struct FieldValueDistribution(pub DimensionType);

impl Distribution<FieldValue> for FieldValueDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldValue {
        match self.0 {
            DimensionType::I8 => FieldValue::I8(rng.gen()),
            DimensionType::U8 => FieldValue::U8(rng.gen()),
            DimensionType::I16 => FieldValue::I16(rng.gen()),
            DimensionType::U16 => FieldValue::U16(rng.gen()),
            DimensionType::I32 => FieldValue::I32(rng.gen()),
            DimensionType::U32 => FieldValue::U32(rng.gen()),
            DimensionType::I64 => FieldValue::I64(rng.gen()),
            DimensionType::U64 => FieldValue::U64(rng.gen()),
            DimensionType::F32 => FieldValue::F32(rng.gen()),
            DimensionType::F64 => FieldValue::F64(rng.gen()),
        }
    }
}

/// Creates a view with `count` points of `layout` filled with random values. Returns the view together with the
/// expected values, one row per point in layout order
pub(crate) fn view_with_random_points(
    layout: &PointLayout,
    count: usize,
) -> (PointView, Vec<Vec<FieldValue>>) {
    let mut rng = thread_rng();
    let mut view = PointView::with_layout(layout.clone());
    view.resize(count);
    let mut rows = Vec::with_capacity(count);
    for point in 0..count {
        let row = layout
            .dimensions()
            .map(|dim| {
                let value = rng.sample(FieldValueDistribution(dim.datatype()));
                view.set_field_value(dim.id(), point, value)
                    .expect("Dimension is part of the layout");
                value
            })
            .collect::<Vec<_>>();
        rows.push(row);
    }
    (view, rows)
}
