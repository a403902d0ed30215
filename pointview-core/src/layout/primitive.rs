use std::fmt::{Debug, Display};

use bytemuck::Pod;

use super::{get_field_converter, DimensionType};

mod private {
    pub trait Sealed {}
}

/// Trait for all Rust types that can be read from or written to a dimension. This is implemented for exactly the
/// closed set of scalar types in [`DimensionType`] and cannot be implemented outside of this crate.
pub trait PrimitiveType: private::Sealed + Pod + Copy + PartialEq + Debug + 'static {
    /// Returns the `DimensionType` that corresponds to this Rust type
    fn data_type() -> DimensionType;

    /// Wraps this value into a type-erased `FieldValue`
    fn into_field_value(self) -> FieldValue;

    /// Reads a value of this type from `source`, which holds exactly one value of `source_type`. The value is
    /// converted according to the conversion policy in [`conversion`](crate::layout::get_field_converter)
    fn read_converted(source_type: DimensionType, source: &[u8]) -> Self {
        let mut value = Self::zeroed();
        let converter = get_field_converter(source_type, Self::data_type());
        converter(source, bytemuck::bytes_of_mut(&mut value));
        value
    }

    /// Writes this value into `target`, which has to be large enough for exactly one value of `target_type`
    fn write_converted(self, target_type: DimensionType, target: &mut [u8]) {
        let converter = get_field_converter(Self::data_type(), target_type);
        converter(bytemuck::bytes_of(&self), target);
    }
}

/// A single value of one of the scalar storage types
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldValue {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! impl_primitive_type {
    ($prim:ident, $variant:ident) => {
        impl private::Sealed for $prim {}

        impl PrimitiveType for $prim {
            fn data_type() -> DimensionType {
                DimensionType::$variant
            }

            fn into_field_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }
        }

        impl From<$prim> for FieldValue {
            fn from(value: $prim) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

impl_primitive_type!(i8, I8);
impl_primitive_type!(u8, U8);
impl_primitive_type!(i16, I16);
impl_primitive_type!(u16, U16);
impl_primitive_type!(i32, I32);
impl_primitive_type!(u32, U32);
impl_primitive_type!(i64, I64);
impl_primitive_type!(u64, U64);
impl_primitive_type!(f32, F32);
impl_primitive_type!(f64, F64);

impl FieldValue {
    /// Returns the storage type of this value
    pub fn datatype(&self) -> DimensionType {
        match self {
            FieldValue::I8(_) => DimensionType::I8,
            FieldValue::U8(_) => DimensionType::U8,
            FieldValue::I16(_) => DimensionType::I16,
            FieldValue::U16(_) => DimensionType::U16,
            FieldValue::I32(_) => DimensionType::I32,
            FieldValue::U32(_) => DimensionType::U32,
            FieldValue::I64(_) => DimensionType::I64,
            FieldValue::U64(_) => DimensionType::U64,
            FieldValue::F32(_) => DimensionType::F32,
            FieldValue::F64(_) => DimensionType::F64,
        }
    }

    /// Decodes a single value of `datatype` from `bytes`
    ///
    /// # Panics
    ///
    /// If `bytes.len()` does not equal `datatype.size()`
    pub fn from_bytes(datatype: DimensionType, bytes: &[u8]) -> Self {
        match datatype {
            DimensionType::I8 => FieldValue::I8(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::U8 => FieldValue::U8(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::I16 => FieldValue::I16(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::U16 => FieldValue::U16(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::I32 => FieldValue::I32(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::U32 => FieldValue::U32(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::I64 => FieldValue::I64(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::U64 => FieldValue::U64(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::F32 => FieldValue::F32(bytemuck::pod_read_unaligned(bytes)),
            DimensionType::F64 => FieldValue::F64(bytemuck::pod_read_unaligned(bytes)),
        }
    }

    /// Writes this value into `target`, converting it to `target_type`
    pub fn write_converted(&self, target_type: DimensionType, target: &mut [u8]) {
        match *self {
            FieldValue::I8(v) => v.write_converted(target_type, target),
            FieldValue::U8(v) => v.write_converted(target_type, target),
            FieldValue::I16(v) => v.write_converted(target_type, target),
            FieldValue::U16(v) => v.write_converted(target_type, target),
            FieldValue::I32(v) => v.write_converted(target_type, target),
            FieldValue::U32(v) => v.write_converted(target_type, target),
            FieldValue::I64(v) => v.write_converted(target_type, target),
            FieldValue::U64(v) => v.write_converted(target_type, target),
            FieldValue::F32(v) => v.write_converted(target_type, target),
            FieldValue::F64(v) => v.write_converted(target_type, target),
        }
    }

    /// Converts this value into `T`
    /// ```
    /// # use pointview_core::layout::*;
    /// assert_eq!(2_u8, FieldValue::F64(2.0).get::<u8>());
    /// assert_eq!(u8::MAX, FieldValue::I32(1024).get::<u8>());
    /// ```
    pub fn get<T: PrimitiveType>(&self) -> T {
        let mut bytes = [0_u8; 8];
        let datatype = T::data_type();
        let size = datatype.size();
        self.write_converted(datatype, &mut bytes[..size]);
        bytemuck::pod_read_unaligned(&bytes[..size])
    }

    /// Converts this value into a value of `datatype`
    pub fn convert_to(&self, datatype: DimensionType) -> FieldValue {
        let mut bytes = [0_u8; 8];
        let size = datatype.size();
        self.write_converted(datatype, &mut bytes[..size]);
        FieldValue::from_bytes(datatype, &bytes[..size])
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::I8(v) => write!(f, "{}", v),
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::I16(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::I32(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::I64(v) => write!(f, "{}", v),
            FieldValue::U64(v) => write!(f, "{}", v),
            FieldValue::F32(v) => write!(f, "{}", v),
            FieldValue::F64(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_datatype_matches_primitive_type() {
        assert_eq!(i8::data_type(), 0_i8.into_field_value().datatype());
        assert_eq!(u16::data_type(), 0_u16.into_field_value().datatype());
        assert_eq!(u64::data_type(), 0_u64.into_field_value().datatype());
        assert_eq!(f32::data_type(), 0_f32.into_field_value().datatype());
    }

    #[test]
    fn test_field_value_from_bytes() {
        let value: u32 = 0xdead_beef;
        assert_eq!(
            FieldValue::U32(value),
            FieldValue::from_bytes(DimensionType::U32, bytemuck::bytes_of(&value))
        );
        let value = -2.5_f64;
        assert_eq!(
            FieldValue::F64(value),
            FieldValue::from_bytes(DimensionType::F64, bytemuck::bytes_of(&value))
        );
    }

    #[test]
    fn test_field_value_convert_to() {
        assert_eq!(
            FieldValue::U8(255),
            FieldValue::I32(4096).convert_to(DimensionType::U8)
        );
        assert_eq!(
            FieldValue::F64(7.0),
            FieldValue::I16(7).convert_to(DimensionType::F64)
        );
        assert_eq!(
            FieldValue::I64(-1),
            FieldValue::I64(-1).convert_to(DimensionType::I64)
        );
    }

    #[test]
    fn test_field_value_get() {
        assert_eq!(12.5_f64, FieldValue::F64(12.5).get::<f64>());
        assert_eq!(12_i32, FieldValue::F64(12.5).get::<i32>());
        assert_eq!(0_u16, FieldValue::I8(-4).get::<u16>());
    }
}
