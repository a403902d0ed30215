//! Conversions between the scalar storage types of dimensions. Every field read or write goes through a conversion
//! function from this module, which operates on the raw bytes of a single value. Given a source value of type `A`
//! stored in some column and a target value of type `B`, the conversion works by viewing both as byte slices:
//! ```ignore
//! let converter = get_field_converter(DimensionType::U16, DimensionType::U8);
//! converter(bytemuck::bytes_of(&source), bytemuck::bytes_of_mut(&mut target));
//! ```
//!
//! The conversion policy is fixed for all type pairs:
//! - Widening conversions are lossless
//! - Narrowing and cross-signedness conversions saturate at the bounds of the target type
//! - Float to integer conversions truncate toward zero and then saturate, `NaN` becomes `0`
//! - Integer to float and `f64` to `f32` conversions yield the nearest representable value, finite values outside of
//!   the `f32` range saturate to `f32::MIN`/`f32::MAX`

use std::collections::HashMap;

use bytemuck::Pod;
use lazy_static::lazy_static;
use num_traits::{Bounded, NumCast, ToPrimitive, Zero};

use super::DimensionType;

/// Function pointer type for functions that convert a single value between two storage types. The first argument
/// holds exactly one value of the source type, the second argument exactly one value of the target type
pub type FieldConversionFn = fn(&[u8], &mut [u8]);

macro_rules! insert_scalar_converter {
    ($prim_from:ident, $prim_to:ident, $type_from:ident, $type_to:ident, $map:expr) => {
        // Insert symmetric conversion function from<->to and assert that they are unique
        assert!(($map)
            .insert(
                (DimensionType::$type_from, DimensionType::$type_to),
                convert_scalar_saturating::<$prim_from, $prim_to> as FieldConversionFn,
            )
            .is_none());
        assert!(($map)
            .insert(
                (DimensionType::$type_to, DimensionType::$type_from),
                convert_scalar_saturating::<$prim_to, $prim_from> as FieldConversionFn,
            )
            .is_none());
    };
}

/// Returns the conversion function for converting a value of `from_type` into a value of `to_type`. If both types
/// are equal, the returned function copies the bytes unchanged.
/// ```
/// # use pointview_core::layout::*;
/// let source: u16 = 300;
/// let mut target: u8 = 0;
/// let converter = get_field_converter(DimensionType::U16, DimensionType::U8);
/// converter(bytemuck::bytes_of(&source), bytemuck::bytes_of_mut(&mut target));
/// assert_eq!(u8::MAX, target);
/// ```
pub fn get_field_converter(from_type: DimensionType, to_type: DimensionType) -> FieldConversionFn {
    lazy_static! {
        static ref FIELD_CONVERTERS: HashMap<(DimensionType, DimensionType), FieldConversionFn> = {
            let mut converters = HashMap::<(DimensionType, DimensionType), FieldConversionFn>::new();
            insert_scalar_converter!(i8, u8, I8, U8, converters);
            insert_scalar_converter!(i8, i16, I8, I16, converters);
            insert_scalar_converter!(i8, u16, I8, U16, converters);
            insert_scalar_converter!(i8, i32, I8, I32, converters);
            insert_scalar_converter!(i8, u32, I8, U32, converters);
            insert_scalar_converter!(i8, i64, I8, I64, converters);
            insert_scalar_converter!(i8, u64, I8, U64, converters);
            insert_scalar_converter!(i8, f32, I8, F32, converters);
            insert_scalar_converter!(i8, f64, I8, F64, converters);

            insert_scalar_converter!(u8, i16, U8, I16, converters);
            insert_scalar_converter!(u8, u16, U8, U16, converters);
            insert_scalar_converter!(u8, i32, U8, I32, converters);
            insert_scalar_converter!(u8, u32, U8, U32, converters);
            insert_scalar_converter!(u8, i64, U8, I64, converters);
            insert_scalar_converter!(u8, u64, U8, U64, converters);
            insert_scalar_converter!(u8, f32, U8, F32, converters);
            insert_scalar_converter!(u8, f64, U8, F64, converters);

            insert_scalar_converter!(i16, u16, I16, U16, converters);
            insert_scalar_converter!(i16, i32, I16, I32, converters);
            insert_scalar_converter!(i16, u32, I16, U32, converters);
            insert_scalar_converter!(i16, i64, I16, I64, converters);
            insert_scalar_converter!(i16, u64, I16, U64, converters);
            insert_scalar_converter!(i16, f32, I16, F32, converters);
            insert_scalar_converter!(i16, f64, I16, F64, converters);

            insert_scalar_converter!(u16, i32, U16, I32, converters);
            insert_scalar_converter!(u16, u32, U16, U32, converters);
            insert_scalar_converter!(u16, i64, U16, I64, converters);
            insert_scalar_converter!(u16, u64, U16, U64, converters);
            insert_scalar_converter!(u16, f32, U16, F32, converters);
            insert_scalar_converter!(u16, f64, U16, F64, converters);

            insert_scalar_converter!(i32, u32, I32, U32, converters);
            insert_scalar_converter!(i32, i64, I32, I64, converters);
            insert_scalar_converter!(i32, u64, I32, U64, converters);
            insert_scalar_converter!(i32, f32, I32, F32, converters);
            insert_scalar_converter!(i32, f64, I32, F64, converters);

            insert_scalar_converter!(u32, i64, U32, I64, converters);
            insert_scalar_converter!(u32, u64, U32, U64, converters);
            insert_scalar_converter!(u32, f32, U32, F32, converters);
            insert_scalar_converter!(u32, f64, U32, F64, converters);

            insert_scalar_converter!(i64, u64, I64, U64, converters);
            insert_scalar_converter!(i64, f32, I64, F32, converters);
            insert_scalar_converter!(i64, f64, I64, F64, converters);

            insert_scalar_converter!(u64, f32, U64, F32, converters);
            insert_scalar_converter!(u64, f64, U64, F64, converters);

            // f64 -> f32 would overflow to infinity through `as`, so it gets a dedicated saturating converter
            converters.insert(
                (DimensionType::F32, DimensionType::F64),
                convert_scalar_saturating::<f32, f64> as FieldConversionFn,
            );
            converters.insert(
                (DimensionType::F64, DimensionType::F32),
                convert_f64_to_f32_saturating as FieldConversionFn,
            );

            converters
        };
    }

    if from_type == to_type {
        return convert_identity;
    }

    let key = (from_type, to_type);
    *FIELD_CONVERTERS
        .get(&key)
        .unwrap_or_else(|| panic!("Invalid conversion {} -> {}", from_type, to_type))
}

/// Unit conversion function (when from and to represent the same datatype)
fn convert_identity(from: &[u8], to: &mut [u8]) {
    to.copy_from_slice(from)
}

/// Converts `value` into `To`, saturating at the bounds of `To` if the value is not representable. `NaN` maps to zero
pub(crate) fn saturating_cast<From, To>(value: From) -> To
where
    From: ToPrimitive + PartialOrd + Zero + Copy,
    To: NumCast + Bounded + Zero,
{
    match <To as NumCast>::from(value) {
        Some(converted) => converted,
        // NaN is the only value that is not equal to itself
        None if value.partial_cmp(&value).is_none() => To::zero(),
        None if value < From::zero() => To::min_value(),
        None => To::max_value(),
    }
}

/// Generic conversion function from scalar values of type `From` to type `To`. `from` and `to` may be unaligned but
/// must hold exactly one value of `From` and `To`, respectively
fn convert_scalar_saturating<From, To>(from: &[u8], to: &mut [u8])
where
    From: Pod + ToPrimitive + PartialOrd + Zero,
    To: Pod + NumCast + Bounded + Zero,
{
    let from_value: From = bytemuck::pod_read_unaligned(from);
    let to_value: To = saturating_cast(from_value);
    to.copy_from_slice(bytemuck::bytes_of(&to_value));
}

fn convert_f64_to_f32_saturating(from: &[u8], to: &mut [u8]) {
    let from_value: f64 = bytemuck::pod_read_unaligned(from);
    let to_value = if from_value.is_finite() {
        from_value.clamp(f32::MIN as f64, f32::MAX as f64) as f32
    } else {
        // NaN and infinities have an exact f32 counterpart
        from_value as f32
    };
    to.copy_from_slice(bytemuck::bytes_of(&to_value));
}
