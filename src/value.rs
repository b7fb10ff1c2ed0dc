//! Raw and converted value models.
//!
//! [`RawValue`] is the closed set of native shapes the binlog
//! deserialization layer hands to converters. The same logical column value
//! can arrive as more than one shape depending on the upstream code path
//! (e.g. a `YEAR` column may arrive as a calendar-year object, a calendar
//! date, or a plain integer), so converters match over the variants in a
//! defined priority order rather than assuming one driver behavior.
//!
//! [`ConvertedValue`] is the canonical output model. A SQL `NULL` is
//! represented as `Option::<ConvertedValue>::None`, never as a variant.

use chrono::NaiveDate;

/// A raw column value as produced by the binlog deserialization layer.
///
/// Values are read-only inputs; converters never mutate them.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// SQL `NULL`.
    Null,

    /// 8-bit signed integer (`TINYINT`).
    Int8(i8),

    /// 16-bit signed integer (`SMALLINT`, and `YEAR` on some code paths).
    Int16(i16),

    /// 32-bit signed integer (`INT`, `MEDIUMINT`, `ENUM` ordinals).
    Int32(i32),

    /// 64-bit signed integer (`BIGINT`, `SET` bitmasks).
    Int64(i64),

    /// 64-bit unsigned integer (`BIGINT UNSIGNED`).
    UInt64(u64),

    /// 32-bit float (`FLOAT`).
    Float32(f32),

    /// 64-bit float (`DOUBLE`).
    Float64(f64),

    /// A calendar-year object carrying the year number directly.
    Year(i32),

    /// A calendar date with no time or zone component.
    Date(NaiveDate),

    /// Character data (`CHAR`, `VARCHAR`, `TEXT`).
    Text(String),

    /// Binary data (`BINARY`, `VARBINARY`, `BLOB`).
    Bytes(Vec<u8>),
}

impl RawValue {
    /// Narrows a numeric value to a 32-bit signed integer.
    ///
    /// Integers keep their low 32 bits; floats truncate toward zero and
    /// saturate at the `i32` bounds. Returns `None` for non-numeric shapes
    /// (including [`RawValue::Year`] and [`RawValue::Date`], which carry
    /// calendar semantics and are matched explicitly by their converters).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn as_i32_lossy(&self) -> Option<i32> {
        match self {
            RawValue::Int8(v) => Some(i32::from(*v)),
            RawValue::Int16(v) => Some(i32::from(*v)),
            RawValue::Int32(v) => Some(*v),
            RawValue::Int64(v) => Some(*v as i32),
            RawValue::UInt64(v) => Some(*v as i32),
            RawValue::Float32(v) => Some(*v as i32),
            RawValue::Float64(v) => Some(*v as i32),
            _ => None,
        }
    }

    /// Widens a numeric value to a 64-bit signed integer.
    ///
    /// `u64` values keep their bit pattern. Returns `None` for non-numeric
    /// shapes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn as_i64_lossy(&self) -> Option<i64> {
        match self {
            RawValue::Int8(v) => Some(i64::from(*v)),
            RawValue::Int16(v) => Some(i64::from(*v)),
            RawValue::Int32(v) => Some(i64::from(*v)),
            RawValue::Int64(v) => Some(*v),
            RawValue::UInt64(v) => Some(*v as i64),
            RawValue::Float32(v) => Some(*v as i64),
            RawValue::Float64(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Converts a numeric value to a 64-bit float.
    ///
    /// Returns `None` for non-numeric shapes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64_lossy(&self) -> Option<f64> {
        match self {
            RawValue::Int8(v) => Some(f64::from(*v)),
            RawValue::Int16(v) => Some(f64::from(*v)),
            RawValue::Int32(v) => Some(f64::from(*v)),
            RawValue::Int64(v) => Some(*v as f64),
            RawValue::UInt64(v) => Some(*v as f64),
            RawValue::Float32(v) => Some(f64::from(*v)),
            RawValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Short name of the value's shape, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Int8(_) => "int8",
            RawValue::Int16(_) => "int16",
            RawValue::Int32(_) => "int32",
            RawValue::Int64(_) => "int64",
            RawValue::UInt64(_) => "uint64",
            RawValue::Float32(_) => "float32",
            RawValue::Float64(_) => "float64",
            RawValue::Year(_) => "year",
            RawValue::Date(_) => "date",
            RawValue::Text(_) => "text",
            RawValue::Bytes(_) => "bytes",
        }
    }
}

/// A canonical converted value.
///
/// Produced fresh on every converter invocation; never cached or shared.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedValue {
    /// Boolean.
    Boolean(bool),

    /// 32-bit signed integer.
    Int32(i32),

    /// 64-bit signed integer.
    Int64(i64),

    /// 64-bit float.
    Float64(f64),

    /// Character data.
    Text(String),

    /// Binary data.
    Bytes(Vec<u8>),
}

impl ConvertedValue {
    /// Returns the inner `i32` for [`ConvertedValue::Int32`] values.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ConvertedValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner `i64` for [`ConvertedValue::Int64`] values.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConvertedValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner `f64` if this is a [`ConvertedValue::Float64`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConvertedValue::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_small_ints() {
        assert_eq!(RawValue::Int8(7).as_i32_lossy(), Some(7));
        assert_eq!(RawValue::Int16(45).as_i32_lossy(), Some(45));
        assert_eq!(RawValue::Int32(2016).as_i32_lossy(), Some(2016));
    }

    #[test]
    fn test_narrow_i64_keeps_low_bits() {
        let wide = (1_i64 << 40) | 99;
        assert_eq!(RawValue::Int64(wide).as_i32_lossy(), Some(99));
        assert_eq!(RawValue::Int64(-1).as_i32_lossy(), Some(-1));
    }

    #[test]
    fn test_narrow_floats_truncate_and_saturate() {
        assert_eq!(RawValue::Float64(45.9).as_i32_lossy(), Some(45));
        assert_eq!(RawValue::Float64(-45.9).as_i32_lossy(), Some(-45));
        assert_eq!(RawValue::Float64(1e12).as_i32_lossy(), Some(i32::MAX));
        assert_eq!(RawValue::Float64(-1e12).as_i32_lossy(), Some(i32::MIN));
        assert_eq!(RawValue::Float64(f64::NAN).as_i32_lossy(), Some(0));
    }

    #[test]
    fn test_non_numeric_shapes_do_not_narrow() {
        assert_eq!(RawValue::Null.as_i32_lossy(), None);
        assert_eq!(RawValue::Text("2016".into()).as_i32_lossy(), None);
        assert_eq!(RawValue::Year(2016).as_i32_lossy(), None);
        let date = NaiveDate::from_ymd_opt(1999, 7, 15).unwrap();
        assert_eq!(RawValue::Date(date).as_i32_lossy(), None);
    }

    #[test]
    fn test_widen_to_i64() {
        assert_eq!(RawValue::Int32(-5).as_i64_lossy(), Some(-5));
        assert_eq!(RawValue::UInt64(u64::MAX).as_i64_lossy(), Some(-1));
        assert_eq!(RawValue::Float32(3.7).as_i64_lossy(), Some(3));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(RawValue::Int64(4).as_f64_lossy(), Some(4.0));
        assert_eq!(RawValue::Float64(2.5).as_f64_lossy(), Some(2.5));
        assert_eq!(RawValue::Bytes(vec![1]).as_f64_lossy(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RawValue::Null.kind(), "null");
        assert_eq!(RawValue::Year(2016).kind(), "year");
        assert_eq!(RawValue::Text(String::new()).kind(), "text");
    }

    #[test]
    fn test_converted_value_accessors() {
        assert_eq!(ConvertedValue::Int32(2).as_i32(), Some(2));
        assert_eq!(ConvertedValue::Int32(2).as_i64(), None);
        assert_eq!(ConvertedValue::Int64(9).as_i64(), Some(9));
        assert_eq!(ConvertedValue::Float64(1.5).as_f64(), Some(1.5));
    }
}
