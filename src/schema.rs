//! Canonical output schema shapes.
//!
//! A [`ColumnSchema`] pairs the physical Arrow [`DataType`] of a converted
//! column with an optional [`LogicalType`] annotation. Logical types
//! preserve semantic meaning that the physical encoding alone would lose:
//! a `YEAR` column is physically an `Int32` but downstream consumers must
//! be able to tell it apart from a plain integer.

use arrow_schema::DataType;

/// Semantic annotation layered over a physical Arrow type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    /// A calendar year number (e.g. `2016`), physically an `Int32`.
    CalendarYear,
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalType::CalendarYear => write!(f, "CalendarYear"),
        }
    }
}

/// The output schema shape of a converted column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    /// Physical Arrow data type of converted values.
    pub data_type: DataType,

    /// Optional semantic annotation.
    pub logical: Option<LogicalType>,
}

impl ColumnSchema {
    /// Plain 32-bit signed integer.
    #[must_use]
    pub fn int32() -> Self {
        Self {
            data_type: DataType::Int32,
            logical: None,
        }
    }

    /// Plain 64-bit signed integer.
    #[must_use]
    pub fn int64() -> Self {
        Self {
            data_type: DataType::Int64,
            logical: None,
        }
    }

    /// 64-bit float.
    #[must_use]
    pub fn float64() -> Self {
        Self {
            data_type: DataType::Float64,
            logical: None,
        }
    }

    /// Boolean.
    #[must_use]
    pub fn boolean() -> Self {
        Self {
            data_type: DataType::Boolean,
            logical: None,
        }
    }

    /// UTF-8 character data.
    #[must_use]
    pub fn utf8() -> Self {
        Self {
            data_type: DataType::Utf8,
            logical: None,
        }
    }

    /// Binary data.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            data_type: DataType::Binary,
            logical: None,
        }
    }

    /// Calendar-year logical type: an `Int32` carrying a year number.
    #[must_use]
    pub fn year() -> Self {
        Self {
            data_type: DataType::Int32,
            logical: Some(LogicalType::CalendarYear),
        }
    }

    /// Returns `true` if this shape carries the calendar-year annotation.
    #[must_use]
    pub fn is_year(&self) -> bool {
        self.logical == Some(LogicalType::CalendarYear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shapes_have_no_logical_type() {
        assert_eq!(ColumnSchema::int32().data_type, DataType::Int32);
        assert_eq!(ColumnSchema::int64().data_type, DataType::Int64);
        assert_eq!(ColumnSchema::float64().data_type, DataType::Float64);
        assert!(ColumnSchema::int32().logical.is_none());
        assert!(!ColumnSchema::int32().is_year());
    }

    #[test]
    fn test_year_is_int32_with_annotation() {
        let year = ColumnSchema::year();
        assert_eq!(year.data_type, DataType::Int32);
        assert_eq!(year.logical, Some(LogicalType::CalendarYear));
        assert!(year.is_year());
    }

    #[test]
    fn test_year_differs_from_plain_int32() {
        assert_ne!(ColumnSchema::year(), ColumnSchema::int32());
    }

    #[test]
    fn test_logical_type_display() {
        assert_eq!(LogicalType::CalendarYear.to_string(), "CalendarYear");
    }
}
