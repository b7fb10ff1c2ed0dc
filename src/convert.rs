//! The MySQL value conversion engine.
//!
//! [`MySqlValueConverters`] maps a column's declared type to the canonical
//! output schema shape and to the per-row converter function for that
//! column. Only the types the binlog client handles in MySQL-specific ways
//! are specialized here — `YEAR`, `ENUM`, and `SET` — and everything else
//! is delegated to the injected [`ConverterProvider`].
//!
//! Schema resolution happens once per column at schema-build time and
//! converter construction once at converter-build time; the returned
//! function is then invoked once per row value. Both operations classify
//! the declared type through the same [`TypeClass::classify`] call, so
//! they can never disagree about which branch a type takes.

use std::sync::Arc;

use chrono::{Datelike, FixedOffset, Offset, Utc};

use crate::classify::TypeClass;
use crate::column::{FieldDescriptor, MySqlColumn};
use crate::config::ConverterConfig;
use crate::provider::{ConverterProvider, ValueConverter};
use crate::schema::ColumnSchema;
use crate::value::{ConvertedValue, RawValue};

/// Type-directed conversion of MySQL binlog column values.
///
/// Immutable by construction: the delegated provider and the default time
/// offset are set once and never change, so the engine and every converter
/// it builds are safe to use from multiple threads without coordination.
#[derive(Clone)]
pub struct MySqlValueConverters {
    fallback: Arc<dyn ConverterProvider>,
    default_offset: FixedOffset,
}

impl MySqlValueConverters {
    /// Creates an engine that uses UTC as the default time offset.
    ///
    /// UTC is the right default for binlog capture: MySQL stores and
    /// replicates `TIMESTAMP` values in UTC, so values arriving without
    /// timezone information are presumed to be UTC.
    #[must_use]
    pub fn new(fallback: Arc<dyn ConverterProvider>) -> Self {
        Self::with_offset(fallback, Utc.fix())
    }

    /// Creates an engine with an explicit default time offset.
    ///
    /// The offset applies only when the provider must convert values
    /// without timezone information to values that require one; it should
    /// rarely be needed when column types are declared accurately.
    #[must_use]
    pub fn with_offset(fallback: Arc<dyn ConverterProvider>, default_offset: FixedOffset) -> Self {
        Self {
            fallback,
            default_offset,
        }
    }

    /// Creates an engine from a [`ConverterConfig`].
    #[must_use]
    pub fn from_config(config: &ConverterConfig, fallback: Arc<dyn ConverterProvider>) -> Self {
        Self::with_offset(fallback, config.default_time_offset)
    }

    /// The default time offset supplied at construction.
    #[must_use]
    pub fn default_offset(&self) -> FixedOffset {
        self.default_offset
    }

    /// Resolves the canonical output schema shape for a column.
    ///
    /// `YEAR` columns get the calendar-year logical shape, `ENUM` columns
    /// a 32-bit integer (the ordinal), and `SET` columns a 64-bit integer
    /// (the member bitmask). Everything else is resolved by the provider,
    /// whose result is returned unmodified.
    #[must_use]
    pub fn resolve_schema(&self, column: &MySqlColumn) -> Option<ColumnSchema> {
        match TypeClass::classify(column.type_name()) {
            TypeClass::Year => Some(ColumnSchema::year()),
            TypeClass::Enum => Some(ColumnSchema::int32()),
            TypeClass::Set => Some(ColumnSchema::int64()),
            TypeClass::Other => self.fallback.resolve_schema(column),
        }
    }

    /// Builds the per-row converter for a column.
    ///
    /// The returned function is total: for any input it produces a
    /// converted value or `None`, routing unrecognized shapes through the
    /// provider's unknown-data handler instead of panicking.
    #[must_use]
    pub fn build_converter(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
    ) -> ValueConverter {
        match TypeClass::classify(column.type_name()) {
            TypeClass::Year => {
                let this = self.clone();
                let column = column.clone();
                let field = field.clone();
                Box::new(move |value| this.convert_year(&column, &field, value))
            }
            TypeClass::Enum => {
                // Enum values are already ordinal indexes at this stage.
                let fallback = Arc::clone(&self.fallback);
                let column = column.clone();
                let field = field.clone();
                Box::new(move |value| fallback.convert_integer(&column, &field, value))
            }
            TypeClass::Set => {
                // Kept as a double conversion for output compatibility,
                // although the member bitmask is integral. See DESIGN.md.
                let fallback = Arc::clone(&self.fallback);
                let column = column.clone();
                let field = field.clone();
                Box::new(move |value| fallback.convert_double(&column, &field, value))
            }
            TypeClass::Other => self.fallback.build_converter(column, field),
        }
    }

    /// Converts a `YEAR` column value.
    ///
    /// The binlog client normally supplies a calendar-year object, but
    /// other code paths have been observed to supply a calendar date or a
    /// plain integer for the same logical value, so the shapes are tried
    /// in priority order:
    ///
    /// 1. `Null` → `None`
    /// 2. calendar-year object → its year number
    /// 3. calendar date → the date's year component
    /// 4. any numeric value → narrowed to `i32`
    /// 5. anything else → the provider's unknown-data handler
    #[must_use]
    pub fn convert_year(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value {
            RawValue::Null => None,
            RawValue::Year(year) => Some(ConvertedValue::Int32(*year)),
            RawValue::Date(date) => Some(ConvertedValue::Int32(date.year())),
            other => match other.as_i32_lossy() {
                Some(v) => Some(ConvertedValue::Int32(v)),
                None => self.fallback.handle_unknown(column, field, other),
            },
        }
    }
}

impl std::fmt::Debug for MySqlValueConverters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlValueConverters")
            .field("default_offset", &self.default_offset)
            .finish_non_exhaustive()
    }
}
