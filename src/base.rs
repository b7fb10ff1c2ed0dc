//! Baseline generic converter provider.
//!
//! [`BaseValueConverters`] implements [`ConverterProvider`] for the common
//! non-specialized MySQL types: integer and float families, character and
//! binary data, and booleans. It also owns the unknown-data policy shared
//! by every conversion path (see [`UnknownDataMode`]).
//!
//! Engines embedding a richer conversion framework supply their own
//! provider; this one is enough to run a capture stream end to end.

use arrow_schema::DataType;
use tracing::warn;

use crate::column::{FieldDescriptor, MySqlColumn};
use crate::config::{ConverterConfig, UnknownDataMode};
use crate::provider::{ConverterProvider, ValueConverter};
use crate::schema::ColumnSchema;
use crate::value::{ConvertedValue, RawValue};

/// Baseline [`ConverterProvider`] covering the common MySQL types.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseValueConverters {
    mode: UnknownDataMode,
}

impl BaseValueConverters {
    /// Creates a provider with the given unknown-data policy.
    #[must_use]
    pub fn new(mode: UnknownDataMode) -> Self {
        Self { mode }
    }

    /// Creates a provider from a [`ConverterConfig`].
    #[must_use]
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.unknown_data_mode)
    }

    /// The configured unknown-data policy.
    #[must_use]
    pub fn mode(&self) -> UnknownDataMode {
        self.mode
    }

    fn convert_bigint(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value.as_i64_lossy() {
            Some(v) => Some(ConvertedValue::Int64(v)),
            None => self.handle_unknown(column, field, value),
        }
    }

    fn convert_boolean(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value.as_i64_lossy() {
            Some(v) => Some(ConvertedValue::Boolean(v != 0)),
            None => self.handle_unknown(column, field, value),
        }
    }

    fn convert_string(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value {
            RawValue::Text(s) => Some(ConvertedValue::Text(s.clone())),
            RawValue::Bytes(b) => Some(ConvertedValue::Text(
                String::from_utf8_lossy(b).into_owned(),
            )),
            other => self.handle_unknown(column, field, other),
        }
    }

    fn convert_binary(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value {
            RawValue::Bytes(b) => Some(ConvertedValue::Bytes(b.clone())),
            RawValue::Text(s) => Some(ConvertedValue::Bytes(s.clone().into_bytes())),
            other => self.handle_unknown(column, field, other),
        }
    }
}

/// Strips type parameters and modifiers from an uppercased declared type
/// name: `"INT(11) UNSIGNED"` → `"INT"`, `"DECIMAL(10,2)"` → `"DECIMAL"`.
fn base_type_name(upper: &str) -> &str {
    let head = upper.split('(').next().unwrap_or(upper);
    head.split_whitespace().next().unwrap_or(head)
}

impl ConverterProvider for BaseValueConverters {
    fn resolve_schema(&self, column: &MySqlColumn) -> Option<ColumnSchema> {
        let upper = column.type_name()?.to_uppercase();
        match base_type_name(&upper) {
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" => Some(ColumnSchema::int32()),
            "BIGINT" | "BIT" => Some(ColumnSchema::int64()),
            "FLOAT" | "DOUBLE" | "REAL" | "DECIMAL" | "NUMERIC" => Some(ColumnSchema::float64()),
            "BOOLEAN" | "BOOL" => Some(ColumnSchema::boolean()),
            "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => {
                Some(ColumnSchema::utf8())
            }
            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                Some(ColumnSchema::binary())
            }
            _ => None,
        }
    }

    fn build_converter(&self, column: &MySqlColumn, field: &FieldDescriptor) -> ValueConverter {
        let schema = self.resolve_schema(column);
        let this = *self;
        let column = column.clone();
        let field = field.clone();

        Box::new(move |value| {
            if matches!(value, RawValue::Null) {
                return None;
            }
            let Some(schema) = &schema else {
                return this.handle_unknown(&column, &field, value);
            };
            match schema.data_type {
                DataType::Int32 => this.convert_integer(&column, &field, value),
                DataType::Int64 => this.convert_bigint(&column, &field, value),
                DataType::Float64 => this.convert_double(&column, &field, value),
                DataType::Boolean => this.convert_boolean(&column, &field, value),
                DataType::Utf8 => this.convert_string(&column, &field, value),
                DataType::Binary => this.convert_binary(&column, &field, value),
                _ => this.handle_unknown(&column, &field, value),
            }
        })
    }

    fn convert_integer(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value {
            RawValue::Null => None,
            other => match other.as_i32_lossy() {
                Some(v) => Some(ConvertedValue::Int32(v)),
                None => self.handle_unknown(column, field, other),
            },
        }
    }

    fn convert_double(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match value {
            RawValue::Null => None,
            other => match other.as_f64_lossy() {
                Some(v) => Some(ConvertedValue::Float64(v)),
                None => self.handle_unknown(column, field, other),
            },
        }
    }

    fn handle_unknown(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue> {
        match self.mode {
            UnknownDataMode::Warn => {
                warn!(
                    column = column.name(),
                    field = field.name(),
                    shape = value.kind(),
                    "unexpected value shape; emitting null"
                );
                None
            }
            UnknownDataMode::Skip => None,
        }
    }
}
