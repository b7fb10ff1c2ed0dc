//! # binlog-convert
//!
//! Type-directed conversion of MySQL binlog column values into canonical
//! typed values for CDC pipelines.
//!
//! A replication stream exposes column values in whatever native shape the
//! binlog client produced, and the same logical value can arrive in more
//! than one shape depending on the code path. This crate normalizes those
//! values against each column's declared type: it classifies the type name
//! once, resolves the canonical output schema shape, and builds a pure
//! per-row converter function, specializing the types MySQL handles in
//! replication-specific ways (`YEAR`, `ENUM`, `SET`) and delegating
//! everything else to a pluggable generic provider.
//!
//! # Architecture
//!
//! ```text
//! declared type name
//!      │
//!      ▼
//! ┌─────────────────────────────────────────────┐
//! │          MySqlValueConverters               │
//! │  ┌────────────┐   ┌─────────────────────┐   │
//! │  │ TypeClass  │──▶│ resolve_schema      │──▶ ColumnSchema
//! │  │ (classify  │   ├─────────────────────┤   │
//! │  │  once)     │──▶│ build_converter     │──▶ ValueConverter
//! │  └────────────┘   └─────────────────────┘   │
//! │            │ OTHER                          │
//! │            ▼                                │
//! │   dyn ConverterProvider (generic fallback)  │
//! └─────────────────────────────────────────────┘
//!      │
//!      ▼ per row
//!  RawValue ──▶ Option<ConvertedValue>
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use binlog_convert::{
//!     BaseValueConverters, ColumnSchema, ConvertedValue, FieldDescriptor, MySqlColumn,
//!     MySqlValueConverters, RawValue,
//! };
//!
//! let engine = MySqlValueConverters::new(Arc::new(BaseValueConverters::default()));
//!
//! let column = MySqlColumn::new("release_year").with_type_name("YEAR(4)");
//! let field = FieldDescriptor::new("release_year", ColumnSchema::year());
//!
//! let convert = engine.build_converter(&column, &field);
//! assert_eq!(convert(&RawValue::Year(2016)), Some(ConvertedValue::Int32(2016)));
//! assert_eq!(convert(&RawValue::Null), None);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod base;
mod classify;
mod column;
mod config;
mod convert;
mod provider;
mod schema;
mod value;

pub use base::BaseValueConverters;
pub use classify::TypeClass;
pub use column::{FieldDescriptor, MySqlColumn};
pub use config::{
    ConfigError, ConverterConfig, UnknownDataMode, TIME_OFFSET_KEY, UNKNOWN_DATA_MODE_KEY,
};
pub use convert::MySqlValueConverters;
pub use provider::{ConverterProvider, ValueConverter};
pub use schema::{ColumnSchema, LogicalType};
pub use value::{ConvertedValue, RawValue};
