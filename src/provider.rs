//! The generic converter provider contract.
//!
//! The MySQL engine specializes only a handful of types; everything else
//! is delegated to a [`ConverterProvider`] injected at construction. The
//! provider also supplies the shared numeric-conversion primitives and the
//! unknown-data handler the specialized paths fall back to. Holding the
//! provider as a trait object keeps the engine a plain composition of two
//! immutable parts rather than an extension point in a type hierarchy.

use crate::column::{FieldDescriptor, MySqlColumn};
use crate::schema::ColumnSchema;
use crate::value::{ConvertedValue, RawValue};

/// A per-row conversion function for one column.
///
/// Built once per column at schema-build time, then invoked once per row
/// value for the lifetime of that column's capture. Total over its input:
/// it returns a converted value or `None`, and never panics.
pub type ValueConverter = Box<dyn Fn(&RawValue) -> Option<ConvertedValue> + Send + Sync>;

/// Generic value conversion capability the engine delegates to.
///
/// Implementations must be stateless with respect to individual calls:
/// the same inputs always produce the same outputs.
pub trait ConverterProvider: Send + Sync {
    /// Resolves the output schema shape for a non-specialized column.
    ///
    /// Returns `None` when the provider has no mapping for the column's
    /// declared type; schema registration decides how to treat that.
    fn resolve_schema(&self, column: &MySqlColumn) -> Option<ColumnSchema>;

    /// Builds the per-row converter for a non-specialized column.
    fn build_converter(&self, column: &MySqlColumn, field: &FieldDescriptor) -> ValueConverter;

    /// Converts a value to a 32-bit signed integer.
    ///
    /// `Null` input yields `None`; non-numeric shapes are routed to
    /// [`handle_unknown`](ConverterProvider::handle_unknown).
    fn convert_integer(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue>;

    /// Converts a value to a 64-bit float.
    ///
    /// `Null` input yields `None`; non-numeric shapes are routed to
    /// [`handle_unknown`](ConverterProvider::handle_unknown).
    fn convert_double(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue>;

    /// Handles a value whose shape matches none of the expected
    /// representations for its column.
    ///
    /// The provider owns the policy (log-and-null versus silent null);
    /// callers return its result unmodified instead of dropping the value
    /// or panicking.
    fn handle_unknown(
        &self,
        column: &MySqlColumn,
        field: &FieldDescriptor,
        value: &RawValue,
    ) -> Option<ConvertedValue>;
}
