//! Column and output-field descriptors.
//!
//! [`MySqlColumn`] is the read-only metadata a schema supplier hands the
//! conversion engine: the column's name, its declared type name exactly as
//! written in DDL (parameters included, e.g. `"ENUM('a','b')"`), and
//! nullability. [`FieldDescriptor`] identifies the output-side field a
//! converter writes into; converters carry it for error reporting.

use crate::schema::ColumnSchema;

/// Declared metadata for one source column.
///
/// Descriptors are immutable once handed to the engine; converters close
/// over their own copies.
#[derive(Debug, Clone)]
pub struct MySqlColumn {
    name: String,
    type_name: Option<String>,
    nullable: bool,
}

impl MySqlColumn {
    /// Creates a nullable column with no declared type name.
    ///
    /// The type name is absent rather than empty when metadata is
    /// incomplete; classification treats an absent name as unspecialized.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            nullable: true,
        }
    }

    /// Sets the declared type name (e.g. `"YEAR"`, `"ENUM('a','b')"`).
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name, if known.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Whether the column admits `NULL`.
    #[must_use]
    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

/// Identity of the output field a converter produces values for.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    schema: ColumnSchema,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: ColumnSchema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// Output field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output schema shape.
    #[must_use]
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let col = MySqlColumn::new("release_year")
            .with_type_name("YEAR(4)")
            .with_nullable(false);

        assert_eq!(col.name(), "release_year");
        assert_eq!(col.type_name(), Some("YEAR(4)"));
        assert!(!col.nullable());
    }

    #[test]
    fn test_column_defaults() {
        let col = MySqlColumn::new("c");
        assert_eq!(col.type_name(), None);
        assert!(col.nullable());
    }

    #[test]
    fn test_field_descriptor() {
        let field = FieldDescriptor::new("release_year", ColumnSchema::year());
        assert_eq!(field.name(), "release_year");
        assert!(field.schema().is_year());
    }
}
