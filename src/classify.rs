//! Declared-type classification.
//!
//! [`TypeClass`] is the single source of truth for deciding whether a
//! column gets specialized handling. Schema resolution and converter
//! dispatch both switch on the same classification, so the two can never
//! disagree about a type name.

/// Classification of a column's declared type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// `YEAR` / `YEAR(n)` columns.
    Year,

    /// `ENUM(...)` columns; values arrive as ordinal indexes.
    Enum,

    /// `SET(...)` columns; values arrive as bitmask-style numbers.
    Set,

    /// Every other type; handled by the generic converter provider.
    Other,
}

impl TypeClass {
    /// Classifies a declared type name.
    ///
    /// Matching is case-insensitive and tolerates parameterized
    /// declarations: a name matches a keyword `K` when it equals `K` or
    /// starts with `K(`. A trailing suffix other than `(` does not match,
    /// so `"YEARLY"` is [`TypeClass::Other`]. An absent type name is
    /// always [`TypeClass::Other`].
    #[must_use]
    pub fn classify(type_name: Option<&str>) -> Self {
        let Some(name) = type_name else {
            return Self::Other;
        };
        let upper = name.to_uppercase();
        if Self::matches(&upper, "YEAR") {
            Self::Year
        } else if Self::matches(&upper, "ENUM") {
            Self::Enum
        } else if Self::matches(&upper, "SET") {
            Self::Set
        } else {
            Self::Other
        }
    }

    /// Exact match, or keyword followed immediately by `(`.
    fn matches(upper_type_name: &str, keyword: &str) -> bool {
        match upper_type_name.strip_prefix(keyword) {
            Some("") => true,
            Some(rest) => rest.starts_with('('),
            None => false,
        }
    }
}

impl std::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeClass::Year => write!(f, "YEAR"),
            TypeClass::Enum => write!(f, "ENUM"),
            TypeClass::Set => write!(f, "SET"),
            TypeClass::Other => write!(f, "OTHER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(TypeClass::classify(Some("year")), TypeClass::Year);
        assert_eq!(TypeClass::classify(Some("YEAR")), TypeClass::Year);
        assert_eq!(TypeClass::classify(Some("Year")), TypeClass::Year);
        assert_eq!(TypeClass::classify(Some("enum")), TypeClass::Enum);
        assert_eq!(TypeClass::classify(Some("set")), TypeClass::Set);
    }

    #[test]
    fn test_classify_parameterized_declarations() {
        assert_eq!(TypeClass::classify(Some("YEAR(4)")), TypeClass::Year);
        assert_eq!(TypeClass::classify(Some("ENUM('a','b')")), TypeClass::Enum);
        assert_eq!(TypeClass::classify(Some("enum('a')")), TypeClass::Enum);
        assert_eq!(TypeClass::classify(Some("SET('x','y')")), TypeClass::Set);
    }

    #[test]
    fn test_classify_requires_paren_after_keyword() {
        assert_eq!(TypeClass::classify(Some("YEARLY")), TypeClass::Other);
        assert_eq!(TypeClass::classify(Some("ENUMERATION")), TypeClass::Other);
        assert_eq!(TypeClass::classify(Some("SETTING")), TypeClass::Other);
        assert_eq!(TypeClass::classify(Some("YEAR ")), TypeClass::Other);
    }

    #[test]
    fn test_classify_absent_name_is_other() {
        assert_eq!(TypeClass::classify(None), TypeClass::Other);
        assert_eq!(TypeClass::classify(Some("")), TypeClass::Other);
        assert_eq!(TypeClass::classify(Some("VARCHAR(255)")), TypeClass::Other);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for name in ["year", "YEAR", "YEAR(4)", "Enum('a')", "SET('a')", "INT"] {
            assert_eq!(
                TypeClass::classify(Some(name)),
                TypeClass::classify(Some(&name.to_uppercase()))
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeClass::Year.to_string(), "YEAR");
        assert_eq!(TypeClass::Other.to_string(), "OTHER");
    }
}
