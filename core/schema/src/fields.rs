//! Field metadata shared by the request and response records.

use std::fmt::{self, Display, Formatter};

/// The value type a field accepts after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Float,
    Integer,
    Boolean,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Float => write!(f, "float"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Provenance of a feature, encoded in its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureGroup {
    /// `num__`: numeric passthrough.
    Numeric,
    /// `cat__`: one-hot-encoded categorical.
    Categorical,
    /// `time__`: derived from the transaction timestamp.
    Time,
    /// `agg__`: aggregated over the customer's transactions.
    Aggregate,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 4] = [
        FeatureGroup::Numeric,
        FeatureGroup::Categorical,
        FeatureGroup::Time,
        FeatureGroup::Aggregate,
    ];

    /// Name prefix including the double-underscore separator.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            FeatureGroup::Numeric => "num__",
            FeatureGroup::Categorical => "cat__",
            FeatureGroup::Time => "time__",
            FeatureGroup::Aggregate => "agg__",
        }
    }

    /// Resolves the group of a wire field name, or `None` for names without
    /// a recognised prefix.
    #[must_use]
    pub fn of(name: &str) -> Option<FeatureGroup> {
        Self::ALL
            .into_iter()
            .find(|group| name.starts_with(group.prefix()))
    }
}

impl Display for FeatureGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches('_'))
    }
}

/// A declared field: its wire name and expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub fn group(&self) -> Option<FeatureGroup> {
        FeatureGroup::of(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_resolves_from_prefix() {
        assert_eq!(FeatureGroup::of("num__Amount"), Some(FeatureGroup::Numeric));
        assert_eq!(
            FeatureGroup::of("cat__ChannelId_ChannelId_2"),
            Some(FeatureGroup::Categorical)
        );
        assert_eq!(
            FeatureGroup::of("time__TransactionHour"),
            Some(FeatureGroup::Time)
        );
        assert_eq!(
            FeatureGroup::of("agg__TransactionCount"),
            Some(FeatureGroup::Aggregate)
        );
    }

    #[test]
    fn group_requires_full_separator() {
        assert_eq!(FeatureGroup::of("num_Amount"), None);
        assert_eq!(FeatureGroup::of("risk_probability"), None);
    }

    #[test]
    fn group_display_drops_separator() {
        assert_eq!(FeatureGroup::Numeric.to_string(), "num");
        assert_eq!(FeatureGroup::Aggregate.to_string(), "agg");
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(FieldKind::Float.to_string(), "float");
        assert_eq!(FieldKind::Integer.to_string(), "integer");
        assert_eq!(FieldKind::Boolean.to_string(), "boolean");
    }
}
