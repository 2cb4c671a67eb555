//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred semantic kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Date values, or text in the fixed day/month/year pattern.
    Datetime,
    /// Integer or floating-point values.
    Numeric,
    /// Text values that are not dates.
    Text,
    /// Values drawn from a fixed allowed set (schema role only).
    Categorical,
    /// Row identifiers (schema role only).
    Identifier,
}

impl Kind {
    /// Get a human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Datetime => "Datetime",
            Kind::Numeric => "Numeric",
            Kind::Text => "Text",
            Kind::Categorical => "Categorical",
            Kind::Identifier => "Identifier",
        }
    }

    /// Kind implied by a schema role.
    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Identifier => Kind::Identifier,
            Role::Date => Kind::Datetime,
            Role::Numeric => Kind::Numeric,
            Role::Categorical => Kind::Categorical,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logical role a column plays in a fixed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unique row identifier (e.g., user_id).
    Identifier,
    /// Date column in the fixed day/month/year format.
    Date,
    /// Bounded numeric column (e.g., age).
    Numeric,
    /// Categorical column with an allowed value set.
    Categorical,
}
