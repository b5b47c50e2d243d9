//! Operation Outcomes
//!
//! What a store operation reports back to the console.

use std::fmt;

use crate::db::DbError;

/// The four store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Delete,
    Update,
    List,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::List => "list",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Self::Create => "Failed to add user.",
            Self::Delete => "Failed to delete user.",
            Self::Update => "Failed to update user.",
            Self::List => "Failed to get list of users.",
        }
    }
}

/// Result of a single store operation.
///
/// `Deleted` and `Updated` succeed whenever the statement ran, even when
/// `rows` is zero and no record matched the name.
#[derive(Debug)]
pub enum Outcome {
    Created,
    Deleted { rows: usize },
    Updated { rows: usize },
    Listed { count: usize },
    Failed { op: Operation, error: DbError },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Rows touched by a delete or update
    pub fn rows_affected(&self) -> Option<usize> {
        match self {
            Self::Deleted { rows } | Self::Updated { rows } => Some(*rows),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("User added. Redirecting to main menu..."),
            Self::Deleted { .. } => f.write_str("User deleted. Redirecting to main menu..."),
            Self::Updated { .. } => f.write_str("User updated. Redirecting to main menu..."),
            Self::Listed { count } => write!(f, "{} user(s) listed.", count),
            Self::Failed {
                op: Operation::Create,
                error: DbError::DuplicateKey(name),
            } => write!(f, "Failed to add user: a user named '{}' already exists.", name),
            Self::Failed { op, .. } => f.write_str(op.failure_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rows_is_still_success() {
        let outcome = Outcome::Deleted { rows: 0 };
        assert!(outcome.is_success());
        assert_eq!(outcome.rows_affected(), Some(0));
        assert_eq!(outcome.to_string(), "User deleted. Redirecting to main menu...");
    }

    #[test]
    fn test_duplicate_message_names_the_user() {
        let outcome = Outcome::Failed {
            op: Operation::Create,
            error: DbError::DuplicateKey("Alice".to_string()),
        };
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "Failed to add user: a user named 'Alice' already exists."
        );
    }

    #[test]
    fn test_generic_failure_message() {
        let outcome = Outcome::Failed {
            op: Operation::Update,
            error: DbError::Sqlite(rusqlite::Error::InvalidQuery),
        };
        assert_eq!(outcome.to_string(), "Failed to update user.");
        assert!(!outcome.is_success());
    }
}
