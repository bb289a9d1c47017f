//! Error path construction for nested fields.
//!
//! Paths are plain strings such as `user.age`, `ids[1]` or `users[0].email`.
//! They are built incrementally with [`join_path`]: an array checker leaves an
//! open bracket at the end of its path (`ids[`) so that the next segment, the
//! element index, closes it.

use std::fmt::{self, Display};

/// Appends `segment` to `existing` following the path rules.
///
/// - empty `existing`: the segment alone
/// - `existing` ending in `[`: the segment closes the bracket
/// - otherwise: the segment is joined with `.`
///
/// # Example
///
/// ```rust
/// use paramguard::path::join_path;
///
/// assert_eq!(join_path("", "user"), "user");
/// assert_eq!(join_path("user", "age"), "user.age");
/// assert_eq!(join_path("ids[", "1"), "ids[1]");
/// ```
pub fn join_path(existing: &str, segment: &str) -> String {
    if existing.is_empty() {
        segment.to_string()
    } else if existing.ends_with('[') {
        format!("{}{}]", existing, segment)
    } else {
        format!("{}.{}", existing, segment)
    }
}

/// The path of the structure currently being validated.
///
/// `ErrorPath` is the root (empty) at the top level of a data bag. Checkers
/// derive child paths from it without modifying the original.
///
/// # Example
///
/// ```rust
/// use paramguard::ErrorPath;
///
/// let path = ErrorPath::root()
///     .push("users")
///     .open_index()
///     .push("0")
///     .push("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorPath(String);

impl ErrorPath {
    /// Creates the empty path of a top-level data bag.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: &str) -> Self {
        Self(join_path(&self.0, segment))
    }

    /// Returns a new path with an open bracket appended, ready for an index.
    pub fn open_index(&self) -> Self {
        Self(format!("{}[", self.0))
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the path, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}
