/*!
# Errors

Every operation that addresses a vertex by its key returns a [`GraphResult`].
The only failure mode of the graph itself is a missing key; all other "failures"
(duplicate insertions, duplicate edges, erasing an absent key, unreachable targets)
are ordinary results.
*/

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by key-addressed graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K>
where
    K: Debug,
{
    /// The requested key is not a node of the graph
    #[error("key {0:?} not found in graph")]
    KeyNotFound(K),
}

impl<K> GraphError<K>
where
    K: Debug,
{
    /// Returns the key that caused the error
    pub fn key(&self) -> &K {
        match self {
            GraphError::KeyNotFound(key) => key,
        }
    }
}

/// Shorthand for results of key-addressed graph operations
pub type GraphResult<T, K> = Result<T, GraphError<K>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_key() {
        let err = GraphError::KeyNotFound(42u32);
        assert_eq!(err.to_string(), "key 42 not found in graph");
        assert_eq!(*err.key(), 42);

        let err = GraphError::KeyNotFound("a".to_string());
        assert_eq!(err.to_string(), "key \"a\" not found in graph");
    }
}
