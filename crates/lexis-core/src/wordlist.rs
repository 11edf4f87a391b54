// Word-list contract shared by the dictionary backends.

/// A read-only set of words supporting exact and prefix membership.
///
/// Implemented by the DAWG engine and by the pointer-tree trie backend;
/// callers that only need membership queries should take this trait rather
/// than a concrete backend.
///
/// Queries never fail: a word containing characters the dictionary cannot
/// encode is simply absent, and the empty string is never a member while
/// the empty prefix matches everything.
pub trait WordSet {
    /// Whether `word` is a complete word in the set. Case-insensitive.
    fn contains(&self, word: &str) -> bool;

    /// Whether any word in the set starts with `prefix`. Case-insensitive.
    /// The empty prefix matches unconditionally, even in an empty set.
    fn contains_prefix(&self, prefix: &str) -> bool;

    /// Number of words in the set.
    fn len(&self) -> usize;

    /// Whether the set holds no words.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
