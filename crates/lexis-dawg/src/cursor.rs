// Depth-first alphabetical word cursor.
//
// Enumeration never materializes the word list: the cursor keeps the
// current edge, the prefix spelled by the path above it, and an explicit
// backtracking stack of visited edge indices, all O(depth). Sibling runs
// are stored in increasing letter order and children are explored before
// later siblings, so words come out in strict lexicographic order.

use crate::dawg::Dawg;

/// Resumable cursor over every word of a [`Dawg`], alphabetically.
///
/// Pull words with [`Dawg::next_word`]; once exhausted the cursor stays
/// exhausted (start over with a fresh cursor). Forward-only.
#[derive(Debug, Clone, Default)]
pub struct WordCursor {
    /// Edge the cursor is positioned on; `None` before the first advance
    /// and after exhaustion.
    current: Option<u32>,
    /// Word spelled by the path from the root to, but not including,
    /// the current edge.
    prefix: String,
    /// Edge indices of that path, for backtracking.
    path: Vec<u32>,
    started: bool,
}

impl WordCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cursor has produced its last word.
    pub fn is_exhausted(&self) -> bool {
        self.started && self.current.is_none()
    }
}

impl Dawg {
    /// Advance the cursor to the next word and write it into `out`.
    ///
    /// Returns `false` once the dictionary is exhausted; `out` is left
    /// untouched in that case.
    pub fn next_word(&self, cursor: &mut WordCursor, out: &mut String) -> bool {
        loop {
            if !cursor.started {
                cursor.started = true;
                cursor.current = (self.edge_count() > 0).then_some(self.start_index());
            } else if cursor.current.is_some() {
                self.advance_edge(cursor);
            }

            let Some(index) = cursor.current else {
                return false;
            };

            let edge = self.edge(index);
            if edge.is_word() {
                if let Some(letter) = edge.letter() {
                    out.clear();
                    out.push_str(&cursor.prefix);
                    out.push(letter);
                    return true;
                }
            }
        }
    }

    /// Move the cursor to the next edge in depth-first order.
    ///
    /// Descends into the current edge's child run when one exists;
    /// otherwise climbs while the current edge closes its sibling run,
    /// then steps to the following sibling. Climbing past the root run
    /// exhausts the cursor.
    fn advance_edge(&self, cursor: &mut WordCursor) {
        let Some(mut index) = cursor.current else {
            return;
        };

        let edge = self.edge(index);
        if edge.children() != 0 {
            cursor.path.push(index);
            if let Some(letter) = edge.letter() {
                cursor.prefix.push(letter);
            }
            cursor.current = Some(edge.children());
            return;
        }

        loop {
            if !self.edge(index).is_last_child() {
                let next = index + 1;
                // A run missing its terminator ends at the arena edge.
                cursor.current = (next < self.edge_count() as u32).then_some(next);
                return;
            }
            match cursor.path.pop() {
                Some(parent) => {
                    // Mirrors the conditional push in the descend branch:
                    // only letter-bearing edges contributed to the prefix.
                    if self.edge(parent).letter().is_some() {
                        cursor.prefix.pop();
                    }
                    index = parent;
                }
                None => {
                    cursor.current = None;
                    return;
                }
            }
        }
    }
}

/// Iterator adapter over [`WordCursor`], yielding owned words.
///
/// Created by [`Dawg::words`].
pub struct Words<'a> {
    dawg: &'a Dawg,
    cursor: WordCursor,
    buf: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(dawg: &'a Dawg) -> Self {
        Self {
            dawg,
            cursor: WordCursor::new(),
            buf: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.dawg
            .next_word(&mut self.cursor, &mut self.buf)
            .then(|| self.buf.clone())
    }
}

impl std::iter::FusedIterator for Words<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ByteOrder;
    use crate::testkit::encode_words;

    fn load(words: &[&str]) -> Dawg {
        Dawg::from_bytes(&encode_words(words, ByteOrder::Little)).unwrap()
    }

    #[test]
    fn yields_all_words_alphabetically() {
        // Deliberately unsorted input; the graph stores runs in letter order.
        let dawg = load(&["dog", "ant", "cat", "do", "cats", "apple"]);
        let words: Vec<String> = dawg.words().collect();
        assert_eq!(words, ["ant", "apple", "cat", "cats", "do", "dog"]);
    }

    #[test]
    fn first_edge_word_is_produced() {
        let dawg = load(&["a", "an", "and"]);
        let words: Vec<String> = dawg.words().collect();
        assert_eq!(words, ["a", "an", "and"]);
    }

    #[test]
    fn drained_count_matches_len() {
        let dawg = load(&["bat", "bats", "cab", "cabs", "cat"]);
        assert_eq!(dawg.words().count(), dawg.len());
    }

    #[test]
    fn strictly_increasing_without_duplicates() {
        let dawg = load(&["be", "bee", "been", "beer", "bet", "but"]);
        let words: Vec<String> = dawg.words().collect();
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "{pair:?}");
        }
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let dawg = load(&["at"]);
        let mut cursor = WordCursor::new();
        let mut word = String::new();
        assert!(dawg.next_word(&mut cursor, &mut word));
        assert_eq!(word, "at");
        assert!(!dawg.next_word(&mut cursor, &mut word));
        assert!(cursor.is_exhausted());
        assert!(!dawg.next_word(&mut cursor, &mut word));
        // The last produced word is left in place.
        assert_eq!(word, "at");
    }

    #[test]
    fn fresh_cursor_restarts_from_scratch() {
        let dawg = load(&["an", "at"]);
        let first: Vec<String> = dawg.words().collect();
        let second: Vec<String> = dawg.words().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pull_interface_reuses_buffer() {
        let dawg = load(&["an", "ant", "be"]);
        let mut cursor = WordCursor::new();
        let mut word = String::new();
        let mut seen = Vec::new();
        while dawg.next_word(&mut cursor, &mut word) {
            seen.push(word.clone());
        }
        assert_eq!(seen, ["an", "ant", "be"]);
    }

    #[test]
    fn independent_cursors_do_not_interfere() {
        let dawg = load(&["an", "at", "be"]);
        let mut a = dawg.words();
        let mut b = dawg.words();
        assert_eq!(a.next().as_deref(), Some("an"));
        assert_eq!(b.next().as_deref(), Some("an"));
        assert_eq!(a.next().as_deref(), Some("at"));
        assert_eq!(b.next().as_deref(), Some("at"));
        assert_eq!(a.next().as_deref(), Some("be"));
        assert_eq!(a.next(), None);
        assert_eq!(b.next().as_deref(), Some("be"));
    }
}
