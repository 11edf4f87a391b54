// DAWG loading, validation and traversal.

use std::path::Path;

use lexis_core::WordSet;
use lexis_core::character;

use crate::cursor::Words;
use crate::edge::Edge;
use crate::format::{self, ByteOrder};
use crate::{DawgError, MAX_WORD_LEN};

/// A read-only word list backed by a directed acyclic word graph.
///
/// The graph is a flat arena of packed [`Edge`] records addressed by
/// integer index; index 0 is a reserved null sentinel, so a `children`
/// field of 0 always means "no children" rather than "edge 0". Edges
/// sharing a parent sit in consecutive slots (a sibling run) terminated
/// by the edge whose `last_child` bit is set.
///
/// The structure is immutable after a successful load. Cloning duplicates
/// the whole edge buffer; clones never share storage with the original.
#[derive(Clone)]
pub struct Dawg {
    edges: Vec<Edge>,
    start_index: u32,
    word_count: usize,
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("edge_count", &self.edges.len())
            .field("start_index", &self.start_index)
            .field("word_count", &self.word_count)
            .finish()
    }
}

impl Dawg {
    /// Load a dictionary from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DawgError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| DawgError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    /// Load a dictionary from raw file bytes.
    ///
    /// Validation is strict and all-or-nothing: the tag, both bracketed
    /// header fields, the body length, the start index, and every edge's
    /// letter ordinal and child index are checked before the structure is
    /// returned. Records declared in the opposite byte order from the
    /// host are byte-swapped after the raw copy.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        let header = format::parse_header(data)?;
        let edge_count = header.edge_count;

        let body = &data[header.body_offset..];
        let expected = edge_count as usize * size_of::<Edge>();
        if body.len() != expected {
            return Err(DawgError::SizeMismatch {
                expected,
                actual: body.len(),
            });
        }

        if header.start_index >= edge_count {
            return Err(DawgError::InvalidStartIndex {
                start_index: header.start_index,
                edge_count,
            });
        }

        // Copy the records into an owned, aligned buffer; the file slice
        // itself carries no alignment guarantee.
        let mut edges = vec![Edge(0); edge_count as usize];
        bytemuck::cast_slice_mut::<Edge, u8>(&mut edges).copy_from_slice(body);

        if header.byte_order != ByteOrder::native() {
            for edge in &mut edges {
                *edge = edge.swap_bytes();
            }
        }

        for (index, edge) in edges.iter().enumerate() {
            let letter_ord = edge.letter_ord();
            if letter_ord > character::ALPHABET_LEN {
                return Err(DawgError::InvalidEdgeLetter {
                    index: index as u32,
                    letter_ord,
                });
            }
            if edge.children() >= edge_count {
                return Err(DawgError::InvalidEdgeChild {
                    index: index as u32,
                    children: edge.children(),
                    edge_count,
                });
            }
        }

        let word_count = tally_words(&edges, header.start_index, 0)?;

        Ok(Self {
            edges,
            start_index: header.start_index,
            word_count,
        })
    }

    /// Number of edges in the arena, including the null sentinel.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of the first edge of the root sibling run.
    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub(crate) fn edge(&self, index: u32) -> Edge {
        self.edges[index as usize]
    }

    /// Find the edge for `ch` in the sibling run starting at `run_start`.
    ///
    /// Folds `ch` case-insensitively to its letter ordinal (no ordinal
    /// means no match) and scans the run, stopping at the `last_child`
    /// edge or the end of the arena. At most one alphabet's worth of
    /// comparisons.
    pub(crate) fn find_sibling_edge(&self, run_start: u32, ch: char) -> Option<u32> {
        let target = character::letter_to_ord(ch)?;
        let mut index = run_start as usize;
        while index < self.edges.len() {
            let edge = self.edges[index];
            if edge.letter_ord() == target {
                return Some(index as u32);
            }
            if edge.is_last_child() {
                break;
            }
            index += 1;
        }
        None
    }

    /// Trace `word` from the root, returning the edge matched by its last
    /// character. Empty input never matches; neither does input whose
    /// path runs past an edge with no children.
    pub(crate) fn trace_path(&self, word: &str) -> Option<u32> {
        let mut chars = word.chars();
        let first = chars.next()?;
        let mut current = self.find_sibling_edge(self.start_index, first)?;
        for ch in chars {
            let run = self.edge(current).children();
            if run == 0 {
                return None;
            }
            current = self.find_sibling_edge(run, ch)?;
        }
        Some(current)
    }

    /// Whether `word` is a complete word in the dictionary.
    ///
    /// Case-insensitive. Words containing characters the format cannot
    /// encode are simply absent; the empty string is never a word.
    pub fn contains(&self, word: &str) -> bool {
        self.trace_path(word)
            .is_some_and(|index| self.edge(index).is_word())
    }

    /// Whether any stored word starts with `prefix`.
    ///
    /// The empty prefix matches unconditionally.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.trace_path(prefix).is_some()
    }

    /// Number of words in the dictionary. Counted once at load; O(1) here.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Lazily enumerate every word in strict alphabetical order.
    ///
    /// Uses O(depth) auxiliary state; no word list is materialized.
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }
}

impl WordSet for Dawg {
    fn contains(&self, word: &str) -> bool {
        Dawg::contains(self, word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        Dawg::contains_prefix(self, prefix)
    }

    fn len(&self) -> usize {
        Dawg::len(self)
    }
}

/// Count the words reachable from the sibling run at `run_start`.
///
/// Walks each edge of the run, counting `is_word` edges and recursing
/// into nonzero `children` runs. Runs once per load; afterwards the
/// cached total answers size queries in O(1).
///
/// Recursion depth is capped at [`MAX_WORD_LEN`]: the offline compiler
/// guarantees acyclicity, but this loader treats its input as untrusted
/// and fails instead of overflowing the stack on a cyclic file.
fn tally_words(edges: &[Edge], run_start: u32, depth: usize) -> Result<usize, DawgError> {
    if depth >= MAX_WORD_LEN {
        return Err(DawgError::GraphTooDeep { limit: MAX_WORD_LEN });
    }

    let mut count = 0;
    let mut index = run_start as usize;
    while index < edges.len() {
        let edge = edges[index];
        if edge.is_word() {
            count += 1;
        }
        if edge.children() != 0 {
            count += tally_words(edges, edge.children(), depth + 1)?;
        }
        if edge.is_last_child() {
            break;
        }
        index += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{encode_edges, encode_words};

    fn sample() -> Dawg {
        let data = encode_words(&["a", "an", "and"], ByteOrder::Little);
        Dawg::from_bytes(&data).unwrap()
    }

    #[test]
    fn loads_minimal_dictionary() {
        let dawg = sample();
        assert_eq!(dawg.len(), 3);
        assert!(!dawg.is_empty());
        assert_eq!(dawg.start_index(), 1);
    }

    #[test]
    fn exact_membership() {
        let dawg = sample();
        assert!(dawg.contains("a"));
        assert!(dawg.contains("an"));
        assert!(dawg.contains("and"));
        assert!(!dawg.contains("andy"));
        assert!(!dawg.contains("n"));
        assert!(!dawg.contains("b"));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dawg = sample();
        assert!(dawg.contains("AND"));
        assert!(dawg.contains("An"));
        assert!(dawg.contains_prefix("AN"));
    }

    #[test]
    fn empty_and_unencodable_words_are_absent() {
        let dawg = sample();
        assert!(!dawg.contains(""));
        assert!(!dawg.contains("a-n"));
        assert!(!dawg.contains("an1"));
        assert!(!dawg.contains("\u{00E5}nd"));
    }

    #[test]
    fn prefix_membership() {
        let dawg = sample();
        assert!(dawg.contains_prefix(""));
        assert!(dawg.contains_prefix("a"));
        assert!(dawg.contains_prefix("an"));
        assert!(dawg.contains_prefix("and"));
        assert!(!dawg.contains_prefix("b"));
        assert!(!dawg.contains_prefix("andy"));
    }

    #[test]
    fn wider_dictionary() {
        let words = [
            "ant", "apple", "bee", "bet", "cat", "cats", "do", "dog", "dogs",
        ];
        let data = encode_words(&words, ByteOrder::Little);
        let dawg = Dawg::from_bytes(&data).unwrap();
        assert_eq!(dawg.len(), words.len());
        for w in words {
            assert!(dawg.contains(w), "{w}");
        }
        assert!(!dawg.contains("ca"));
        assert!(dawg.contains_prefix("ca"));
        assert!(!dawg.contains_prefix("z"));
    }

    #[test]
    fn shared_suffix_graph() {
        // True DAWG shape: "cat"/"bat" share the "at" tail run.
        // 0: sentinel
        // 1: 'b' root, children -> 3   2: 'c' root (last), children -> 3
        // 3: 'a' (last), children -> 4
        // 4: 't' (last), word
        let edges = [
            Edge(0),
            Edge::pack(2, false, false, 3),
            Edge::pack(3, true, false, 3),
            Edge::pack(1, true, false, 4),
            Edge::pack(20, true, true, 0),
        ];
        let data = encode_edges(&edges, 1, ByteOrder::Little);
        let dawg = Dawg::from_bytes(&data).unwrap();
        assert_eq!(dawg.len(), 2);
        assert!(dawg.contains("bat"));
        assert!(dawg.contains("cat"));
        assert!(!dawg.contains("at"));
        assert!(dawg.contains_prefix("ba"));
        assert_eq!(dawg.words().collect::<Vec<_>>(), ["bat", "cat"]);
    }

    #[test]
    fn degenerate_dictionary_is_empty() {
        // Sentinel-only arena: one all-zero edge, start index 0.
        let data = encode_edges(&[Edge(0)], 0, ByteOrder::Little);
        let dawg = Dawg::from_bytes(&data).unwrap();
        assert_eq!(dawg.len(), 0);
        assert!(dawg.is_empty());
        assert!(!dawg.contains("a"));
        assert!(dawg.contains_prefix(""));
        assert_eq!(dawg.words().next(), None);
    }

    #[test]
    fn both_byte_orders_agree() {
        let words = ["ant", "apple", "bee"];
        let le = Dawg::from_bytes(&encode_words(&words, ByteOrder::Little)).unwrap();
        let be = Dawg::from_bytes(&encode_words(&words, ByteOrder::Big)).unwrap();
        assert_eq!(le.len(), be.len());
        for w in ["ant", "apple", "bee", "ap", "bees", "z"] {
            assert_eq!(le.contains(w), be.contains(w), "{w}");
            assert_eq!(le.contains_prefix(w), be.contains_prefix(w), "{w}");
        }
        assert_eq!(
            le.words().collect::<Vec<_>>(),
            be.words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn clone_is_deep() {
        let dawg = sample();
        let copy = dawg.clone();
        drop(dawg);
        assert_eq!(copy.len(), 3);
        assert!(copy.contains("and"));
        assert_eq!(copy.words().count(), 3);
    }

    #[test]
    fn reject_size_mismatch() {
        let mut data = encode_words(&["a"], ByteOrder::Little);
        data.pop(); // truncate the edge body
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::SizeMismatch { .. }
        ));

        let mut data = encode_words(&["a"], ByteOrder::Little);
        data.extend_from_slice(&[0; 4]); // body longer than declared
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::SizeMismatch { .. }
        ));
    }

    #[test]
    fn reject_out_of_range_start_index() {
        let edges = [Edge(0), Edge::pack(1, true, true, 0)];
        let data = encode_edges(&edges, 9, ByteOrder::Little);
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::InvalidStartIndex {
                start_index: 9,
                edge_count: 2
            }
        ));
    }

    #[test]
    fn reject_invalid_letter_ordinal() {
        let edges = [Edge(0), Edge(31 | 0x20 | 0x40)]; // ordinal 31 > 26
        let data = encode_edges(&edges, 1, ByteOrder::Little);
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::InvalidEdgeLetter {
                index: 1,
                letter_ord: 31
            }
        ));
    }

    #[test]
    fn reject_out_of_range_child_index() {
        let edges = [Edge(0), Edge::pack(1, true, true, 500)];
        let data = encode_edges(&edges, 1, ByteOrder::Little);
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::InvalidEdgeChild {
                index: 1,
                children: 500,
                ..
            }
        ));
    }

    #[test]
    fn reject_cyclic_graph() {
        // Edge 1 lists itself as its own child run.
        let edges = [Edge(0), Edge::pack(1, true, false, 1)];
        let data = encode_edges(&edges, 1, ByteOrder::Little);
        assert!(matches!(
            Dawg::from_bytes(&data).unwrap_err(),
            DawgError::GraphTooDeep { .. }
        ));
    }

    #[test]
    fn sibling_run_without_terminator_stops_at_arena_end() {
        // Root run runs to the end of the arena with no last_child bit.
        let edges = [Edge(0), Edge::pack(1, false, true, 0)];
        let data = encode_edges(&edges, 1, ByteOrder::Little);
        let dawg = Dawg::from_bytes(&data).unwrap();
        assert_eq!(dawg.len(), 1);
        assert!(dawg.contains("a"));
        assert!(!dawg.contains("b"));
    }

    #[test]
    fn debug_summary() {
        let repr = format!("{:?}", sample());
        assert!(repr.contains("word_count: 3"));
    }
}
