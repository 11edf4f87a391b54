// Fixture encoding for tests and benches.
//
// `encode_words` lays the words out as a trie: no suffix sharing, but a
// fully format-valid file (sibling runs contiguous, letter-ordered, null
// sentinel at index 0). Shared-suffix graphs are hand-built with
// `Edge::pack` and serialized through `encode_edges`.

use std::collections::{BTreeMap, VecDeque};

use lexis_core::character;

use crate::edge::Edge;
use crate::format::{ByteOrder, TAG_BIG, TAG_LITTLE};

/// Serialize a complete dictionary file from prebuilt edges.
pub fn encode_edges(edges: &[Edge], start_index: u32, order: ByteOrder) -> Vec<u8> {
    let mut data = Vec::with_capacity(32 + edges.len() * 4);
    match order {
        ByteOrder::Little => data.extend_from_slice(TAG_LITTLE),
        ByteOrder::Big => data.extend_from_slice(TAG_BIG),
    }
    data.extend_from_slice(format!("[{}][{}]", edges.len(), start_index).as_bytes());
    for edge in edges {
        let bytes = match order {
            ByteOrder::Little => edge.0.to_le_bytes(),
            ByteOrder::Big => edge.0.to_be_bytes(),
        };
        data.extend_from_slice(&bytes);
    }
    data
}

/// Build a dictionary file containing exactly `words`.
///
/// Words are folded to lowercase; duplicates collapse. Panics on words
/// the format cannot encode (empty, or containing non-letters) since a
/// fixture asking for one is itself a bug.
pub fn encode_words(words: &[&str], order: ByteOrder) -> Vec<u8> {
    let (edges, start_index) = build_trie_edges(words);
    encode_edges(&edges, start_index, order)
}

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<u8, usize>,
    is_word: bool,
}

fn build_trie_edges(words: &[&str]) -> (Vec<Edge>, u32) {
    let mut nodes: Vec<TrieNode> = vec![TrieNode::default()];
    for word in words {
        assert!(!word.is_empty(), "cannot encode the empty word");
        let mut node = 0;
        for ch in word.chars() {
            let ord = character::letter_to_ord(ch)
                .unwrap_or_else(|| panic!("cannot encode {ch:?} in {word:?}"));
            node = match nodes[node].children.get(&ord).copied() {
                Some(child) => child,
                None => {
                    let child = nodes.len();
                    nodes.push(TrieNode::default());
                    nodes[node].children.insert(ord, child);
                    child
                }
            };
        }
        nodes[node].is_word = true;
    }

    // Breadth-first run allocation: each node with children gets one
    // contiguous sibling run; the parent edge's children field is patched
    // once the run's position is known. Index 0 stays the null sentinel.
    let mut edges = vec![Edge(0)];
    let mut queue: VecDeque<(usize, Option<usize>)> = VecDeque::new();

    let start_index = if nodes[0].children.is_empty() {
        0
    } else {
        queue.push_back((0, None));
        1
    };

    while let Some((node, parent_slot)) = queue.pop_front() {
        let run_start = edges.len() as u32;
        if let Some(slot) = parent_slot {
            let e = edges[slot];
            edges[slot] = Edge::pack(e.letter_ord(), e.is_last_child(), e.is_word(), run_start);
        }
        let child_count = nodes[node].children.len();
        let run: Vec<(u8, usize)> = nodes[node]
            .children
            .iter()
            .map(|(&ord, &child)| (ord, child))
            .collect();
        for (i, (ord, child)) in run.into_iter().enumerate() {
            let slot = edges.len();
            edges.push(Edge::pack(ord, i + 1 == child_count, nodes[child].is_word, 0));
            if !nodes[child].children.is_empty() {
                queue.push_back((child, Some(slot)));
            }
        }
    }

    (edges, start_index)
}
