// Packed edge record layout for the on-disk DAWG format.

use bytemuck::{Pod, Zeroable};
use lexis_core::character;

/// One DAWG edge (4 bytes): a single-letter transition in the word graph.
///
/// The 32 bits pack four fields; the struct stores the raw `u32` and
/// extracts fields with explicit masks so the layout stays bit-exact
/// regardless of how the host compiler would order native bitfields:
///
/// - bits 0-4: `letter_ord`, the letter this edge spells (1 = 'a' .. 26 = 'z';
///   0 is reserved and never a real letter)
/// - bit 5: `last_child`, set on the final edge of a sibling run
/// - bit 6: `is_word`, set when the root-to-here path spells a complete word
/// - bit 7: unused, written as 0 and never interpreted
/// - bits 8-31: `children`, index of the first edge of this edge's child
///   sibling run, or 0 meaning "no children"
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Edge(pub u32);

const LETTER_MASK: u32 = 0x0000_001F;
const LAST_CHILD_BIT: u32 = 1 << 5;
const IS_WORD_BIT: u32 = 1 << 6;
const CHILDREN_SHIFT: u32 = 8;
const CHILDREN_MASK: u32 = 0x00FF_FFFF;

impl Edge {
    /// Letter ordinal (bits 0-4).
    #[inline]
    pub fn letter_ord(self) -> u8 {
        (self.0 & LETTER_MASK) as u8
    }

    /// Whether this is the final edge of its sibling run (bit 5).
    #[inline]
    pub fn is_last_child(self) -> bool {
        self.0 & LAST_CHILD_BIT != 0
    }

    /// Whether the path ending at this edge spells a complete word (bit 6).
    #[inline]
    pub fn is_word(self) -> bool {
        self.0 & IS_WORD_BIT != 0
    }

    /// Index of this edge's first child edge (bits 8-31); 0 means no children.
    #[inline]
    pub fn children(self) -> u32 {
        (self.0 >> CHILDREN_SHIFT) & CHILDREN_MASK
    }

    /// The lowercase letter this edge spells, or `None` for the reserved
    /// ordinal 0 (seen only on the null sentinel edge).
    #[inline]
    pub fn letter(self) -> Option<char> {
        character::ord_to_letter(self.letter_ord())
    }

    /// Pack an edge from its fields. Used by fixture encoders; real
    /// dictionaries arrive prepacked from the offline compiler.
    pub fn pack(letter_ord: u8, last_child: bool, is_word: bool, children: u32) -> Self {
        debug_assert!(letter_ord as u32 <= LETTER_MASK);
        debug_assert!(children <= CHILDREN_MASK);
        let mut bits = letter_ord as u32 & LETTER_MASK;
        if last_child {
            bits |= LAST_CHILD_BIT;
        }
        if is_word {
            bits |= IS_WORD_BIT;
        }
        bits |= (children & CHILDREN_MASK) << CHILDREN_SHIFT;
        Edge(bits)
    }

    /// Reverse the four bytes of the record (endianness correction).
    #[inline]
    pub fn swap_bytes(self) -> Self {
        Edge(self.0.swap_bytes())
    }
}

// The on-disk record is exactly four bytes.
const _: () = assert!(size_of::<Edge>() == 4);
