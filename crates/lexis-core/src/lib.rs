//! Shared pieces used by the lexis word-list engines.
//!
//! - [`character`] -- alphabet mapping and case folding for the 26-letter
//!   lowercase alphabet the binary dictionaries encode
//! - [`wordlist`] -- the [`WordSet`](wordlist::WordSet) contract that every
//!   word-list backend (DAWG, trie) implements

pub mod character;
pub mod wordlist;

pub use wordlist::WordSet;
