//! DAWG (directed acyclic word graph) word-list engine.
//!
//! This crate loads a precompiled binary dictionary into a flat arena of
//! bit-packed edge records and answers exact-word and prefix membership
//! queries over it, plus lazy alphabetical enumeration of every stored
//! word. The structure is read-only: it is produced offline by a
//! dictionary compiler and never mutated after a successful load.
//!
//! # Architecture
//!
//! - [`format`] -- binary header parsing and validation
//! - [`edge`] -- packed 32-bit edge record layout
//! - [`dawg`] -- loading, validation, traversal, word counting
//! - [`cursor`] -- depth-first alphabetical word cursor
//!
//! ```no_run
//! let dawg = lexis_dawg::Dawg::from_path("dawg.dat")?;
//! assert!(dawg.contains("hello") || !dawg.contains_prefix("hell"));
//! for word in dawg.words().take(10) {
//!     println!("{word}");
//! }
//! # Ok::<(), lexis_dawg::DawgError>(())
//! ```

pub mod cursor;
pub mod dawg;
pub mod edge;
pub mod format;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use cursor::{WordCursor, Words};
pub use dawg::Dawg;
pub use edge::Edge;

/// Error type for dictionary loading and validation.
///
/// Every variant is fatal: the loader either returns a fully validated
/// [`Dawg`] or one of these, never a partially initialized structure.
/// Query-time conditions (unknown characters, empty input, exhausted
/// cursors) are not errors.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("cannot open dictionary file {}: {source}", path.display())]
    FileOpen {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("invalid dictionary tag: expected \"DAWGLE\" or \"DAWGBE\"")]
    InvalidTag,
    #[error("malformed header field: expected bracketed integer for {field}")]
    MalformedHeaderField { field: &'static str },
    #[error("edge data size mismatch: header declares {expected} bytes, file holds {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("start index {start_index} is out of range for {edge_count} edges")]
    InvalidStartIndex { start_index: u32, edge_count: u32 },
    #[error("edge {index} has invalid letter ordinal {letter_ord} (maximum 26)")]
    InvalidEdgeLetter { index: u32, letter_ord: u8 },
    #[error("edge {index} has child index {children} out of range for {edge_count} edges")]
    InvalidEdgeChild {
        index: u32,
        children: u32,
        edge_count: u32,
    },
    #[error("dictionary graph deeper than {limit} letters; file is corrupt or cyclic")]
    GraphTooDeep { limit: usize },
}

/// Longest word depth accepted by the loader's counting pass.
///
/// The on-disk format cannot express a cycle check, so the word counter
/// bounds its recursion instead: no natural-language word approaches this
/// length, and a graph deeper than it can only come from a corrupt or
/// adversarial file.
pub const MAX_WORD_LEN: usize = 64;
