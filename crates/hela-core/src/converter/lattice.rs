use tracing::{debug, debug_span};

use crate::lexicon::Lexicon;
use crate::settings::settings;

/// A node in the segmentation lattice: one candidate piece of the token.
///
/// Positions are byte indices; the classifier only routes ASCII runs here,
/// so byte and character positions coincide.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
    /// The Latin piece covered by this node.
    pub piece: String,
    /// Whether the piece is a lexicon word. Fallback characters are not.
    pub known: bool,
    /// Piece cost (lower = more preferred)
    pub cost: i64,
}

/// All candidate segmentations of one token.
pub struct Lattice {
    /// The original token
    pub input: String,
    /// All nodes in the lattice
    pub nodes: Vec<LatticeNode>,
    /// nodes_by_end[i] = indices of nodes that end at position i
    pub nodes_by_end: Vec<Vec<usize>>,
    /// nodes_by_start[i] = indices of nodes that start at position i
    pub nodes_by_start: Vec<Vec<usize>>,
    /// Input length in bytes
    pub len: usize,
}

/// Build a lattice over a lowercase token using lexicon lookups.
///
/// One trie walk per starting position finds every lexicon word that begins
/// there. Where no single-character word exists, a 1-char fallback node with
/// a high cost is added, which guarantees connectivity: each position stays
/// reachable, so the path search always completes.
pub fn build_lattice(lexicon: &Lexicon, word: &str) -> Lattice {
    let len = word.len();
    let _span = debug_span!("build_lattice", len).entered();
    let seg = &settings().segmenter;
    let mut nodes = Vec::new();
    // nodes_by_end has len + 1 slots (position 0 through len)
    let mut nodes_by_end: Vec<Vec<usize>> = vec![Vec::new(); len + 1];
    let mut nodes_by_start: Vec<Vec<usize>> = vec![Vec::new(); len];

    for start in 0..len {
        let mut has_single_char_word = false;

        for word_len in lexicon.prefix_lengths(&word[start..]) {
            let end = start + word_len;
            let idx = nodes.len();
            nodes.push(LatticeNode {
                start,
                end,
                piece: word[start..end].to_string(),
                known: true,
                cost: seg.known_word_cost + seg.segment_penalty,
            });
            nodes_by_end[end].push(idx);
            nodes_by_start[start].push(idx);
            if word_len == 1 {
                has_single_char_word = true;
            }
        }

        if !has_single_char_word {
            let idx = nodes.len();
            nodes.push(LatticeNode {
                start,
                end: start + 1,
                piece: word[start..start + 1].to_string(),
                known: false,
                cost: seg.unknown_char_cost + seg.segment_penalty,
            });
            nodes_by_end[start + 1].push(idx);
            nodes_by_start[start].push(idx);
        }
    }

    debug!(node_count = nodes.len());
    Lattice {
        input: word.to_string(),
        nodes,
        nodes_by_end,
        nodes_by_start,
        len,
    }
}
