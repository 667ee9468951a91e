use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_rules_toml, RuleEntry, RulesConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

struct Node {
    children: HashMap<u8, Node>,
    rules: Vec<u32>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rules: Vec::new(),
        }
    }
}

/// Byte trie over rule patterns, driving longest-match scanning.
pub struct RuleTrie {
    root: Node,
    entries: Vec<RuleEntry>,
}

impl RuleTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RulesConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RulesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTrie {
        static INSTANCE: OnceLock<RuleTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let entries = parse_rules_toml(toml_str).expect("rules TOML must be valid");
            RuleTrie::from_entries(entries)
        })
    }

    pub fn from_entries(entries: Vec<RuleEntry>) -> Self {
        let mut root = Node::new();
        for (id, entry) in entries.iter().enumerate() {
            let mut node = &mut root;
            for &b in entry.pattern.as_bytes() {
                node = node.children.entry(b).or_insert_with(Node::new);
            }
            node.rules.push(id as u32);
        }
        sort_rules(&mut root, &entries);
        RuleTrie { root, entries }
    }

    /// All rule matches at the start of `input`, longest pattern first.
    /// Each element pairs the matched byte length with the rule ids for that
    /// length, in descending priority order.
    pub fn matches_at(&self, input: &[u8]) -> Vec<(usize, &[u32])> {
        let mut out = Vec::new();
        let mut node = &self.root;
        for (depth, &b) in input.iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => {
                    node = child;
                    if !node.rules.is_empty() {
                        out.push((depth + 1, node.rules.as_slice()));
                    }
                }
                None => break,
            }
        }
        out.reverse();
        out
    }

    pub fn entry(&self, id: u32) -> &RuleEntry {
        &self.entries[id as usize]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stable sort keeps list position as the tie-break below priority.
fn sort_rules(node: &mut Node, entries: &[RuleEntry]) {
    node.rules
        .sort_by_key(|&id| std::cmp::Reverse(entries[id as usize].priority));
    for child in node.children.values_mut() {
        sort_rules(child, entries);
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::RuleOutput;
    use super::*;

    #[test]
    fn test_longest_first() {
        let trie = RuleTrie::global();
        let matches = trie.matches_at(b"aayuboovan");
        let lens: Vec<usize> = matches.iter().map(|(len, _)| *len).collect();
        assert_eq!(lens, vec![2, 1]);
        let (len, ids) = matches[0];
        assert_eq!(len, 2);
        match &trie.entry(ids[0]).output {
            RuleOutput::Vowel { independent, .. } => assert_eq!(independent, "ආ"),
            other => panic!("expected vowel for aa, got {:?}", other),
        }
    }

    #[test]
    fn test_priority_orders_shared_pattern() {
        let trie = RuleTrie::global();
        let matches = trie.matches_at(b"nk");
        assert_eq!(matches.len(), 1);
        let (len, ids) = matches[0];
        assert_eq!(len, 1);
        assert_eq!(ids.len(), 2);
        // Context-gated anusvara rule outranks the plain consonant.
        assert!(trie.entry(ids[0]).when_next.is_some());
        assert!(trie.entry(ids[1]).when_next.is_none());
    }

    #[test]
    fn test_vocalic_r_lengths() {
        let trie = RuleTrie::global();
        let lens: Vec<usize> = trie
            .matches_at(b"ruuksha")
            .iter()
            .map(|(len, _)| *len)
            .collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }

    #[test]
    fn test_no_match() {
        let trie = RuleTrie::global();
        assert!(trie.matches_at(b"xyz").is_empty());
        assert!(trie.matches_at(b"").is_empty());
        assert!(trie.matches_at(b"5").is_empty());
    }

    #[test]
    fn test_aspirated_beats_plain() {
        let trie = RuleTrie::global();
        let matches = trie.matches_at(b"tha");
        let (len, ids) = matches[0];
        assert_eq!(len, 2);
        match &trie.entry(ids[0]).output {
            RuleOutput::Consonant { base } => assert_eq!(base, "ත"),
            other => panic!("expected consonant for th, got {:?}", other),
        }
    }

    #[test]
    fn test_from_entries_custom() {
        let entries = parse_rules_toml(
            r#"
[vowels]
a = { ind = "A", sign = "^" }
[consonants]
k = "K"
ka = "X"
"#,
        )
        .unwrap();
        let trie = RuleTrie::from_entries(entries);
        assert_eq!(trie.len(), 3);
        let lens: Vec<usize> = trie.matches_at(b"kat").iter().map(|(l, _)| *l).collect();
        assert_eq!(lens, vec![2, 1]);
    }
}
