//! Character trie for longest-match subword lookup.
//!
//! The WordPiece matcher looks up word spans by view, never by owned
//! string; a trie over code points gives longest-prefix matching in a
//! single forward walk with no per-candidate allocation or re-hashing.

use ahash::AHashMap;

/// Trie node; children are indexed by code point.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<char, TrieNode>,
    token_id: Option<u32>,
}

/// Trie over code points mapping token text to token id.
#[derive(Debug, Clone, Default)]
pub struct CharTrie {
    root: TrieNode,
    len: usize,
}

impl CharTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token with the given id. Re-inserting a token overwrites
    /// its id (last entry wins, matching line-oriented vocabulary files).
    pub fn insert(&mut self, token: &str, token_id: u32) {
        let mut node = &mut self.root;
        for c in token.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.token_id.is_none() && !token.is_empty() {
            self.len += 1;
        }
        node.token_id = Some(token_id);
    }

    /// Look up a whole token.
    pub fn get(&self, token: &str) -> Option<u32> {
        let mut node = &self.root;
        for c in token.chars() {
            node = node.children.get(&c)?;
        }
        node.token_id
    }

    /// Find the longest non-empty prefix of `word` that is a stored token.
    ///
    /// Returns the prefix length in code points and the token id. The walk
    /// keeps the deepest accepting node seen, so the longest match wins.
    pub fn longest_match(&self, word: &[char]) -> Option<(usize, u32)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in word.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => {
                    node = child;
                    if let Some(id) = node.token_id {
                        best = Some((i + 1, id));
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Number of distinct non-empty tokens stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the trie holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = CharTrie::new();
        trie.insert("play", 7);
        trie.insert("playing", 9);

        assert_eq!(trie.get("play"), Some(7));
        assert_eq!(trie.get("playing"), Some(9));
        assert_eq!(trie.get("plays"), None);
        assert_eq!(trie.get("pla"), None);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_longest_match_prefers_longer() {
        let mut trie = CharTrie::new();
        trie.insert("a", 1);
        trie.insert("ab", 2);
        trie.insert("abcd", 4);

        assert_eq!(trie.longest_match(&chars("abcd")), Some((4, 4)));
        assert_eq!(trie.longest_match(&chars("abce")), Some((2, 2)));
        assert_eq!(trie.longest_match(&chars("axyz")), Some((1, 1)));
        assert_eq!(trie.longest_match(&chars("xyz")), None);
    }

    #[test]
    fn test_longest_match_never_matches_empty() {
        let mut trie = CharTrie::new();
        trie.insert("", 0);
        trie.insert("a", 1);

        assert_eq!(trie.longest_match(&chars("b")), None);
        assert_eq!(trie.longest_match(&[]), None);
        // The empty insertion is not counted as a token.
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut trie = CharTrie::new();
        trie.insert("dup", 1);
        trie.insert("dup", 2);

        assert_eq!(trie.get("dup"), Some(2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_non_ascii_keys() {
        let mut trie = CharTrie::new();
        trie.insert("\u{4F60}", 10); // single CJK ideograph
        trie.insert("caf\u{00E9}", 11);

        assert_eq!(trie.longest_match(&chars("\u{4F60}")), Some((1, 10)));
        assert_eq!(trie.longest_match(&chars("caf\u{00E9}s")), Some((4, 11)));
    }
}
