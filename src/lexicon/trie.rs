/// Prefix tree node. Children are kept in the order they were first
/// inserted, which is the order the search visits them in.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    letter: char,
    next: Vec<TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn new(letter: char) -> Self {
        Self {
            letter,
            next: Vec::new(),
            terminal: false,
        }
    }

    /// Letter on the edge leading into this node
    pub fn letter(&self) -> char {
        self.letter
    }

    /// True if the path to this node spells a whole word
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.next
    }

    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.iter().find(|n| n.letter == c)
    }

    /// Adds a word below this node. Returns false if it was already there
    pub fn add_word(&mut self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            let idx = match node.next.iter().position(|n| n.letter == c) {
                Some(idx) => idx,
                None => {
                    node.next.push(TrieNode::new(c));
                    node.next.len() - 1
                }
            };
            node = &mut node.next[idx];
        }
        let added = !node.terminal;
        node.terminal = true;
        added
    }

    /// Follows the word's letters down from this node
    pub fn find(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(self, |node, c| node.next_node(c))
    }
}
