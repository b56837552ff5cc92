use super::trie::TrieNode;
use super::WordMatch;
use crate::alphabet::Alphabet;
use crate::rack::Rack;

/// Depth first walk over the trie that spends tiles from a rack on the way
/// down and gets them back on the way up.
pub(super) struct Search {
    prefix: String,
    blanks: Vec<usize>,
    pub matches: Vec<WordMatch>,
    pub visited: usize,
}

impl Search {
    pub fn new(max_len: usize) -> Self {
        Self {
            prefix: String::with_capacity(max_len * 4),
            blanks: Vec::with_capacity(max_len),
            matches: Vec::new(),
            visited: 0,
        }
    }

    pub fn run<A: Alphabet + ?Sized>(&mut self, root: &TrieNode, rack: &mut Rack<'_, A>) {
        self.visit(root, 0, rack);
        debug_assert!(self.prefix.is_empty() && self.blanks.is_empty());
    }

    fn visit<A: Alphabet + ?Sized>(
        &mut self,
        node: &TrieNode,
        depth: usize,
        rack: &mut Rack<'_, A>,
    ) {
        self.visited += 1;
        if node.is_terminal() {
            self.matches.push(WordMatch {
                word: self.prefix.clone(),
                blanks: self.blanks.clone(),
            });
        }

        for child in node.children() {
            // Nothing left to play this letter with, so the subtree is unreachable
            let Some(mut taken) = rack.take(child.letter()) else {
                continue;
            };
            let blank = taken.is_blank();

            self.prefix.push(child.letter());
            if blank {
                self.blanks.push(depth);
            }

            self.visit(child, depth + 1, &mut *taken);

            self.prefix.pop();
            if blank {
                self.blanks.pop();
            }
        }
    }
}
