//! Incremental keyword matching over a flat trie.
//!
//! The trie is stored as one `Vec<CharNode>`. The children of a node occupy a
//! contiguous, character-sorted slice `nodes[offset..offset + count]`, so
//! stepping to a child is a binary search over a small slice with no pointer
//! chasing. Node 0 is the root; it carries no character of its own.
//!
//! The lexer feeds identifier characters one at a time through
//! [`TextMatcher::try_match_char`] while it scans, so recognizing a keyword
//! costs no second pass over the identifier text.

/// One trie node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CharNode<T> {
    /// Character on the edge leading into this node.
    pub c: char,
    /// Index of the first child.
    pub offset: usize,
    /// Number of children.
    pub count: usize,
    /// Value for the text that ends exactly at this node.
    pub result: Option<T>,
}

/// A trie mapping strings to `Copy` values.
#[derive(Clone, Debug)]
pub struct TextMatcher<T> {
    nodes: Vec<CharNode<T>>,
}

impl<T: Copy> TextMatcher<T> {
    /// Index of the root node, where every match starts.
    pub const ROOT: usize = 0;

    /// Build a matcher from `(text, value)` entries.
    ///
    /// Entries are sorted ordinally before layout. When the same text appears
    /// twice, the first entry wins. The empty string is ignored.
    pub fn new<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, T)>) -> Self {
        let mut words: Vec<(Vec<char>, T)> = entries
            .into_iter()
            .map(|(text, value)| (text.as_ref().chars().collect(), value))
            .filter(|entry: &(Vec<char>, T)| !entry.0.is_empty())
            .collect();
        // Stable sort keeps the first of two equal texts in front.
        words.sort_by(|a, b| a.0.cmp(&b.0));
        words.dedup_by(|later, earlier| later.0 == earlier.0);

        let mut nodes = vec![CharNode {
            c: '\0',
            offset: 0,
            count: 0,
            result: None,
        }];
        Self::layout(&mut nodes, Self::ROOT, &words, 0);
        TextMatcher { nodes }
    }

    /// Lay out the children of `parent`.
    ///
    /// Every entry in `words` shares the same `depth`-character prefix, the
    /// one that leads to `parent`, and is strictly longer than it.
    fn layout(nodes: &mut Vec<CharNode<T>>, parent: usize, words: &[(Vec<char>, T)], depth: usize) {
        // Sorted input groups words by their character at `depth`.
        let mut groups: Vec<(char, &[(Vec<char>, T)])> = Vec::new();
        let mut start = 0;
        while start < words.len() {
            let c = words[start].0[depth];
            let len = words[start..]
                .iter()
                .take_while(|(chars, _)| chars[depth] == c)
                .count();
            groups.push((c, &words[start..start + len]));
            start += len;
        }

        let first_child = nodes.len();
        nodes[parent].offset = first_child;
        nodes[parent].count = groups.len();
        for &(c, group) in &groups {
            // Sorting puts the word ending here (if any) first in its group.
            let result = group
                .first()
                .filter(|(chars, _)| chars.len() == depth + 1)
                .map(|&(_, value)| value);
            nodes.push(CharNode {
                c,
                offset: 0,
                count: 0,
                result,
            });
        }

        for (i, &(_, group)) in groups.iter().enumerate() {
            let longer = group
                .iter()
                .position(|(chars, _)| chars.len() > depth + 1)
                .map_or(&[][..], |skip| &group[skip..]);
            Self::layout(nodes, first_child + i, longer, depth + 1);
        }
    }

    /// Step from `node` along the edge labelled `c`.
    ///
    /// Returns the child index to pass to the next call and the value of the
    /// text matched so far, or `None` once no entry has that prefix.
    #[inline]
    pub fn try_match_char(&self, node: usize, c: char) -> Option<(usize, Option<T>)> {
        let parent = self.nodes.get(node)?;
        let children = self.nodes.get(parent.offset..parent.offset + parent.count)?;
        let i = children.binary_search_by(|child| child.c.cmp(&c)).ok()?;
        Some((parent.offset + i, children[i].result))
    }

    /// Match a complete string.
    pub fn try_match(&self, text: &str) -> Option<T> {
        let mut node = Self::ROOT;
        let mut result = None;
        for c in text.chars() {
            (node, result) = self.try_match_char(node, c)?;
        }
        result
    }

    /// The flat node array, root first.
    pub fn nodes(&self) -> &[CharNode<T>] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests;
