//! Labeled bracket notation, e.g. `{a{b}{c{d}}}`.
//!
//! Every node is enclosed in braces, its label follows the opening brace and its children follow
//! the label.

use crate::topology::Symbol;
use crate::{LabelOrder, OrderedLabeledTree, Topology, TopologyError};
use itertools::Itertools;
use std::{fmt, str::FromStr};

impl FromStr for OrderedLabeledTree<String> {
    type Err = TopologyError;

    /// Parses labeled bracket notation.
    ///
    /// Labels are trimmed of surrounding whitespace, any other text outside of a label is an
    /// error.
    ///
    /// ```rust
    /// use ordered_tree_distance::{OrderedLabeledTree, TopologyError};
    ///
    /// let t: OrderedLabeledTree<String> = "{a {b}{c}{d}}".parse()?;
    /// assert_eq!(t.labels().collect::<Vec<_>>(), ["b", "c", "d", "a"]);
    /// assert_eq!(t.to_string(), "{a{b}{c}{d}}");
    ///
    /// assert_eq!(
    ///     "{a}{b}".parse::<OrderedLabeledTree<String>>(),
    ///     Err(TopologyError::MultipleRoots { position: 3 })
    /// );
    /// # Ok::<_, TopologyError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::new();
        let mut labels = Vec::new();
        let mut chars = s.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' => {
                    symbols.push(Ok((position, Symbol::Descend)));

                    let label: String = chars
                        .peeking_take_while(|&(_, c)| c != '{' && c != '}')
                        .map(|(_, c)| c)
                        .collect();

                    labels.push(label.trim().to_owned());
                }

                '}' => symbols.push(Ok((position, Symbol::Return))),
                c if c.is_whitespace() => {}
                symbol => symbols.push(Err(TopologyError::UnexpectedSymbol { symbol, position })),
            }
        }

        let topology = Topology::from_symbols(symbols, false)?;
        Ok(OrderedLabeledTree::new(&topology, labels, LabelOrder::PreOrder))
    }
}

impl<T: fmt::Display> fmt::Display for OrderedLabeledTree<T> {
    /// Writes labeled bracket notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root();
        write!(f, "{{{}", root.label())?;

        // one frame per open brace, holding the children yet to be written
        let mut stack = vec![root.children().iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(&c) => {
                    write!(f, "{{{}", self.label(c))?;
                    stack.push(self.node(c).children().iter());
                }

                None => {
                    stack.pop();
                    f.write_str("}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTree;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    #[test]
    fn labels_are_read_in_preorder() {
        let t: OrderedLabeledTree<String> = "{f{d{a}{c{b}}}{e}}".parse().unwrap();
        assert_eq!(t.labels().join(""), "abcdef");
        assert_eq!(t.root().label(), "f");
    }

    #[test]
    fn labels_may_span_several_characters() {
        let t: OrderedLabeledTree<String> = "{ab{c}{d}{e}}".parse().unwrap();
        assert_eq!(t.root().label(), "ab");
        assert_eq!(t.to_string(), "{ab{c}{d}{e}}");
    }

    #[test]
    fn labels_may_be_empty() {
        let t: OrderedLabeledTree<String> = "{{}{ }}".parse().unwrap();
        assert_eq!(t.len(), 3);
        assert!(t.labels().all(String::is_empty));
    }

    #[test]
    fn text_outside_labels_is_rejected() {
        assert_matches!(
            "{a}x".parse::<OrderedLabeledTree<String>>(),
            Err(TopologyError::UnexpectedSymbol { symbol: 'x', position: 3 })
        );

        assert_matches!(
            "{a{b} c}".parse::<OrderedLabeledTree<String>>(),
            Err(TopologyError::UnexpectedSymbol { symbol: 'c', position: 6 })
        );
    }

    #[test]
    fn unbalanced_braces_are_rejected() {
        assert_matches!(
            "{a{b}}}".parse::<OrderedLabeledTree<String>>(),
            Err(TopologyError::UnmatchedClose { position: 6 })
        );

        assert_matches!(
            "{a{b}".parse::<OrderedLabeledTree<String>>(),
            Err(TopologyError::Unclosed { depth: 1 })
        );

        assert_matches!(
            "  ".parse::<OrderedLabeledTree<String>>(),
            Err(TopologyError::Empty)
        );
    }

    #[test]
    fn deep_trees_are_printed_without_recursion() {
        let n = 100_000;
        let s = "{a".repeat(n) + &"}".repeat(n);
        let t: OrderedLabeledTree<String> = s.parse().unwrap();

        assert_eq!(t.len(), n);
        assert_eq!(t.to_string(), s);
    }

    #[proptest]
    fn printing_then_parsing_preserves_the_tree(t: MockTree<u8>) {
        let t = t.build();
        let s = t.to_string();
        let u: OrderedLabeledTree<String> = s.parse().unwrap();

        assert_eq!(u.to_string(), s);
        assert_eq!(u.leftmost_descendants(), t.leftmost_descendants());
        assert_eq!(u.keyroots(), t.keyroots());
        assert!(u.labels().cloned().eq(t.labels().map(u8::to_string)));
    }
}
