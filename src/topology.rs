use crate::TopologyError;

/// The textual encodings of a tree's shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// Fully parenthesized: `(` opens a new child of the current node and moves into it, `)`
    /// moves back to the parent.
    ///
    /// The outermost pair is the root, e.g. `(()(()))`.
    Brackets,

    /// Vienna dot-bracket: like [Encoding::Brackets] but `.` adds a leaf without moving into it.
    ///
    /// A root is implied around the whole string, e.g. `((..).)`.
    DotBracket,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum Symbol {
    Descend,
    Return,
    Leaf,
}

impl Encoding {
    fn symbol(self, c: char) -> Option<Symbol> {
        match (self, c) {
            (_, '(') => Some(Symbol::Descend),
            (_, ')') => Some(Symbol::Return),
            (Encoding::DotBracket, '.') => Some(Symbol::Leaf),
            _ => None,
        }
    }
}

/// The validated shape of an ordered tree, as the parent of each node in preorder.
///
/// Node `0` is the root and the only node without a parent.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Topology {
    pub(crate) parents: Box<[Option<usize>]>,
}

impl Topology {
    /// Reads a [Topology] from its textual [Encoding].
    ///
    /// The running balance of opening and closing symbols may never become negative and must be
    /// zero at the end of the input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordered_tree_distance::{Encoding, Topology, TopologyError};
    ///
    /// let t = Topology::parse("(()(()))", Encoding::Brackets)?;
    /// assert_eq!(t.parents(), &[None, Some(0), Some(0), Some(2)]);
    ///
    /// let t = Topology::parse("(.).", Encoding::DotBracket)?;
    /// assert_eq!(t.parents(), &[None, Some(0), Some(1), Some(0)]);
    ///
    /// assert_eq!(
    ///     Topology::parse("())", Encoding::Brackets),
    ///     Err(TopologyError::UnmatchedClose { position: 2 })
    /// );
    /// # Ok::<_, TopologyError>(())
    /// ```
    pub fn parse(input: &str, encoding: Encoding) -> Result<Self, TopologyError> {
        let symbols = input.char_indices().map(|(position, symbol)| {
            encoding
                .symbol(symbol)
                .map(|s| (position, s))
                .ok_or(TopologyError::UnexpectedSymbol { symbol, position })
        });

        Self::from_symbols(symbols, encoding == Encoding::DotBracket)
    }

    pub(crate) fn from_symbols<I>(symbols: I, implicit_root: bool) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = Result<(usize, Symbol), TopologyError>>,
    {
        let mut parents = Vec::new();
        if implicit_root {
            parents.push(None);
        }

        // None before the root is opened and after it is closed.
        let mut cursor = parents.len().checked_sub(1);
        let mut depth = 0usize;

        for symbol in symbols {
            let (position, symbol) = symbol?;
            match symbol {
                Symbol::Descend | Symbol::Leaf => {
                    if cursor.is_none() && !parents.is_empty() {
                        return Err(TopologyError::MultipleRoots { position });
                    }

                    parents.push(cursor);

                    if symbol == Symbol::Descend {
                        cursor = Some(parents.len() - 1);
                        depth += 1;
                    }
                }

                Symbol::Return => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(TopologyError::UnmatchedClose { position })?;
                    cursor = cursor.and_then(|c| parents[c]);
                }
            }
        }

        if depth > 0 {
            Err(TopologyError::Unclosed { depth })
        } else if parents.is_empty() {
            Err(TopologyError::Empty)
        } else {
            Ok(Topology {
                parents: parents.into(),
            })
        }
    }

    /// Builds a [Topology] from the parent of each node in preorder.
    ///
    /// The first node must be the root, every other node's parent must be one of its ancestors in
    /// preorder, i.e. on the path from the root to the node that precedes it.
    ///
    /// ```rust
    /// use ordered_tree_distance::{Topology, TopologyError};
    ///
    /// assert!(Topology::from_parents([None, Some(0), Some(1), Some(0)]).is_ok());
    ///
    /// assert_eq!(
    ///     Topology::from_parents([None, Some(0), Some(0), Some(1)]),
    ///     Err(TopologyError::InvalidParent { node: 3 })
    /// );
    /// ```
    pub fn from_parents<I>(parents: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let parents: Box<[_]> = parents.into_iter().collect();

        if parents.is_empty() {
            return Err(TopologyError::Empty);
        }

        let mut path = Vec::new();
        for (node, &parent) in parents.iter().enumerate() {
            if let Some(p) = parent {
                while path.last().is_some_and(|&last| last != p) {
                    path.pop();
                }

                if path.is_empty() {
                    return Err(TopologyError::InvalidParent { node });
                }
            } else if node > 0 {
                return Err(TopologyError::InvalidParent { node });
            }

            path.push(node);
        }

        Ok(Topology { parents })
    }

    /// The number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Always `false`, a [Topology] has at least a root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The parent of each node in preorder.
    #[inline]
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// The children of each node in preorder, left to right.
    pub(crate) fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.len()];
        for (node, parent) in self.parents.iter().enumerate() {
            if let &Some(p) = parent {
                children[p].push(node);
            }
        }

        children
    }

    /// The preorder index of each node, listed in postorder.
    pub(crate) fn postorder(&self, children: &[Vec<usize>]) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![(0, 0)];

        while let Some((node, next)) = stack.last_mut() {
            if let Some(&child) = children[*node].get(*next) {
                *next += 1;
                stack.push((child, 0));
            } else {
                order.push(*node);
                stack.pop();
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::sample::select;
    use test_strategy::proptest;

    #[test]
    fn brackets_describe_an_explicit_root() {
        let t = Topology::parse("(()()())", Encoding::Brackets).unwrap();
        assert_eq!(t.parents(), &[None, Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn dots_add_leaves_to_an_implicit_root() {
        let t = Topology::parse("..", Encoding::DotBracket).unwrap();
        assert_eq!(t.parents(), &[None, Some(0), Some(0)]);

        let t = Topology::parse("", Encoding::DotBracket).unwrap();
        assert_eq!(t.parents(), &[None]);
    }

    #[test]
    fn dots_are_illegal_in_brackets() {
        assert_matches!(
            Topology::parse("(.)", Encoding::Brackets),
            Err(TopologyError::UnexpectedSymbol { symbol: '.', position: 1 })
        );
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert_matches!(
            Topology::parse("((x))", Encoding::DotBracket),
            Err(TopologyError::UnexpectedSymbol { symbol: 'x', position: 2 })
        );
    }

    #[test]
    fn closing_the_implicit_root_is_unbalanced() {
        assert_matches!(
            Topology::parse("().)", Encoding::DotBracket),
            Err(TopologyError::UnmatchedClose { position: 3 })
        );
    }

    #[test]
    fn unclosed_symbols_are_unbalanced() {
        assert_matches!(
            Topology::parse("((()", Encoding::Brackets),
            Err(TopologyError::Unclosed { depth: 2 })
        );
    }

    #[test]
    fn brackets_have_a_single_root() {
        assert_matches!(
            Topology::parse("()()", Encoding::Brackets),
            Err(TopologyError::MultipleRoots { position: 2 })
        );

        assert_matches!(
            Topology::parse("", Encoding::Brackets),
            Err(TopologyError::Empty)
        );
    }

    #[test]
    fn the_root_has_no_parent() {
        assert_matches!(
            Topology::from_parents([Some(0), None]),
            Err(TopologyError::InvalidParent { node: 0 })
        );

        assert_matches!(
            Topology::from_parents([None, None]),
            Err(TopologyError::InvalidParent { node: 1 })
        );

        assert_matches!(
            Topology::from_parents(Vec::new()),
            Err(TopologyError::Empty)
        );
    }

    #[proptest]
    fn parsed_topologies_are_valid_parent_arrays(
        #[strategy(proptest::collection::vec(select(&['(', ')', '.'][..]), 0..32))] s: Vec<char>,
    ) {
        let s: String = s.into_iter().collect();
        if let Ok(t) = Topology::parse(&s, Encoding::DotBracket) {
            let nodes = s.chars().filter(|&c| c != ')').count() + 1;
            assert_eq!(t.len(), nodes);
            assert_eq!(Topology::from_parents(t.parents().iter().copied()), Ok(t));
        }
    }

    #[test]
    fn postorder_visits_children_first() {
        let t = Topology::parse("((())())", Encoding::Brackets).unwrap();
        assert_eq!(t.parents(), &[None, Some(0), Some(1), Some(0)]);
        assert_eq!(t.postorder(&t.children()), vec![2, 1, 3, 0]);
    }
}
