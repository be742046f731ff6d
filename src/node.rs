/// A single node of an [OrderedLabeledTree][crate::OrderedLabeledTree].
///
/// Nodes are stored in postorder and refer to each other by their postorder index, so the parent
/// is a plain index rather than a reference.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Node<T> {
    pub(crate) label: T,
    pub(crate) index: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Box<[usize]>,
}

impl<T> Node<T> {
    /// This [Node]'s label.
    #[inline]
    pub fn label(&self) -> &T {
        &self.label
    }

    /// This [Node]'s postorder index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The postorder index of this [Node]'s parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// The postorder indices of this [Node]'s children, left to right.
    #[inline]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Whether this [Node] has no children.
    ///
    /// ```rust
    /// use ordered_tree_distance::{OrderedLabeledTree, TopologyError};
    ///
    /// let t = OrderedLabeledTree::from_brackets("(()())", ['r', 'x', 'y'])?;
    /// assert!(t.node(0).is_leaf());
    /// assert!(!t.root().is_leaf());
    /// # Ok::<_, TopologyError>(())
    /// ```
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this [Node] has no parent.
    ///
    /// ```rust
    /// use ordered_tree_distance::{OrderedLabeledTree, TopologyError};
    ///
    /// let t = OrderedLabeledTree::from_brackets("(()())", ['r', 'x', 'y'])?;
    /// assert!(t.root().is_root());
    /// assert!(!t.node(1).is_root());
    /// # Ok::<_, TopologyError>(())
    /// ```
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
