use crate::{Encoding, Node, Topology, TopologyError};
use itertools::Itertools;

/// The order in which labels are listed when building an [OrderedLabeledTree].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LabelOrder {
    /// Every node before its children, children left to right.
    PreOrder,

    /// Children left to right before the node itself.
    PostOrder,
}

/// An immutable rooted tree whose nodes carry labels and whose children are ordered.
///
/// Nodes are numbered in postorder, so the root is always the last node. Alongside the nodes,
/// the tree keeps the _leftmost descendant_ of every node, i.e. the leaf reached by following
/// first children, and the _keyroots_, i.e. the root and every node that has a left sibling.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct OrderedLabeledTree<T> {
    nodes: Box<[Node<T>]>,
    leftmost: Box<[usize]>,
    keyroots: Box<[usize]>,
}

impl<T> OrderedLabeledTree<T> {
    /// Labels the nodes of a [Topology].
    ///
    /// # Panics
    ///
    /// Panics if the number of labels differs from the number of nodes.
    pub fn new<L>(topology: &Topology, labels: L, order: LabelOrder) -> Self
    where
        L: IntoIterator<Item = T>,
    {
        let labels = labels.into_iter().collect_vec();

        assert_eq!(
            labels.len(),
            topology.len(),
            "the number of labels must match the number of nodes"
        );

        let children = topology.children();
        let postorder = topology.postorder(&children);

        let mut rank = vec![0; postorder.len()];
        for (post, &pre) in postorder.iter().enumerate() {
            rank[pre] = post;
        }

        let labels = match order {
            LabelOrder::PostOrder => labels,
            LabelOrder::PreOrder => labels
                .into_iter()
                .enumerate()
                .sorted_by_key(|&(pre, _)| rank[pre])
                .map(|(_, label)| label)
                .collect(),
        };

        let nodes = postorder
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (&pre, label))| Node {
                label,
                index,
                parent: topology.parents()[pre].map(|p| rank[p]),
                children: children[pre].iter().map(|&c| rank[c]).collect(),
            })
            .collect();

        Self::from_nodes(nodes)
    }

    /// Builds a tree from a [fully parenthesized][Encoding::Brackets] topology and its labels in
    /// preorder.
    ///
    /// ```rust
    /// use ordered_tree_distance::{OrderedLabeledTree, TopologyError};
    ///
    /// let t = OrderedLabeledTree::from_brackets("(()())", ["a", "b", "c"])?;
    /// assert_eq!(t.labels().copied().collect::<Vec<_>>(), ["b", "c", "a"]);
    /// assert_eq!(t.leftmost_descendants(), &[0, 1, 0]);
    /// assert_eq!(t.keyroots(), &[1, 2]);
    /// # Ok::<_, TopologyError>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of labels differs from the number of nodes.
    pub fn from_brackets<L>(brackets: &str, labels: L) -> Result<Self, TopologyError>
    where
        L: IntoIterator<Item = T>,
    {
        let topology = Topology::parse(brackets, Encoding::Brackets)?;
        Ok(Self::new(&topology, labels, LabelOrder::PreOrder))
    }

    /// Builds a tree from a [dot-bracket][Encoding::DotBracket] topology and its labels in
    /// postorder, the last of which labels the implied root.
    ///
    /// # Panics
    ///
    /// Panics if the number of labels differs from the number of nodes.
    pub fn from_dot_bracket<L>(structure: &str, labels: L) -> Result<Self, TopologyError>
    where
        L: IntoIterator<Item = T>,
    {
        let topology = Topology::parse(structure, Encoding::DotBracket)?;
        Ok(Self::new(&topology, labels, LabelOrder::PostOrder))
    }

    /// Builds a tree that mirrors an arbitrary recursive structure.
    ///
    /// ```rust
    /// use ordered_tree_distance::OrderedLabeledTree;
    ///
    /// struct Dir {
    ///     name: &'static str,
    ///     entries: Vec<Dir>,
    /// }
    ///
    /// let src = Dir {
    ///     name: "src",
    ///     entries: vec![
    ///         Dir { name: "lib.rs", entries: vec![] },
    ///         Dir { name: "tree.rs", entries: vec![] },
    ///     ],
    /// };
    ///
    /// let t = OrderedLabeledTree::from_nested(&src, |d| &d.entries, |d| d.name);
    /// assert_eq!(t.len(), 3);
    /// assert_eq!(t.root().label(), &"src");
    /// ```
    pub fn from_nested<'n, N, C, I, L>(root: &'n N, mut children: C, mut label: L) -> Self
    where
        C: FnMut(&'n N) -> I,
        I: IntoIterator<Item = &'n N>,
        L: FnMut(&'n N) -> T,
    {
        let mut parents = Vec::new();
        let mut labels = Vec::new();
        let mut stack = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            let index = parents.len();
            parents.push(parent);
            labels.push(label(node));

            let top = stack.len();
            stack.extend(children(node).into_iter().map(|c| (c, Some(index))));
            stack[top..].reverse();
        }

        let topology = Topology {
            parents: parents.into(),
        };

        Self::new(&topology, labels, LabelOrder::PreOrder)
    }

    fn from_nodes(nodes: Box<[Node<T>]>) -> Self {
        let mut leftmost = Vec::with_capacity(nodes.len());
        for node in nodes.iter() {
            let l = node.children.first().map_or(node.index, |&c| leftmost[c]);
            leftmost.push(l);
        }

        // The last node of each leftmost path, i.e. the one with the largest index.
        let keyroots: Box<[usize]> = (0..leftmost.len())
            .rev()
            .unique_by(|&i| leftmost[i])
            .sorted_unstable()
            .collect();

        tracing::trace!(
            nodes = nodes.len(),
            keyroots = keyroots.len(),
            "built ordered labeled tree"
        );

        OrderedLabeledTree {
            nodes,
            leftmost: leftmost.into(),
            keyroots,
        }
    }

    /// Extracts a copy of the subtree rooted at the [Node] with postorder index `root`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is out of bounds.
    pub fn subtree(&self, root: usize) -> Self
    where
        T: Clone,
    {
        let first = self.leftmost[root];
        let nodes = self.nodes[first..=root]
            .iter()
            .map(|n| Node {
                label: n.label.clone(),
                index: n.index - first,
                parent: n.parent.filter(|_| n.index != root).map(|p| p - first),
                children: n.children.iter().map(|&c| c - first).collect(),
            })
            .collect();

        Self::from_nodes(nodes)
    }

    /// The number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, a tree has at least a root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root [Node], which is also the last one in postorder.
    #[inline]
    pub fn root(&self) -> &Node<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// The [Node] with postorder index `i`.
    #[inline]
    pub fn node(&self, i: usize) -> &Node<T> {
        &self.nodes[i]
    }

    /// All [Node]s in postorder.
    #[inline]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// The label of the [Node] with postorder index `i`.
    #[inline]
    pub fn label(&self, i: usize) -> &T {
        &self.nodes[i].label
    }

    /// All labels in postorder.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.nodes.iter().map(Node::label)
    }

    /// The postorder index of the leftmost leaf under the [Node] with postorder index `i`.
    ///
    /// The subtree rooted at `i` spans the postorder indices `leftmost_descendant(i)..=i`.
    #[inline]
    pub fn leftmost_descendant(&self, i: usize) -> usize {
        self.leftmost[i]
    }

    /// The [leftmost descendant][Self::leftmost_descendant] of every [Node] in postorder.
    #[inline]
    pub fn leftmost_descendants(&self) -> &[usize] {
        &self.leftmost
    }

    /// The postorder indices of the keyroots in ascending order.
    #[inline]
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }
}


#[cfg(test)]
pub(crate) use tests::{MockTree, Size};
