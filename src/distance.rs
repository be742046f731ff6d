use crate::{CostFunction, DistanceFunction, DistanceTable, OrderedLabeledTree};
use arrayvec::ArrayVec;
use itertools::Itertools;
use pathfinding::matrix::Matrix;

/// The edit distance between ordered labeled trees.
///
/// A tree is transformed into another by deleting nodes, inserting nodes and substituting
/// labels. Deleting a node moves its children up to its parent, in place; inserting a node is the
/// converse, substituting a label never changes the shape of the tree. Each operation costs what
/// the corresponding function says, the distance is the lowest total cost over all sequences of
/// operations that transform the first tree into the second.
///
/// The distance is computed with the algorithm by Zhang and Shasha in `O(n·m)` space and time
/// bounded by `O(n²·m²)`, with `n` and `m` the sizes of the trees.
///
/// # Example
///
/// ```rust
/// use ordered_tree_distance::*;
///
/// let a: OrderedLabeledTree<String> = "{f{d{a}{c{b}}}{e}}".parse()?;
/// let b: OrderedLabeledTree<String> = "{f{c{d{a}{b}}}{e}}".parse()?;
///
/// let ted = TreeEditDistance::new(UnitCost(1.), UnitCost(1.), EqualityCost::new(0., 2.));
///
/// // remove `c` above `b`, then insert it back above `d`
/// assert_eq!(ted.distance(&a, &b), 2.);
/// assert_eq!(ted.distance(&a, &a), 0.);
///
/// // the same costs are the default
/// let ted = TreeEditDistance::<UnitCost, UnitCost, EqualityCost>::default();
/// assert_eq!(ted.distance(&a, &b), 2.);
/// # Ok::<_, TopologyError>(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TreeEditDistance<D, I, S> {
    delete: D,
    insert: I,
    substitute: S,
}

impl<D, I, S> TreeEditDistance<D, I, S> {
    /// Configures the cost of each edit operation.
    ///
    /// * `delete` is the cost of deleting a node from the first tree.
    /// * `insert` is the cost of inserting a node of the second tree.
    /// * `substitute` is the cost of replacing a label of the first tree by one of the second.
    pub fn new(delete: D, insert: I, substitute: S) -> Self {
        TreeEditDistance {
            delete,
            insert,
            substitute,
        }
    }

    /// Computes the distance between every pair of subtrees of `a` and `b`.
    pub fn table<A, B>(&self, a: &OrderedLabeledTree<A>, b: &OrderedLabeledTree<B>) -> DistanceTable
    where
        D: CostFunction<A>,
        I: CostFunction<B>,
        S: DistanceFunction<A, B>,
    {
        let _span = tracing::debug_span!("tree_edit_distance", n = a.len(), m = b.len()).entered();

        let delete: Box<[_]> = a.labels().map(|l| self.delete.cost(l)).collect();
        let insert: Box<[_]> = b.labels().map(|l| self.insert.cost(l)).collect();

        let mut table = DistanceTable::new(a.len(), b.len());

        // Keyroots are visited in ascending order, so the distance between subtrees rooted below
        // a pair of keyroots is always known by the time that pair is visited.
        for (&k1, &k2) in a.keyroots().iter().cartesian_product(b.keyroots()) {
            let span = tracing::trace_span!("tree_to_tree", keyroot1 = k1, keyroot2 = k2);
            let _guard = span.enter();
            self.tree_to_tree(a, b, (k1, k2), (&delete, &insert), &mut table);
        }

        tracing::debug!(distance = table.distance(), "computed tree edit distance");

        table
    }

    /// Computes the distance between `a` and `b`.
    #[inline]
    pub fn distance<A, B>(&self, a: &OrderedLabeledTree<A>, b: &OrderedLabeledTree<B>) -> f64
    where
        D: CostFunction<A>,
        I: CostFunction<B>,
        S: DistanceFunction<A, B>,
    {
        self.table(a, b).distance()
    }

    /// Fills in the distances between subtrees on the leftmost paths of `k1` and `k2`.
    fn tree_to_tree<A, B>(
        &self,
        a: &OrderedLabeledTree<A>,
        b: &OrderedLabeledTree<B>,
        (k1, k2): (usize, usize),
        (delete, insert): (&[f64], &[f64]),
        table: &mut DistanceTable,
    ) where
        S: DistanceFunction<A, B>,
    {
        let l1 = a.leftmost_descendant(k1);
        let l2 = b.leftmost_descendant(k2);

        // Row `x` stands for the forest `l1..l1 + x` of the first tree, row `0` is the empty
        // forest, likewise for columns and the second tree.
        let mut forest = Matrix::new(k1 - l1 + 2, k2 - l2 + 2, 0f64);

        for x in 1..forest.rows {
            forest[(x, 0)] = forest[(x - 1, 0)] + delete[l1 + x - 1];
        }

        for y in 1..forest.columns {
            forest[(0, y)] = forest[(0, y - 1)] + insert[l2 + y - 1];
        }

        for x in 1..forest.rows {
            let i = l1 + x - 1;
            let li = a.leftmost_descendant(i);

            for y in 1..forest.columns {
                let j = l2 + y - 1;
                let lj = b.leftmost_descendant(j);

                let mut candidates = ArrayVec::<f64, 3>::new();
                candidates.push(forest[(x - 1, y)] + delete[i]);
                candidates.push(forest[(x, y - 1)] + insert[j]);

                if li == l1 && lj == l2 {
                    // both forests are whole subtrees
                    let sub = self.substitute.distance(a.label(i), b.label(j));
                    candidates.push(forest[(x - 1, y - 1)] + sub);
                } else {
                    candidates.push(forest[(li - l1, lj - l2)] + table[(i, j)]);
                }

                let d = candidates.into_iter().fold(f64::INFINITY, f64::min);
                forest[(x, y)] = d;

                if li == l1 && lj == l2 {
                    table.set(i, j, d);
                }
            }
        }
    }
}

impl<A, B, D, I, S> DistanceFunction<OrderedLabeledTree<A>, OrderedLabeledTree<B>>
    for TreeEditDistance<D, I, S>
where
    D: CostFunction<A>,
    I: CostFunction<B>,
    S: DistanceFunction<A, B>,
{
    #[inline]
    fn distance(&self, a: &OrderedLabeledTree<A>, b: &OrderedLabeledTree<B>) -> f64 {
        TreeEditDistance::distance(self, a, b)
    }
}

/// Finds the lowest cost of transforming one [OrderedLabeledTree] into the other.
///
/// Shorthand for [TreeEditDistance::distance].
///
/// ```rust
/// use ordered_tree_distance::*;
///
/// let a = OrderedLabeledTree::from_brackets("(()())", ['r', 'x', 'y'])?;
/// let b = OrderedLabeledTree::from_brackets("(())", ['r', 'y'])?;
///
/// let delete = |_: &char| 3.;
/// let insert = |_: &char| 1.;
/// let substitute = |x: &char, y: &char| if x == y { 0. } else { 5. };
///
/// assert_eq!(distance(&a, &b, delete, insert, substitute), 3.);
/// assert_eq!(distance(&b, &a, delete, insert, substitute), 1.);
/// # Ok::<_, TopologyError>(())
/// ```
pub fn distance<A, B, D, I, S>(
    a: &OrderedLabeledTree<A>,
    b: &OrderedLabeledTree<B>,
    delete: D,
    insert: I,
    substitute: S,
) -> f64
where
    D: CostFunction<A>,
    I: CostFunction<B>,
    S: DistanceFunction<A, B>,
{
    TreeEditDistance::new(delete, insert, substitute).distance(a, b)
}
