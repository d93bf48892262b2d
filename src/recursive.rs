//! A Recursive BST. This is the classic textbook formulation: the tree
//! owns its root node and every node owns its children, so the ownership
//! tree and the search tree are the same structure. Operations recurse
//! down from the root following the BST ordering.
//!
//! The tree behaves as a set: each distinct element is stored once and
//! inserting an equal element again is rejected. Nothing rebalances the
//! tree, so its depth depends on insertion order.
//!
//! # Examples
//!
//! ```
//! use bst_set::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same element again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;

/// A Binary Search Tree storing a set of distinct elements. Elements can
/// be inserted, looked up, counted, and visited in ascending order; they
/// can never be removed.
#[derive(Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

/// A `Node` has the element it stores and two optional children. Each
/// child is exclusively owned by its parent, so the structure is a strict
/// tree with no sharing and no cycles.
#[derive(Clone)]
struct Node<T> {
    element: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Inserts the given element into the tree if no equal element is
    /// already present. Returns `true` iff a new node was created; on
    /// `false` the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let inserted = Node::insert_into(&mut self.root, element);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Checked variant of [`insert`][Self::insert] for callers holding an
    /// optional element. An absent element fails with
    /// [`Error::InvalidArgument`] before the tree is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    /// use bst_set::Error;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(Some(1)), Ok(true));
    /// assert_eq!(tree.try_insert(None), Err(Error::InvalidArgument));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn try_insert(&mut self, element: Option<T>) -> Result<bool, Error>
    where
        T: Ord,
    {
        match element {
            Some(element) => Ok(self.insert(element)),
            None => Err(Error::InvalidArgument),
        }
    }

    /// Reports whether an element comparing equal to the given one is
    /// stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut subtree = &self.root;
        while let Some(node) = subtree {
            subtree = match element.cmp(&node.element) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Checked variant of [`contains`][Self::contains]. An absent element
    /// fails with [`Error::InvalidArgument`].
    pub fn try_contains(&self, element: Option<&T>) -> Result<bool, Error>
    where
        T: Ord,
    {
        match element {
            Some(element) => Ok(self.contains(element)),
            None => Err(Error::InvalidArgument),
        }
    }

    /// The number of elements stored in the tree. This is a maintained
    /// counter, not a traversal, so it is `O(1)`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of edges on the longest path from the root to any leaf.
    ///
    /// Note the convention: depth counts *edges*, not nodes. An empty tree
    /// and a single-node tree both have depth 0. The depth is recomputed by
    /// a full `O(n)` walk on every call; nothing is memoized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.depth(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height() - 1)
    }

    /// Applies `visit` to every element in ascending order: the left
    /// subtree first, then the node, then the right subtree. Each element
    /// is visited exactly once, synchronously on the calling thread. An
    /// empty tree visits nothing. A panic in the visitor propagates
    /// immediately, abandoning the rest of the traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1].iter().copied().collect();
    ///
    /// let mut sorted = Vec::new();
    /// tree.in_order_traversal(|&element| sorted.push(element));
    ///
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.in_order(&mut visit);
        }
    }
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// Inserts into the subtree rooted at `subtree`, creating the node in
    /// place if the slot is empty. Returns whether a node was created.
    fn insert_into(subtree: &mut Option<Box<Self>>, element: T) -> bool
    where
        T: Ord,
    {
        match subtree {
            None => {
                *subtree = Some(Box::new(Self::new(element)));
                true
            }
            Some(node) => match element.cmp(&node.element) {
                Ordering::Less => Self::insert_into(&mut node.left, element),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert_into(&mut node.right, element),
            },
        }
    }

    /// How many nodes are on the longest path from this node down to a
    /// leaf, counting this node. A leaf has height 1.
    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height());
        let right = self.right.as_ref().map_or(0, |node| node.height());
        left.max(right) + 1
    }

    fn in_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.in_order(visit);
        }
        visit(&self.element);
        if let Some(right) = &self.right {
            right.in_order(visit);
        }
    }
}

impl<T> Drop for Tree<T> {
    /// Stack based drop so that dropping a degenerate (chain shaped) tree
    /// cannot overflow the call stack.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.in_order_traversal(|element| {
            set.entry(element);
        });
        set.finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting the elements one at a time, in iteration
    /// order. Duplicates are silently dropped per the `insert` contract.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    /// # Examples
    ///
    /// ```
    /// use bst_set::recursive::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8, 3, 1]);
    /// assert_eq!(tree.size(), 4);
    /// ```
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`. This way we
    /// can ensure that after a random smattering of inserts and lookups the
    /// two hold the same elements in the same order.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Copy + Ord,
    {
        for op in ops {
            match op {
                Op::Insert(element) => {
                    assert_eq!(bst.insert(*element), set.insert(*element));
                }
                Op::Contains(element) => {
                    assert_eq!(bst.contains(element), set.contains(element));
                }
                Op::Traverse => {
                    let mut visited = Vec::new();
                    bst.in_order_traversal(|&element| visited.push(element));
                    assert!(visited.iter().eq(set.iter()));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.size() == set.len() && set.iter().all(|element| tree.contains(element))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn size_counts_distinct_elements(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let distinct: BTreeSet<_> = xs.into_iter().collect();

            tree.size() == distinct.len()
        }
    }
}
