use bst_set::recursive::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn traversal_is_sorted_and_complete(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted: BTreeSet<_> = xs.into_iter().collect();

    let mut visited = Vec::new();
    tree.in_order_traversal(|&x| visited.push(x));

    visited.len() == tree.size() && visited.iter().eq(sorted.iter())
}

#[quickcheck]
fn depth_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    if tree.size() == 0 {
        tree.depth() == 0
    } else {
        tree.depth() <= tree.size() - 1
    }
}

#[quickcheck]
fn depth_of_a_chain_is_size_minus_one(len: u8) -> bool {
    let tree: Tree<_> = (0..len).collect();

    if len == 0 {
        tree.depth() == 0
    } else {
        tree.depth() == usize::from(len) - 1
    }
}
