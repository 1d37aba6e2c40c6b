use bidtree::{Bid, Removal, Tree};

use std::collections::HashSet;

use crate::{ArbBid, Op};

fn build(bids: &[ArbBid]) -> Tree {
    let mut tree = Tree::new();
    for ArbBid(bid) in bids {
        tree.insert(bid.clone());
    }
    tree
}

fn in_order_ids(tree: &Tree) -> Vec<String> {
    let mut ids = Vec::new();
    tree.in_order(|bid| ids.push(bid.id.clone()));
    ids
}

fn count(tree: &Tree) -> usize {
    let mut n = 0;
    tree.pre_order(|_| n += 1);
    n
}

#[quickcheck]
fn in_order_is_sorted(bids: Vec<ArbBid>) -> bool {
    let ids = in_order_ids(&build(&bids));
    ids.len() == bids.len() && ids.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn traversals_visit_every_bid_once(bids: Vec<ArbBid>) -> bool {
    let tree = build(&bids);

    let mut expected: Vec<String> = bids.iter().map(|ArbBid(b)| b.id.clone()).collect();
    expected.sort();

    let mut pre = Vec::new();
    tree.pre_order(|bid| pre.push(bid.id.clone()));
    let mut post = Vec::new();
    tree.post_order(|bid| post.push(bid.id.clone()));

    // The first insert is the root: first in pre-order, last in post-order.
    let root = bids.first().map(|ArbBid(b)| b.id.clone());
    let root_ok = pre.first().cloned() == root && post.last().cloned() == root;

    pre.sort();
    post.sort();
    root_ok && pre == expected && post == expected && in_order_ids(&tree) == expected
}

#[quickcheck]
fn search_returns_first_occurrence(bids: Vec<ArbBid>) -> bool {
    let tree = build(&bids);

    bids.iter().all(|ArbBid(bid)| {
        let first = bids.iter().map(|ArbBid(b)| b).find(|b| b.id == bid.id);
        tree.search(&bid.id) == first
    })
}

#[quickcheck]
fn search_misses_absent_keys(bids: Vec<ArbBid>, keys: Vec<u16>) -> bool {
    let tree = build(&bids);
    let present: HashSet<&str> = bids.iter().map(|ArbBid(b)| b.id.as_str()).collect();

    keys.iter()
        .map(|p| p.to_string())
        .filter(|p| !present.contains(p.as_str()))
        .all(|p| tree.search(&p).is_none())
}

#[quickcheck]
fn removing_absent_keys_changes_nothing(bids: Vec<ArbBid>, keys: Vec<u16>) -> bool {
    let mut tree = build(&bids);
    let before = in_order_ids(&tree);
    let present: HashSet<String> = bids.iter().map(|ArbBid(b)| b.id.clone()).collect();

    for key in keys.iter().map(|p| p.to_string()) {
        // A right-only parent can still be located for an absent key, which
        // reports `Unmatched` instead of `NotFound`.
        if !present.contains(&key) && matches!(tree.remove(&key), Removal::Removed(_)) {
            return false;
        }
    }
    in_order_ids(&tree) == before
}

#[quickcheck]
fn root_is_never_removed(bids: Vec<ArbBid>) -> bool {
    let mut tree = build(&bids);
    match bids.first() {
        Some(ArbBid(root)) => {
            tree.remove(&root.id);
            tree.search(&root.id) == Some(root)
        }
        None => tree.remove("0") == Removal::NotFound,
    }
}

/// Applies random operations and checks that every removal outcome is
/// consistent with how the tree changed.
#[quickcheck]
fn removal_outcomes_match_tree_changes(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut inserted: Vec<Bid> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(ArbBid(bid)) => {
                inserted.push(bid.clone());
                tree.insert(bid);
            }
            Op::Remove(key) => {
                let before = in_order_ids(&tree);
                let size = count(&tree);
                match tree.remove(&key) {
                    Removal::Removed(bid) => {
                        if bid.id != key || count(&tree) >= size || !inserted.contains(&bid) {
                            return false;
                        }
                    }
                    Removal::NotFound | Removal::Unmatched => {
                        if in_order_ids(&tree) != before {
                            return false;
                        }
                    }
                }
            }
            Op::Search(key) => {
                if let Some(bid) = tree.search(&key) {
                    if bid.id != key || !inserted.contains(bid) {
                        return false;
                    }
                }
            }
        }
    }

    true
}
