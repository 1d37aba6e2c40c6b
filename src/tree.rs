//! An unbalanced BST of [`Bid`]s keyed by their string `id`.
//!
//! Keys that compare equal are always sent to the right, so the tree only
//! keeps the weak invariant `left <= node <= right`. Nothing is ever
//! rebalanced: inserting sorted keys produces a linked list.
//!
//! Removal is deliberately *not* textbook BST deletion. It finds the parent of
//! the target, never the target itself, and then overwrites both of the
//! parent's links with the target's children. See [`Tree::remove`].
//!
//! # Examples
//!
//! ```
//! use bidtree::{Bid, Removal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search("98109"), None);
//!
//! tree.insert(Bid::new("98109", "Chair", "General Fund", 12.5));
//! tree.insert(Bid::new("98110", "Desk", "General Fund", 80.0));
//! assert_eq!(tree.search("98110").map(|b| b.amount), Some(80.0));
//!
//! // Removing a child of the root hands back the bid.
//! match tree.remove("98110") {
//!     Removal::Removed(bid) => assert_eq!(bid.title, "Desk"),
//!     other => panic!("unexpected {:?}", other),
//! }
//!
//! // The root itself can never be removed.
//! assert_eq!(tree.remove("98109"), Removal::NotFound);
//! assert!(tree.search("98109").is_some());
//! ```

use std::mem;

use tracing::{debug, trace};

use crate::bid::Bid;

type Link = Option<Box<Node>>;

/// The outcome of [`Tree::remove`].
#[derive(Debug, PartialEq)]
pub enum Removal {
    /// No parent of the key was found so nothing was removed. This is also the
    /// outcome for a key stored at the root.
    NotFound,
    /// A parent was located but the side that gets checked did not hold the
    /// key, so the tree is untouched.
    Unmatched,
    /// The node holding this bid was excised.
    Removed(Bid),
}

/// A Binary Search Tree of bids. This can be used for inserting, searching,
/// and removing bids by id, and for visiting them in three orders.
#[derive(Debug, Default)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no bids.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a bid. This never fails and never replaces: a bid whose id is
    /// already present is stored to the right of the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidtree::{Bid, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Bid::new("1", "first", "F", 1.0));
    /// tree.insert(Bid::new("1", "second", "F", 2.0));
    ///
    /// // The earlier bid shadows the later one.
    /// assert_eq!(tree.search("1").map(|b| b.title.as_str()), Some("first"));
    /// ```
    pub fn insert(&mut self, bid: Bid) {
        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                trace!(id = %bid.id, "inserting root");
                self.root = Some(Node::new_boxed(bid));
                return;
            }
        };

        loop {
            let slot = if bid.id < node.bid.id {
                &mut node.left
            } else {
                &mut node.right
            };
            match slot {
                Some(child) => node = &mut **child,
                None => {
                    trace!(id = %bid.id, "inserting leaf");
                    *slot = Some(Node::new_boxed(bid));
                    return;
                }
            }
        }
    }

    /// Finds the bid stored under `id`. When the key was inserted more than
    /// once, the earliest occurrence is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidtree::{Bid, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Bid::new("50", "fifty", "F", 50.0));
    ///
    /// assert!(tree.search("50").is_some());
    /// assert_eq!(tree.search("42"), None);
    /// ```
    pub fn search(&self, id: &str) -> Option<&Bid> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            let key = node.bid.id.as_str();
            if key == id {
                return Some(&node.bid);
            }

            current = match (node.left.as_deref(), node.right.as_deref()) {
                (Some(left), _) if key > id => Some(left),
                (_, Some(right)) if key < id => Some(right),
                _ => None,
            };
        }

        None
    }

    /// Removes the node holding `id` by relinking its parent.
    ///
    /// This reproduces a particular, lossy algorithm:
    ///
    /// 1. The *parent* of the target is located. The root is never compared
    ///    against `id`, so a key stored at the root is reported as
    ///    [`Removal::NotFound`].
    /// 2. If the parent has a left child, only the left child is checked. A
    ///    matching right child next to a non-matching left child is left alone
    ///    and [`Removal::Unmatched`] is returned.
    /// 3. The excised node's left and right children overwrite *both* of the
    ///    parent's links. When the target was the left child, whatever the
    ///    parent had on its right is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidtree::{Bid, Removal, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for id in ["50", "30", "70"] {
    ///     tree.insert(Bid::new(id, "", "", 0.0));
    /// }
    ///
    /// // "70" sits next to a left sibling that doesn't match.
    /// assert_eq!(tree.remove("70"), Removal::Unmatched);
    ///
    /// // Removing "30" also takes "70" with it.
    /// assert!(matches!(tree.remove("30"), Removal::Removed(_)));
    /// assert_eq!(tree.search("70"), None);
    /// ```
    pub fn remove(&mut self, id: &str) -> Removal {
        let parent = match self.root.as_deref_mut().and_then(|root| root.parent_of(id)) {
            Some(parent) => parent,
            None => {
                debug!(id, "no parent found for removal");
                return Removal::NotFound;
            }
        };

        // Only the left child is checked when there is one.
        let excised = match parent.left.as_ref().map(|left| left.bid.id == id) {
            Some(true) => parent.left.take(),
            Some(false) => None,
            None if parent.right.as_ref().is_some_and(|right| right.bid.id == id) => {
                parent.right.take()
            }
            None => None,
        };

        match excised {
            Some(mut node) => {
                debug!(id, parent = %parent.bid.id, "excising node");
                parent.left = node.left.take();
                // The parent's old right subtree is released here when the
                // excised node came from the left.
                parent.right = node.right.take();
                Removal::Removed(mem::take(&mut node.bid))
            }
            None => {
                debug!(id, parent = %parent.bid.id, "parent located but child did not match");
                Removal::Unmatched
            }
        }
    }

    /// Visits every bid in ascending key order: left subtree, node, right
    /// subtree.
    ///
    /// ```
    /// use bidtree::{Bid, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for id in ["b", "a", "c"] {
    ///     tree.insert(Bid::new(id, "", "", 0.0));
    /// }
    ///
    /// let mut ids = Vec::new();
    /// tree.in_order(|bid| ids.push(bid.id.clone()));
    /// assert_eq!(ids, ["a", "b", "c"]);
    /// ```
    pub fn in_order<F>(&self, mut sink: F)
    where
        F: FnMut(&Bid),
    {
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut sink);
        }
    }

    /// Visits each node before its left subtree, then its right subtree.
    pub fn pre_order<F>(&self, mut sink: F)
    where
        F: FnMut(&Bid),
    {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut sink);
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn post_order<F>(&self, mut sink: F)
    where
        F: FnMut(&Bid),
    {
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut sink);
        }
    }
}

/// Which way [`Node::parent_of`] should go next.
enum Step {
    /// This node is the parent.
    Here,
    Left,
    Right,
    /// The search for a parent failed.
    Nowhere,
}

/// A `Node` owns a bid and up to two children. Children are owned
/// exclusively by their parent so there are no back pointers.
#[derive(Debug)]
struct Node {
    bid: Bid,
    left: Link,
    right: Link,
}

/// Tears the subtree down with an explicit stack. A skewed tree is as deep as
/// it is large, so the default recursive drop could overflow the call stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            // `node` now has no children so dropping it doesn't recurse.
        }
    }
}

impl Node {
    fn new_boxed(bid: Bid) -> Box<Self> {
        Box::new(Self {
            bid,
            left: None,
            right: None,
        })
    }

    /// Walks down from this node until it reaches the node whose child might
    /// hold `id`. This node's own key is only used for steering.
    fn parent_of(&mut self, id: &str) -> Option<&mut Node> {
        let mut node = self;
        loop {
            match node.step_toward_parent(id) {
                Step::Here => return Some(node),
                Step::Left => node = node.left.as_deref_mut()?,
                Step::Right => node = node.right.as_deref_mut()?,
                Step::Nowhere => return None,
            }
        }
    }

    fn step_toward_parent(&self, id: &str) -> Step {
        let key = self.bid.id.as_str();
        match (&self.left, &self.right) {
            (Some(left), right) => {
                if left.bid.id == id {
                    return Step::Here;
                }
                if key > id {
                    return Step::Left;
                }
                match right {
                    Some(right) if right.bid.id == id => Step::Here,
                    Some(_) if key < id => Step::Right,
                    _ => Step::Nowhere,
                }
            }
            (None, Some(right)) => {
                if right.bid.id == id {
                    Step::Here
                } else if key < id {
                    Step::Right
                } else {
                    // A right-only node that can't lead anywhere still counts
                    // as the parent. Removal then finds no match under it.
                    Step::Here
                }
            }
            (None, None) => Step::Nowhere,
        }
    }

    fn in_order(&self, sink: &mut impl FnMut(&Bid)) {
        if let Some(left) = &self.left {
            left.in_order(sink);
        }
        sink(&self.bid);
        if let Some(right) = &self.right {
            right.in_order(sink);
        }
    }

    fn pre_order(&self, sink: &mut impl FnMut(&Bid)) {
        sink(&self.bid);
        if let Some(left) = &self.left {
            left.pre_order(sink);
        }
        if let Some(right) = &self.right {
            right.pre_order(sink);
        }
    }

    fn post_order(&self, sink: &mut impl FnMut(&Bid)) {
        if let Some(left) = &self.left {
            left.post_order(sink);
        }
        if let Some(right) = &self.right {
            right.post_order(sink);
        }
        sink(&self.bid);
    }
}
