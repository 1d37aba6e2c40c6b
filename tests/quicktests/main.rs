extern crate quickcheck;
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod tree;

use bidtree::Bid;
use quickcheck::{Arbitrary, Gen};

/// Keys are drawn from a small range so duplicates and misses both happen.
const KEY_RANGE: u8 = 32;

fn key(k: u8) -> String {
    (k % KEY_RANGE).to_string()
}

/// A random bid. `Bid` lives in another crate so it needs a wrapper.
#[derive(Clone, Debug)]
pub(crate) struct ArbBid(pub(crate) Bid);

impl Arbitrary for ArbBid {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(Bid::new(
            key(u8::arbitrary(g)),
            String::arbitrary(g),
            String::arbitrary(g),
            f64::from(u16::arbitrary(g)),
        ))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let bid = self.0.clone();
        Box::new(
            self.0
                .title
                .shrink()
                .map(move |title| Self(Bid { title, ..bid.clone() })),
        )
    }
}

/// An enum for the various kinds of "things" to do to the tree in a
/// quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Insert the bid.
    Insert(ArbBid),
    /// Remove the key.
    Remove(String),
    /// Look the key up.
    Search(String),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(ArbBid::arbitrary(g)),
            1 => Op::Remove(key(u8::arbitrary(g))),
            2 => Op::Search(key(u8::arbitrary(g))),
            _ => unreachable!(),
        }
    }
}
