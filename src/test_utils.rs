//! Object graph fixtures for tests and benchmarks.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::OnceCell;
use std::rc::Rc;

use crate::inspect::{Inspect, Shape, Slot};
use crate::tree::Node;

/// A singly linked node whose successor can be set once, which is enough to
/// close a cycle.
pub struct Link {
    pub name: String,
    pub weight: u32,
    pub next: OnceCell<Rc<Link>>,
}

impl Link {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            weight: 1,
            next: OnceCell::new(),
        })
    }

    /// Point this link at `next`. Returns false if it already had a successor.
    pub fn link(&self, next: &Rc<Link>) -> bool {
        self.next.set(Rc::clone(next)).is_ok()
    }
}

impl Inspect for Link {
    fn shape(&self) -> Shape<'_> {
        Shape::composite([
            Slot::field("next", &self.next),
            Slot::field("weight", &self.weight),
            Slot::field("name", &self.name),
        ])
    }
}

/// Two slots that may reference the same link.
pub struct Pair {
    pub left: Option<Rc<Link>>,
    pub right: Option<Rc<Link>>,
}

impl Inspect for Pair {
    fn shape(&self) -> Shape<'_> {
        Shape::composite([
            Slot::field("right", &self.right),
            Slot::field("left", &self.left),
        ])
    }
}

/// A list of `len` links named `n0`, `n1`, ...; returns the head.
pub fn chain(len: usize) -> Option<Rc<Link>> {
    let mut head: Option<Rc<Link>> = None;
    for i in (0..len).rev() {
        let link = Link::new(&format!("n{}", i));
        if let Some(next) = &head {
            link.link(next);
        }
        head = Some(link);
    }
    head
}

/// Links named after `names`, each pointing at the next and the last back at
/// the first.
pub fn cycle(names: &[&str]) -> Option<Rc<Link>> {
    let links: Vec<Rc<Link>> = names.iter().map(|name| Link::new(name)).collect();
    for (current, next) in links.iter().zip(links.iter().cycle().skip(1)) {
        current.link(next);
    }
    links.first().cloned()
}

/// Estimator charging every object the same number of bytes.
pub fn fixed_size(bytes: u64) -> impl Fn(&dyn Inspect) -> u64 {
    move |_: &dyn Inspect| bytes
}

/// Check `deep == shallow + sum(children deep)` at every node.
pub fn deep_sizes_add_up(node: &Node) -> bool {
    let children: u64 = node.children().iter().map(Node::deep_size).sum();
    node.deep_size() == node.shallow_size() + children
        && node.children().iter().all(deep_sizes_add_up)
}
