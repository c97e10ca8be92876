// cargo run --release --example tree_iteration

use orx_lazy_seq::*;
use rand::Rng;

struct Node {
    value: u64,
    children: Vec<Node>,
}

fn fibonacci(n: u64) -> u64 {
    let n = n % 42; // let's not overflow
    let mut a = 0;
    let mut b = 1;
    for _ in 0..n {
        let c = a + b;
        a = b;
        b = c;
    }
    a
}

impl Node {
    fn new(rng: &mut impl Rng, value: u64) -> Self {
        let num_children = match value {
            0 => 0,
            n => rng.random_range(0..(n as usize)),
        };
        let children = (0..num_children)
            .map(|i| Self::new(rng, i as u64))
            .collect();
        Self { value, children }
    }

    fn num_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|node| node.num_nodes())
            .sum::<usize>()
    }
}

/// Nodes in depth-first pre-order; children of a node are expanded only once the
/// traversal reaches them.
fn lazy_nodes<'a>(node: &'a Node) -> Seq<'a, &'a Node> {
    let children = Seq::lazy(&node.children).flat_map(|child: &'a Node| Some(lazy_nodes(child)));
    seq![node].chain(children)
}

/// Nodes in the same order, with every sub-sequence scheduled upfront so that the
/// number of nodes is known before traversal.
fn sized_nodes<'a>(node: &'a Node) -> Seq<'a, &'a Node> {
    let children = Seq::of(&node.children).flat_map(|child: &'a Node| Some(sized_nodes(child)));
    seq![node].chain(children)
}

fn main() -> Result<()> {
    let mut rng = rand::rng();
    let root = Node::new(&mut rng, 100);

    println!("Tree has {} nodes", root.num_nodes());
    println!("Size of the scheduled traversal = {:?}", sized_nodes(&root).size());

    let total_fibonacci: u64 = lazy_nodes(&root)
        .map(|node: &Node| fibonacci(node.value))
        .into_iter()
        .sum();
    println!("Sum of Fibonacci numbers of all node values = {total_fibonacci}");

    let num_leaves = lazy_nodes(&root)
        .filter(|node: &&Node| node.children.is_empty())
        .count();
    println!("Number of leaves = {num_leaves}");

    let first_large = lazy_nodes(&root)
        .skip(1)?
        .map(|node: &Node| node.value)
        .filter(|value: &u64| *value > 50)
        .find_first();
    println!("First value above 50 below the root = {first_large:?}");

    Ok(())
}
