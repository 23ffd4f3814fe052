//! Four-node walkthrough: build a tiny tree, credit rewards and visits,
//! and print how the children's UCB1 scores evolve.
//!
//! Run with `RUST_LOG=trace` to watch the propagation walks.

use uct_tree::{SearchTree, TreeError};

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let mut tree: SearchTree<()> = SearchTree::new();

    let s0 = tree.alloc(());
    let s1 = tree.alloc(());
    let s2 = tree.alloc(());

    tree.attach(s1, s0)?;
    tree.attach(s2, s0)?;

    // First rollout lands on s1: its sibling stays infinitely attractive
    tree.credit_reward(s1, 20.0);
    tree.record_visit(s1);
    println!("{:?}", tree.child_scores(s0));

    // Second rollout lands on s2: both children now score finitely
    tree.credit_reward(s2, 10.0);
    tree.record_visit(s2);
    println!("{:?}", tree.child_scores(s0));

    // A grandchild under s1: its visit propagates through s1 to the root,
    // shifting both children's exploration terms
    let s3 = tree.alloc(());
    tree.attach(s3, s1)?;
    tree.credit_reward(s3, 0.0);
    tree.record_visit(s3);
    println!("{:?}", tree.child_scores(s0));

    Ok(())
}
