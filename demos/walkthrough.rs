//! Builds a small tree, printing its shape after every insert and delete.
//!
//! Rotations are logged at trace level.

use avltree::AvlTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger already initialised");

    let mut tree = AvlTree::new();

    for v in [5, 10, 14, 2, 3, 4] {
        tree.insert(v);
        println!("insert {v}: {tree}");
    }

    let parent = tree.search(&4).and_then(|v| v.parent());
    println!("parent of 4: {:?}", parent.map(|v| *v.value()));

    println!("==============================");

    for v in [5, 2, 1, 4, 3, 10] {
        let removed = tree.delete(&v);
        println!("delete {v} (removed {removed:?}): {tree}");
    }

    println!("{}", tree.dot());
}
