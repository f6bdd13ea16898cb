use std::fmt::{Display, Formatter, Result};

use crate::node::NodeRef;

/// A [Graphviz] DOT rendering of an [`AvlTree`](crate::AvlTree), created by
/// [`AvlTree::dot()`](crate::AvlTree::dot).
///
/// Each node is labelled with its value and height. Absent children are
/// rendered as invisible points so left and right children remain visually
/// distinct.
///
/// [Graphviz]: https://graphviz.org/
#[derive(Debug)]
pub struct Dot<'a, T> {
    root: Option<NodeRef<'a, T>>,
}

impl<'a, T> Dot<'a, T> {
    pub(crate) fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self { root }
    }
}

impl<T> Display for Dot<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"node [shape = record;];"#)?;
        if let Some(root) = self.root {
            recurse(root, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<T>(n: NodeRef<'_, T>, f: &mut Formatter<'_>) -> Result
where
    T: Display,
{
    writeln!(
        f,
        r#""{}" [label="{} | h={}"];"#,
        n.value(),
        n.value(),
        n.height(),
    )?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(f, "\"{}\" -> \"{}\";", n.value(), v.value())?;
                recurse(v, f)?;
            }
            None => {
                writeln!(f, "\"null_{}\" [shape=point,style=invis];", n.value())?;
                writeln!(f, "\"{}\" -> \"null_{}\" [style=invis];", n.value(), n.value())?;
            }
        };
    }

    Ok(())
}
