//! Renders a tree sideways as indented text, one key per line, with
//! box-drawing connectors. Reads only the public `(key, left, right)`
//! shape and never mutates.

use std::fmt;

use crate::tree::{Node, Tree};

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root() {
            fmt_node(root, "", true, f)?;
        }
        Ok(())
    }
}

/// Right subtree above, key, left subtree below, so the printout reads as
/// the tree rotated a quarter turn counterclockwise.
fn fmt_node<K: fmt::Display>(
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        fmt_node(right, &deeper, false, f)?;
    }
    writeln!(f, "{}{}{}", prefix, if is_left { "└── " } else { "┌── " }, node.key())?;
    if let Some(left) = node.left() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        fmt_node(left, &deeper, true, f)?;
    }
    Ok(())
}
