//! Ancestor-aware traversal.
//!
//! Each visited node carries a borrowed reference to its parent's visit, so
//! ancestor queries need no parent pointers in the tree itself.

use super::types::{Node, NodeRef};

pub struct Visit<'t, 'p> {
    pub node: NodeRef<'t>,
    pub parent: Option<&'p Visit<'t, 'p>>,
}

impl<'t, 'p> Visit<'t, 'p> {
    /// Ancestors from the nearest parent up to the root.
    pub fn ancestors(&self) -> Ancestors<'t, 'p> {
        Ancestors { next: self.parent }
    }
}

pub struct Ancestors<'t, 'p> {
    next: Option<&'p Visit<'t, 'p>>,
}

impl<'t, 'p> Iterator for Ancestors<'t, 'p> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<NodeRef<'t>> {
        let visit = self.next?;
        self.next = visit.parent;
        Some(visit.node)
    }
}

/// Pre-order traversal of every node under `root`, root included.
pub fn walk<'t, F>(root: &'t Node, mut f: F)
where
    F: FnMut(&Visit<'t, '_>),
{
    let visit = Visit {
        node: root.as_node_ref(),
        parent: None,
    };
    walk_visit(&visit, &mut f);
}

fn walk_visit<'t, F>(visit: &Visit<'t, '_>, f: &mut F)
where
    F: FnMut(&Visit<'t, '_>),
{
    f(visit);
    for child in visit.node.children() {
        let child_visit = Visit {
            node: child,
            parent: Some(visit),
        };
        walk_visit(&child_visit, f);
    }
}
