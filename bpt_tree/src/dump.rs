//! ASCII rendering of the tree shape / 树形 ASCII 渲染

use std::fmt::{Display, Write};

use crate::{
  node::{Node, NodeId},
  tree::Tree,
};

impl<K: Copy + Ord + Display> Tree<K> {
  /// Render nodes depth-first, one per line, four spaces per level
  /// 深度优先逐行渲染节点，每层缩进四个空格
  pub fn dump(&self) -> String {
    let mut out = String::new();
    self.dump_node(self.root(), 0, &mut out);
    out
  }

  fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
    for _ in 0..depth {
      out.push_str("    ");
    }
    match self.node(id) {
      Node::Leaf(n) => {
        out.push_str("Leaf [ ");
        for k in &n.keys {
          let _ = write!(out, "{k} ");
        }
        out.push(']');
        if n.next.is_some() {
          out.push_str(" -> next");
        }
        out.push('\n');
      }
      Node::Internal(n) => {
        out.push_str("Internal [ ");
        for k in &n.keys {
          let _ = write!(out, "{k} ");
        }
        out.push_str("]\n");
        for &child in &n.children {
          self.dump_node(child, depth + 1, out);
        }
      }
    }
  }
}
