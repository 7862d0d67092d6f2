//! Bulk construction from a sorted key sequence / 由有序键序列批量构建

use crate::{
  Result,
  node::{Internal, Leaf, Node, NodeId},
  tree::Tree,
};

impl<K: Copy + Ord> Tree<K> {
  /// Build a tree from ascending `keys` in one forward pass
  /// 单趟正向扫描，由升序 `keys` 构建树
  ///
  /// Leaves are filled left to right and attached to the rightmost spine
  /// with the same split/propagate step as [`insert`](Tree::insert); no
  /// node is revisited once its right sibling exists.
  /// 叶子自左向右填充，经与 [`insert`](Tree::insert) 相同的分裂/上推步骤
  /// 挂到最右书脊上；任何节点在其右兄弟出现后不再被访问。
  ///
  /// Precondition: `keys` ascending (equal neighbors allowed). Unsorted
  /// input produces an undefined tree; only debug builds assert.
  /// 前置条件：`keys` 升序（允许相邻相等）。乱序输入产生未定义的树，
  /// 仅调试构建断言。
  pub fn bulk_load(order: usize, keys: &[K]) -> Result<Self> {
    debug_assert!(
      keys.windows(2).all(|w| w[0] <= w[1]),
      "bulk_load input not ascending"
    );

    let mut tree = Tree::new(order)?;
    if keys.is_empty() {
      return Ok(tree);
    }

    // Scaffold root: a keyless internal node the spine grows under
    // 脚手架根：无键内部节点，书脊在其下生长
    tree.nodes.clear();
    tree.root = tree.alloc(Node::Internal(Internal::new()));

    let mut prev: Option<NodeId> = None;
    for chunk in plan_leaves(keys, order) {
      let leaf = tree.alloc(Node::Leaf(Leaf {
        keys: chunk.to_vec(),
        next: None,
      }));
      match prev {
        None => {
          // First leaf: leftmost child, its lower bound stays implicit
          // 首叶：最左子节点，下界保持隐式
          tree
            .node_mut(tree.root)
            .as_internal_mut()
            .children
            .push(leaf);
        }
        Some(p) => {
          tree.node_mut(p).as_leaf_mut().next = Some(leaf);
          let spine = tree.rightmost_spine();
          tree.attach(spine, chunk[0], leaf);
        }
      }
      prev = Some(leaf);
    }

    // Collapse scaffolding left holding a single child and no key
    // 折叠仅剩单个子节点且无键的脚手架
    loop {
      let only = match tree.node(tree.root) {
        Node::Internal(n) if n.keys.is_empty() => Some(n.children[0]),
        _ => None,
      };
      match only {
        Some(child) => tree.root = child,
        None => break,
      }
    }

    tree.len = keys.len();
    Ok(tree)
  }

  /// Internal nodes along the rightmost edge with their last child index,
  /// root first
  /// 最右边缘上的内部节点及其末位子节点下标，根在前
  fn rightmost_spine(&self) -> Vec<(NodeId, usize)> {
    let mut spine = Vec::new();
    let mut cur = self.root;
    loop {
      match self.node(cur) {
        Node::Internal(n) => {
          let idx = n.children.len() - 1;
          spine.push((cur, idx));
          cur = n.children[idx];
        }
        Node::Leaf(_) => break,
      }
    }
    spine
  }
}

/// Plan leaf sizes: full `2B` groups, the tail rebalanced across the last
/// two leaves so no leaf drops below `B` keys.
/// 规划叶子大小：按 `2B` 满组切分，尾部在最后两叶间再平衡，
/// 任何叶子不少于 `B` 个键。
fn plan_leaves<K>(keys: &[K], order: usize) -> Vec<&[K]> {
  let max = order * 2;
  let n = keys.len();
  let full = n / max;
  let rem = n % max;

  let mut lens = vec![max; full];
  if rem > 0 {
    if rem >= order || full == 0 {
      lens.push(rem);
    } else {
      let total = max + rem;
      let left = total.div_ceil(2);
      lens[full - 1] = left;
      lens.push(total - left);
    }
  }

  let mut out = Vec::with_capacity(lens.len());
  let mut at = 0;
  for len in lens {
    out.push(&keys[at..at + len]);
    at += len;
  }
  out
}
