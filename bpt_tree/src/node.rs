//! B+ tree node types / B+ 树节点类型

/// Node id inside the tree arena / 树节点池内的节点编号
pub type NodeId = u32;

/// Exact position of a key: leaf node and in-leaf slot
/// 键的精确位置：叶子节点与叶内槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
  pub node: NodeId,
  pub slot: usize,
}

/// Internal node: separator keys and child ids
/// 内部节点：分隔键与子节点编号
#[derive(Debug, Clone)]
pub struct Internal<K> {
  pub keys: Vec<K>,
  pub children: Vec<NodeId>,
}

/// Leaf node: keys and forward link to the next leaf in key order
/// 叶子节点：键与指向下一叶子的前向链接
#[derive(Debug, Clone)]
pub struct Leaf<K> {
  pub keys: Vec<K>,
  pub next: Option<NodeId>,
}

/// Node enum / 节点枚举
#[derive(Debug, Clone)]
pub enum Node<K> {
  Internal(Internal<K>),
  Leaf(Leaf<K>),
}

impl<K> Default for Internal<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> Internal<K> {
  pub fn new() -> Self {
    Self {
      keys: Vec::new(),
      children: Vec::new(),
    }
  }
}

impl<K: Copy + Ord> Internal<K> {
  /// Child index for key descent: equal keys route right
  /// 键下降的子节点索引：相等键走右侧
  pub fn find_child(&self, key: K) -> usize {
    match self.keys.binary_search(&key) {
      Ok(i) => i + 1,
      Err(i) => i,
    }
  }

  /// Insert a separator and its right child where child `idx` split;
  /// with duplicate keys this keeps siblings in chain order, which a
  /// by-value position would not.
  /// 在第 `idx` 个子节点分裂处插入分隔键及其右子节点；存在重复键时按值
  /// 定位会破坏兄弟的链序，按下标则保持。
  pub fn insert_pair(&mut self, idx: usize, key: K, right: NodeId) {
    self.keys.insert(idx, key);
    self.children.insert(idx + 1, right);
  }
}

impl<K> Default for Leaf<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> Leaf<K> {
  pub fn new() -> Self {
    Self {
      keys: Vec::new(),
      next: None,
    }
  }
}

impl<K: Copy + Ord> Leaf<K> {
  /// Find key slot, None if absent / 查找键槽位，不存在返回 None
  pub fn find(&self, key: K) -> Option<usize> {
    self.keys.binary_search(&key).ok()
  }

  /// Insert keeping order; an equal key lands after the existing ones
  /// 保序插入；相等键排在已有键之后
  pub fn insert(&mut self, key: K) {
    let i = self.keys.partition_point(|k| *k <= key);
    self.keys.insert(i, key);
  }
}

impl<K> Node<K> {
  pub fn is_leaf(&self) -> bool {
    matches!(self, Node::Leaf(_))
  }

  /// Keys held by this node / 节点持有的键数
  pub fn key_count(&self) -> usize {
    match self {
      Node::Internal(n) => n.keys.len(),
      Node::Leaf(n) => n.keys.len(),
    }
  }

  pub(crate) fn as_leaf(&self) -> &Leaf<K> {
    match self {
      Node::Leaf(n) => n,
      Node::Internal(_) => unreachable!("leaf expected"),
    }
  }

  pub(crate) fn as_leaf_mut(&mut self) -> &mut Leaf<K> {
    match self {
      Node::Leaf(n) => n,
      Node::Internal(_) => unreachable!("leaf expected"),
    }
  }

  pub(crate) fn as_internal_mut(&mut self) -> &mut Internal<K> {
    match self {
      Node::Internal(n) => n,
      Node::Leaf(_) => unreachable!("internal expected"),
    }
  }
}
