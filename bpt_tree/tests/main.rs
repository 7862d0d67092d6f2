//! B+ tree core tests / B+ 树核心测试

use aok::{OK, Void};
use bpt_tree::{Error, Node, Tree};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

/// Search on a just-initialized tree finds nothing
/// 刚初始化的树上搜索不到任何键
#[test]
fn empty_tree() -> Void {
  let tree: Tree<u64> = Tree::new(2)?;
  assert!(tree.get(0).is_none());
  assert!(tree.get(42).is_none());
  assert!(tree.is_empty());
  assert_eq!(tree.height(), 1);
  assert_eq!(tree.iter().count(), 0);
  tree.validate()?;
  OK
}

#[test]
fn order_zero_rejected() {
  assert!(matches!(Tree::<u64>::new(0), Err(Error::InvalidOrder(0))));
  assert!(Tree::<u64>::bulk_load(0, &[1]).is_err());
}

/// Inserting 10, 20, 30, 40, 25 at order 2: the fifth key overflows the
/// root leaf, one split yields two leaves under a fresh root whose only
/// separator is the right sibling's first key.
/// 以阶 2 插入 10, 20, 30, 40, 25：第五个键使根叶溢出，一次分裂产生两个
/// 叶子和一个新根，根的唯一分隔键等于右兄弟的首键。
#[test]
fn first_split() -> Void {
  let mut tree = Tree::new(2)?;
  for k in [10u64, 20, 30, 40] {
    tree.insert(k);
  }
  assert_eq!(tree.height(), 1);

  tree.insert(25);
  assert_eq!(tree.height(), 2);

  let s = tree.stats();
  assert_eq!(s.leaves, 2);
  assert_eq!(s.nodes, 3);

  match tree.node(tree.root()) {
    Node::Internal(n) => assert_eq!(n.keys, vec![25]),
    Node::Leaf(_) => panic!("root should be internal after the split"),
  }
  for k in [10u64, 20, 25, 30, 40] {
    assert!(tree.get(k).is_some(), "key {k}");
  }
  tree.validate()?;
  OK
}

#[test]
fn dump_shape() -> Void {
  let mut tree = Tree::new(2)?;
  for k in [10u64, 20, 30, 40, 25] {
    tree.insert(k);
  }
  let expect = concat!(
    "Internal [ 25 ]\n",
    "    Leaf [ 10 20 ] -> next\n",
    "    Leaf [ 25 30 40 ]\n",
  );
  assert_eq!(tree.dump(), expect);
  OK
}

/// get never mutates: structural snapshots match before and after
/// get 绝不修改：前后结构快照一致
#[test]
fn get_is_read_only() -> Void {
  let mut tree = Tree::new(3)?;
  for k in [5u64, 1, 9, 7, 3, 8, 2, 6, 4] {
    tree.insert(k);
  }
  let shape = tree.dump();
  let stats = tree.stats();

  assert!(tree.get(7).is_some());
  assert!(tree.get(100).is_none());

  assert_eq!(tree.dump(), shape);
  assert_eq!(tree.stats(), stats);
  OK
}

/// Every inserted key is found, absent keys are not, and the leaf chain
/// yields the full inserted multiset in order.
/// 插入的键都能找到，未插入的找不到，叶链按序产出完整的插入多重集合。
#[test]
fn round_trip() -> Void {
  let mut rng = fastrand::Rng::with_seed(7);
  let mut tree = Tree::new(2)?;
  let mut inserted = Vec::new();
  for _ in 0..2000 {
    let k = rng.u64(..1000);
    tree.insert(k);
    inserted.push(k);
  }
  tree.validate()?;
  info!("> round_trip: {} keys, height {}", tree.len(), tree.height());

  for &k in &inserted {
    assert!(tree.get(k).is_some(), "key {k}");
  }
  for k in 1000..1100u64 {
    assert!(tree.get(k).is_none(), "key {k}");
  }

  inserted.sort_unstable();
  let walked: Vec<u64> = tree.iter().collect();
  assert_eq!(walked, inserted);
  OK
}

/// Duplicates occupy their own slots (multiset semantics)
/// 重复键各占一个槽位（多重集合语义）
#[test]
fn duplicate_keys() -> Void {
  let mut tree = Tree::new(2)?;
  for _ in 0..50 {
    tree.insert(7u64);
  }
  tree.insert(3);
  tree.insert(9);
  tree.validate()?;

  assert_eq!(tree.len(), 52);
  assert!(tree.get(7).is_some());
  assert_eq!(tree.iter().filter(|&k| k == 7).count(), 50);
  assert_eq!(tree.iter().next(), Some(3));
  assert_eq!(tree.iter().last(), Some(9));
  OK
}
