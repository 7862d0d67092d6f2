//! Example runs for the B+ tree: insert walkthrough, scattered insert
//! order, bulk load, and the sequential-fill limitation.
//!
//! Pick one with `cargo run --example demo -- <1..=4>`, or run all.

use bpt_tree::Tree;

fn main() {
  let pick: Option<u32> = std::env::args().nth(1).and_then(|a| a.parse().ok());
  match pick {
    Some(1) => basic(),
    Some(2) => scattered(),
    Some(3) => bulk(),
    Some(4) => sequential(),
    Some(n) => eprintln!("no example {n}, pick 1..=4"),
    None => {
      basic();
      scattered();
      bulk();
      sequential();
    }
  }
}

fn probe(tree: &Tree<u64>, key: u64) {
  match tree.get(key) {
    Some(at) => println!("{key}: found in leaf {} slot {}", at.node, at.slot),
    None => println!("{key}: not found"),
  }
}

fn basic() {
  println!("=== Example 1: basic inserts ===");
  let mut tree = Tree::new(2).unwrap();
  for k in [10u64, 20, 30, 40, 50, 60, 70, 80, 90] {
    tree.insert(k);
    println!("\nafter inserting {k}:");
    print!("{}", tree.dump());
  }
  println!();
  for k in [30u64, 50, 90, 100] {
    probe(&tree, k);
  }
}

fn scattered() {
  println!("\n=== Example 2: scattered insert order ===");
  let mut tree = Tree::new(2).unwrap();
  for k in (3u64..=99).step_by(3) {
    tree.insert(k);
  }
  for k in (1u64..=100).step_by(3) {
    tree.insert(k);
  }
  for k in (2u64..=98).step_by(3) {
    tree.insert(k);
  }
  let s = tree.stats();
  println!(
    "{} keys, height {}, {} nodes, avg fill {:.2}",
    s.keys, s.height, s.nodes, s.fill
  );
  print!("{}", tree.dump());
}

fn bulk() {
  println!("\n=== Example 3: bulk load 1..=100 ===");
  let keys: Vec<u64> = (1..=100).collect();
  let tree = Tree::bulk_load(2, &keys).unwrap();
  print!("{}", tree.dump());
  let s = tree.stats();
  println!("height {}, {} leaves, avg fill {:.2}", s.height, s.leaves, s.fill);
  for k in [1u64, 50, 100, 101] {
    probe(&tree, k);
  }
}

fn sequential() {
  println!("\n=== Example 4: ascending inserts vs bulk load ===");
  // One-by-one ascending inserts always split, so left siblings stay
  // half full; bulk load packs leaves before moving on.
  // 逐个升序插入总会触发分裂，左兄弟停留在半满；批量构建先填满叶子再前进。
  let keys: Vec<u64> = (1..=32).collect();
  let mut one_by_one = Tree::new(2).unwrap();
  for &k in &keys {
    one_by_one.insert(k);
  }
  let bulk = Tree::bulk_load(2, &keys).unwrap();

  println!("one-by-one: avg fill {:.2}", one_by_one.avg_fill());
  print!("{}", one_by_one.dump());
  println!("bulk load:  avg fill {:.2}", bulk.avg_fill());
  print!("{}", bulk.dump());
}
