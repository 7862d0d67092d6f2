//! In-memory B+ tree index / 内存 B+ 树索引
//!
//! Point search, single-key insert with split-based rebalancing, and
//! one-pass bulk construction from a sorted sequence. The key itself is
//! the indexed datum; leaves are chained for ordered traversal.
//! 点查、基于分裂再平衡的单键插入、由有序序列单趟批量构建。
//! 键本身即被索引的数据；叶子相互链接以支持有序遍历。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use bpt_tree::Tree;
//!
//! let mut tree = Tree::new(2).unwrap();
//! for k in [10u64, 20, 30, 40, 25] {
//!   tree.insert(k);
//! }
//! assert!(tree.get(25).is_some());
//! assert!(tree.get(35).is_none());
//! assert_eq!(tree.height(), 2);
//!
//! let keys: Vec<u64> = (1..=100).collect();
//! let bulk = Tree::bulk_load(2, &keys).unwrap();
//! assert!(bulk.avg_fill() >= 0.5);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bulk;
mod dump;
mod error;
mod node;
mod stat;
mod tree;

pub use error::{Error, Result};
pub use node::{Internal, Leaf, Location, Node, NodeId};
pub use stat::TreeStats;
pub use tree::{Keys, Tree};
