//! Error types / 错误类型

use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("invalid order: {0}")]
  InvalidOrder(usize),

  #[error("node {0}: {1} children for {2} keys")]
  ChildCount(NodeId, usize, usize),

  #[error("node {0}: keys out of order")]
  KeyOrder(NodeId),

  #[error("node {0}: {1} keys over capacity {2}")]
  Overflow(NodeId, usize, usize),

  #[error("node {0}: {1} keys under minimum {2}")]
  Underflow(NodeId, usize, usize),

  #[error("leaf depth mismatch: {0} != {1}")]
  UnevenLeafDepth(usize, usize),

  #[error("node {0}: key outside separator bounds")]
  SeparatorBound(NodeId),

  #[error("leaf chain broken at node {0}")]
  LeafChain(NodeId),
}
