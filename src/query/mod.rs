//! Prefix query front ends

mod engine;
mod live;
mod sharded;
mod shared;

pub use engine::QueryEngine;
pub use live::LiveQuery;
pub use sharded::ShardedTrie;
pub use shared::SharedIndex;
