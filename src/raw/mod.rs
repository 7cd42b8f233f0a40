mod arena;
mod balance;
mod handle;
mod insert;
mod link;
mod locate;
mod node;
mod raw_tree;
mod remove;
mod traverse;
mod validate;

pub use handle::Handle;
pub(crate) use arena::Arena;
pub(crate) use node::Node;
pub(crate) use raw_tree::RawTree;
