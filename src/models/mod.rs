mod cat;
mod cluster;
mod index;

pub use cat::CatIndex;
pub use cluster::{ClusterInfo, ClusterVersion};
pub use index::IndexDescriptor;
