pub mod backend;
pub mod branch;
pub mod repo;


pub use backend::{BranchBackend, GitBackend};
pub use branch::BranchInfo;
pub use repo::GitRepo;
