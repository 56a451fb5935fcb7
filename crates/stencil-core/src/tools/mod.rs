//! Tool adapters for scaffold operations.
//!
//! Each adapter trait defines the seam to an external collaborator: the file
//! system for reading template sources and probing manifests, and the edit
//! application boundary that commits a built edit set as one transaction.
//! Every trait ships a standard implementation and a mock for testing.

pub mod apply;
pub mod apply_impl;
pub mod apply_mock;
pub mod fs;
pub mod fs_impl;
pub mod fs_mock;

pub use apply::EditApplier;
pub use apply_impl::StdEditApplier;
pub use apply_mock::MockEditApplier;
pub use fs::FsAdapter;
pub use fs_impl::StdFsAdapter;
pub use fs_mock::MockFsAdapter;
