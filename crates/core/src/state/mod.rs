//! # Stores
//!
//! Process-lifetime in-memory stores. Each store is a cloneable handle over
//! one locked map, so every operation is serialized against the others.

pub mod directory;
pub mod employees;
pub mod error;
pub mod meetings;

pub use directory::DirectoryStore;
pub use employees::EmployeeStore;
pub use error::{StoreError, StoreResult};
pub use meetings::MeetingStore;
