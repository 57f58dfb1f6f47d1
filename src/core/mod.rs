//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - The `AccountStore` abstraction the engine is generic over
//! - `account_store` - Concurrent account storage with per-key atomic updates
//! - `transfer_store` - Concurrent transfer record storage
//! - `engine` - Transfer validation and orchestration

pub mod account_store;
pub mod engine;
pub mod traits;
pub mod transfer_store;

pub use account_store::InMemoryAccountStore;
pub use engine::TransferEngine;
pub use traits::AccountStore;
pub use transfer_store::TransferStore;
