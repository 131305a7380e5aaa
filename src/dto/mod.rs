pub mod account;
pub mod common;
pub mod draw;
pub mod event;
pub mod id_serde;
pub mod rpc;
pub mod transaction;
pub mod wager;

// Re-export commonly used types for convenience
pub use account::*;
pub use common::*;
pub use draw::*;
pub use event::*;
pub use rpc::LoginRequest;
pub use transaction::*;
pub use wager::*;
