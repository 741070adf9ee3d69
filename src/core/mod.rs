pub mod backup;
pub mod codec;
pub mod export;
pub mod log;
pub mod store;

pub use store::TodoStore;
