pub mod entry;
pub mod neo;

pub use entry::*;
pub use neo::*;
