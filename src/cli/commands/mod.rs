//! Command implementations

mod init;
mod sync;

pub use init::init;
pub use sync::sync;
