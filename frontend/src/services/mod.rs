pub mod logging;
pub mod persistence;
pub mod storage;
pub mod timing;

pub use logging::Logger;
