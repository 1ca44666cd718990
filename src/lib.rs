#![forbid(unsafe_code)]

pub mod csv;
mod distance;
mod emissions;
mod error;
mod export;
mod factors;
mod fs;
mod impact;
pub mod report;
mod tips;
mod vehicle;

pub use distance::*;
pub use emissions::*;
pub use error::Error;
pub use export::*;
pub use factors::*;
pub use fs::{BlobStorageProvider, LocalDisk};
pub use impact::*;
pub use tips::*;
pub use vehicle::*;
