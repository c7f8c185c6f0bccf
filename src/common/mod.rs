//! Types shared by every part of the object model.

pub mod error;
pub mod id;

pub use error::{Error, Result};
pub use id::{ElementId, IdAllocator};
