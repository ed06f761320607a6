//! Backend Command Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain.

mod category;
mod transport;

pub use category::*;
pub use transport::*;
