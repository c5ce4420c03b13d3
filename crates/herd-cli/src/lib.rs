//! Library side of the `herd` binary: logging setup and the stall session.

pub mod error;
pub mod logging;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{AgeChange, Stable, UpdateReport};
