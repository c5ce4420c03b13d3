//! File I/O for stall state and settings.

mod load;
mod save;

pub use load::load_state;
pub use save::save_state;
pub(crate) use save::write_atomic;
