//! Command implementations

mod check;
mod serve;

pub use check::check;
pub use serve::serve;
