pub mod format;
pub mod proposal;
