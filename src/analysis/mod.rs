pub mod random;
pub mod sweep;
