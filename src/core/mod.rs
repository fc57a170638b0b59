pub mod asset;
pub mod file;
pub mod inputs;
