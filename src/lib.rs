pub mod categorizer;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod inspector;
pub mod native_host;
pub mod operations;
pub mod platform;
pub mod process;
#[cfg(test)]
mod test_utils;
pub mod window;
