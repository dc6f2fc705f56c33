pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod services;
pub mod tables;

#[cfg(test)]
pub mod test_utils;
