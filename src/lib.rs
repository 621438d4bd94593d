pub mod config;
pub mod filter;
pub mod labels;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod views;
