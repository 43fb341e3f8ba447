pub mod cli;
pub mod config;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod wg;
