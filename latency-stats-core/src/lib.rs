pub mod cli;
pub mod config;
pub mod histogram;
pub mod input;
pub mod logging;
pub mod timer;
