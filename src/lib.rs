pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod select;
