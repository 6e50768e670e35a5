pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
pub mod nav;
pub mod storage;
pub mod story;
pub mod ui;
