pub mod application;
pub mod config;
pub mod http;
pub mod platform;
pub mod release;
pub mod report;
