#![forbid(unsafe_code)]

pub mod agents;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod instructions;
pub mod project;
pub mod utils;
