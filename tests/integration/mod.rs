//! Integration tests for the batch shell

mod cli_parse;
mod navigation;
mod properties;
mod scenario;
