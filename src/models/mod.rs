//! Configuration models for the command-line front-end.

pub mod config;
