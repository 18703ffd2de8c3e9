//! Configuration storage.
//!
//! Both tools run with built-in defaults; a TOML file only overrides them.

pub mod config;
