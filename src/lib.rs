//! Estante Application Library
//!
//! Book donation catalog modules built on the Estante workspace crates.

pub mod modules;
