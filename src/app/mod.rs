// Application layer: runs one CLI command against the core functions.

pub mod commands;
