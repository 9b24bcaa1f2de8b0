//! Shared utilities for the persistence core.

pub mod password;
