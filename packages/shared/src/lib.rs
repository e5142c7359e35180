//! Shared utilities for minirpc server and clients.

pub mod logger;
pub mod time;
