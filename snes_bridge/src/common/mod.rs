//! Utilities shared by the bridge and its hosts.

pub mod logging;
