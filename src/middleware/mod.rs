//! Middleware module
//!
//! Contains HTTP request logging

pub mod logging;
