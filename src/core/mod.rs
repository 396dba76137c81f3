//! Core library components.
//!
//! This module contains the reusable logic for configuration handling,
//! credential resolution, request execution, and document rendering.

pub mod codec;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod document;
pub mod session;
