//! ZMON CLI - command line client for the ZMON monitoring service.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── alerts        # Alert definition commands
//! │   ├── checks        # Check definition commands
//! │   ├── entities      # Entity commands
//! │   ├── dashboard     # Dashboard commands
//! │   ├── groups        # Contact group commands
//! │   ├── members       # Group member commands
//! │   ├── status        # System status overview
//! │   ├── configure     # Config file bootstrap
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.zmon-cli.yaml management
//!     ├── credentials   # Credential resolution and secret store
//!     ├── session       # Authenticated request execution
//!     ├── codec         # YAML document encoding/decoding
//!     └── document      # Per-kind document validation
//! ```
//!
//! # Features
//!
//! - Token or basic-auth access with keyring-backed password caching
//! - Single bounded retry on HTTP 401 with interactive re-prompt
//! - Deterministic YAML rendering with literal blocks for multi-line fields

pub mod cli;
pub mod core;
pub mod error;
