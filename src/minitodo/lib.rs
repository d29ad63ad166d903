//! # Minitodo Architecture
//!
//! Minitodo is a keyboard-driven todo list that lives in the terminal. The
//! library holds everything that has behaviour: the list, filtering, the
//! interaction state machine and persistence. The binary only moves keys in
//! and frames out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads keys and lines, draws frames, sets up logging      │
//! │  - The ONLY place that touches the terminal                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store backend and the session                   │
//! │  - Load at startup, save at quit, failures absorbed         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + View (view.rs)                      │
//! │  - Command → mutation / filter change / text capture        │
//! │  - Session → positioned, painted screen model               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filters (filter.rs)        │
//! │  - Pure operations on the TodoList                          │
//! │  - Visible-set computation                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Below the CLI layer, code:
//! - Takes regular Rust values (decoded [`session::Command`]s, captured lines)
//! - Returns regular Rust values ([`session::Step`], [`commands::Outcome`], [`view::Frame`])
//! - **Never** reads the keyboard or writes to the screen
//!
//! ## Silent failures
//!
//! Bad input (empty text, unparsable dates), a full list, and persistence
//! problems are all no-ops from the user's point of view. Internally they are
//! still visible: commands return [`commands::Outcome`], the store returns
//! [`error::Result`], and everything that gets absorbed is logged.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for a UI
//! - [`session`]: Interaction state machine and key decoding
//! - [`commands`]: One module per list mutation
//! - [`filter`]: Status/category/search filters and the visible set
//! - [`list`]: The bounded todo list and its selection
//! - [`model`]: The `Todo` record and field limits
//! - [`dates`]: Due-date parsing, formatting and urgency
//! - [`view`]: Screen model built from a session
//! - [`codec`]: Binary file layout
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod list;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
