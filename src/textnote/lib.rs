//! # Textnote Architecture
//!
//! Textnote keeps one plain-text note per day. Each note is a dated header followed by
//! named sections (`TODO`, `DONE`, `NOTES` by default); old notes are folded into
//! monthly archive files where every archived section becomes a dated entry.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, reads the clock, prints messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) -> Commands (commands/*.rs)                   │
//! │  - open / copy, archive, list, config                       │
//! │  - Return CmdResult values, never print                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (parser.rs, document.rs, section.rs)                  │
//! │  - Text <-> Document <-> Section <-> ContentEntry           │
//! │  - Pure string transforms, no I/O                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - NoteStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note Format
//!
//! ```text
//! [Sat] 17 Oct 2026
//!
//! ___TODO___
//! buy milk
//!
//! ___NOTES___
//! [2026-10-03]
//! archived snippet
//! ```
//!
//! Section lines and entry headers are recognized purely by their configured
//! prefix/suffix shape. See [`parser`] for the exact rules.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the binary
//! - [`commands`]: business logic for each command
//! - [`parser`]: text to sections and documents
//! - [`section`], [`document`]: the in-memory note model and its rendering
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: delimiters, time formats, archive policy
//! - [`error`]: error types
//! - [`logging`]: logger bootstrap

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod parser;
pub mod section;
pub mod store;
