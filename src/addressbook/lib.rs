//! # Address Book Architecture
//!
//! An in-memory address book: a duplicate-free list of contacts, keyword
//! search over their names, and a favorites list fed by that search. The
//! library holds all the rules; the `addressbook` binary is a thin line-oriented
//! client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Reads a line, parses it into a command, prints results   │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade: one method per command                      │
//! │  - Turns raw strings into validated fields and keyword sets │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per command: (book, params) -> CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (book.rs, list.rs, model.rs)                          │
//! │  - AddressBook: person list + favorites                     │
//! │  - UniquePersonList: ordered, no two equal persons          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single-threaded by construction
//!
//! Records are shared between the person list and the favorites with `Rc`, so
//! an [`AddressBook`](book::AddressBook) is neither `Send` nor `Sync`. Callers
//! that need concurrent access must wrap the whole book behind one lock; the
//! individual operations are not atomic with respect to each other.
//!
//! ## Errors
//!
//! Every failure is an [`AddressBookError`](error::AddressBookError) variant
//! returned through `Result`. Nothing in the library panics on bad input or
//! exits the process. `DuplicatePerson` and `PersonNotFound` are the two
//! errors of the person list; commands turn them into result messages.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book aggregate and its favorites policy
//! - [`list`]: The unique person list
//! - [`model`]: `Person` and its validated fields
//! - [`index`]: Display indexes (`1`, `f1`) for listed persons
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod model;
