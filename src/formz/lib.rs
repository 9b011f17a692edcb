//! # Formz Architecture
//!
//! Formz is a **UI-agnostic form library** for the asset-tracker client.
//! This is not a CLI application that happens to have some library code —
//! it's a library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Renderer Layer (main.rs + args.rs here; a web UI elsewhere)│
//! │  - Prompts for input, prints fields and notifications       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over one mounted form                        │
//! │  - Wires controller + transport + notifier + submit target  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form Core (model, registry, validation, form, submit)      │
//! │  - Pure state transitions over immutable snapshots          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - Abstract Transport trait                                 │
//! │  - HttpTransport (production), InMemoryTransport (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The snapshot model
//!
//! A form's state is an immutable [`registry::FieldRegistry`] snapshot.
//! Every input event produces a new snapshot; renderers holding the old one
//! keep seeing exactly what they rendered. Validation is per field, on
//! change — see [`form`] for the trade-offs that implies.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, form core, transport trait), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core drives the terminal client in this repo and could drive a
//! browser UI or tests unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — one value per mounted form
//! - [`model`]: Field descriptors, validators, presentation hints
//! - [`registry`]: Ordered field collections
//! - [`validation`]: The validation engine and stock rules
//! - [`form`]: The form state controller
//! - [`submit`]: The submission pipeline and notification boundary
//! - [`transport`]: Request/response boundary and implementations
//! - [`templates`]: Built-in form templates, one per screen
//! - [`session`]: Explicit sign-in state with load/save lifecycle
//! - [`options`]: Option-list helpers for autocomplete fields
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod form;
pub mod model;
pub mod options;
pub mod registry;
pub mod session;
pub mod submit;
pub mod templates;
pub mod transport;
pub mod validation;
