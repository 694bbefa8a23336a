//! # lace-chat
//!
//! A minimal HTTP chat-response service. A query is first checked against
//! a fixed table of greeting patterns; otherwise it runs through a
//! keyword-overlap search over a curated in-memory document set, and the
//! reply is a canned greeting, a truncated snippet of the best hit, or a
//! fixed fallback.
//!
//! ## Pipeline
//!
//! ```text
//! raw query
//!     │
//!     ▼
//! ┌──────────────┐
//! │  normalize    │  lowercase, strip punctuation, trim
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   hit
//! │ greeting      │ ───────► canned reply
//! │ matcher       │
//! └──────┬───────┘
//!        │ miss
//!        ▼
//! ┌──────────────┐   top hit
//! │ keyword       │ ───────► "Based on the available information: …"
//! │ search (k=3)  │
//! └──────┬───────┘
//!        │ no overlap
//!        ▼
//!   fixed fallback reply
//! ```
//!
//! The document collection and greeting tables are built once at startup
//! and never mutated, so request handling is lock-free and stateless.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for bind address and file paths
//! - [`models`] - Shared data types: `Document`, request/response types, log records
//! - [`text`] - Query normalization and the two word tokenizations
//! - [`greeting`] - Fixed greeting rules with startup validation
//! - [`search`] - Keyword-overlap scoring with stable top-k selection
//! - [`respond`] - Reply orchestration: short-circuit, snippet, fallback
//! - [`interactions`] - Append-only JSONL interaction log
//! - [`api`] - Axum HTTP handlers and router
//! - [`state`] - Immutable application state built at startup

pub mod api;
pub mod config;
pub mod greeting;
pub mod interactions;
pub mod models;
pub mod respond;
pub mod search;
pub mod state;
pub mod text;
