//! # snippetlab
//!
//! Simulated compiler diagnostics and AI-powered code correction for
//! multi-language snippet playgrounds.
//!
//! snippetlab is the decision-making core of an interactive playground: a
//! user picks a language, edits a snippet, and triggers a simulated "run"
//! that reports plausible compiler or interpreter output without ever
//! executing code. When the simulated run fails, a generative-text service
//! can be asked for a corrected snippet and an explanation.
//!
//! ## Core Features
//!
//! - **Diagnostic Engine**: pure, total pattern-matching evaluation producing
//!   success output or simulated diagnostics per language
//! - **Correction Requester**: one-shot request to a generative-text service,
//!   degrading to a fixed placeholder on every failure
//! - **Session Orchestration**: run/correct/apply lifecycle with stale-result
//!   discard across overlapping correction requests
//! - **Starter Snippets**: per-language sample code with a commented-out
//!   buggy line to demonstrate the correction flow
//!
//! ## Quick Start
//!
//! ```rust
//! use snippet_lab::{engine, Language};
//!
//! let result = engine::evaluate("console.log(\"Hi\")", Language::JavaScript);
//! assert_eq!(result.message(), "Hi");
//! ```
//!
//! ## Module Overview
//!
//! - [`engine`] - Rule-based diagnostic evaluation
//! - [`correction`] - Correction requester and the Gemini backend
//! - [`session`] - Playground session state and lifecycle
//! - [`core`] - Core types, sample snippets, backend trait
//! - [`config`] - Correction service configuration
//! - [`cli`] - Command-line interface

/// Command-line interface and argument parsing
pub mod cli;
/// Configuration for the correction service client
pub mod config;
/// Core types, sample snippets and the backend capability trait
pub mod core;
/// Correction requester and backends
pub mod correction;
/// Rule-based diagnostic engine
pub mod engine;
/// Error types
pub mod error;
/// Playground session orchestration
pub mod session;

// Re-export the core surface for easy access
pub use crate::core::{sample_code, Correction, CorrectionBackend, DiagnosticResult, Language};
pub use crate::correction::CorrectionRequester;
pub use crate::error::{ConfigError, CorrectionError, ParseLanguageError};
pub use crate::session::PlaygroundSession;
