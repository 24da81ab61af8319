//! VoxScribe - speaker-aware audio transcription CLI
//!
//! This crate drives an asynchronous remote speech-to-text job: it
//! uploads an audio payload, submits a transcription request, polls
//! until the job reaches a terminal state, and reshapes the transcript
//! into presentation views (full text, word-per-line, sentence-split,
//! per-speaker) with on-demand subtitle export.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the language catalog, and domain errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (AssemblyAI HTTP engine,
//!   XDG config store, tokio clock)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
