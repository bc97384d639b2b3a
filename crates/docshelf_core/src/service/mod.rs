//! Use-case services over the lifecycle engine.
//!
//! # Responsibility
//! - Wire the engine to a persistence port and a notification sink.
//! - Keep callers decoupled from storage and codec details.

pub mod document_service;
