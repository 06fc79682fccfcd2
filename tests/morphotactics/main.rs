//! Integration tests for Layer 2: Morphotactics
//!
//! Tests for suffix graph composition, suffix application, and predefined
//! paths.

mod applier;
mod graph;
mod predefined;
