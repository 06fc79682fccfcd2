//! Integration tests for Layer 1: Lexicon
//!
//! Tests for lexicon loading, attribute inference, and root generation.

mod loader;
mod roots;
