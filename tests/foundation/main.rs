//! Integration tests for Layer 0: Foundation
//!
//! Tests for the alphabet, suffix form resolution, numerals, and errors.

mod errors;
mod numerals;
mod phonetics;
