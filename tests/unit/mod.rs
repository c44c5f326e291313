//! Unit test suite for gotemplater
//!
//! Exercises the library API directly, without spawning the binary.
//!
//! ```bash
//! cargo test --test unit
//! ```
