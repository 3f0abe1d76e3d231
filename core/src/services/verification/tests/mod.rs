//! Tests for the verification module

mod store_tests;
