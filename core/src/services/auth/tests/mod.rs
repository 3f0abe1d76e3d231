//! Tests for the email authentication service
