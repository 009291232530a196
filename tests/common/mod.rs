//! Common test utilities for qbit-client
//!
//! Mock WebUI servers and helpers to inspect what the client sent.

pub mod mock_server;
