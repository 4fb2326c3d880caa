// Test modules for chatgpt-client
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Test helper utilities
pub mod helpers;

pub mod models;

// NOTE: Endpoint tests that need a mock HTTP server live in tests/ as integration tests
