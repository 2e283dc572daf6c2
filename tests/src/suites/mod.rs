//! Data-driven test suites
