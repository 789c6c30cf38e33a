//! Property-based test modules

mod layout_tests;
