//! Unit tests for the token service module

mod config_tests;
