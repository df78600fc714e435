//! Test utilities for the mock backend services.
//!
//! Provides [`TestFixtures`] for building on-disk fixture trees and
//! [`TestServer`] for spawning real server instances in tests.

mod server_harness;

pub use server_harness::{TestFixtures, TestServer};
