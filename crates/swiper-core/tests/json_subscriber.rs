//! JSON subscriber installation.
//!
//! Runs only with the JSON logging feature:
//!   cargo test -p swiper-core --features tracing-json --test json_subscriber
//!
//! Lives in its own test binary because it installs the global subscriber.

#![cfg(feature = "tracing-json")]

use swiper_core::logging::init_json_subscriber;

#[test]
fn json_subscriber_installs_once() {
    assert!(init_json_subscriber(), "first install should succeed");
    assert!(!init_json_subscriber(), "second install must report existing subscriber");
    swiper_core::info!(component = "test", "json logging active");
}
