//! Test harness: the dependency stack over a fresh in-memory store.

use std::sync::Arc;

use server_core::kernel::{MockDeliveryService, ServerDeps, TestDependencies};

/// Wired dependencies plus a handle to the delivery spy.
pub struct TestHarness {
    pub deps: ServerDeps,
    pub delivery: Arc<MockDeliveryService>,
}

/// Fresh harness with a recording delivery sink.
pub fn harness() -> TestHarness {
    let test_deps = TestDependencies::new();
    let delivery = test_deps.delivery.clone();
    TestHarness {
        deps: test_deps.into_deps(),
        delivery,
    }
}

/// Harness whose delivery sink fails every call, to exercise the
/// fire-and-forget path.
pub fn harness_with_failing_delivery() -> TestHarness {
    let test_deps = TestDependencies::new().mock_delivery(MockDeliveryService::failing());
    let delivery = test_deps.delivery.clone();
    TestHarness {
        deps: test_deps.into_deps(),
        delivery,
    }
}
