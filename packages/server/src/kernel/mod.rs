//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_store;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;
pub mod webhook;

pub use deps::ServerDeps;
pub use memory_store::MemoryStore;
pub use stream_hub::{notifications_topic, ChangeEvent, ChangeFeed, ChangeOp};
pub use test_dependencies::{DeliveredNotification, MockDeliveryService, TestDependencies};
pub use traits::{BaseDeliveryService, BaseStore};
pub use webhook::{NoopDelivery, WebhookDelivery};
