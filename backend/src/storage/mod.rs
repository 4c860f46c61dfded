pub mod memory;
pub mod traits;

pub use memory::MemoryConnection;
pub use traits::{Connection, PaymentStorage, PropertyStorage, SettingsStorage};
