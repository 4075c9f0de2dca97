//! Adapters: in-process implementations of the outbound port.

mod in_memory;

pub use in_memory::InMemoryTransport;
