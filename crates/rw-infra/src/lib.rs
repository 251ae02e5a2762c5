pub mod registry;
pub mod time;

pub use registry::InMemoryAccountRegistry;
pub use time::{FixedClock, SystemClock};
