mod observer;
pub use observer::{LogObserver, ZoneObserver};

mod policy;
pub use policy::Populate;

mod zone_cache;
pub use zone_cache::ZoneCache;
