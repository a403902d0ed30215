mod spatial_reference;
pub use self::spatial_reference::*;
