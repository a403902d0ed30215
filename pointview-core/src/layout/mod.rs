mod dimension;
pub use self::dimension::*;

mod point_layout;
pub use self::point_layout::*;

mod primitive;
pub use self::primitive::*;

mod conversion;
pub use self::conversion::*;
