mod engine;
pub use self::engine::*;

mod buffer_reader;
pub use self::buffer_reader::*;
