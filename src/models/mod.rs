pub mod item;
pub mod raw_record;

pub use item::*;
pub use raw_record::*;
