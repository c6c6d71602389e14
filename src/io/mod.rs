//! I/O layer: CSV `reader` (file → `Table`) and `writer` (`Table` → file).
pub mod reader;
pub use reader::{load, read_table};

pub mod writer;
pub use writer::{save, write_table};
