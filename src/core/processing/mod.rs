pub mod invert;

pub use invert::{invert, invert_value, invert_with_max};
