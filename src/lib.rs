pub mod demo;
pub mod difference;
pub mod slicing;

pub use demo::{Demo, Listing};
pub use difference::absent_from;
pub use slicing::{letters, SliceExt};
