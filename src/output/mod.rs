// Output generation module

pub mod diagram;
pub mod html;

pub use diagram::*;
pub use html::*;
