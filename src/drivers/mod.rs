//! Input drivers: the seam between the event loop and a concrete terminal.

pub mod console;
pub mod input_driver;

pub use console::ConsoleDriver;
pub use input_driver::InputDriver;
