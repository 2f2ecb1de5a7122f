pub mod duration;
pub mod input;
pub mod unit;

pub use duration::Duration;
pub use input::RawInput;
pub use unit::Unit;
