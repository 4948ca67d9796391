pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use controller::{Button, InputEvent};
pub use input_adapter::{PointerSource, WinitController};
pub use timer::{FixedHz, FpsMeter};
