pub mod pointer;
pub mod wheel;

pub use pointer::{wire_pointer_handlers, GestureState, PointerWiring};
pub use wheel::{wire_wheel, WheelWiring};
