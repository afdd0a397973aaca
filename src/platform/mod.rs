//! Platform abstraction layer
//!
//! Translates raw host events (key codes, pointer moves, clicks) into the
//! per-tick input the simulation consumes. The host drives the tick loop and
//! storage; nothing here touches the sim directly.

pub mod input;

pub use input::InputState;
