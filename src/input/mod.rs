//! Input handling: event types and the processor that converts raw
//! pointer and wheel events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;
