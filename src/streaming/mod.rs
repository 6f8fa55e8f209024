//! UDP telemetry streaming

pub mod broadcaster;
pub mod wire;

pub use broadcaster::TelemetryBroadcaster;
pub use wire::{STATE_FIELD_COUNT, STATE_TAG, format_state};
