//! State line wire format
//!
//! Each datagram carries one ASCII line, space separated, no trailing
//! delimiter:
//!
//! ```text
//! state <pos_x> <pos_y> <pos_z> <q_w> <q_x> <q_y> <q_z> <battery>
//! ```
//!
//! Numbers use the shortest decimal text that parses back to the same
//! `f32` (`3.0` is written as `3`). There is no fixed width or precision.

use crate::types::VehicleState;
use std::fmt::Write;

/// Literal tag opening every state line
pub const STATE_TAG: &str = "state";

/// Numeric fields following the tag (3 position + 4 orientation + battery)
pub const STATE_FIELD_COUNT: usize = 8;

/// Format a vehicle state as a single wire line
pub fn format_state(state: &VehicleState) -> String {
    let mut line = String::with_capacity(64);
    line.push_str(STATE_TAG);

    let fields = state
        .position
        .iter()
        .chain(state.orientation.iter())
        .chain(std::iter::once(&state.battery));

    for value in fields {
        // Writing into a String cannot fail
        let _ = write!(line, " {}", value);
    }

    line
}
