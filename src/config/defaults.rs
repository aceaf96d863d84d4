//! Default values for configuration fields.
//!
//! Each value lives in its own function so serde field defaults and the
//! `Default` impls share one source of truth.

// Map section

pub fn cell_size() -> f32 {
    0.1
}

pub fn noise_level() -> u32 {
    10
}

pub fn ground_margin() -> f32 {
    0.4
}

// Planner section

pub fn unknown_penalty() -> f32 {
    3.0
}

pub fn expansion_cap_factor() -> usize {
    2
}

pub fn waypoint_clearance() -> f32 {
    0.4
}
