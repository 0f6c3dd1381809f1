#![allow(dead_code)]

pub const INVALID_INPUT: &str = "invalid_input";
pub const INVALID_SCALE: &str = "invalid_scale";
pub const INTERNAL_ERROR: &str = "internal_error";
