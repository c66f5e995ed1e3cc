//! Small vector value types used throughout the welding pipeline.

pub mod vec2;
pub mod vec3;
