//! Position and velocity fixes.

use super::{FromPayload, Payload};

/// Earth-centred, earth-fixed position fix (`0x42`).
///
/// Coordinates are fixed-point integers as the receiver sends them.
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct SingleEcefPosition {
    #[field(0)]
    pub x: i32,
    #[field(4)]
    pub y: i32,
    #[field(8)]
    pub z: i32,
    #[field(12)]
    pub time_of_fix: u32,
}

/// Double-precision earth-centred, earth-fixed position fix (`0x83`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct DoubleEcefPosition {
    #[field(0)]
    pub x: f64,
    #[field(8)]
    pub y: f64,
    #[field(16)]
    pub z: f64,
    /// Receiver clock bias, in metres.
    #[field(24)]
    pub clock_bias: f64,
    #[field(32)]
    pub time_of_fix: f32,
}

/// Earth-centred, earth-fixed velocity fix (`0x43`), in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct EcefVelocity {
    #[field(0)]
    pub x: f32,
    #[field(4)]
    pub y: f32,
    #[field(8)]
    pub z: f32,
    /// Receiver clock bias rate, in metres per second.
    #[field(12)]
    pub bias_rate: f32,
    #[field(16)]
    pub time_of_fix: f32,
}

/// Latitude, longitude and altitude position fix (`0x4A`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct SinglePosition {
    #[field(0)]
    pub latitude: f32,
    #[field(4)]
    pub longitude: f32,
    #[field(8)]
    pub altitude: f32,
    #[field(12)]
    pub clock_bias: f32,
    #[field(16)]
    pub time_of_fix: f32,
}

/// Double-precision latitude, longitude and altitude position fix (`0x84`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct DoublePosition {
    #[field(0)]
    pub latitude: f64,
    #[field(8)]
    pub longitude: f64,
    #[field(16)]
    pub altitude: f64,
    #[field(24)]
    pub clock_bias: f64,
    #[field(32)]
    pub time_of_fix: f32,
}

/// East, north and up velocity fix (`0x56`), in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct EnuVelocity {
    #[field(0)]
    pub east: f32,
    #[field(4)]
    pub north: f32,
    #[field(8)]
    pub up: f32,
    #[field(12)]
    pub bias_rate: f32,
    #[field(16)]
    pub time_of_fix: f32,
}
