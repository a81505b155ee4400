//! Receiver identification and configuration.

use tartan_bitfield::bitfield;

use super::{FromPayload, Payload};

/// Firmware versions of the application and core processors (`0x45`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct SoftwareVersion {
    #[field(0)]
    pub application_major: u8,
    #[field(1)]
    pub application_minor: u8,
    #[field(2)]
    pub application_month: u8,
    #[field(3)]
    pub application_day: u8,
    #[field(4, |year: u8| 1900 + u16::from(year))]
    pub application_year: u16,
    #[field(5)]
    pub core_major: u8,
    #[field(6)]
    pub core_minor: u8,
    #[field(7)]
    pub core_month: u8,
    #[field(8)]
    pub core_day: u8,
    #[field(9, |year: u8| 1900 + u16::from(year))]
    pub core_year: u16,
}

/// Enabled report formats (`0x55`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct IoOptions {
    #[field(0)]
    pub position: PositionOptions,
    #[field(1)]
    pub velocity: VelocityOptions,
    #[field(2)]
    pub timing: TimingOptions,
    #[field(3)]
    pub auxiliary: AuxiliaryOptions,
}

bitfield! {
    /// Position report options.
    pub struct PositionOptions(u8) {
        [0] pub ecef,
        [1] pub lla,
        /// Altitude is above mean sea level, rather than the ellipsoid.
        [2] pub msl_altitude,
        [4] pub double_precision,
    }
}

bitfield! {
    /// Velocity report options.
    pub struct VelocityOptions(u8) {
        [0] pub ecef,
        [1] pub enu,
    }
}

bitfield! {
    /// Timing report options.
    pub struct TimingOptions(u8) {
        /// Times are reported in UTC, rather than GPS time.
        [0] pub utc,
    }
}

bitfield! {
    /// Auxiliary report options.
    pub struct AuxiliaryOptions(u8) {
        [0] pub raw_measurements,
        [3] pub db_hz,
    }
}

bitfield_field!(PositionOptions, u8);
bitfield_field!(VelocityOptions, u8);
bitfield_field!(TimingOptions, u8);
bitfield_field!(AuxiliaryOptions, u8);
