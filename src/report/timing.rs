//! Super family timing reports.

use tartan_bitfield::bitfield;

use super::{FromPayload, Payload};

/// UTC/GPS timing mode (`0x8F-A2`).
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct UtcGpsTime {
    #[field(0)]
    pub flags: UtcGpsTimeFlags,
}

bitfield! {
    pub struct UtcGpsTimeFlags(u8) {
        /// Times are reported in UTC, rather than GPS time.
        [0] pub utc_time,
        /// The PPS output is aligned to UTC, rather than GPS time.
        [1] pub utc_pps,
    }
}

/// Primary timing packet (`0x8F-AB`), sent once per second.
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct PrimaryTime {
    #[field(0)]
    pub seconds_of_week: u32,
    #[field(4)]
    pub week_number: u16,
    /// Leap seconds between GPS time and UTC.
    #[field(6)]
    pub utc_offset: u16,
    #[field(8)]
    pub flags: TimingFlags,
    #[field(9)]
    pub seconds: u8,
    #[field(10)]
    pub minutes: u8,
    #[field(11)]
    pub hours: u8,
    #[field(12)]
    pub day: u8,
    #[field(13)]
    pub month: u8,
    #[field(14)]
    pub year: u16,
}

bitfield! {
    pub struct TimingFlags(u8) {
        [0] pub utc_time,
        [1] pub utc_pps,
        [2] pub time_not_set,
        [3] pub no_utc_info,
        [4] pub time_from_user,
    }
}

/// Supplemental timing packet (`0x8F-AC`), sent once per second.
#[derive(Debug, Clone, Copy, PartialEq, FromPayload)]
pub struct SecondaryTime {
    #[field(0)]
    pub receiver_mode: u8,
    #[field(1)]
    pub disciplining_mode: u8,
    /// Self-survey progress, in percent.
    #[field(2)]
    pub self_survey_progress: u8,
    /// Time spent in holdover, in seconds.
    #[field(3)]
    pub holdover_duration: u32,
    #[field(7)]
    pub critical_alarms: CriticalAlarms,
    #[field(9)]
    pub minor_alarms: MinorAlarms,
    #[field(11)]
    pub gps_decoding_status: u8,
    #[field(12)]
    pub disciplining_activity: u8,
    #[field(13)]
    pub spare_status: [u8; 2],
    /// Offset of the PPS output from GPS time, in nanoseconds.
    #[field(15)]
    pub pps_offset: f32,
    /// Offset of the 10 MHz output, in parts per billion.
    #[field(19)]
    pub ten_mhz_offset: f32,
    /// Oscillator control DAC value.
    #[field(23)]
    pub dac_value: u32,
    /// Oscillator control voltage.
    #[field(27)]
    pub dac_voltage: f32,
    /// Temperature, in degrees Celsius.
    #[field(31)]
    pub temperature: f32,
    #[field(35)]
    pub latitude: f64,
    #[field(43)]
    pub longitude: f64,
    #[field(51)]
    pub altitude: f64,
    #[field(59)]
    pub spare: [u8; 8],
}

bitfield! {
    pub struct CriticalAlarms(u16) {
        [0] pub rom_checksum,
        [1] pub ram_check,
        [2] pub power_supply,
        [3] pub fpga_check,
        [4] pub control_voltage_at_rail,
    }
}

bitfield! {
    pub struct MinorAlarms(u16) {
        [0] pub control_voltage_near_rail,
        [1] pub antenna_open,
        [2] pub antenna_shorted,
        [3] pub not_tracking,
        [4] pub not_disciplining,
        [5] pub survey_in_progress,
        [6] pub no_stored_position,
        [7] pub leap_second_pending,
        [8] pub test_mode,
        [9] pub position_questionable,
        [10] pub eeprom_corrupt,
        [11] pub almanac_incomplete,
        [12] pub pps_not_generated,
    }
}

bitfield_field!(UtcGpsTimeFlags, u8);
bitfield_field!(TimingFlags, u8);
bitfield_field!(CriticalAlarms, u16);
bitfield_field!(MinorAlarms, u16);
