#![allow(dead_code)]

use tsip::{
    avec::{Feed, Receiver},
    sans::stuff::stuff,
};
use zerocopy::{
    Immutable, IntoBytes,
    byteorder::big_endian::{F32, F64, U16, U32},
};

/// Place a frame on the wire.
pub fn wire(frame: &[u8]) -> Vec<u8> {
    stuff(frame).collect()
}

/// Feed bytes one at a time, collecting every outcome.
pub fn feed(receiver: &mut Receiver, bytes: &[u8]) -> Vec<Feed> {
    bytes.iter().map(|&b| receiver.feed(b)).collect()
}

/// Outcomes other than `Feed::Pending`.
pub fn events(receiver: &mut Receiver, bytes: &[u8]) -> Vec<Feed> {
    feed(receiver, bytes)
        .into_iter()
        .filter(|f| *f != Feed::Pending)
        .collect()
}

/// Frame bytes of a `0x8F-AB` report.
#[repr(C)]
#[derive(Debug, Clone, IntoBytes, Immutable)]
pub struct WirePrimaryTime {
    pub code: u8,
    pub subcode: u8,
    pub seconds_of_week: U32,
    pub week_number: U16,
    pub utc_offset: U16,
    pub flags: u8,
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub day: u8,
    pub month: u8,
    pub year: U16,
}

impl Default for WirePrimaryTime {
    fn default() -> Self {
        Self {
            code: 0x8F,
            subcode: 0xAB,
            seconds_of_week: U32::new(0),
            week_number: U16::new(0),
            utc_offset: U16::new(0),
            flags: 0,
            seconds: 0,
            minutes: 0,
            hours: 0,
            day: 0,
            month: 0,
            year: U16::new(0),
        }
    }
}

/// Frame bytes of a `0x8F-AC` report.
#[repr(C)]
#[derive(Debug, Clone, IntoBytes, Immutable)]
pub struct WireSecondaryTime {
    pub code: u8,
    pub subcode: u8,
    pub receiver_mode: u8,
    pub disciplining_mode: u8,
    pub self_survey_progress: u8,
    pub holdover_duration: U32,
    pub critical_alarms: U16,
    pub minor_alarms: U16,
    pub gps_decoding_status: u8,
    pub disciplining_activity: u8,
    pub spare_status: [u8; 2],
    pub pps_offset: F32,
    pub ten_mhz_offset: F32,
    pub dac_value: U32,
    pub dac_voltage: F32,
    pub temperature: F32,
    pub latitude: F64,
    pub longitude: F64,
    pub altitude: F64,
    pub spare: [u8; 8],
}

impl Default for WireSecondaryTime {
    fn default() -> Self {
        Self {
            code: 0x8F,
            subcode: 0xAC,
            receiver_mode: 0,
            disciplining_mode: 0,
            self_survey_progress: 0,
            holdover_duration: U32::new(0),
            critical_alarms: U16::new(0),
            minor_alarms: U16::new(0),
            gps_decoding_status: 0,
            disciplining_activity: 0,
            spare_status: [0; 2],
            pps_offset: F32::new(0.0),
            ten_mhz_offset: F32::new(0.0),
            dac_value: U32::new(0),
            dac_voltage: F32::new(0.0),
            temperature: F32::new(0.0),
            latitude: F64::new(0.0),
            longitude: F64::new(0.0),
            altitude: F64::new(0.0),
            spare: [0; 8],
        }
    }
}
