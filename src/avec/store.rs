//! Latest report of every kind.

use bitflags::bitflags;

use crate::report::{
    DoubleEcefPosition, DoublePosition, EcefVelocity, EnuVelocity, IoOptions, Payload,
    PrimaryTime, ReportId, ReportKind, SecondaryTime, SingleEcefPosition, SinglePosition,
    SoftwareVersion, Unknown, UtcGpsTime,
};

bitflags! {
    /// Kinds of report refreshed since the flags were last cleared.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Updated: u16 {
        const SINGLE_ECEF_POSITION = 1 << 0;
        const DOUBLE_ECEF_POSITION = 1 << 1;
        const ECEF_VELOCITY = 1 << 2;
        const SOFTWARE_VERSION = 1 << 3;
        const SINGLE_POSITION = 1 << 4;
        const DOUBLE_POSITION = 1 << 5;
        const IO_OPTIONS = 1 << 6;
        const ENU_VELOCITY = 1 << 7;
        const UTC_GPS_TIME = 1 << 8;
        const PRIMARY_TIME = 1 << 9;
        const SECONDARY_TIME = 1 << 10;
        const UNKNOWN = 1 << 11;
    }
}

impl From<ReportKind> for Updated {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::SingleEcefPosition => Self::SINGLE_ECEF_POSITION,
            ReportKind::DoubleEcefPosition => Self::DOUBLE_ECEF_POSITION,
            ReportKind::EcefVelocity => Self::ECEF_VELOCITY,
            ReportKind::SoftwareVersion => Self::SOFTWARE_VERSION,
            ReportKind::SinglePosition => Self::SINGLE_POSITION,
            ReportKind::DoublePosition => Self::DOUBLE_POSITION,
            ReportKind::IoOptions => Self::IO_OPTIONS,
            ReportKind::EnuVelocity => Self::ENU_VELOCITY,
            ReportKind::UtcGpsTime => Self::UTC_GPS_TIME,
            ReportKind::PrimaryTime => Self::PRIMARY_TIME,
            ReportKind::SecondaryTime => Self::SECONDARY_TIME,
            ReportKind::Unknown => Self::UNKNOWN,
        }
    }
}

/// Store of the most recent report of every kind.
///
/// A report reads as `None` until the first frame of its kind arrives, and
/// afterward always holds the last one received.
#[derive(Debug, Clone, Default)]
pub struct Reports {
    single_ecef_position: Option<SingleEcefPosition>,
    double_ecef_position: Option<DoubleEcefPosition>,
    ecef_velocity: Option<EcefVelocity>,
    software_version: Option<SoftwareVersion>,
    single_position: Option<SinglePosition>,
    double_position: Option<DoublePosition>,
    io_options: Option<IoOptions>,
    enu_velocity: Option<EnuVelocity>,
    utc_gps_time: Option<UtcGpsTime>,
    primary_time: Option<PrimaryTime>,
    secondary_time: Option<SecondaryTime>,
    unknown: Option<Unknown>,
    updated: Updated,
}

impl Reports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a completed frame into the report of its kind, replacing the
    /// previous one and marking it updated.
    ///
    /// Exactly one report is replaced per frame. Frames of unrecognised
    /// identity, including super frames with an unrecognised sub-code, are
    /// stored as [`Unknown`].
    ///
    /// Returns the kind of report replaced.
    pub fn update(&mut self, frame: &[u8]) -> ReportKind {
        let id = ReportId::of(frame);
        let kind = id.map_or(ReportKind::Unknown, ReportKind::of);

        let start = id.map_or(0, |id| id.header_len());
        let payload = Payload::new(&frame[start..]);

        match kind {
            ReportKind::SingleEcefPosition => self.single_ecef_position = Some(payload.decode()),
            ReportKind::DoubleEcefPosition => self.double_ecef_position = Some(payload.decode()),
            ReportKind::EcefVelocity => self.ecef_velocity = Some(payload.decode()),
            ReportKind::SoftwareVersion => self.software_version = Some(payload.decode()),
            ReportKind::SinglePosition => self.single_position = Some(payload.decode()),
            ReportKind::DoublePosition => self.double_position = Some(payload.decode()),
            ReportKind::IoOptions => self.io_options = Some(payload.decode()),
            ReportKind::EnuVelocity => self.enu_velocity = Some(payload.decode()),
            ReportKind::UtcGpsTime => self.utc_gps_time = Some(payload.decode()),
            ReportKind::PrimaryTime => self.primary_time = Some(payload.decode()),
            ReportKind::SecondaryTime => self.secondary_time = Some(payload.decode()),
            ReportKind::Unknown => self.unknown = Some(Unknown::from_frame(frame)),
        }

        self.updated.insert(kind.into());
        kind
    }

    /// Kinds of report refreshed since the flags were last cleared.
    pub fn updated(&self) -> Updated {
        self.updated
    }

    pub fn clear_updated(&mut self, flags: Updated) {
        self.updated.remove(flags);
    }

    /// Return and clear all updated flags.
    pub fn take_updated(&mut self) -> Updated {
        core::mem::take(&mut self.updated)
    }

    /// Forget every report and flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn single_ecef_position(&self) -> Option<&SingleEcefPosition> {
        self.single_ecef_position.as_ref()
    }

    pub fn double_ecef_position(&self) -> Option<&DoubleEcefPosition> {
        self.double_ecef_position.as_ref()
    }

    pub fn ecef_velocity(&self) -> Option<&EcefVelocity> {
        self.ecef_velocity.as_ref()
    }

    pub fn software_version(&self) -> Option<&SoftwareVersion> {
        self.software_version.as_ref()
    }

    pub fn single_position(&self) -> Option<&SinglePosition> {
        self.single_position.as_ref()
    }

    pub fn double_position(&self) -> Option<&DoublePosition> {
        self.double_position.as_ref()
    }

    pub fn io_options(&self) -> Option<&IoOptions> {
        self.io_options.as_ref()
    }

    pub fn enu_velocity(&self) -> Option<&EnuVelocity> {
        self.enu_velocity.as_ref()
    }

    pub fn utc_gps_time(&self) -> Option<&UtcGpsTime> {
        self.utc_gps_time.as_ref()
    }

    pub fn primary_time(&self) -> Option<&PrimaryTime> {
        self.primary_time.as_ref()
    }

    pub fn secondary_time(&self) -> Option<&SecondaryTime> {
        self.secondary_time.as_ref()
    }

    /// The most recent frame of unrecognised identity.
    pub fn unknown(&self) -> Option<&Unknown> {
        self.unknown.as_ref()
    }

    /// Whether a report of this kind has been received.
    pub fn is_valid(&self, kind: ReportKind) -> bool {
        match kind {
            ReportKind::SingleEcefPosition => self.single_ecef_position.is_some(),
            ReportKind::DoubleEcefPosition => self.double_ecef_position.is_some(),
            ReportKind::EcefVelocity => self.ecef_velocity.is_some(),
            ReportKind::SoftwareVersion => self.software_version.is_some(),
            ReportKind::SinglePosition => self.single_position.is_some(),
            ReportKind::DoublePosition => self.double_position.is_some(),
            ReportKind::IoOptions => self.io_options.is_some(),
            ReportKind::EnuVelocity => self.enu_velocity.is_some(),
            ReportKind::UtcGpsTime => self.utc_gps_time.is_some(),
            ReportKind::PrimaryTime => self.primary_time.is_some(),
            ReportKind::SecondaryTime => self.secondary_time.is_some(),
            ReportKind::Unknown => self.unknown.is_some(),
        }
    }
}
