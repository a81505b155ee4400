//! Typed report definitions.
//!
//! Every report the receiver can produce is a plain struct decoded from fixed
//! payload offsets with the [`FromPayload`](macro@FromPayload) derive macro.
//! Reports are identified by a code, and for the super family ([`SUPER`]), a
//! sub-code following it. Frames matching no definition are kept verbatim as
//! [`Unknown`].
//!
//! Angles are in radians, distances in metres and times in seconds unless a
//! field says otherwise.

pub use crate::sans::field::{Field, FromPayload, Payload};

/// Implement [`Field`] for a wire bitfield over a primitive.
macro_rules! bitfield_field {
    ($t:ident, $repr:ty) => {
        impl $crate::sans::field::Field for $t {
            type Raw = <$repr as $crate::sans::field::Field>::Raw;

            fn from_raw(r: Self::Raw) -> Self {
                $t(<$repr as $crate::sans::field::Field>::from_raw(r))
            }
        }
    };
}

mod navigation;
mod receiver;
mod timing;
mod unknown;

pub use navigation::{
    DoubleEcefPosition, DoublePosition, EcefVelocity, EnuVelocity, SingleEcefPosition,
    SinglePosition,
};
pub use receiver::{
    AuxiliaryOptions, IoOptions, PositionOptions, SoftwareVersion, TimingOptions,
    VelocityOptions,
};
pub use timing::{
    CriticalAlarms, MinorAlarms, PrimaryTime, SecondaryTime, TimingFlags, UtcGpsTime,
    UtcGpsTimeFlags,
};
pub use unknown::Unknown;

/// Code of the super family, whose reports are told apart by a sub-code.
pub const SUPER: u8 = 0x8F;

/// The code and optional sub-code heading a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportId {
    pub code: u8,
    pub subcode: Option<u8>,
}

impl ReportId {
    pub const fn new(code: u8) -> Self {
        Self {
            code,
            subcode: None,
        }
    }

    pub const fn super_report(subcode: u8) -> Self {
        Self {
            code: SUPER,
            subcode: Some(subcode),
        }
    }

    /// Identify a frame. Returns `None` for an empty frame.
    ///
    /// A super frame too short to carry its sub-code has none.
    pub fn of(frame: &[u8]) -> Option<Self> {
        let &code = frame.first()?;

        let subcode = if code == SUPER {
            frame.get(1).copied()
        } else {
            None
        };

        Some(Self { code, subcode })
    }

    /// Number of frame bytes taken by the identity, preceding the payload.
    pub fn header_len(&self) -> usize {
        1 + self.subcode.is_some() as usize
    }
}

/// The kinds of report retained by a [`Reports`](crate::avec::Reports) store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    SingleEcefPosition,
    DoubleEcefPosition,
    EcefVelocity,
    SoftwareVersion,
    SinglePosition,
    DoublePosition,
    IoOptions,
    EnuVelocity,
    UtcGpsTime,
    PrimaryTime,
    SecondaryTime,
    Unknown,
}

impl ReportKind {
    pub const ALL: [ReportKind; 12] = [
        Self::SingleEcefPosition,
        Self::DoubleEcefPosition,
        Self::EcefVelocity,
        Self::SoftwareVersion,
        Self::SinglePosition,
        Self::DoublePosition,
        Self::IoOptions,
        Self::EnuVelocity,
        Self::UtcGpsTime,
        Self::PrimaryTime,
        Self::SecondaryTime,
        Self::Unknown,
    ];

    /// The kind of report a frame with this identity decodes into.
    pub fn of(id: ReportId) -> Self {
        match (id.code, id.subcode) {
            (0x42, None) => Self::SingleEcefPosition,
            (0x83, None) => Self::DoubleEcefPosition,
            (0x43, None) => Self::EcefVelocity,
            (0x45, None) => Self::SoftwareVersion,
            (0x4A, None) => Self::SinglePosition,
            (0x84, None) => Self::DoublePosition,
            (0x55, None) => Self::IoOptions,
            (0x56, None) => Self::EnuVelocity,
            (SUPER, Some(0xA2)) => Self::UtcGpsTime,
            (SUPER, Some(0xAB)) => Self::PrimaryTime,
            (SUPER, Some(0xAC)) => Self::SecondaryTime,
            _ => Self::Unknown,
        }
    }

    /// The identity of frames decoding into this kind, if there is exactly one.
    pub fn id(self) -> Option<ReportId> {
        let id = match self {
            Self::SingleEcefPosition => ReportId::new(0x42),
            Self::DoubleEcefPosition => ReportId::new(0x83),
            Self::EcefVelocity => ReportId::new(0x43),
            Self::SoftwareVersion => ReportId::new(0x45),
            Self::SinglePosition => ReportId::new(0x4A),
            Self::DoublePosition => ReportId::new(0x84),
            Self::IoOptions => ReportId::new(0x55),
            Self::EnuVelocity => ReportId::new(0x56),
            Self::UtcGpsTime => ReportId::super_report(0xA2),
            Self::PrimaryTime => ReportId::super_report(0xAB),
            Self::SecondaryTime => ReportId::super_report(0xAC),
            Self::Unknown => return None,
        };

        Some(id)
    }
}

/// A report with a fixed identity and payload layout.
pub trait Report: FromPayload {
    const KIND: ReportKind;
}

macro_rules! report {
    ($($t:ident),*) => {
        $(
            impl Report for $t {
                const KIND: ReportKind = ReportKind::$t;
            }
        )*
    };
}

report!(
    SingleEcefPosition,
    DoubleEcefPosition,
    EcefVelocity,
    SoftwareVersion,
    SinglePosition,
    DoublePosition,
    IoOptions,
    EnuVelocity,
    UtcGpsTime,
    PrimaryTime,
    SecondaryTime
);
