use tinyvec::ArrayVec;

use crate::sans::MAX_DATA;

use super::{FromPayload, Payload, ReportId};

/// A frame matching no report definition, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Unknown {
    raw: ArrayVec<[u8; MAX_DATA]>,
}

impl Unknown {
    /// Copy a frame, truncating it to capacity.
    pub fn from_frame(frame: &[u8]) -> Self {
        let mut raw = ArrayVec::new();
        raw.extend_from_slice(&frame[..frame.len().min(MAX_DATA)]);
        Self { raw }
    }

    /// The frame bytes, beginning with the report code.
    pub fn as_slice(&self) -> &[u8] {
        &self.raw
    }

    pub fn id(&self) -> Option<ReportId> {
        ReportId::of(&self.raw)
    }

    /// The bytes following the report identity.
    pub fn payload(&self) -> Payload<'_> {
        let start = self.id().map_or(0, |id| id.header_len());
        Payload::new(&self.raw[start..])
    }

    /// Decode the payload as a report this crate does not define.
    pub fn decode<T: FromPayload>(&self) -> T {
        self.payload().decode()
    }
}
