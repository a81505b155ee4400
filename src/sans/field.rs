//! Big-endian decoding of payload fields.

use zerocopy::{FromBytes, FromZeros, IntoBytes};

/// A value read from a fixed-size, big-endian window of a payload.
pub trait Field: Sized {
    /// The bytes storing this field on the wire.
    type Raw: FromBytes + IntoBytes;

    /// Convert the wire bytes to the field value.
    fn from_raw(r: Self::Raw) -> Self;
}

macro_rules! field {
    ($($t:ident),*) => {
        $(
            impl Field for $t {
                type Raw = [u8; size_of::<$t>()];

                fn from_raw(r: Self::Raw) -> Self {
                    $t::from_be_bytes(r)
                }
            }
        )*
    };
}

field!(u8, u16, u32, i8, i16, i32, f32, f64);

impl<const N: usize> Field for [u8; N] {
    type Raw = [u8; N];

    fn from_raw(r: Self::Raw) -> Self {
        r
    }
}

/// The bytes of a report following its identifying code (and sub-code).
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a>(&'a [u8]);

impl<'a> Payload<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self(r)
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }

    /// Read a field at a byte offset.
    ///
    /// Bytes beyond the end of the payload read as zero, so a short payload
    /// still produces a value.
    pub fn read<T: Field>(&self, offset: usize) -> T {
        let mut raw = <T::Raw as FromZeros>::new_zeroed();
        let dst = raw.as_mut_bytes();

        if let Some(src) = self.0.get(offset..) {
            let n = src.len().min(dst.len());
            dst[..n].copy_from_slice(&src[..n]);
        }

        T::from_raw(raw)
    }

    /// Decode the whole payload as a report.
    pub fn decode<T: FromPayload>(&self) -> T {
        T::from_payload(self)
    }
}

/// Derive [`FromPayload`] for a struct with fields at fixed offsets.
///
/// # Example
///
/// Add the `field(N)` attribute to every struct field, where `N` is the byte
/// offset of the field in the payload and the field's type implements
/// [`Field`].
///
/// ```
/// #[derive(Debug, FromPayload)]
/// struct GpsTime {
///     #[field(0)]
///     time_of_week: f32,
///     #[field(4)]
///     week_number: u16,
///     #[field(6)]
///     utc_offset: f32,
/// }
/// ```
///
/// To store something other than the wire type, supply a conversion closure.
/// Since the wire type cannot be inferred, its parameter must be typed.
///
/// ```
/// #[derive(Debug, FromPayload)]
/// struct Build {
///     #[field(0, |year: u8| 1900 + u16::from(year))]
///     year: u16,
/// }
/// ```
///
/// The generated implementation names [`FromPayload`] and [`Payload`]
/// unqualified, so both must be in scope.
pub use tsip_derive::FromPayload;

/// Decode a report from its payload.
///
/// See the [`FromPayload`](macro@FromPayload) derive macro for an automatic
/// implementation of this trait.
pub trait FromPayload {
    fn from_payload(payload: &Payload<'_>) -> Self;
}
