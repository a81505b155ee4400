//! States collecting a byte-stuffed frame.

use either::Either::{self, Left, Right};
use tinyvec::ArrayVec;

use super::{DLE, ETX, MAX_DATA};

/// Fixed-capacity store of the unescaped bytes of the frame in progress.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer(ArrayVec<[u8; MAX_DATA]>);

impl FrameBuffer {
    /// The unescaped bytes collected so far.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    /// Append a byte, dropping it if the buffer is full.
    fn push(&mut self, b: u8) {
        let _ = self.0.try_push(b);
    }
}

/// How a frame in progress ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A closing `DLE ETX` was found.
    Complete,
    /// A `DLE` was followed by neither `DLE` nor `ETX`. The frame is discarded.
    Misframed,
}

/// State token waiting for the `DLE` opening a frame.
#[derive(Debug)]
pub struct Idle;

impl Idle {
    /// Transition to another state on a byte between frames.
    ///
    /// Returns a successor state token.
    pub fn advance(self, b: u8) -> Either<Idle, Framed> {
        if b == DLE {
            Right(Framed(()))
        } else {
            Left(self)
        }
    }
}

/// State token following an opening `DLE`.
#[derive(Debug)]
pub struct Framed(pub(super) ());

impl Framed {
    /// Transition to another state on the first byte of a frame.
    ///
    /// A control byte here is noise, and returns to [`Idle`]. Any other byte
    /// resets the buffer and is stored as the report code.
    ///
    /// Returns a successor state token.
    pub fn advance(self, b: u8, buf: &mut FrameBuffer) -> Either<Idle, InData> {
        if b == DLE || b == ETX {
            Left(Idle)
        } else {
            buf.clear();
            buf.push(b);
            Right(InData(()))
        }
    }
}

/// State token collecting frame data.
#[derive(Debug)]
pub struct InData(pub(super) ());

impl InData {
    /// Transition to another state on a byte of frame data.
    ///
    /// Returns a successor state token.
    pub fn advance(self, b: u8, buf: &mut FrameBuffer) -> Either<InData, InDataEscape> {
        if b == DLE {
            Right(InDataEscape(()))
        } else {
            buf.push(b);
            Left(self)
        }
    }
}

/// State token following a `DLE` inside frame data.
#[derive(Debug)]
pub struct InDataEscape(pub(super) ());

impl InDataEscape {
    /// Transition to another state on the byte following a data `DLE`.
    ///
    /// A second `DLE` is stored as a literal. Anything else ends the frame,
    /// returning how it ended along with the [`Idle`] successor.
    pub fn advance(self, b: u8, buf: &mut FrameBuffer) -> Either<InData, (Ending, Idle)> {
        match b {
            DLE => {
                buf.push(b);
                Left(InData(()))
            }
            ETX => Right((Ending::Complete, Idle)),
            _ => Right((Ending::Misframed, Idle)),
        }
    }
}

/// Any state token.
#[derive(Debug)]
pub enum AnyState {
    Idle(Idle),
    Framed(Framed),
    InData(InData),
    InDataEscape(InDataEscape),
}

impl Default for AnyState {
    fn default() -> Self {
        Self::Idle(Idle)
    }
}

/// Outcome of feeding a byte to a [`Framer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No frame was completed by this byte.
    Pending,
    /// A frame was completed and is available from [`Framer::frame`].
    Complete,
    /// The frame in progress was discarded.
    Misframed,
}

/// Driver of the state tokens over a stream of bytes.
#[derive(Debug, Default)]
pub struct Framer {
    state: AnyState,
    buf: FrameBuffer,
}

impl Framer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single byte.
    pub fn advance(&mut self, b: u8) -> Advance {
        let state = core::mem::take(&mut self.state);
        let buf = &mut self.buf;

        let (state, advance) = match state {
            AnyState::Idle(s) => match s.advance(b) {
                Left(s) => (AnyState::Idle(s), Advance::Pending),
                Right(s) => (AnyState::Framed(s), Advance::Pending),
            },
            AnyState::Framed(s) => match s.advance(b, buf) {
                Left(s) => (AnyState::Idle(s), Advance::Pending),
                Right(s) => (AnyState::InData(s), Advance::Pending),
            },
            AnyState::InData(s) => match s.advance(b, buf) {
                Left(s) => (AnyState::InData(s), Advance::Pending),
                Right(s) => (AnyState::InDataEscape(s), Advance::Pending),
            },
            AnyState::InDataEscape(s) => match s.advance(b, buf) {
                Left(s) => (AnyState::InData(s), Advance::Pending),
                Right((Ending::Complete, s)) => (AnyState::Idle(s), Advance::Complete),
                Right((Ending::Misframed, s)) => {
                    buf.clear();
                    (AnyState::Idle(s), Advance::Misframed)
                }
            },
        };

        self.state = state;
        advance
    }

    /// The current state.
    pub fn state(&self) -> &AnyState {
        &self.state
    }

    /// The bytes of the most recently completed frame, or of the frame in
    /// progress.
    pub fn frame(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Return to [`Idle`], discarding any frame in progress.
    pub fn reset(&mut self) {
        self.state = AnyState::default();
        self.buf.clear();
    }
}
