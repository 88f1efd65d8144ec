use crate::error::{PackerError, Result};
use log::debug;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The operations a `BufferPacker` currently accepts.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Only `pack` calls have an effect.
    Packing,
    /// Only `unpack`, `skip` and `seek` calls have an effect.
    Unpacking,
    /// A capacity violation was detected. Every operation is a no-op until the packer is reset.
    Failed,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum State {
    Packing,
    Unpacking,
    Failed(PackerError),
}

/// Packs values into, and unpacks values from, an inline buffer of `N` bytes.
///
/// A packer is created either empty, in which case it accepts `pack` calls, or from a source
/// buffer, in which case it accepts `unpack`, `skip` and `seek` calls. It never switches between
/// the two except through [`reset_for_packing`](Self::reset_for_packing) and
/// [`reset_with_source`](Self::reset_with_source).
///
/// Any bounds violation moves the packer into [`Mode::Failed`]. The offending call does nothing
/// (value-returning calls return an all-zero value) and so does every call after it, until a
/// reset. Nothing panics; callers are expected to check [`is_ok`](Self::is_ok) or
/// [`check`](Self::check).
///
/// The packer exclusively owns its storage and is intentionally not `Clone`. The bytes can be
/// duplicated explicitly with [`export_to`](Self::export_to) or
/// [`export_owned`](Self::export_owned).
pub struct BufferPacker<const N: usize = 8> {
    pub(crate) buf: [u8; N],
    /// Number of meaningful bytes in `buf`.
    pub(crate) len: usize,
    /// Offset of the next read or write. Always `<= len` once an operation has completed.
    pub(crate) pos: usize,
    pub(crate) state: State,
}

impl<const N: usize> BufferPacker<N> {
    /// Creates an empty packer in [`Mode::Packing`], with zeroed storage.
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            pos: 0,
            state: State::Packing,
        }
    }

    /// Creates a packer in [`Mode::Unpacking`] that reads a copy of `src`.
    ///
    /// If `src` is longer than `N`, the packer starts out in [`Mode::Failed`] and its storage
    /// is left zeroed.
    pub fn from_source(src: &[u8]) -> Self {
        let mut packer = Self::new();
        if src.len() > N {
            packer.fail(PackerError::SourceTooLarge {
                len: src.len(),
                capacity: N,
            });
        } else {
            packer.buf[..src.len()].copy_from_slice(src);
            packer.len = src.len();
            packer.state = State::Unpacking;
        }
        packer
    }

    /// Creates a packer in [`Mode::Unpacking`] that reads a copy of a fixed-size array.
    ///
    /// This behaves exactly like [`from_source`](Self::from_source).
    pub fn from_array<const M: usize>(src: &[u8; M]) -> Self {
        Self::from_source(src.as_slice())
    }

    /// The fixed capacity of the internal buffer, in bytes.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The number of meaningful bytes held: everything packed so far, or the length of the
    /// source being unpacked.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the packer holds no meaningful bytes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte offset at which the next value will be packed or read.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes the next operation may still consume: free capacity when packing,
    /// unread data when unpacking, and 0 once failed.
    pub fn remaining(&self) -> usize {
        match self.state {
            State::Packing => N - self.pos,
            State::Unpacking => self.len - self.pos,
            State::Failed(_) => 0,
        }
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self.state {
            State::Packing => Mode::Packing,
            State::Unpacking => Mode::Unpacking,
            State::Failed(_) => Mode::Failed,
        }
    }

    /// Returns `true` unless the packer has failed.
    #[inline(always)]
    pub fn is_ok(&self) -> bool {
        !self.has_failed()
    }

    /// Returns `true` if a capacity violation has been latched.
    #[inline(always)]
    pub fn has_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// The capacity violation that moved the packer into [`Mode::Failed`], if any.
    pub fn failure(&self) -> Option<PackerError> {
        match self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Converts the status into a `Result`, so that a sequence of operations can be checked
    /// once with `?`.
    pub fn check(&self) -> Result<()> {
        match self.failure() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// The meaningful bytes held by the packer. This is a view, not a copy, and it is
    /// available in every mode, including [`Mode::Failed`].
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Copies the packed bytes into `dest`, returning the number of bytes copied.
    ///
    /// The destination must be able to hold [`len`](Self::len) bytes; if it cannot, the packer
    /// fails and `dest` is left untouched. Only the bytes before the cursor are copied, which
    /// for a packer that is still packing is everything packed so far.
    ///
    /// Does nothing and returns 0 if the packer has already failed.
    pub fn export_to(&mut self, dest: &mut [u8]) -> usize {
        if self.has_failed() {
            return 0;
        }

        if self.len > dest.len() {
            self.fail(PackerError::DestinationTooSmall {
                needed: self.len,
                available: dest.len(),
            });
            return 0;
        }

        dest[..self.pos].copy_from_slice(&self.buf[..self.pos]);
        self.pos
    }

    /// Returns a newly allocated copy of the [`len`](Self::len) meaningful bytes, or `None` if
    /// the packer has failed. The packer keeps its own copy.
    #[cfg(feature = "alloc")]
    pub fn export_owned(&self) -> Option<Vec<u8>> {
        if self.has_failed() {
            return None;
        }
        Some(self.data().to_vec())
    }

    /// Empties the packer and puts it into [`Mode::Packing`], clearing any failure.
    ///
    /// The storage is only zeroed if `clear` is set; otherwise stale bytes remain until they
    /// are overwritten by the next `pack` calls.
    pub fn reset_for_packing(&mut self, clear: bool) {
        self.pos = 0;
        self.len = 0;
        self.state = State::Packing;
        if clear {
            self.buf.fill(0);
        }
    }

    /// Replaces the contents with a copy of `src` and puts the packer into
    /// [`Mode::Unpacking`], clearing any failure.
    ///
    /// If `src` is longer than `N`, the packer fails instead and its storage, length and
    /// cursor are left as they were.
    pub fn reset_with_source(&mut self, src: &[u8]) {
        if src.len() > N {
            self.fail(PackerError::SourceTooLarge {
                len: src.len(),
                capacity: N,
            });
            return;
        }

        self.pos = 0;
        self.len = src.len();
        self.state = State::Unpacking;
        self.buf.fill(0);
        self.buf[..src.len()].copy_from_slice(src);
    }

    pub(crate) fn fail(&mut self, error: PackerError) {
        debug!("buffer packer ({} bytes) failed: {}", N, error);
        self.state = State::Failed(error);
    }
}

impl<const N: usize> Default for BufferPacker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for BufferPacker<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("BufferPacker");
        s.field("capacity", &N)
            .field("len", &self.len)
            .field("position", &self.pos)
            .field("state", &self.state);
        #[cfg(feature = "bstr")]
        s.field("data", &bstr::BStr::new(self.data()));
        #[cfg(not(feature = "bstr"))]
        s.field("data", &self.data());
        s.finish()
    }
}
