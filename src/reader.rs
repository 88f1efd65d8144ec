use crate::error::PackerError;
use crate::packer::{BufferPacker, State};
use core::mem::size_of;
use zerocopy::{FromBytes, FromZeros};

impl<const N: usize> BufferPacker<N> {
    /// Checks that `len` unread bytes are available at the cursor and returns the cursor.
    ///
    /// Returns `None` outside [`Mode::Unpacking`](crate::Mode::Unpacking). On overread the
    /// packer fails and the cursor is not moved.
    fn claim(&mut self, len: usize) -> Option<usize> {
        if self.state != State::Unpacking {
            return None;
        }

        let remaining = self.len - self.pos;
        if len > remaining {
            self.fail(PackerError::Overread {
                needed: len,
                remaining,
            });
            return None;
        }

        Some(self.pos)
    }

    /// Copies a `T` out of `buf` at `offset`. The caller has already bounds-checked it.
    fn read_at<T: FromBytes>(&self, offset: usize) -> T {
        let bytes = &self.buf[offset..offset + size_of::<T>()];
        T::read_from_bytes(bytes).unwrap_or_else(|_| <T as FromZeros>::new_zeroed())
    }

    /// Unpacks a `T` from the cursor and advances past it.
    ///
    /// `FromBytes` guarantees that every byte pattern is a valid `T`, so no validation is
    /// performed. The read does not need to be aligned.
    ///
    /// Returns an all-zero `T` without reading if the packer is not in
    /// [`Mode::Unpacking`](crate::Mode::Unpacking). If fewer than `size_of::<T>()` bytes are
    /// left, the packer fails and an all-zero `T` is returned.
    pub fn unpack<T: FromBytes>(&mut self) -> T {
        let Some(offset) = self.claim(size_of::<T>()) else {
            return <T as FromZeros>::new_zeroed();
        };
        let value = self.read_at(offset);
        self.pos += size_of::<T>();
        value
    }

    /// Advances the cursor past a `T` without reading it. Fails exactly like
    /// [`unpack`](Self::unpack).
    pub fn skip<T>(&mut self) {
        if self.claim(size_of::<T>()).is_some() {
            self.pos += size_of::<T>();
        }
    }

    /// Reads the `T` at the cursor without advancing. Fails exactly like
    /// [`unpack`](Self::unpack), so peeking past the end of the data latches the failure too.
    pub fn seek<T: FromBytes>(&mut self) -> T {
        match self.claim(size_of::<T>()) {
            Some(offset) => self.read_at(offset),
            None => <T as FromZeros>::new_zeroed(),
        }
    }

    /// Borrows the next `len` bytes and advances past them.
    ///
    /// Returns an empty slice if the packer is not in
    /// [`Mode::Unpacking`](crate::Mode::Unpacking), or if fewer than `len` bytes are left, in
    /// which case the packer also fails.
    pub fn unpack_bytes(&mut self, len: usize) -> &[u8] {
        let Some(offset) = self.claim(len) else {
            return &[];
        };
        self.pos += len;
        &self.buf[offset..offset + len]
    }
}
