use crate::error::PackerError;
use crate::packer::{BufferPacker, State};
use zerocopy::{Immutable, IntoBytes};

impl<const N: usize> BufferPacker<N> {
    /// Packs `value` at the cursor, using its in-memory byte representation.
    ///
    /// `T` must be a plain-old-data type: `IntoBytes` guarantees it has no padding or
    /// uninitialized bytes, and `Immutable` that it has no interior mutability. Structs opt in
    /// with `#[derive(IntoBytes, Immutable)]` and a defined `repr`.
    ///
    /// Has no effect unless the packer is in [`Mode::Packing`](crate::Mode::Packing). If the
    /// value does not fit in the remaining capacity, the packer fails and nothing is written.
    #[inline(always)]
    pub fn pack<T: IntoBytes + Immutable>(&mut self, value: T) {
        self.pack_bytes(value.as_bytes());
    }

    /// Packs a slice of bytes at the cursor, with the same rules as [`pack`](Self::pack).
    ///
    /// No length is recorded; the reader must know how many bytes to take back out.
    pub fn pack_bytes(&mut self, bytes: &[u8]) {
        if self.state != State::Packing {
            return;
        }

        let remaining = N - self.pos;
        if bytes.len() > remaining {
            self.fail(PackerError::Overflow {
                needed: bytes.len(),
                remaining,
            });
            return;
        }

        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        if end > self.len {
            self.len = end;
        }
    }
}
