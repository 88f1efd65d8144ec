/// Result of [`BufferPacker::check`](crate::BufferPacker::check).
pub type Result<T> = core::result::Result<T, PackerError>;

/// The reason a `BufferPacker` entered the failed state.
///
/// Every variant is a capacity violation; they differ only in which operation detected it.
/// The packer keeps the first cause it saw until it is reset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PackerError {
    /// A source buffer handed to `from_source` or `reset_with_source` is longer than the
    /// packer's capacity.
    SourceTooLarge {
        /// Length of the rejected source.
        len: usize,
        /// Capacity of the packer.
        capacity: usize,
    },

    /// A `pack` call needed more bytes than the buffer has left.
    Overflow {
        /// Size of the value that was being packed.
        needed: usize,
        /// Free bytes between the cursor and the end of the buffer.
        remaining: usize,
    },

    /// An `unpack`, `skip` or `seek` call needed more bytes than remain unread.
    Overread {
        /// Size of the value that was being read.
        needed: usize,
        /// Unread bytes between the cursor and the end of the data.
        remaining: usize,
    },

    /// The destination of `export_to` cannot hold the packed data.
    DestinationTooSmall {
        /// Logical size of the packed data.
        needed: usize,
        /// Length of the destination.
        available: usize,
    },
}

impl core::error::Error for PackerError {}

impl core::fmt::Display for PackerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::SourceTooLarge { len, capacity } => write!(
                f,
                "source of {len} bytes does not fit in a buffer of {capacity} bytes"
            ),
            Self::Overflow { needed, remaining } => write!(
                f,
                "cannot pack {needed} bytes, only {remaining} bytes of capacity left"
            ),
            Self::Overread { needed, remaining } => write!(
                f,
                "cannot read {needed} bytes, only {remaining} bytes left to read"
            ),
            Self::DestinationTooSmall { needed, available } => write!(
                f,
                "cannot export {needed} bytes into a destination of {available} bytes"
            ),
        }
    }
}
