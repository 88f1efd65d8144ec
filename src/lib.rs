//! Packs plain-old-data values into a byte buffer whose capacity is fixed at compile time, and
//! unpacks them again.
//!
//! Values are copied using their in-memory byte representation, in call order, with no
//! endianness conversion and no framing. Both sides of an exchange must therefore agree on the
//! layout of every packed type.
//!
//! Bounds violations never panic and never touch memory outside the buffer. Instead the packer
//! latches into a failed state in which every further operation is a no-op, and callers check
//! [`BufferPacker::is_ok`] (or [`BufferPacker::check`]) once at the end of a sequence.
//!
//! ```
//! use buffer_packer::BufferPacker;
//!
//! let mut packer = BufferPacker::<8>::new();
//! packer.pack(15u16);
//! packer.pack(16.0f32);
//! assert!(packer.is_ok());
//!
//! let mut unpacker = BufferPacker::<8>::from_source(packer.data());
//! assert_eq!(unpacker.unpack::<u16>(), 15);
//! assert_eq!(unpacker.unpack::<f32>(), 16.0);
//! assert!(unpacker.is_ok());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod packer;
mod reader;
mod writer;


pub use error::{PackerError, Result};
pub use packer::{BufferPacker, Mode};
