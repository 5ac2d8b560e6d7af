//! # objtoken
//!
//! A lossless digit-token codec for placeable game objects.
//!
//! ## What is an object token?
//!
//! A placeable object — identity, position, discretized transform codes,
//! layering, and two colors — is packed into a fixed 26-byte little-endian
//! layout, and that byte sequence, read as base-256 digits, is converted to
//! base 126 with arbitrary-precision arithmetic. The resulting digit
//! sequence is a compact, transport-safe token; decoding runs the same two
//! stages in reverse and reproduces the record exactly.
//!
//! ## Key Guarantees
//!
//! - **Lossless**: every valid record round-trips bit-for-bit, including
//!   single-precision float coordinates
//! - **Exact arithmetic**: the base change runs over [`num_bigint::BigUint`],
//!   so no magnitude is ever truncated
//! - **No silent corruption**: out-of-range fields, wrong lengths, and
//!   out-of-base digits are errors, never clamps or wraps
//! - **Pure**: every operation is a synchronous function of its inputs, with
//!   no shared state and no I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use objtoken::{decode, encode, ObjectRecord};
//!
//! let record = ObjectRecord::new(1, 5205.0, 1245.0)
//!     .with_y_angle(18)
//!     .with_z_layer(3);
//!
//! let token = encode(&record)?;
//! assert_eq!(decode(&token)?, record);
//! # Ok::<(), objtoken::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! The two stages are usable on their own:
//!
//! - [`pack`] / [`unpack`]: the fixed 26-byte binary layout
//! - [`convert_base`]: positional base conversion with the leading-zero
//!   convention the token format depends on (see [`base`] for the fine
//!   print — the zero-digit COUNT is preserved across the base change, not
//!   a value-equivalent padding)
//!
//! ## Boundaries
//!
//! Rendering base-126 digits as printable characters, the wire protocol to
//! the remote service, and parsing of level-description text are all
//! collaborators, not residents. [`transport`] pins down the few types this
//! crate shares with them, and [`tables`] holds the immutable code tables
//! the attribute-normalizing parser is handed.
//!
//! ## Examples
//!
//! Runnable demos live under `demos/`:
//!
//! - **`place_object.rs`** — encode a record and print the token a
//!   transport layer would deliver
//! - **`json_batch.rs`** — read a JSON record list and encode each entry
//!
//! Run one with: `cargo run --example <name>`

pub mod base;
pub mod codec;
pub mod encoder;
pub mod error;
pub mod record;
pub mod tables;
pub mod transport;

pub use base::convert_base;
pub use codec::{pack, unpack, PACKED_LEN};
pub use encoder::{decode, encode, INPUT_BASE, OUTPUT_BASE};
pub use error::{Error, Result};
pub use record::{Color, ObjectRecord};
pub use transport::{ChunkCoord, ObjectKey, PlacementReceipt};
