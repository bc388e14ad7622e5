//! Binary container codec for persisted table collections.
//!
//! A container file is a 12-byte framing header followed by the data
//! source encoded as UTF-8 JSON and obfuscated with a repeating-key XOR:
//!
//! ```text
//! offset 0  : u32 MAGIC    ("TBLE")
//! offset 4  : u32 VERSION
//! offset 8  : u32 LENGTH   (payload byte length)
//! offset 12 : LENGTH bytes (XOR-obfuscated UTF-8 JSON)
//! ```
//!
//! Integers are big-endian; the historical little-endian header variant is
//! auto-detected on read. Round trip reproduces the source exactly except
//! for `updatedAt`, which is restamped on every encode.
//!
//! # Example
//!
//! ```
//! use tablekit_container::{decode, encode};
//! use tablekit_model::{DataSource, TableParams};
//!
//! let mut source = DataSource::with_timestamp(0);
//! source.add_table("items", TableParams::named("Items")).unwrap();
//!
//! let bytes = encode(&mut source).unwrap();
//! let restored = decode(&bytes).unwrap();
//! assert_eq!(restored.table_list().len(), 1);
//! ```

mod error;
pub mod header;
pub mod obfuscate;
mod reader;
mod writer;

pub use error::{ContainerError, Result};
pub use header::{CONTAINER_VERSION, HEADER_LEN, Header, HeaderOrder, MAGIC};
pub use reader::{ContainerReader, decode, read_container};
pub use writer::{ContainerWriter, encode, encode_at, write_container};
