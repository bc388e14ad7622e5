//! Container writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use tablekit_model::DataSource;

use crate::error::{ContainerError, Result};
use crate::header::{HEADER_LEN, build_header};
use crate::obfuscate;

/// Encode a data source into a framed container buffer.
///
/// Stamps `updatedAt` with the current time before serializing, which is
/// why the source is taken mutably.
pub fn encode(source: &mut DataSource) -> Result<Vec<u8>> {
    encode_at(source, Utc::now().timestamp_millis())
}

/// Encode with an explicit `updatedAt` timestamp.
pub fn encode_at(source: &mut DataSource, now_ms: i64) -> Result<Vec<u8>> {
    source.updated_at = now_ms;

    let mut payload = serde_json::to_vec(&*source)?;
    obfuscate::apply_key(&mut payload);

    let payload_len = u32::try_from(payload.len())
        .map_err(|_| ContainerError::format("payload exceeds u32 length field"))?;

    let mut framed = Vec::with_capacity(HEADER_LEN + payload.len());
    framed.extend_from_slice(&build_header(source.version, payload_len));
    framed.extend_from_slice(&payload);
    Ok(framed)
}

/// Container writer over any [`Write`] sink.
pub struct ContainerWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> ContainerWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Encode and write the data source, consuming the writer.
    pub fn write_source(mut self, source: &mut DataSource) -> Result<()> {
        let framed = encode(source)?;
        self.writer.write_all(&framed)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl ContainerWriter<File> {
    /// Create a container file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

/// Write a data source to a container file.
pub fn write_container(path: &Path, source: &mut DataSource) -> Result<()> {
    ContainerWriter::create(path)?.write_source(source)
}
