//! Container reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tablekit_model::DataSource;

use crate::error::{ContainerError, Result};
use crate::header::{HEADER_LEN, parse_header};
use crate::obfuscate;

/// Decode a framed container buffer into a data source.
///
/// Validates the header (magic, version, declared length), reverses the
/// payload obfuscation, and parses the JSON body.
pub fn decode(data: &[u8]) -> Result<DataSource> {
    let header = parse_header(data)?;

    let payload = &data[HEADER_LEN..];
    if payload.len() != header.payload_len as usize {
        return Err(ContainerError::format(format!(
            "declared payload length {} does not match {} remaining bytes",
            header.payload_len,
            payload.len()
        )));
    }

    let mut payload = payload.to_vec();
    obfuscate::apply_key(&mut payload);

    let source = serde_json::from_slice(&payload)?;
    Ok(source)
}

/// Container reader over any [`Read`] source.
pub struct ContainerReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ContainerReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the whole container into memory and decode it.
    pub fn read_source(mut self) -> Result<DataSource> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        decode(&data)
    }
}

impl ContainerReader<File> {
    /// Open a container file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

/// Read a data source from a container file.
pub fn read_container(path: &Path) -> Result<DataSource> {
    ContainerReader::open(path)?.read_source()
}
