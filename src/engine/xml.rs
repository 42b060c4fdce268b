//! Metadata document: provenance attributes plus every packet metadata field as a named element.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::format::{DecodeError, Envelope, PacketMetadata};
use crate::utils::config::OutputNames;

/// Serialized shape of the `.csv.xml` companion. Timestamps and the identifier are pre-rendered text.
#[derive(Debug, Serialize)]
pub struct MetadataDocument<'a> {
    #[serde(rename = "@svs-timestamp")]
    pub svs_timestamp: String,
    #[serde(rename = "@svs-sequence")]
    pub svs_sequence: u32,
    #[serde(rename = "@svs-file")]
    pub svs_file: &'a str,

    #[serde(rename = "acquisition-time")]
    pub acquisition_time: String,
    #[serde(rename = "originator-seq-no")]
    pub originator_seq_no: u32,
    #[serde(rename = "auxiliary-time")]
    pub auxiliary_time: u64,
    #[serde(rename = "originator-id")]
    pub originator_id: u8,
    #[serde(rename = "source-x-size")]
    pub source_x_size: u16,
    #[serde(rename = "source-y-size")]
    pub source_y_size: u16,
    pub format: u8,
    pub fdrp: u16,
    #[serde(rename = "roi-x-offset")]
    pub roi_x_offset: u16,
    #[serde(rename = "roi-x-size")]
    pub roi_x_size: u16,
    #[serde(rename = "roi-y-offset")]
    pub roi_y_offset: u16,
    #[serde(rename = "roi-y-size")]
    pub roi_y_size: u16,
    #[serde(rename = "scale-x-size")]
    pub scale_x_size: u16,
    #[serde(rename = "scale-y-size")]
    pub scale_y_size: u16,
    #[serde(rename = "scale-far")]
    pub scale_far: u8,
    #[serde(rename = "user-packet-info")]
    pub user_packet_info: String,
}

impl<'a> MetadataDocument<'a> {
    pub fn new(meta: &PacketMetadata, envelope: &Envelope, source_file: &'a str) -> Self {
        MetadataDocument {
            svs_timestamp: envelope.timestamp.to_precise(),
            svs_sequence: envelope.sequence,
            svs_file: source_file,
            acquisition_time: meta.acquisition.to_precise(),
            originator_seq_no: meta.sequence,
            auxiliary_time: meta.auxiliary,
            originator_id: meta.source,
            source_x_size: meta.x,
            source_y_size: meta.y,
            format: meta.format,
            fdrp: meta.drop,
            roi_x_offset: meta.offset_x,
            roi_x_size: meta.size_x,
            roi_y_offset: meta.offset_y,
            roi_y_size: meta.size_y,
            scale_x_size: meta.scale_x,
            scale_y_size: meta.scale_y,
            scale_far: meta.ratio,
            user_packet_info: meta.upi.to_text(),
        }
    }

    /// Tab-indented document rooted at `<metadata>`.
    pub fn to_xml(&self) -> Result<String, DecodeError> {
        let mut buffer = String::new();
        let mut ser =
            quick_xml::se::Serializer::with_root(&mut buffer, Some(OutputNames::XML_ROOT))
                .map_err(|e| DecodeError::Xml(e.to_string()))?;
        ser.indent('\t', 1);
        self.serialize(ser)
            .map_err(|e| DecodeError::Xml(e.to_string()))?;
        buffer.push('\n');
        Ok(buffer)
    }
}

/// Render and write the document to `path`, overwriting.
pub fn write_metadata(
    path: &Path,
    meta: &PacketMetadata,
    envelope: &Envelope,
    source_file: &str,
) -> Result<(), DecodeError> {
    let xml = MetadataDocument::new(meta, envelope, source_file).to_xml()?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(xml.as_bytes())?;
    w.flush()?;
    Ok(())
}
