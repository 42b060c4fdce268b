//! Sample block → CSV.
//!
//! ```text
//! [columns: 1 byte ]  N
//! [scales:  N x u16]  little-endian, one per column
//! [rows:    k x N x f32] little-endian, until end of stream
//! ```

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::format::{DecodeError, ReadContext};

const F32_LEN: usize = 4;

/// Decoded sample block borrowed from the record's trailing bytes.
#[derive(Debug)]
pub struct SampleBlock<'a> {
    pub scales: Vec<u16>,
    rows: &'a [u8],
}

impl<'a> SampleBlock<'a> {
    /// Parse the block header and check that the rows fill the remainder exactly.
    pub fn parse(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let mut c = buf;
        let columns = c.read_u8().field("sample column count")? as usize;
        let scales = (0..columns)
            .map(|_| c.read_u16::<LittleEndian>().field("sample scale"))
            .collect::<Result<Vec<_>, _>>()?;

        let row_len = columns * F32_LEN;
        if row_len == 0 {
            if !c.is_empty() {
                return Err(DecodeError::Malformed {
                    what: "sample block",
                    reason: format!("zero columns but {} trailing bytes", c.len()),
                });
            }
        } else if c.len() % row_len != 0 {
            return Err(DecodeError::Truncated { what: "sample row" });
        }
        Ok(SampleBlock { scales, rows: c })
    }

    pub fn columns(&self) -> usize {
        self.scales.len()
    }

    pub fn row_count(&self) -> usize {
        match self.columns() {
            0 => 0,
            n => self.rows.len() / (n * F32_LEN),
        }
    }

    /// `t` followed by one `g2(t, <scale>)` label per column.
    pub fn header(&self) -> Vec<String> {
        std::iter::once("t".to_string())
            .chain(self.scales.iter().map(|s| column_label(*s)))
            .collect()
    }

    /// Rows of decoded values in file order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f32>> + '_ {
        let n = self.columns().max(1);
        self.rows.chunks_exact(n * F32_LEN).map(|row| {
            row.chunks_exact(F32_LEN)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect()
        })
    }

    /// Write header and rows as CSV. The first field of each row is its 0-based index.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<(), DecodeError> {
        let mut out = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(w);
        out.write_record(self.header())?;
        let mut record = Vec::with_capacity(self.columns() + 1);
        for (i, row) in self.rows().enumerate() {
            record.clear();
            record.push(i.to_string());
            record.extend(row.into_iter().map(format_sample));
            out.write_record(&record)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Column label carrying the column's scale word.
pub fn column_label(scale: u16) -> String {
    format!("g2(t, {})", scale)
}

/// Shortest decimal that round-trips through f32; never exponent notation.
pub fn format_sample(v: f32) -> String {
    v.to_string()
}

/// Read the rest of `r` as a sample block and write it to `path`.
/// The block is validated before `path` is created, so a truncated block leaves no CSV.
pub fn encode_samples<R: Read>(r: &mut R, path: &Path) -> Result<usize, DecodeError> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let block = SampleBlock::parse(&buf)?;

    let mut w = BufWriter::new(File::create(path)?);
    block.write_csv(&mut w)?;
    w.flush()?;
    Ok(block.row_count())
}
