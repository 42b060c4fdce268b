//! One input file end to end: envelope → intro copy, or metadata → shard → XML → CSV.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::engine::intro::write_intro;
use crate::engine::paths::{file_base_name, identifier_from_filename, prepare_shard};
use crate::engine::samples::encode_samples;
use crate::engine::xml::write_metadata;
use crate::format::{DecodeError, Header, PacketMetadata, read_envelope};
use crate::utils::ensure_dir;
use crate::{FileOutcome, Opts};

/// Decode `path` and write its artifacts under `opts.datadir`.
///
/// Steps run strictly in order on one reader. Any error abandons this file only;
/// artifacts already written (e.g. the XML before a truncated sample block) are left in place.
pub fn process_file(path: &Path, opts: &Opts) -> Result<FileOutcome, DecodeError> {
    let mut r = BufReader::new(File::open(path)?);

    let envelope = match read_envelope(&mut r)? {
        Header::Recognized(envelope) => envelope,
        Header::NotRecognized => return Ok(FileOutcome::Skipped),
    };

    let source = file_base_name(path);
    let identifier = identifier_from_filename(&source);
    let id_dir = opts.datadir.join(&identifier);
    ensure_dir(&id_dir)?;

    if envelope.is_intro() {
        return write_intro(&mut r, &id_dir, &identifier).map(FileOutcome::Intro);
    }

    let meta = PacketMetadata::read_from(&mut r)?;
    let target = prepare_shard(&meta, &id_dir, &identifier, opts.files_per_dir())?;
    write_metadata(&target.xml_path(), &meta, &envelope, &source)?;

    let csv_path = target.csv_path();
    let rows = encode_samples(&mut r, &csv_path)?;
    log::debug!(
        "{}: {} rows into shard {}",
        csv_path.display(),
        rows,
        target.shard_index
    );
    Ok(FileOutcome::Data(csv_path))
}
