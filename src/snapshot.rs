use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::seed;
use crate::store::Store;

/// Load the store snapshot from `path`.
///
/// A missing file yields the seeded default collections; a corrupt file is
/// an error, never a silent reseed.
pub fn load(path: &Path) -> io::Result<Store> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no snapshot at {}, seeding defaults", path.display());
            return Ok(seed::seed_store());
        }
        Err(e) => return Err(e),
    };
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Persist the store as JSON.
///
/// Writes to a temp file, fsyncs, then renames over the snapshot so a crash
/// mid-write never clobbers the previous one.
pub fn save(path: &Path, store: &Store) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, store)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
