use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};

use crate::store::Store;

impl Store {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening snapshot {path:?}"))?;
        let mut bytes = vec![];
        ZlibDecoder::new(BufReader::new(file))
            .read_to_end(&mut bytes)
            .with_context(|| format!("decompressing snapshot {path:?}"))?;
        let mut store: Store =
            postcard::from_bytes(&bytes).with_context(|| format!("decoding snapshot {path:?}"))?;
        store.stop_index = store.arrets.values().collect();
        Ok(store)
    }

    /// Writes next to `path` first and renames over it, so an interrupted save
    /// leaves the previous snapshot intact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let staging = staging_path(path);
        let bytes = postcard::to_stdvec(self)?;

        let file =
            File::create(&staging).with_context(|| format!("creating snapshot {staging:?}"))?;
        let mut encoder = ZlibEncoder::new(BufWriter::new(file), Compression::default());
        encoder.write_all(&bytes)?;
        let file = encoder
            .finish()?
            .into_inner()
            .map_err(|e| e.into_error())
            .with_context(|| format!("flushing snapshot {staging:?}"))?;
        file.sync_all()?;

        fs::rename(&staging, path)
            .with_context(|| format!("moving snapshot {staging:?} to {path:?}"))?;
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}
