//! Container persistence: load, atomic rebuild, single-page read.
//!
//! The container is one zip file holding a reserved `meta.json` entry plus
//! the page images. Every mutation rewrites the whole container into a
//! `.tmp` sibling and renames it over the original; the rename is the only
//! commit point, so a failed rebuild leaves the original byte-for-byte
//! unchanged (it may leave the `.tmp` behind, which callers can delete out
//! of band).

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{Error, Result};
use crate::naming;

/// Reserved entry name for the metadata record
pub const META_ENTRY: &str = "meta.json";

/// The persisted metadata record. Exactly these three fields; the page
/// list is derived from the container entries on load, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub language: String,
}

fn archive_err(e: ZipError) -> Error {
    Error::Io(io::Error::other(e))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Reads the container at `path` back into a metadata record and the
/// ordered page list. Entries without a recognized image suffix are
/// ignored; ordering is recomputed as ascending lexicographic entry name,
/// never trusted from the archive.
pub fn load(path: &Path) -> Result<(BookMeta, Vec<String>)> {
    let file = File::open(path)
        .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;

    let mut meta = BookMeta::default();
    let mut pages = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(archive_err)?;
        let name = entry.name().to_string();
        if name == META_ENTRY {
            meta = serde_json::from_reader(entry)
                .map_err(|e| Error::MetadataCorrupt(e.to_string()))?;
        } else if naming::is_page_name(&name) {
            pages.push(name);
        }
    }
    pages.sort();
    Ok((meta, pages))
}

/// Rewrites the whole container: metadata entry first, then every current
/// page whose index is not in `removed` (copied byte-for-byte from the old
/// container), then each new source in order, named against the page list
/// accumulated so far. Returns the resulting ordered page list.
///
/// Nothing at `path` changes unless every step succeeds; the final rename
/// is atomic.
pub fn rebuild(
    path: &Path,
    meta: &BookMeta,
    current_pages: &[String],
    new_sources: &[PathBuf],
    removed: &[usize],
) -> Result<Vec<String>> {
    let tmp = tmp_path(path);
    // A stale .tmp from a previous failed rebuild is discarded first.
    match fs::remove_file(&tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let mut writer = ZipWriter::new(File::create(&tmp)?);
    let options = SimpleFileOptions::default();

    writer.start_file(META_ENTRY, options).map_err(archive_err)?;
    serde_json::to_writer(&mut writer, meta).map_err(|e| Error::Io(io::Error::other(e)))?;

    let removed: BTreeSet<usize> = removed.iter().copied().collect();
    let mut pages: Vec<String> = Vec::with_capacity(current_pages.len() + new_sources.len());

    // Copy surviving pages forward from the old container, if there is one.
    if path.is_file() {
        let old = File::open(path)
            .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;
        let mut old = ZipArchive::new(old)
            .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;
        for (index, name) in current_pages.iter().enumerate() {
            if removed.contains(&index) {
                continue;
            }
            let mut entry = old.by_name(name).map_err(|e| match e {
                ZipError::FileNotFound => Error::PageNotFound(name.clone()),
                other => archive_err(other),
            })?;
            writer.start_file(name.as_str(), options).map_err(archive_err)?;
            io::copy(&mut entry, &mut writer)?;
            pages.push(name.clone());
        }
    }

    let prefix = naming::page_prefix(&meta.title);
    for source in new_sources {
        let mut reader = File::open(source)?;
        let name = naming::next_page_name(&pages, &prefix, &source.to_string_lossy())?;
        writer.start_file(name.as_str(), options).map_err(archive_err)?;
        io::copy(&mut reader, &mut writer)?;
        pages.push(name);
    }

    writer.finish().map_err(archive_err)?;

    // Sole commit point. Either path now holds the new container or the
    // original is untouched.
    fs::rename(&tmp, path)?;
    Ok(pages)
}

/// Reads one page's bytes by entry name. Opens the container fresh on
/// every call and releases it on return.
pub fn read_page(path: &Path, name: &str) -> Result<Vec<u8>> {
    let file = File::open(path)
        .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::ContainerUnreadable(format!("{}: {}", path.display(), e)))?;
    let mut entry = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => Error::PageNotFound(name.to_string()),
        other => archive_err(other),
    })?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}
