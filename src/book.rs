//! The book aggregate: metadata plus the ordered page list, backed by a
//! single container file on disk.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::naming;
use crate::store::{self, BookMeta};

/// A comic book backed by one container file.
///
/// The page list is derived from the container, in ascending lexicographic
/// name order, and is rebuilt on every load and after every successful
/// mutation. The in-memory view goes stale the moment the backing file
/// changes outside this API; concurrent writers to the same path are not
/// arbitrated here and must be serialized by the caller.
#[derive(Debug)]
pub struct Book {
    meta: BookMeta,
    path: PathBuf,
    pages: Vec<String>,
}

impl Book {
    /// Creates a new book at `path` containing only the metadata entry.
    /// The parent directory must already exist.
    pub fn create(
        path: impl Into<PathBuf>,
        title: &str,
        artist: &str,
        language: &str,
    ) -> Result<Self> {
        let book = Book {
            meta: BookMeta {
                title: title.to_string(),
                artist: artist.to_string(),
                language: language.to_string(),
            },
            path: path.into(),
            pages: Vec::new(),
        };
        store::rebuild(&book.path, &book.meta, &[], &[], &[])?;
        Ok(book)
    }

    /// Opens an existing book from its container file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (meta, pages) = store::load(&path)?;
        Ok(Book { meta, path, pages })
    }

    /// Appends the given source images as new pages, in order. On any
    /// failure (unreadable source, unrecognized suffix, exhausted page
    /// numbers, I/O) the container is left unchanged.
    pub fn add(&mut self, sources: &[PathBuf]) -> Result<()> {
        store::rebuild(&self.path, &self.meta, &self.pages, sources, &[])?;
        // Reload from disk rather than trusting the accumulated list.
        self.reload()
    }

    /// Removes the pages at the given indices. Indices outside
    /// `0..page_count()` are ignored.
    pub fn remove(&mut self, indices: &[usize]) -> Result<()> {
        self.pages = store::rebuild(&self.path, &self.meta, &self.pages, &[], indices)?;
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The entry name of the page at `index`, or `""` if out of range.
    pub fn page_name(&self, index: usize) -> &str {
        self.pages.get(index).map(String::as_str).unwrap_or("")
    }

    /// Reads the raw bytes of the page at `index`. The container is opened
    /// fresh for each call.
    pub fn read_page(&self, index: usize) -> Result<Vec<u8>> {
        let name = self
            .pages
            .get(index)
            .ok_or_else(|| Error::PageNotFound(format!("index {index}")))?;
        store::read_page(&self.path, name)
    }

    /// The prefix every page name of this book starts with.
    pub fn page_prefix(&self) -> String {
        naming::page_prefix(&self.meta.title)
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn artist(&self) -> &str {
        &self.meta.artist
    }

    pub fn language(&self) -> &str {
        &self.meta.language
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn reload(&mut self) -> Result<()> {
        let (meta, pages) = store::load(&self.path)?;
        self.meta = meta;
        self.pages = pages;
        Ok(())
    }
}
