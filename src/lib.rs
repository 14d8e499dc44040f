//! # cbzbook
//!
//! Create and manage CBZ comic books: a single zip container holding
//! sequentially named page images plus a small `meta.json` record (title,
//! artist, language).
//!
//! Page names sort lexicographically in page order thanks to a fixed-width
//! zero-padded number field, and every mutation rebuilds the whole
//! container into a temporary sibling file that is renamed over the
//! original, so a failed operation never corrupts an existing book.
//!
//! ```no_run
//! use cbzbook::Book;
//!
//! let mut book = Book::create("akira.cbz", "Akira", "Katsuhiro Otomo", "ja")?;
//! book.add(&["scan-a.jpg".into(), "scan-b.jpg".into()])?;
//! assert_eq!(book.page_name(0), "akira_0001.jpg");
//! let bytes = book.read_page(0)?;
//! # Ok::<(), cbzbook::Error>(())
//! ```

mod book;
mod error;
pub mod naming;
mod store;

pub use book::Book;
pub use error::{Error, Result};
pub use store::{BookMeta, META_ENTRY};
