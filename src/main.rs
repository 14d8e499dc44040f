mod cli;

use anyhow::{Context, Result};
use cbzbook::Book;
use clap::Parser;
use cli::Command;
use std::fs;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        Command::Create {
            book,
            title,
            artist,
            language,
        } => {
            let book = Book::create(&book, &title, &artist, &language)
                .with_context(|| format!("Failed to create {}", book.display()))?;
            eprintln!("Created {}", book.path().display());
        }
        Command::Add { book, sources } => {
            let mut book = open(&book)?;
            book.add(&sources)?;
            eprintln!(
                "Added {} pages, {} now has {}",
                sources.len(),
                book.path().display(),
                book.page_count()
            );
        }
        Command::Remove { book, indices } => {
            let mut book = open(&book)?;
            let before = book.page_count();
            book.remove(&indices)?;
            eprintln!(
                "Removed {} pages, {} now has {}",
                before - book.page_count(),
                book.path().display(),
                book.page_count()
            );
        }
        Command::Info { book } => {
            let book = open(&book)?;
            println!("title:    {}", book.title());
            println!("artist:   {}", book.artist());
            println!("language: {}", book.language());
            println!("pages:    {}", book.page_count());
            for index in 0..book.page_count() {
                println!("  [{}] {}", index, book.page_name(index));
            }
        }
        Command::Extract {
            book,
            index,
            output,
        } => {
            let book = open(&book)?;
            let bytes = book
                .read_page(index)
                .with_context(|| format!("Failed to read page {index}"))?;
            match output {
                Some(path) => {
                    fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Wrote {} ({} bytes)", path.display(), bytes.len());
                }
                None => io::stdout().write_all(&bytes)?,
            }
        }
    }

    Ok(())
}

fn open(path: &std::path::Path) -> Result<Book> {
    Book::open(path).with_context(|| format!("Failed to open {}", path.display()))
}
