use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bookshelf::{BookForm, BookService, JsonFileStore};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Track the books you are reading, in a JSON file")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Start the web dashboard on the default address
    bookshelf serve

    # Add a finished book with a rating
    bookshelf add --title "Dune" --author "Herbert" --completed --rating 5

    # Print the collection as JSON
    bookshelf list --json

    # Remove a book by id
    bookshelf delete 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the JSON file holding the books
    #[arg(long, env = "BOOKSHELF_DATA_FILE", default_value = "books.json", global = true)]
    pub data_file: PathBuf,

    /// Address the server listens on
    #[arg(long, env = "BOOKSHELF_ADDR", default_value = DEFAULT_ADDR, global = true)]
    pub addr: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard and JSON API (default)
    Serve,

    /// List all books
    List {
        /// Print the JSON export instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Mark the book as read
        #[arg(long)]
        completed: bool,

        /// Whole-number rating
        #[arg(long)]
        rating: Option<String>,
    },

    /// Delete a book by id
    Delete { id: u64 },
}

fn open(data_file: &Path) -> BookService<JsonFileStore> {
    BookService::new(JsonFileStore::new(data_file))
}

pub async fn serve(data_file: &Path, addr: &str) -> anyhow::Result<()> {
    let service = Arc::new(open(data_file));
    tracing::info!(data_file = %data_file.display(), "serving books");
    bookshelf::http::serve(service, addr)
        .await
        .with_context(|| format!("server on {} failed", addr))
}

pub fn list(data_file: &Path, json: bool) -> anyhow::Result<()> {
    let service = open(data_file);

    if json {
        println!("{}", service.export_json()?);
        return Ok(());
    }

    let books = service.list_all()?;
    if books.is_empty() {
        println!("No books in {}", data_file.display());
        return Ok(());
    }

    for book in books {
        let status = if book.completed { "read" } else { "unread" };
        println!(
            "{:>4}  {} by {} ({}, rating {})",
            book.id, book.title, book.author, status, book.rating
        );
    }
    Ok(())
}

pub fn add(
    data_file: &Path,
    title: String,
    author: String,
    completed: bool,
    rating: Option<String>,
) -> anyhow::Result<()> {
    let form = BookForm {
        title: Some(title),
        author: Some(author),
        completed: completed.then(String::new),
        rating,
    };
    let book = open(data_file).create_from_form(form)?;
    println!("Added #{}: {} by {}", book.id, book.title, book.author);
    Ok(())
}

pub fn delete(data_file: &Path, id: u64) -> anyhow::Result<()> {
    if open(data_file).delete(id)? {
        println!("Deleted #{}", id);
    } else {
        println!("No book with id {}", id);
    }
    Ok(())
}
