//! Server-rendered dashboard page.

use std::fmt::Write;

use crate::book::Book;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Book Tracker</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem; border-bottom: 1px solid #ddd; }
form.inline { display: inline; }
</style>
</head>
<body>
<h1>Book Tracker</h1>
<form method="post" action="/api/books">
<input name="title" placeholder="Title" required>
<input name="author" placeholder="Author" required>
<label><input type="checkbox" name="completed"> Completed</label>
<input name="rating" type="number" min="0" max="5" value="0">
<button type="submit">Add book</button>
</form>
"#;

const TABLE_HEAD: &str = "<table>\n\
<tr><th>Title</th><th>Author</th><th>Status</th><th>Rating</th><th></th></tr>\n";

const TAIL: &str = "</body>\n</html>\n";

/// Render the dashboard listing `books` in order.
pub fn render_index(books: &[Book]) -> String {
    let mut html = String::from(HEAD);

    if books.is_empty() {
        html.push_str("<p>No books yet.</p>\n");
    } else {
        html.push_str(TABLE_HEAD);
        for book in books {
            // Writing to a String cannot fail.
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><form class=\"inline\" method=\"post\" action=\"/api/books/delete/{}\">\
                 <button type=\"submit\">Delete</button></form></td></tr>\n",
                escape(&book.title),
                escape(&book.author),
                if book.completed { "Read" } else { "Unread" },
                book.rating,
                book.id,
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str(TAIL);
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
