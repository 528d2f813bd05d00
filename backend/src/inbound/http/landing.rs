//! Landing page listing the books currently in the catalogue.

use std::fmt::Write as _;

use actix_web::{HttpResponse, get, http::header::ContentType, web};

use crate::domain::Book;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const TITLE: &str = "In-N-Out-Books App";
const TAGLINE: &str = "Discover and Share Moments That Transport You Into Stories";
const STYLE: &str = "\
body, h1, h2, h3 { margin: 0; padding: 0; border: 0; }
body { background: #424242; color: #fff; margin: 1.25rem; font-size: 1.25rem; }
h1, h2, h3 { color: #EF5350; }
h1, h2 { text-align: center; }
h3 { color: #fff; }
.container { width: 50%; margin: 0 auto; }
.book { border: 1px solid #EF5350; padding: 1rem; margin: 1rem 0; }";

/// Escape text for inclusion in HTML element content or attributes.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the landing page for `books`.
pub fn render_landing(books: &[Book]) -> String {
    let mut entries = String::new();
    for book in books {
        // Writing to a String cannot fail.
        let _ = write!(
            entries,
            "\n          <div class=\"book\">\n            <h3>{}</h3>\n            <p>Author: {}</p>\n          </div>",
            escape_html(&book.title),
            escape_html(&book.author),
        );
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{TITLE}</title>
    <style>
{STYLE}
    </style>
  </head>
  <body>
    <div class="container">
      <header>
        <h1>{TITLE}</h1>
        <h2>{TAGLINE}</h2>
      </header>
      <main>{entries}
      </main>
    </div>
  </body>
</html>
"#
    )
}

/// Serve the landing page.
#[get("/")]
pub async fn landing(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let books = state.books.list().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_landing(&books)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hogwarts, A History", "Hogwarts, A History")]
    #[case("<script>alert('x')</script>", "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;")]
    #[case("Tom & \"Jerry\"", "Tom &amp; &quot;Jerry&quot;")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }

    #[rstest]
    fn lists_every_book_in_order() {
        let page = render_landing(&[
            Book::new(1, "The Fellowship of the Ring", "J.R.R. Tolkien"),
            Book::new(2, "Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
        ]);
        assert!(page.contains("<title>In-N-Out-Books App</title>"));
        let first = page.find("The Fellowship of the Ring").expect("first book");
        let second = page
            .find("Harry Potter and the Sorcerer&#39;s Stone")
            .expect("second book escaped");
        assert!(first < second);
        assert_eq!(page.matches("class=\"book\"").count(), 2);
    }

    #[rstest]
    fn empty_catalogue_renders_no_entries() {
        let page = render_landing(&[]);
        assert!(!page.contains("class=\"book\""));
        assert!(page.contains(TAGLINE));
    }
}
