//! Sample books and payloads for tests.

use crate::{Book, BookCollections};

/// One unfinished book on the currently-reading shelf, nothing else.
pub const SAMPLE_PAYLOAD: &str =
    r#"[[{"url":"u1","title":"t1","read_date":"","cover_src":"c1"}],[],[]]"#;

pub fn book(id: &str, read_date: Option<&str>) -> Book {
    Book {
        url: format!("https://example.com/book/{id}"),
        title: format!("Book {id}"),
        read_date: read_date.map(str::to_string),
        cover_src: format!("https://example.com/covers/{id}.jpg"),
    }
}

/// Collections with the requested number of books per shelf.
///
/// Finished books carry a read date; currently-reading ones don't.
pub fn collections(currently_reading: usize, read_this_year: usize, favorites: usize) -> BookCollections {
    BookCollections {
        currently_reading: (0..currently_reading)
            .map(|i| book(&format!("reading-{i}"), None))
            .collect(),
        read_this_year: (0..read_this_year)
            .map(|i| book(&format!("year-{i}"), Some("2023-01-15")))
            .collect(),
        favorites: (0..favorites)
            .map(|i| book(&format!("favorite-{i}"), Some("2019-07-04")))
            .collect(),
    }
}
