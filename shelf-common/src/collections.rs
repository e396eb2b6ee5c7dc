use crate::{Book, Shelf, ShelfError};
use serde::Deserialize;

/// The three book lists served by the shelf endpoint.
///
/// Arrives as a JSON array of exactly three arrays,
/// `[currently_reading, read_this_year, favorites]`. A payload of any other
/// shape fails as a whole; there is no partial result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ShelfPayload")]
pub struct BookCollections {
    pub currently_reading: Vec<Book>,
    pub read_this_year: Vec<Book>,
    pub favorites: Vec<Book>,
}

/// Wire shape: a positional triple.
#[derive(Deserialize)]
struct ShelfPayload(Vec<Book>, Vec<Book>, Vec<Book>);

impl From<ShelfPayload> for BookCollections {
    fn from(ShelfPayload(currently_reading, read_this_year, favorites): ShelfPayload) -> Self {
        Self {
            currently_reading,
            read_this_year,
            favorites,
        }
    }
}

impl BookCollections {
    /// Decode a response body.
    pub fn from_json(body: &[u8]) -> Result<Self, ShelfError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Books on a shelf, in the order received.
    pub fn books(&self, shelf: Shelf) -> &[Book] {
        match shelf {
            Shelf::CurrentlyReading => &self.currently_reading,
            Shelf::ReadThisYear => &self.read_this_year,
            Shelf::Favorites => &self.favorites,
        }
    }

    /// Every shelf paired with its books, in render order.
    pub fn sections(&self) -> impl Iterator<Item = (Shelf, &[Book])> {
        Shelf::ALL.into_iter().map(move |shelf| (shelf, self.books(shelf)))
    }

    pub fn total(&self) -> usize {
        self.currently_reading.len() + self.read_this_year.len() + self.favorites.len()
    }
}
