/// The three sections of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shelf {
    CurrentlyReading,
    ReadThisYear,
    Favorites,
}

impl Shelf {
    /// Every shelf, in the order the payload carries them and the page shows them.
    pub const ALL: [Shelf; 3] = [Shelf::CurrentlyReading, Shelf::ReadThisYear, Shelf::Favorites];

    /// Section heading, e.g. `Read so far in 2023 (12)`.
    pub fn heading(self, count: usize, year: i32) -> String {
        match self {
            Shelf::CurrentlyReading => format!("Currently reading ({count})"),
            Shelf::ReadThisYear => format!("Read so far in {year} ({count})"),
            Shelf::Favorites => format!("All time favorites ({count})"),
        }
    }

    /// Stable identifier used for element ids.
    pub fn slug(self) -> &'static str {
        match self {
            Shelf::CurrentlyReading => "currently-reading",
            Shelf::ReadThisYear => "read-this-year",
            Shelf::Favorites => "favorites",
        }
    }
}
