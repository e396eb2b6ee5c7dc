mod bookshelf;

pub use bookshelf::Bookshelf;
