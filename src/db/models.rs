//! Database Models

/// One user's stored profile. `name` is the identity and the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub address: String,
    pub gender: String,
    pub favorite_movie: String,
    pub favorite_book: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        gender: impl Into<String>,
        favorite_movie: impl Into<String>,
        favorite_book: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            gender: gender.into(),
            favorite_movie: favorite_movie.into(),
            favorite_book: favorite_book.into(),
        }
    }
}
