//! The records of the book summaries.
//!
//! Field names follow the JSON files, which is why some of them are renamed.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A record of a data summary.
pub trait Record: DeserializeOwned + Send {
    /// The name of the file that holds the records.
    const FILE_NAME: &'static str;
}

/// The most reviewed book of a genre.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewedBook {
    /// The book title.
    pub title: String,
    /// The genre the book is the most reviewed in.
    pub genre: String,
    /// The number of reviews.
    pub reviews: f64,
}

impl Record for ReviewedBook {
    const FILE_NAME: &'static str = "most_reviewed_by_genre.json";
}

/// A book with one of the highest average ratings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopRatedBook {
    /// The book title.
    pub title: String,
    /// The average rating, out of 5.
    pub rating: f64,
}

impl Record for TopRatedBook {
    const FILE_NAME: &'static str = "top_rated_books.json";
}

/// A book with one of the highest numbers of ratings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MostRatedBook {
    /// The book title.
    pub title: String,
    /// The total number of ratings.
    #[serde(rename = "totalratings")]
    pub total_ratings: f64,
}

impl Record for MostRatedBook {
    const FILE_NAME: &'static str = "most_rated_books.json";
}

/// The popularity and the average rating of a genre.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenreRating {
    /// The genre name.
    pub genre: String,
    /// The popularity, e.g. the total number of ratings in the genre.
    pub popularity: f64,
    /// The average rating of the genre, out of 5.
    pub avg_rating: f64,
}

impl Record for GenreRating {
    const FILE_NAME: &'static str = "genre_vs_rating.json";
}

/// A highly rated book with few ratings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HiddenGem {
    /// The book title.
    pub title: String,
    /// The average rating, out of 5.
    pub rating: f64,
    /// The total number of ratings.
    #[serde(rename = "totalratings")]
    pub total_ratings: f64,
}

impl Record for HiddenGem {
    const FILE_NAME: &'static str = "hidden_gems.json";
}
