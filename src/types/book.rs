use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct BookSearchQuery {
    pub query: String,
    pub search_type: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookView {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub cover_image_url: String,
    pub description: String,
    pub pub_date: String,
    pub link: String,
}

#[derive(Serialize, Deserialize)]
pub struct BookSearchRes {
    pub books: Vec<BookView>,
    pub total_results: u32,
}

// Wire types for the Aladin ItemSearch API ("output=js" JSON variant).

#[derive(Deserialize, Debug)]
pub struct AladinResponse {
    #[serde(rename = "totalResults")]
    pub total_results: Option<u32>,
    pub item: Option<Vec<AladinItem>>,
}

#[derive(Deserialize, Debug)]
pub struct AladinItem {
    pub isbn: Option<String>,
    pub isbn13: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub link: String,
}

impl From<AladinItem> for BookView {
    fn from(item: AladinItem) -> Self {
        BookView {
            isbn: item.isbn13.or(item.isbn).unwrap_or_default(),
            title: item.title,
            author: item.author,
            publisher: item.publisher,
            cover_image_url: item.cover,
            description: item.description,
            pub_date: item.pub_date,
            link: item.link,
        }
    }
}
