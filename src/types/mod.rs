pub mod book;
pub mod comment;
pub mod error;
pub mod mail;
pub mod post;
pub mod response;
pub mod token;
pub mod user;
