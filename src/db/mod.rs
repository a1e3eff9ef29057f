pub mod comment;
pub mod like;
pub mod post;
pub mod postgres_service;
pub mod user;
pub mod verification_token;
