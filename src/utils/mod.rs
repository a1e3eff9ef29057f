pub mod hashtags;
pub mod mail;
pub mod token;
pub mod validation;
pub mod webutils;
