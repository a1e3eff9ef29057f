pub mod comment;
pub mod post;
pub mod post_hashtag;
pub mod post_image;
pub mod post_like;
pub mod user;
pub mod verification_token;

/*
 Accounts start out inactive. Signup stores the user plus a one-shot
 verification token; following the emailed link flips the account to active
 and burns the token. Only active accounts can log in, post, comment or like.
 Posts own their images, hashtags, comments and likes, all cascading on
 delete. Likes are unique per (user, post).
 */
