pub mod api;
pub mod auth;

pub use api::{RedditClient, RedditCommentData, RedditListing, RedditPostData};
pub use auth::AccessToken;
