//! Recent commits, open issues and open pull requests rendered as HTML list
//! items, read through the proxy.

pub mod client;
pub mod items;
pub mod page;

pub use client::{render_feed, FeedClient, DEFAULT_REPO};
pub use items::FeedItem;
pub use page::{FeedList, FeedPage};
