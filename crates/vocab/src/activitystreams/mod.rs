//! The ActivityStreams 2.0 vocabulary, with the Mastodon `toot:` extension
//! property `discoverable` on `Person`.

pub mod properties;
pub mod types;

pub use types::{
    ACTIVITY, ACTIVITYSTREAMS, ARTICLE, COLLECTION, COLLECTION_PAGE, CREATE, IMAGE, LINK, MENTION,
    NOTE, OBJECT, ORDERED_COLLECTION, ORDERED_COLLECTION_PAGE, PERSON,
};

/// Namespace of every ActivityStreams type and property.
pub const AS_NS: &str = "https://www.w3.org/TR/activitystreams-vocabulary";

/// Namespace of the Mastodon extension properties.
pub const TOOT_NS: &str = "http://joinmastodon.org/ns#";
