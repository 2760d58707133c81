//! Property declarations.
//!
//! Candidate kinds are listed in dispatch priority order. Object-valued
//! properties name every concrete type that may appear inline; a bare
//! identifier falls through to the reference-identifier kind.

use folio_core::{Kind, PropertyDef};

use super::{AS_NS, TOOT_NS};

// ── Candidate lists ─────────────────────────────────────────────────

const ANY_OBJECT: &[Kind] = &[
    Kind::Entity("Activity"),
    Kind::Entity("Article"),
    Kind::Entity("Collection"),
    Kind::Entity("CollectionPage"),
    Kind::Entity("Create"),
    Kind::Entity("Image"),
    Kind::Entity("Link"),
    Kind::Entity("Mention"),
    Kind::Entity("Note"),
    Kind::Entity("Object"),
    Kind::Entity("OrderedCollection"),
    Kind::Entity("OrderedCollectionPage"),
    Kind::Entity("Person"),
];

const ANY_COLLECTION: &[Kind] = &[
    Kind::Entity("OrderedCollection"),
    Kind::Entity("Collection"),
    Kind::Entity("CollectionPage"),
    Kind::Entity("OrderedCollectionPage"),
];

const ORDERED: &[Kind] = &[
    Kind::Entity("OrderedCollection"),
    Kind::Entity("OrderedCollectionPage"),
];

const PAGE_OR_LINK: &[Kind] = &[
    Kind::Entity("CollectionPage"),
    Kind::Entity("Link"),
    Kind::Entity("Mention"),
    Kind::Entity("OrderedCollectionPage"),
];

const COLLECTION_OR_LINK: &[Kind] = &[
    Kind::Entity("Collection"),
    Kind::Entity("Link"),
    Kind::Entity("Mention"),
    Kind::Entity("OrderedCollection"),
];

const IMAGE_OR_LINK: &[Kind] = &[
    Kind::Entity("Image"),
    Kind::Entity("Link"),
    Kind::Entity("Mention"),
];

const TEXT: &[Kind] = &[Kind::String, Kind::LangString];

// ── Properties ──────────────────────────────────────────────────────

pub static ACTOR: PropertyDef = PropertyDef::repeatable("actor", AS_NS, ANY_OBJECT);
pub static ALTITUDE: PropertyDef = PropertyDef::functional("altitude", AS_NS, &[Kind::Float]);
pub static ATTACHMENT: PropertyDef = PropertyDef::repeatable("attachment", AS_NS, ANY_OBJECT);
pub static ATTRIBUTED_TO: PropertyDef = PropertyDef::repeatable("attributedTo", AS_NS, ANY_OBJECT);
pub static AUDIENCE: PropertyDef = PropertyDef::repeatable("audience", AS_NS, ANY_OBJECT);
pub static BCC: PropertyDef = PropertyDef::repeatable("bcc", AS_NS, ANY_OBJECT);
pub static BTO: PropertyDef = PropertyDef::repeatable("bto", AS_NS, ANY_OBJECT);
pub static CC: PropertyDef = PropertyDef::repeatable("cc", AS_NS, ANY_OBJECT);
pub static CONTENT: PropertyDef =
    PropertyDef::repeatable("content", AS_NS, TEXT).with_language_map("contentMap");
pub static CONTEXT: PropertyDef = PropertyDef::repeatable("context", AS_NS, ANY_OBJECT);
pub static CURRENT: PropertyDef = PropertyDef::functional("current", AS_NS, PAGE_OR_LINK);
pub static DISCOVERABLE: PropertyDef =
    PropertyDef::functional("discoverable", TOOT_NS, &[Kind::Boolean]);
pub static END_TIME: PropertyDef = PropertyDef::functional("endTime", AS_NS, &[Kind::DateTime]);
pub static FIRST: PropertyDef = PropertyDef::functional("first", AS_NS, PAGE_OR_LINK);
pub static FOLLOWERS: PropertyDef = PropertyDef::functional("followers", AS_NS, ANY_COLLECTION);
pub static FOLLOWING: PropertyDef = PropertyDef::functional("following", AS_NS, ANY_COLLECTION);
pub static GENERATOR: PropertyDef = PropertyDef::repeatable("generator", AS_NS, ANY_OBJECT);
pub static HEIGHT: PropertyDef =
    PropertyDef::functional("height", AS_NS, &[Kind::NonNegativeInteger]);
pub static HREF: PropertyDef = PropertyDef::functional("href", AS_NS, &[Kind::AnyUri]);
pub static HREFLANG: PropertyDef = PropertyDef::functional("hreflang", AS_NS, &[Kind::String]);
pub static ICON: PropertyDef = PropertyDef::repeatable("icon", AS_NS, IMAGE_OR_LINK);
pub static ID: PropertyDef = PropertyDef::functional("id", AS_NS, &[Kind::AnyUri]).as_keyword();
pub static IMAGE: PropertyDef = PropertyDef::repeatable("image", AS_NS, IMAGE_OR_LINK);
pub static INBOX: PropertyDef = PropertyDef::functional("inbox", AS_NS, ORDERED);
pub static IN_REPLY_TO: PropertyDef = PropertyDef::repeatable("inReplyTo", AS_NS, ANY_OBJECT);
pub static INSTRUMENT: PropertyDef = PropertyDef::repeatable("instrument", AS_NS, ANY_OBJECT);
pub static ITEMS: PropertyDef = PropertyDef::repeatable("items", AS_NS, ANY_OBJECT);
pub static LAST: PropertyDef = PropertyDef::functional("last", AS_NS, PAGE_OR_LINK);
pub static LIKES: PropertyDef = PropertyDef::functional("likes", AS_NS, ANY_COLLECTION);
pub static LOCATION: PropertyDef = PropertyDef::repeatable("location", AS_NS, ANY_OBJECT);
pub static MEDIA_TYPE: PropertyDef = PropertyDef::functional("mediaType", AS_NS, &[Kind::String]);
pub static NAME: PropertyDef =
    PropertyDef::repeatable("name", AS_NS, TEXT).with_language_map("nameMap");
pub static NEXT: PropertyDef = PropertyDef::functional("next", AS_NS, PAGE_OR_LINK);
pub static OBJECT: PropertyDef = PropertyDef::repeatable("object", AS_NS, ANY_OBJECT);
pub static ORDERED_ITEMS: PropertyDef = PropertyDef::repeatable("orderedItems", AS_NS, ANY_OBJECT);
pub static ORIGIN: PropertyDef = PropertyDef::repeatable("origin", AS_NS, ANY_OBJECT);
pub static OUTBOX: PropertyDef = PropertyDef::functional("outbox", AS_NS, ORDERED);
pub static PART_OF: PropertyDef = PropertyDef::functional("partOf", AS_NS, COLLECTION_OR_LINK);
pub static PREFERRED_USERNAME: PropertyDef =
    PropertyDef::functional("preferredUsername", AS_NS, TEXT)
        .with_language_map("preferredUsernameMap");
pub static PREV: PropertyDef = PropertyDef::functional("prev", AS_NS, PAGE_OR_LINK);
pub static PREVIEW: PropertyDef = PropertyDef::repeatable("preview", AS_NS, ANY_OBJECT);
pub static PUBLISHED: PropertyDef = PropertyDef::functional("published", AS_NS, &[Kind::DateTime]);
pub static REL: PropertyDef = PropertyDef::repeatable("rel", AS_NS, &[Kind::String]);
pub static REPLIES: PropertyDef = PropertyDef::functional("replies", AS_NS, ANY_COLLECTION);
pub static RESULT: PropertyDef = PropertyDef::repeatable("result", AS_NS, ANY_OBJECT);
pub static SENSITIVE: PropertyDef = PropertyDef::functional("sensitive", AS_NS, &[Kind::Boolean]);
pub static SHARES: PropertyDef = PropertyDef::functional("shares", AS_NS, ANY_COLLECTION);
pub static START_INDEX: PropertyDef =
    PropertyDef::functional("startIndex", AS_NS, &[Kind::NonNegativeInteger]);
pub static START_TIME: PropertyDef =
    PropertyDef::functional("startTime", AS_NS, &[Kind::DateTime]);
pub static SUMMARY: PropertyDef =
    PropertyDef::repeatable("summary", AS_NS, TEXT).with_language_map("summaryMap");
pub static TAG: PropertyDef = PropertyDef::repeatable("tag", AS_NS, ANY_OBJECT);
pub static TARGET: PropertyDef = PropertyDef::repeatable("target", AS_NS, ANY_OBJECT);
pub static TO: PropertyDef = PropertyDef::repeatable("to", AS_NS, ANY_OBJECT);
pub static TOTAL_ITEMS: PropertyDef =
    PropertyDef::functional("totalItems", AS_NS, &[Kind::NonNegativeInteger]);
pub static TYPE: PropertyDef =
    PropertyDef::repeatable("type", AS_NS, &[Kind::AnyUri, Kind::String]).as_keyword();
pub static UPDATED: PropertyDef = PropertyDef::functional("updated", AS_NS, &[Kind::DateTime]);
pub static URL: PropertyDef = PropertyDef::repeatable(
    "url",
    AS_NS,
    &[Kind::AnyUri, Kind::Entity("Link"), Kind::Entity("Mention")],
);
pub static WIDTH: PropertyDef =
    PropertyDef::functional("width", AS_NS, &[Kind::NonNegativeInteger]);
