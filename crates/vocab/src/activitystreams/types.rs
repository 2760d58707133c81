//! Type declarations and the vocabulary table.
//!
//! Property lists are in alphabetical order, which is also the order the
//! canonical comparison walks them in.

use folio_core::{PropertyDef, TypeDef, Vocabulary};

use super::properties as p;
use super::AS_NS;

// ── Property lists ──────────────────────────────────────────────────

static OBJECT_PROPERTIES: [&PropertyDef; 31] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::END_TIME,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static PERSON_PROPERTIES: [&PropertyDef; 37] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::DISCOVERABLE,
    &p::END_TIME,
    &p::FOLLOWERS,
    &p::FOLLOWING,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::INBOX,
    &p::IN_REPLY_TO,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::OUTBOX,
    &p::PREFERRED_USERNAME,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static ACTIVITY_PROPERTIES: [&PropertyDef; 37] = [
    &p::ACTOR,
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::END_TIME,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::INSTRUMENT,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::OBJECT,
    &p::ORIGIN,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::RESULT,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TARGET,
    &p::TO,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static COLLECTION_PROPERTIES: [&PropertyDef; 36] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::CURRENT,
    &p::END_TIME,
    &p::FIRST,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::ITEMS,
    &p::LAST,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TOTAL_ITEMS,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static ORDERED_COLLECTION_PROPERTIES: [&PropertyDef; 36] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::CURRENT,
    &p::END_TIME,
    &p::FIRST,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::LAST,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::ORDERED_ITEMS,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TOTAL_ITEMS,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static COLLECTION_PAGE_PROPERTIES: [&PropertyDef; 39] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::CURRENT,
    &p::END_TIME,
    &p::FIRST,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::ITEMS,
    &p::LAST,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::NEXT,
    &p::PART_OF,
    &p::PREV,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TOTAL_ITEMS,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static ORDERED_COLLECTION_PAGE_PROPERTIES: [&PropertyDef; 40] = [
    &p::ALTITUDE,
    &p::ATTACHMENT,
    &p::ATTRIBUTED_TO,
    &p::AUDIENCE,
    &p::BCC,
    &p::BTO,
    &p::CC,
    &p::CONTENT,
    &p::CONTEXT,
    &p::CURRENT,
    &p::END_TIME,
    &p::FIRST,
    &p::GENERATOR,
    &p::ICON,
    &p::ID,
    &p::IMAGE,
    &p::IN_REPLY_TO,
    &p::LAST,
    &p::LIKES,
    &p::LOCATION,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::NEXT,
    &p::ORDERED_ITEMS,
    &p::PART_OF,
    &p::PREV,
    &p::PREVIEW,
    &p::PUBLISHED,
    &p::REPLIES,
    &p::SENSITIVE,
    &p::SHARES,
    &p::START_INDEX,
    &p::START_TIME,
    &p::SUMMARY,
    &p::TAG,
    &p::TO,
    &p::TOTAL_ITEMS,
    &p::TYPE,
    &p::UPDATED,
    &p::URL,
];

static LINK_PROPERTIES: [&PropertyDef; 11] = [
    &p::ATTRIBUTED_TO,
    &p::HEIGHT,
    &p::HREF,
    &p::HREFLANG,
    &p::ID,
    &p::MEDIA_TYPE,
    &p::NAME,
    &p::PREVIEW,
    &p::REL,
    &p::TYPE,
    &p::WIDTH,
];

// ── Types ───────────────────────────────────────────────────────────

pub static OBJECT: TypeDef = TypeDef {
    name: "Object",
    namespace: AS_NS,
    properties: &OBJECT_PROPERTIES,
    extends: &[],
    extended_by: &[
        "Activity",
        "Article",
        "Collection",
        "CollectionPage",
        "Create",
        "Image",
        "Note",
        "OrderedCollection",
        "OrderedCollectionPage",
        "Person",
    ],
    disjoint_with: &["Link", "Mention"],
};

pub static LINK: TypeDef = TypeDef {
    name: "Link",
    namespace: AS_NS,
    properties: &LINK_PROPERTIES,
    extends: &[],
    extended_by: &["Mention"],
    disjoint_with: &[
        "Activity",
        "Article",
        "Collection",
        "CollectionPage",
        "Create",
        "Image",
        "Note",
        "Object",
        "OrderedCollection",
        "OrderedCollectionPage",
        "Person",
    ],
};

pub static MENTION: TypeDef = TypeDef {
    name: "Mention",
    namespace: AS_NS,
    properties: &LINK_PROPERTIES,
    extends: &["Link"],
    extended_by: &[],
    disjoint_with: &[
        "Activity",
        "Article",
        "Collection",
        "CollectionPage",
        "Create",
        "Image",
        "Note",
        "Object",
        "OrderedCollection",
        "OrderedCollectionPage",
        "Person",
    ],
};

pub static NOTE: TypeDef = TypeDef {
    name: "Note",
    namespace: AS_NS,
    properties: &OBJECT_PROPERTIES,
    extends: &["Object"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

pub static ARTICLE: TypeDef = TypeDef {
    name: "Article",
    namespace: AS_NS,
    properties: &OBJECT_PROPERTIES,
    extends: &["Object"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

pub static IMAGE: TypeDef = TypeDef {
    name: "Image",
    namespace: AS_NS,
    properties: &OBJECT_PROPERTIES,
    extends: &["Object"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

pub static PERSON: TypeDef = TypeDef {
    name: "Person",
    namespace: AS_NS,
    properties: &PERSON_PROPERTIES,
    extends: &["Object"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

pub static ACTIVITY: TypeDef = TypeDef {
    name: "Activity",
    namespace: AS_NS,
    properties: &ACTIVITY_PROPERTIES,
    extends: &["Object"],
    extended_by: &["Create"],
    disjoint_with: &["Link", "Mention"],
};

pub static CREATE: TypeDef = TypeDef {
    name: "Create",
    namespace: AS_NS,
    properties: &ACTIVITY_PROPERTIES,
    extends: &["Activity", "Object"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

pub static COLLECTION: TypeDef = TypeDef {
    name: "Collection",
    namespace: AS_NS,
    properties: &COLLECTION_PROPERTIES,
    extends: &["Object"],
    extended_by: &["CollectionPage", "OrderedCollection", "OrderedCollectionPage"],
    disjoint_with: &["Link", "Mention"],
};

pub static ORDERED_COLLECTION: TypeDef = TypeDef {
    name: "OrderedCollection",
    namespace: AS_NS,
    properties: &ORDERED_COLLECTION_PROPERTIES,
    extends: &["Collection", "Object"],
    extended_by: &["OrderedCollectionPage"],
    disjoint_with: &["Link", "Mention"],
};

pub static COLLECTION_PAGE: TypeDef = TypeDef {
    name: "CollectionPage",
    namespace: AS_NS,
    properties: &COLLECTION_PAGE_PROPERTIES,
    extends: &["Collection", "Object"],
    extended_by: &["OrderedCollectionPage"],
    disjoint_with: &["Link", "Mention"],
};

pub static ORDERED_COLLECTION_PAGE: TypeDef = TypeDef {
    name: "OrderedCollectionPage",
    namespace: AS_NS,
    properties: &ORDERED_COLLECTION_PAGE_PROPERTIES,
    extends: &["Collection", "CollectionPage", "Object", "OrderedCollection"],
    extended_by: &[],
    disjoint_with: &["Link", "Mention"],
};

// ── Vocabulary ──────────────────────────────────────────────────────

pub static ACTIVITYSTREAMS: Vocabulary = Vocabulary {
    name: "ActivityStreams",
    namespace: AS_NS,
    types: &[
        &OBJECT,
        &LINK,
        &MENTION,
        &NOTE,
        &ARTICLE,
        &IMAGE,
        &PERSON,
        &ACTIVITY,
        &CREATE,
        &COLLECTION,
        &ORDERED_COLLECTION,
        &COLLECTION_PAGE,
        &ORDERED_COLLECTION_PAGE,
    ],
};
