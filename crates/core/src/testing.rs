//! Small vocabulary used by the unit tests.

use serde_json::{json, Value};

use crate::kind::Kind;
use crate::schema::{PropertyDef, TypeDef, Vocabulary};

pub const TEST_NS: &str = "https://example.org/ns#";
pub const EXT_NS: &str = "https://example.org/ext#";

pub static ID: PropertyDef = PropertyDef::functional("id", TEST_NS, &[Kind::AnyUri]).as_keyword();
pub static TYPE: PropertyDef =
    PropertyDef::repeatable("type", TEST_NS, &[Kind::AnyUri, Kind::String]).as_keyword();
pub static LABEL: PropertyDef =
    PropertyDef::repeatable("label", TEST_NS, &[Kind::String, Kind::LangString])
        .with_language_map("labelMap");
pub static COUNT: PropertyDef =
    PropertyDef::functional("count", TEST_NS, &[Kind::NonNegativeInteger]);
pub static WEIGHT: PropertyDef = PropertyDef::functional("weight", TEST_NS, &[Kind::Float]);
pub static FLAG: PropertyDef = PropertyDef::functional("flag", TEST_NS, &[Kind::Boolean]);
pub static WHEN: PropertyDef = PropertyDef::functional("when", TEST_NS, &[Kind::DateTime]);
pub static PARTS: PropertyDef = PropertyDef::repeatable(
    "parts",
    TEST_NS,
    &[Kind::Entity("Widget"), Kind::Entity("Thing"), Kind::Entity("Ref")],
);
pub static OWNER: PropertyDef = PropertyDef::functional(
    "owner",
    TEST_NS,
    &[Kind::Entity("Thing"), Kind::Entity("Ref")],
);
pub static HOMEPAGE: PropertyDef =
    PropertyDef::functional("homepage", TEST_NS, &[Kind::AnyUri, Kind::Entity("Ref")]);
pub static CODE: PropertyDef = PropertyDef::functional(
    "code",
    TEST_NS,
    &[Kind::NonNegativeInteger, Kind::Float, Kind::String],
);
pub static EXTRA: PropertyDef = PropertyDef::functional("extra", EXT_NS, &[Kind::String]);
pub static HREF: PropertyDef = PropertyDef::functional("href", TEST_NS, &[Kind::AnyUri]);
pub static BROKEN: PropertyDef =
    PropertyDef::functional("broken", TEST_NS, &[Kind::Entity("Missing")]);

static THING_PROPERTIES: [&PropertyDef; 12] = [
    &ID, &TYPE, &LABEL, &COUNT, &WEIGHT, &FLAG, &WHEN, &PARTS, &OWNER, &HOMEPAGE, &CODE, &EXTRA,
];

pub static THING: TypeDef = TypeDef {
    name: "Thing",
    namespace: TEST_NS,
    properties: &THING_PROPERTIES,
    extends: &[],
    extended_by: &["Widget"],
    disjoint_with: &[],
};

pub static WIDGET: TypeDef = TypeDef {
    name: "Widget",
    namespace: TEST_NS,
    properties: &THING_PROPERTIES,
    extends: &["Thing"],
    extended_by: &[],
    disjoint_with: &[],
};

pub static REF: TypeDef = TypeDef {
    name: "Ref",
    namespace: TEST_NS,
    properties: &[&TYPE, &HREF],
    extends: &[],
    extended_by: &[],
    disjoint_with: &["Thing"],
};

pub static FAULTY: TypeDef = TypeDef {
    name: "Faulty",
    namespace: TEST_NS,
    properties: &[&TYPE, &BROKEN],
    extends: &[],
    extended_by: &[],
    disjoint_with: &[],
};

pub static TEST_VOCABULARY: Vocabulary = Vocabulary {
    name: "test",
    namespace: TEST_NS,
    types: &[&THING, &WIDGET, &REF, &FAULTY],
};

/// A `Thing` document touching most candidate kinds.
pub fn thing_json() -> Value {
    json!({
        "type": "Thing",
        "id": "https://example.org/things/1",
        "label": ["first", "second"],
        "labelMap": {"en": "first", "fr": "premier"},
        "count": 3,
        "weight": 1.5,
        "flag": true,
        "when": "2020-01-02T03:04:05Z",
        "parts": [
            {"type": "Widget", "label": "cog"},
            {"type": "Ref", "href": "https://example.org/parts/2"},
            "https://example.org/parts/3"
        ],
        "homepage": "https://example.org/",
        "extra": "from another namespace",
        "vendorField": {"nested": [1, 2, 3]}
    })
}
