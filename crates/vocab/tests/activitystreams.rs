//! End-to-end codec behaviour over the ActivityStreams tables.

use std::cmp::Ordering;

use folio_core::{AliasTable, CanonicalOrd, CodecConfig, CodecError, Entity, Iri, ParseContext};
use folio_vocab::activitystreams::{ARTICLE, NOTE, PERSON};
use folio_vocab::{deserialize, deserialize_with, serialize, ACTIVITYSTREAMS, AS_NS, TOOT_NS};
use serde_json::{json, Value};

fn create_note() -> Value {
    json!({
        "@context": AS_NS,
        "type": "Create",
        "id": "https://social.example/activities/1",
        "actor": "https://social.example/users/alice",
        "published": "2020-05-01T10:00:00Z",
        "to": [
            "https://social.example/users/bob",
            "https://social.example/users/carol"
        ],
        "object": {
            "type": "Note",
            "id": "https://social.example/notes/1",
            "attributedTo": "https://social.example/users/alice",
            "content": "<p>hello @bob</p>",
            "contentMap": {"en": "<p>hello @bob</p>"},
            "sensitive": false,
            "published": "2020-05-01T10:00:00Z",
            "conversation": "tag:social.example,2020:objectId=1",
            "tag": [
                {"type": "Mention", "href": "https://other.example/users/bob", "name": "@bob"},
                {"type": "Hashtag", "name": "#folio"}
            ]
        }
    })
}

fn parse_as(def: &'static folio_core::TypeDef, raw: Value) -> Result<Entity, CodecError> {
    let aliases = AliasTable::new();
    let ctx = ParseContext::new(&ACTIVITYSTREAMS, &aliases);
    Entity::deserialize(def, raw.as_object().unwrap(), &ctx)
}

// ── Round trip ──────────────────────────────────────────────────────

#[test]
fn create_note_round_trips() {
    let doc = create_note();
    let entity = deserialize(&doc).unwrap();
    assert_eq!(entity.type_name(), "Create");
    assert_eq!(serialize(&entity).unwrap(), doc);
}

#[test]
fn nested_values_are_typed() {
    let entity = deserialize(&create_note()).unwrap();

    let actor = entity.list("actor").unwrap().at(0).unwrap();
    assert!(actor.is_iri());

    let object = entity.list("object").unwrap().at(0).unwrap();
    let note = object.as_entity().unwrap();
    assert_eq!(note.type_name(), "Note");
    assert_eq!(note.cell("sensitive").unwrap().as_bool(), Some(false));
    assert_eq!(note.extensions().len(), 1);
    assert!(note.extensions().contains_key("conversation"));

    let content = note.list("content").unwrap();
    assert_eq!(content.at(0).unwrap().as_text(), Some("<p>hello @bob</p>"));
    assert_eq!(
        content.at(1).unwrap().as_lang_string().unwrap()["en"],
        "<p>hello @bob</p>"
    );

    let tags = note.list("tag").unwrap();
    assert_eq!(tags.at(0).unwrap().as_entity().unwrap().type_name(), "Mention");
    // Hashtag is not part of the vocabulary; the raw object is kept as is.
    assert_eq!(
        tags.at(1).unwrap().unknown(),
        Some(&json!({"type": "Hashtag", "name": "#folio"}))
    );
}

#[test]
fn person_with_extension_namespace_round_trips() {
    let doc = json!({
        "@context": [AS_NS, {"toot": TOOT_NS}],
        "type": "Person",
        "id": "https://social.example/users/alice",
        "preferredUsername": "alice",
        "name": "Alice",
        "toot:discoverable": true,
        "followers": "https://social.example/users/alice/followers",
        "outbox": {
            "type": "OrderedCollection",
            "id": "https://social.example/users/alice/outbox",
            "totalItems": 0
        }
    });
    let person = deserialize(&doc).unwrap();
    assert_eq!(person.type_def(), &PERSON);
    let discoverable = person.cell("discoverable").unwrap();
    assert_eq!(discoverable.alias(), "toot");
    assert_eq!(discoverable.as_bool(), Some(true));
    let outbox = person.cell("outbox").unwrap().as_entity().unwrap();
    assert_eq!(outbox.cell("totalItems").unwrap().as_non_negative_integer(), Some(0));
    assert!(person.extensions().is_empty());
    assert_eq!(serialize(&person).unwrap(), doc);
}

// ── Normalization ───────────────────────────────────────────────────

#[test]
fn scalar_and_one_element_array_are_the_same_value() {
    let scalar = deserialize(&json!({"type": "Note", "to": "https://social.example/users/bob"})).unwrap();
    let array =
        deserialize(&json!({"type": "Note", "to": ["https://social.example/users/bob"]})).unwrap();
    assert_eq!(scalar, array);
    assert_eq!(
        serialize(&array).unwrap()["to"],
        json!("https://social.example/users/bob")
    );
}

#[test]
fn singletons_stay_arrays_when_collapsing_is_off() {
    let config = CodecConfig {
        collapse_singletons: false,
        emit_context: false,
        ..CodecConfig::default()
    };
    let entity = deserialize(&json!({"type": "Note", "to": "https://social.example/users/bob"})).unwrap();
    let out = folio_vocab::serialize_with(&entity, &config).unwrap();
    assert_eq!(out["to"], json!(["https://social.example/users/bob"]));
    assert_eq!(out["type"], json!(["Note"]));
    assert!(out.get("@context").is_none());
}

// ── Type validation ─────────────────────────────────────────────────

#[test]
fn any_listed_type_satisfies_the_expected_type() {
    let article = parse_as(&ARTICLE, json!({"type": ["Note", "Article"]})).unwrap();
    assert_eq!(article.type_name(), "Article");
}

#[test]
fn unlisted_type_is_a_mismatch() {
    match parse_as(&NOTE, json!({"type": "Foo"})) {
        Err(CodecError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "Note");
            assert_eq!(found, vec!["Foo"]);
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn missing_type_is_rejected() {
    match parse_as(&NOTE, json!({"content": "hi"})) {
        Err(CodecError::MissingType { expected }) => assert_eq!(expected, "Note"),
        other => panic!("expected MissingType, got {:?}", other),
    }
    assert!(matches!(
        deserialize(&json!({"content": "hi"})),
        Err(CodecError::MissingType { .. })
    ));
}

#[test]
fn document_type_must_be_in_the_vocabulary() {
    match deserialize(&json!({"type": ["Hashtag", "Video"]})) {
        Err(CodecError::UnresolvedType { found }) => assert_eq!(found, vec!["Hashtag", "Video"]),
        other => panic!("expected UnresolvedType, got {:?}", other),
    }
    let entity = deserialize(&json!({"type": ["Hashtag", "Note"]})).unwrap();
    assert_eq!(entity.type_name(), "Note");
}

// ── Aliases ─────────────────────────────────────────────────────────

#[test]
fn prefixed_document_reads_like_unprefixed_one() {
    let prefixed = json!({
        "@context": {"as": AS_NS},
        "type": "as:Note",
        "as:content": "hi",
        "as:published": "2021-01-01T00:00:00Z",
        "as:to": ["https://a.example/", "https://b.example/"]
    });
    let bare = json!({
        "type": "Note",
        "content": "hi",
        "published": "2021-01-01T00:00:00Z",
        "to": ["https://a.example/", "https://b.example/"]
    });
    let a = deserialize(&prefixed).unwrap();
    let b = deserialize(&bare).unwrap();
    assert_eq!(a.alias(), "as");
    assert_eq!(a.canonical_cmp(&b), Ordering::Equal);
    let types = a.list("type").unwrap();
    assert_eq!(types.kind_index(0).unwrap(), b.list("type").unwrap().kind_index(0).unwrap());
    assert_eq!(types.at(0).unwrap().as_text(), Some("Note"));
    assert!(a.extensions().is_empty());
    assert_eq!(serialize(&a).unwrap(), prefixed);
}

#[test]
fn prefixed_type_outside_the_vocabulary_is_kept_verbatim() {
    let doc = json!({
        "@context": {"as": AS_NS},
        "type": ["as:Note", "as:Draft"]
    });
    let entity = deserialize(&doc).unwrap();
    let types = entity.list("type").unwrap();
    assert_eq!(types.at(0).unwrap().as_text(), Some("Note"));
    assert_eq!(types.at(1).unwrap().as_text(), None);
    assert_eq!(serialize(&entity).unwrap(), doc);
}

#[test]
fn configured_alias_applies_without_context() {
    let config = CodecConfig::default().with_alias(AS_NS, "as");
    let doc = json!({"type": "as:Note", "as:name": "titled"});
    let entity = deserialize_with(&doc, &config).unwrap();
    assert_eq!(entity.list("name").unwrap().at(0).unwrap().as_text(), Some("titled"));
    assert!(entity.extensions().is_empty());
}

// ── Extensions ──────────────────────────────────────────────────────

#[test]
fn extension_keys_survive_and_known_keys_win() {
    let mut note = deserialize(&json!({
        "type": "Note",
        "content": "hi",
        "vendor:score": 7,
        "vendor:meta": {"a": [1, 2]}
    }))
    .unwrap();
    assert_eq!(note.extensions().len(), 2);

    note.extensions_mut().insert("content".to_string(), json!("shadow"));
    assert!(matches!(
        note.insert_extension("content", json!("shadow")),
        Err(CodecError::KnownPropertyKey { .. })
    ));
    let out = serialize(&note).unwrap();
    assert_eq!(out["content"], json!("hi"));
    assert_eq!(out["vendor:score"], json!(7));
    assert_eq!(out["vendor:meta"], json!({"a": [1, 2]}));
}

// ── Type hierarchy ──────────────────────────────────────────────────

#[test]
fn disjointness_is_symmetric_over_every_pair() {
    for a in ACTIVITYSTREAMS.types {
        for b in ACTIVITYSTREAMS.types {
            assert_eq!(
                ACTIVITYSTREAMS.disjoint(a.name, b.name),
                ACTIVITYSTREAMS.disjoint(b.name, a.name),
                "{} / {}",
                a.name,
                b.name
            );
        }
    }
    assert!(ACTIVITYSTREAMS.disjoint("Note", "Link"));
    assert!(ACTIVITYSTREAMS.disjoint("Mention", "OrderedCollectionPage"));
    assert!(!ACTIVITYSTREAMS.disjoint("Note", "Article"));
    assert!(!ACTIVITYSTREAMS.disjoint("Mention", "Link"));
}

#[test]
fn extends_and_extended_by_agree() {
    for a in ACTIVITYSTREAMS.types {
        for b in ACTIVITYSTREAMS.types {
            assert_eq!(a.extends(b.name), b.is_extended_by(a.name), "{} / {}", a.name, b.name);
            if a.extends(b.name) {
                assert!(!ACTIVITYSTREAMS.disjoint(a.name, b.name));
            }
        }
    }
    let page = deserialize(&json!({"type": "OrderedCollectionPage"})).unwrap();
    assert!(page.is_extending("CollectionPage"));
    assert!(page.is_extending("Object"));
    assert!(!page.is_extending("Link"));
    assert!(page.is_disjoint_with("Mention"));
}

// ── Lists and ordering ──────────────────────────────────────────────

#[test]
fn ordered_items_keep_wire_order_and_positions() {
    let doc = json!({
        "type": "OrderedCollectionPage",
        "partOf": "https://social.example/users/alice/outbox",
        "startIndex": 20,
        "orderedItems": [
            {"type": "Note", "content": "third"},
            {"type": "Note", "content": "first"},
            "https://social.example/notes/2"
        ]
    });
    let page = deserialize(&doc).unwrap();
    let items = page.list("orderedItems").unwrap();
    let mut cursor = items.begin();
    let mut seen = Vec::new();
    while let Some(c) = cursor {
        assert_eq!(c.get().index(), Some(c.index()));
        seen.push(c.index());
        cursor = c.next();
    }
    assert_eq!(seen, vec![0, 1, 2]);
    assert!(items.at(2).unwrap().is_iri());
    assert_eq!(page.cell("startIndex").unwrap().as_non_negative_integer(), Some(20));
    assert!(page.cell("partOf").unwrap().is_iri());
}

#[test]
fn sorting_a_list_is_canonical_and_stable() {
    let mut note = deserialize(&json!({
        "type": "Note",
        "to": [
            "https://social.example/users/zed",
            "https://social.example/users/amy"
        ]
    }))
    .unwrap();
    let to = note.property_mut("to").unwrap().as_list_mut().unwrap();
    to.prepend_iri(Iri::parse("https://social.example/users/max").unwrap());
    to.sort_canonical();
    let order: Vec<&str> = to.iter().filter_map(|c| c.iri()).map(Iri::as_str).collect();
    assert_eq!(
        order,
        vec![
            "https://social.example/users/amy",
            "https://social.example/users/max",
            "https://social.example/users/zed"
        ]
    );
    assert_eq!(to.at(1).unwrap().index(), Some(1));
}

#[test]
fn equal_documents_compare_equal() {
    let a = deserialize(&create_note()).unwrap();
    let b = deserialize(&create_note()).unwrap();
    assert_eq!(a.canonical_cmp(&b), Ordering::Equal);

    let earlier = deserialize(&json!({"type": "Note", "published": "2020-01-01T00:00:00Z"})).unwrap();
    let later = deserialize(&json!({"type": "Note", "published": "2021-01-01T00:00:00Z"})).unwrap();
    assert!(earlier.canonical_lt(&later));
    assert!(!later.canonical_lt(&earlier));
}

// ── Building documents ──────────────────────────────────────────────

#[test]
fn built_note_serializes_with_context() {
    let mut note = Entity::new(&NOTE);
    note.set_iri("id", Iri::parse("https://social.example/notes/9").unwrap())
        .unwrap();
    note.append("content", "built in code").unwrap();
    note.set("sensitive", true).unwrap();
    note.append_iri("to", Iri::parse("https://social.example/users/bob").unwrap())
        .unwrap();
    assert_eq!(
        serialize(&note).unwrap(),
        json!({
            "@context": AS_NS,
            "type": "Note",
            "id": "https://social.example/notes/9",
            "content": "built in code",
            "sensitive": true,
            "to": "https://social.example/users/bob"
        })
    );
}

#[test]
fn built_note_with_alias_prefixes_its_type() {
    let mut note = Entity::new(&NOTE);
    note.set_alias("as");
    note.append("content", "x").unwrap();
    let out = serialize(&note).unwrap();
    assert_eq!(out["type"], json!("as:Note"));
    assert_eq!(
        out,
        json!({
            "@context": {"as": AS_NS},
            "type": "as:Note",
            "as:content": "x"
        })
    );
    assert_eq!(deserialize(&out).unwrap().canonical_cmp(&note), Ordering::Equal);
}

#[test]
fn integral_float_round_trips_as_integer() {
    let doc = json!({"@context": AS_NS, "type": "Note", "altitude": 1});
    let entity = deserialize(&doc).unwrap();
    assert_eq!(entity.cell("altitude").unwrap().as_float(), Some(1.0));
    assert_eq!(serialize(&entity).unwrap(), doc);

    let doc = json!({"@context": AS_NS, "type": "Note", "altitude": 12.75});
    assert_eq!(serialize(&deserialize(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn empty_plain_array_survives_next_to_language_map() {
    let doc = json!({
        "@context": AS_NS,
        "type": "Note",
        "name": [],
        "nameMap": {"en": "untitled"}
    });
    let entity = deserialize(&doc).unwrap();
    assert_eq!(entity.list("name").unwrap().len(), 1);
    assert_eq!(serialize(&entity).unwrap(), doc);

    let doc = json!({"@context": AS_NS, "type": "Note", "nameMap": {"en": "untitled"}});
    assert_eq!(serialize(&deserialize(&doc).unwrap()).unwrap(), doc);
}

#[test]
fn functional_value_wins_over_its_language_map() {
    let doc = json!({
        "type": "Person",
        "preferredUsername": "alice",
        "preferredUsernameMap": {"en": "alice", "fr": "alice"}
    });
    let person = deserialize(&doc).unwrap();
    assert_eq!(person.cell("preferredUsername").unwrap().as_text(), Some("alice"));
    assert!(person.extensions().is_empty());
    let out = serialize(&person).unwrap();
    assert!(out.get("preferredUsernameMap").is_none());
}

#[test]
fn non_finite_float_fails_serialization() {
    let mut note = Entity::new(&NOTE);
    note.set("altitude", f64::INFINITY).unwrap();
    assert!(matches!(
        serialize(&note),
        Err(CodecError::MalformedValue { .. })
    ));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn repeatable_scalar_equals_singleton_array(name in "[a-zA-Z ]{1,16}") {
            let scalar = deserialize(&json!({"type": "Note", "name": name})).unwrap();
            let array = deserialize(&json!({"type": "Note", "name": [name]})).unwrap();
            prop_assert_eq!(&scalar, &array);
            let out = serialize(&scalar).unwrap();
            prop_assert_eq!(&out["name"], &json!(name));
        }

        #[test]
        fn total_items_round_trip(n in any::<u64>()) {
            let doc = json!({"@context": AS_NS, "type": "Collection", "totalItems": n});
            let entity = deserialize(&doc).unwrap();
            prop_assert_eq!(serialize(&entity).unwrap(), doc);
        }
    }
}
