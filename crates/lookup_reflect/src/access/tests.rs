use alloc::borrow::Borrow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use serde_json::{Value, json};

use crate::Reflect;
use crate::access::{LookupError, Options, Path, ReflectLookup, Resolved, lookup};
use crate::derive::Reflect;

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect)]
struct Record {
    string: String,
    map: BTreeMap<String, i32>,
    nested: Option<Box<Record>>,
    struct_slice: Vec<Box<Record>>,
    interface: Box<dyn Reflect>,
    json_string: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            string: String::new(),
            map: BTreeMap::new(),
            nested: None,
            struct_slice: Vec::new(),
            interface: Box::new(()),
            json_string: String::new(),
        }
    }
}

fn map_fixture() -> BTreeMap<String, i32> {
    BTreeMap::from([("foo".to_string(), 42)])
}

fn leaf(string: &str) -> Box<Record> {
    Box::new(Record {
        string: string.to_string(),
        ..Record::default()
    })
}

const JSON_TEXT: &str = r#"
{
    "String": "Abc",
    "Struct": {
        "Substring": "Abcd",
        "Array": [1, 2, 3],
        "ArrayInArray": [[1, 2, 3], [4, 5, 6]],
        "StructInArray": [
            { "FieldA": "Abc", "FieldB": 123 },
            { "Field1": "abc", "Field2": 123 }
        ]
    }
}"#;

fn record_fixture() -> Record {
    Record {
        string: "foo".to_string(),
        map: map_fixture(),
        interface: Box::new(String::from("foo")),
        struct_slice: vec![
            Box::new(Record {
                map: map_fixture(),
                string: "foo".to_string(),
                struct_slice: vec![leaf("bar"), leaf("foo")],
                ..Record::default()
            }),
            Box::new(Record {
                map: map_fixture(),
                string: "qux".to_string(),
                struct_slice: vec![leaf("qux"), leaf("baz")],
                ..Record::default()
            }),
        ],
        json_string: JSON_TEXT.to_string(),
        ..Record::default()
    }
}

#[derive(Reflect)]
#[allow(non_snake_case)]
struct CaseFixture {
    Foo: i32,
    TestField: i32,
    Testfield: i32,
    testField: i32,
}

static CASE_FIXTURE: CaseFixture = CaseFixture {
    Foo: 0,
    TestField: 1,
    Testfield: 2,
    testField: 3,
};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Label(String);

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn get<'a>(value: &'a dyn Reflect, path: &str) -> Resolved<'a> {
    lookup(value, path, &Options::default()).unwrap()
}

fn strings<'a>(found: &'a Resolved<'_>) -> Vec<&'a str> {
    found
        .as_merged()
        .unwrap()
        .downcast_items::<String>()
        .unwrap()
        .into_iter()
        .map(String::as_str)
        .collect()
}

fn not_found(key: &str) -> LookupError {
    LookupError::KeyNotFound {
        key: key.to_string(),
    }
}

// -----------------------------------------------------------------------------
// Direct access

#[test]
fn map_access() {
    let map = map_fixture();
    assert_eq!(get(&map, "foo").downcast_ref::<i32>(), Some(&42));

    let named: BTreeMap<Label, i32> = BTreeMap::from([(Label("foo".into()), 42)]);
    assert_eq!(get(&named, "foo").downcast_ref::<i32>(), Some(&42));
}

#[test]
fn struct_access() {
    let record = record_fixture();
    assert_eq!(get(&record, "string").downcast_ref::<String>().unwrap(), "foo");
    assert_eq!(get(&record, "map.foo").downcast_ref::<i32>(), Some(&42));

    let boxed = Box::new(record_fixture());
    assert_eq!(get(&boxed, "string").downcast_ref::<String>().unwrap(), "foo");
}

#[test]
fn dynamic_field_is_transparent() {
    let record = record_fixture();
    let found = get(&record, "interface");
    assert_eq!(found.downcast_ref::<String>().unwrap(), "foo");
}

#[test]
fn missing_keys() {
    let options = Options::default();
    assert_eq!(
        record_fixture().lookup("qux", &options).unwrap_err(),
        not_found("qux"),
    );
    assert_eq!(
        map_fixture().lookup("qux", &options).unwrap_err(),
        not_found("qux"),
    );
}

#[test]
fn unset_pointers_are_not_found() {
    let record = record_fixture();
    let options = Options::default();
    assert_eq!(
        record.lookup("nested", &options).unwrap_err(),
        not_found("nested"),
    );
    assert_eq!(
        record.lookup("nested.string", &options).unwrap_err(),
        not_found("string"),
    );
}

#[test]
fn lookups_are_repeatable() {
    let record = record_fixture();
    let path = Path::parse("struct_slice.struct_slice.string", ".").unwrap();
    let options = Options::default();

    let first = path.lookup(&record, &options).unwrap();
    let second = path.lookup(&record, &options).unwrap();
    assert_eq!(strings(&first), strings(&second));
}

// -----------------------------------------------------------------------------
// Broadcast

#[test]
fn broadcast_over_struct_list() {
    let record = record_fixture();
    let found = get(&record, "struct_slice.map.foo");
    let items = found.as_merged().unwrap().downcast_items::<i32>().unwrap();
    assert_eq!(items, [&42, &42]);
}

#[test]
fn index_then_field() {
    let record = record_fixture();
    let found = get(&record, "struct_slice[0].string");
    assert!(!found.is_merged());
    assert_eq!(found.downcast_ref::<String>().unwrap(), "foo");

    assert_eq!(get(&record, "struct_slice[0].map.foo").downcast_ref::<i32>(), Some(&42));
}

#[test]
fn nested_broadcast_flattens() {
    let record = record_fixture();
    let found = get(&record, "struct_slice.struct_slice.string");
    assert_eq!(strings(&found), ["bar", "foo", "qux", "baz"]);
}

#[test]
fn index_inside_broadcast_applies_per_element() {
    let record = record_fixture();
    let found = get(&record, "struct_slice.struct_slice[0].string");
    assert_eq!(strings(&found), ["bar", "qux"]);
}

#[test]
fn broadcast_over_dynamic_values() {
    let mut fixture: BTreeMap<String, Box<dyn Reflect>> = BTreeMap::new();
    fixture.insert(
        "map".into(),
        Box::new(BTreeMap::from([("bar".to_string(), 1_i32)])),
    );
    fixture.insert(
        "list".into(),
        Box::new(vec![
            BTreeMap::from([("baz".to_string(), 1_i32)]),
            BTreeMap::from([("baz".to_string(), 2_i32)]),
            BTreeMap::from([("baz".to_string(), 3_i32)]),
        ]),
    );

    assert_eq!(get(&fixture, "map.bar").downcast_ref::<i32>(), Some(&1));

    let found = get(&fixture, "list.baz");
    let items = found.as_merged().unwrap().downcast_items::<i32>().unwrap();
    assert_eq!(items, [&1, &2, &3]);
}

#[test]
fn broadcast_over_json() {
    let fixture = json!({
        "map": { "bar": 1 },
        "list": [{ "baz": 1 }, { "baz": 2 }, { "baz": 3 }],
    });

    assert_eq!(get(&fixture, "map.bar").downcast_ref::<Value>(), Some(&json!(1)));

    let found = get(&fixture, "list.baz");
    let items = found.as_merged().unwrap().downcast_items::<Value>().unwrap();
    assert_eq!(items, [&json!(1), &json!(2), &json!(3)]);
}

#[test]
fn scalar_first_result_keeps_later_broadcasts_whole() {
    let value = json!([{ "a": 1 }, [{ "a": 2 }, { "a": 3 }]]);

    let found = get(&value, "a");
    let merged = found.as_merged().unwrap();
    assert_eq!(merged.len(), 2);

    let items: Vec<&Resolved<'_>> = merged.iter().collect();
    assert_eq!(items[0].downcast_ref::<Value>(), Some(&json!(1)));

    let inner = items[1].as_merged().unwrap();
    let inner = inner.downcast_items::<Value>().unwrap();
    assert_eq!(inner, [&json!(2), &json!(3)]);
}

#[test]
fn broadcast_over_map_values() {
    let mut teams: BTreeMap<String, Record> = BTreeMap::new();
    teams.insert("a".into(), *leaf("x"));
    teams.insert("b".into(), *leaf("y"));

    let found = get(&teams, "string");
    assert_eq!(strings(&found), ["x", "y"]);
}

#[test]
fn broadcast_drops_unset_results() {
    let record = Record {
        struct_slice: vec![
            Box::new(Record {
                nested: Some(leaf("inner")),
                ..Record::default()
            }),
            leaf("no nested"),
        ],
        ..Record::default()
    };

    let found = get(&record, "struct_slice.nested");
    let items = found.as_merged().unwrap().downcast_items::<Record>().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].string, "inner");

    assert_eq!(
        record.lookup("struct_slice.nested.string", &Options::default()).unwrap_err(),
        not_found("string"),
    );
}

#[test]
fn broadcast_with_only_unset_results_is_not_found() {
    let record = Record {
        struct_slice: vec![leaf("a"), leaf("b")],
        ..Record::default()
    };
    assert_eq!(
        record.lookup("struct_slice.nested", &Options::default()).unwrap_err(),
        not_found("nested"),
    );
}

#[test]
fn broadcast_fails_fast() {
    let record = record_fixture();
    assert_eq!(
        record.lookup("struct_slice.missing", &Options::default()).unwrap_err(),
        not_found("missing"),
    );
}

#[test]
fn scalar_parent_does_not_broadcast() {
    let record = record_fixture();
    assert_eq!(
        record.lookup("string[0]", &Options::default()).unwrap_err(),
        LookupError::InvalidIndexUsage {
            segment: "string[0]".to_string()
        },
    );
}

#[test]
fn out_of_range_index() {
    let record = record_fixture();
    assert_eq!(
        record.lookup("struct_slice[5].string", &Options::default()).unwrap_err(),
        LookupError::IndexOutOfRange {
            segment: "struct_slice[5]".to_string(),
            index: 5,
            len: 2,
        },
    );
}

#[test]
fn out_of_range_index_under_a_map() {
    let mut numbers: BTreeMap<String, Vec<i32>> = BTreeMap::new();
    numbers.insert("nums".into(), vec![1, 2]);

    assert_eq!(
        numbers.lookup("nums[5]", &Options::default()).unwrap_err(),
        LookupError::IndexOutOfRange {
            segment: "nums[5]".to_string(),
            index: 5,
            len: 2,
        },
    );
    assert_eq!(get(&numbers, "nums[1]").downcast_ref::<i32>(), Some(&2));
}

#[test]
fn indexed_pointer_to_list() {
    #[derive(Reflect)]
    struct Inner {
        value: String,
    }

    #[derive(Reflect)]
    struct Outer {
        values: Option<Box<Vec<Inner>>>,
    }

    let data = Outer {
        values: Some(Box::new(vec![
            Inner { value: "first".into() },
            Inner { value: "second".into() },
        ])),
    };

    let options = Options::default().with_case_insensitive(true);
    let found = data.lookup("values[0].value", &options).unwrap();
    assert_eq!(found.downcast_ref::<String>().unwrap(), "first");
}

// -----------------------------------------------------------------------------
// Empty broadcast

#[test]
fn empty_list_broadcast_is_typed() {
    let fixture: Vec<Vec<Record>> = vec![Vec::new()];
    let found = get(&fixture, "string");
    let merged = found.as_merged().unwrap();

    assert!(merged.is_empty());
    assert!(merged.item_info().unwrap().type_is::<String>());
}

#[test]
fn empty_map_broadcast_is_typed() {
    let fixture: BTreeMap<String, Box<Record>> = BTreeMap::new();
    let found = get(&fixture, "map");
    let merged = found.as_merged().unwrap();

    assert!(merged.is_empty());
    assert!(merged.item_info().unwrap().type_is::<BTreeMap<String, i32>>());
}

#[test]
fn empty_broadcast_ignores_case_folding() {
    let fixture: Vec<Record> = Vec::new();
    let options = Options::default().with_case_insensitive(true);

    assert!(fixture.lookup("string", &options).is_ok());
    assert_eq!(fixture.lookup("STRING", &options).unwrap_err(), not_found("STRING"));

    // With a value the folded name resolves.
    let fixture = vec![*leaf("x")];
    assert!(fixture.lookup("STRING", &options).is_ok());
}

// -----------------------------------------------------------------------------
// Case folding

#[test]
fn struct_case_sensitivity() {
    let record = record_fixture();
    assert_eq!(
        record.lookup("STring", &Options::default()).unwrap_err(),
        not_found("STring"),
    );

    let options = Options::default().with_case_insensitive(true);
    let found = record.lookup("STring", &options).unwrap();
    assert_eq!(found.downcast_ref::<String>().unwrap(), "foo");
}

#[test]
fn struct_exact_match_wins() {
    let options = Options::default().with_case_insensitive(true);
    let found = CASE_FIXTURE.lookup("Testfield", &options).unwrap();
    assert_eq!(found.downcast_ref::<i32>(), Some(&2));
}

#[test]
fn struct_first_declared_wins() {
    let options = Options::default().with_case_insensitive(true);
    let found = CASE_FIXTURE.lookup("testfield", &options).unwrap();
    assert_eq!(found.downcast_ref::<i32>(), Some(&1));
}

#[test]
fn map_case_sensitivity() {
    let map = BTreeMap::from([("Foo".to_string(), 42_i32)]);
    assert_eq!(map.lookup("foo", &Options::default()).unwrap_err(), not_found("foo"));

    let options = Options::default().with_case_insensitive(true);
    assert_eq!(map.lookup("foo", &options).unwrap().downcast_ref::<i32>(), Some(&42));
}

#[test]
fn map_exact_match_wins() {
    let map: BTreeMap<String, i32> = BTreeMap::from([
        ("Foo".to_string(), 0),
        ("TestKey".to_string(), 1),
        ("Testkey".to_string(), 2),
        ("testKey".to_string(), 3),
    ]);
    let options = Options::default().with_case_insensitive(true);
    assert_eq!(map.lookup("Testkey", &options).unwrap().downcast_ref::<i32>(), Some(&2));

    // Which folded key wins is unspecified.
    let found = map.lookup("testkey", &options).unwrap();
    assert!(matches!(found.downcast_ref::<i32>(), Some(1..=3)));
}

#[test]
fn match_functions() {
    fn squash(name: &str) -> String {
        name.chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect()
    }

    let record = record_fixture();
    let options = Options::default().with_match_function(squash);

    let found = record.lookup("StructSlice.String", &options).unwrap();
    assert_eq!(strings(&found), ["foo", "qux"]);
    assert!(record.lookup("Struct", &options).is_err());
}

// -----------------------------------------------------------------------------
// Paths

#[test]
fn malformed_paths() {
    let record = record_fixture();
    for path in ["foo[", "foo]", "foo[]", "map.foo[x]"] {
        assert!(matches!(
            record.lookup(path, &Options::default()),
            Err(LookupError::MalformedIndex { .. }),
        ));
    }
}

#[test]
fn custom_split_token() {
    let record = record_fixture();
    let options = Options::default().with_split_token("/");
    let found = record.lookup("struct_slice[1]/string", &options).unwrap();
    assert_eq!(found.downcast_ref::<String>().unwrap(), "qux");

    assert_eq!(
        record.lookup("map.foo", &options).unwrap_err(),
        not_found("map.foo"),
    );
}

#[test]
fn empty_path_is_not_found() {
    let record = record_fixture();
    assert_eq!(record.lookup("", &Options::default()).unwrap_err(), not_found(""));
}

#[test]
fn depth_limit() {
    let nested: Vec<Vec<Vec<Record>>> = vec![vec![vec![*leaf("deep")]]];

    let found = get(&nested, "string");
    assert_eq!(strings(&found), ["deep"]);

    let options = Options::default().with_max_depth(2);
    assert_eq!(
        nested.lookup("string", &options).unwrap_err(),
        LookupError::DepthLimitExceeded { limit: 2 },
    );
}

// -----------------------------------------------------------------------------
// JSON expansion

#[test]
fn json_expansion() {
    let record = record_fixture();
    let cases: [(&dyn Reflect, &str, Value); 6] = [
        (&record.json_string, "String", json!("Abc")),
        (&record.json_string, "Struct.Substring", json!("Abcd")),
        (&record.json_string, "Struct.Array[1]", json!(2)),
        (&record, "json_string.String", json!("Abc")),
        (&record, "json_string.Struct.Substring", json!("Abcd")),
        (&record, "json_string.Struct.Array[1]", json!(2)),
    ];

    for case_insensitive in [true, false] {
        let options = Options::default()
            .with_expand_string_as_json(true)
            .with_case_insensitive(case_insensitive);

        for (input, path, want) in &cases {
            let found = lookup(*input, path, &options).unwrap();
            assert!(matches!(found, Resolved::Expanded(_)), "{path}");
            assert_eq!(found.downcast_ref::<Value>(), Some(want), "{path}");
        }
    }
}

#[test]
fn json_expansion_is_opt_in() {
    let record = record_fixture();
    assert_eq!(
        record.lookup("json_string.String", &Options::default()).unwrap_err(),
        not_found("String"),
    );
}

#[test]
fn json_expansion_broadcasts() {
    let record = record_fixture();
    let options = Options::default().with_expand_string_as_json(true);

    let found = record.lookup("json_string.Struct.StructInArray.FieldA", &options);
    // The second element has no `FieldA`.
    assert_eq!(found.unwrap_err(), not_found("FieldA"));

    let found = record.lookup("json_string.Struct.ArrayInArray", &options).unwrap();
    assert_eq!(found.downcast_ref::<Value>(), Some(&json!([[1, 2, 3], [4, 5, 6]])));

    let texts = vec![
        String::from(r#"{"id": 1}"#),
        String::from(r#"{"id": 2}"#),
    ];
    let found = texts.lookup("id", &options).unwrap();
    let items = found.as_merged().unwrap().downcast_items::<Value>().unwrap();
    assert_eq!(items, [&json!(1), &json!(2)]);
}

#[test]
fn json_expansion_counts_towards_depth() {
    let record = record_fixture();
    let options = Options::default()
        .with_expand_string_as_json(true)
        .with_max_depth(0);
    assert_eq!(
        record.lookup("json_string.String", &options).unwrap_err(),
        LookupError::DepthLimitExceeded { limit: 0 },
    );
}
