use model_path::{
    find, get_value, parse_path, set_value, try_set_value, validate_path, AccessorOptions,
    PathAccessor, PathError, ValidationError,
};
use serde_json::{json, Value};

#[test]
fn read_matrix() {
    let model = json!({
        "user": {
            "name": "Ada",
            "tags": ["math", "poetry"],
            "addresses": [{"city": "London"}, {"city": "Paris"}],
            "age": 0,
            "active": false
        }
    });

    let cases: [(&str, Option<Value>); 10] = [
        ("user.name", Some(json!("Ada"))),
        ("user.tags.1", Some(json!("poetry"))),
        ("user.tags[0]", Some(json!("math"))),
        ("user.tags.", Some(json!("poetry"))),
        ("user.tags[]", Some(json!("poetry"))),
        ("user.addresses[1].city", Some(json!("Paris"))),
        ("user.addresses.", Some(json!({"city": "Paris"}))),
        ("user.age", None),
        ("user.active", None),
        ("user.phone.number", None),
    ];

    for (path, expected) in cases {
        assert_eq!(get_value(path, &model).cloned(), expected, "path {path:?}");
    }
}

#[test]
fn write_matrix() {
    let cases = [
        ("a", json!({"a": "v"})),
        ("a.b", json!({"a": {"b": "v"}})),
        ("a.0", json!({"a": ["v"]})),
        ("a.0.b", json!({"a": [{"b": "v"}]})),
        ("a[0].b", json!({"a": [{"b": "v"}]})),
        ("a.1", json!({"a": [null, "v"]})),
        ("a.", json!({"a": ["v"]})),
        ("a[]", json!({"a": ["v"]})),
        ("a.b.", json!({"a": {"b": ["v"]}})),
        ("a.x1.b", json!({"a": {"x1": {"b": "v"}}})),
    ];

    for (path, expected) in cases {
        let mut model = json!({});
        set_value(path, json!("v"), &mut model);
        assert_eq!(model, expected, "path {path:?}");
    }
}

#[test]
fn vivification_picks_array_for_index_step() {
    let mut model = json!({});
    set_value("a.0.b", json!("x"), &mut model);
    assert!(model["a"].is_array());
    assert!(model["a"][0].is_object());
    assert_eq!(model["a"][0]["b"], "x");
}

#[test]
fn append_then_read_last() {
    let mut model = json!({"list": [1, 2]});
    set_value("list.", json!(5), &mut model);
    assert_eq!(model["list"], json!([1, 2, 5]));
    assert_eq!(get_value("list.", &json!({"list": [1, 2, 3]})), Some(&json!(3)));
}

#[test]
fn falsy_values_are_erased() {
    let mut model = json!({});
    set_value("a", json!(0), &mut model);
    assert_eq!(model, json!({"a": null}));

    let mut model = json!({});
    set_value("a", json!(false), &mut model);
    assert_eq!(model, json!({"a": null}));
    assert_eq!(get_value("a", &model), None);
}

#[test]
fn guards_do_nothing() {
    let mut model = json!({});
    set_value("", json!(1), &mut model);
    assert_eq!(model, json!({}));

    let mut absent = Value::Null;
    set_value("a", json!(1), &mut absent);
    assert_eq!(absent, Value::Null);
    assert_eq!(get_value("a", &absent), None);
    assert_eq!(PathAccessor::new().get_value(None, &json!({"a": 1})), None);
}

#[test]
fn multiple_bracket_groups_degrade() {
    // Only the first bracket pair is normalized.
    assert_eq!(parse_path("a[0].b[1]", '.'), vec!["a", "0", "b[1"]);
    assert_eq!(
        validate_path("a[0].b[1]", '.'),
        Err(ValidationError::MultipleBracketGroups)
    );

    let mut model = json!({});
    set_value("a[0].b[1]", json!("x"), &mut model);
    assert_eq!(model, json!({"a": [{"b[1": "x"}]}));
    assert_eq!(get_value("a[0].b[1]", &model), Some(&json!("x")));
    assert_eq!(get_value("a.0.b.1", &model), None);
}

#[test]
fn write_failures_leave_leaves_alone() {
    let mut model = json!({"name": "Ada", "list": [1]});
    let before = model.clone();

    set_value("name.first", json!("A"), &mut model);
    set_value("list.key", json!("A"), &mut model);
    assert_eq!(model, before);

    assert!(matches!(
        try_set_value("name.first", json!("A"), &mut model, AccessorOptions::default()),
        Err(PathError::NotAContainer { .. })
    ));
}

#[test]
fn find_and_get_agree_on_truthy_values() {
    let model = json!({"a": [{"b": "x"}], "z": 0});
    for path in ["a", "a.0", "a.0.b", "a."] {
        let steps = parse_path(path, '.');
        assert_eq!(find(&model, &steps).ok(), get_value(path, &model), "path {path:?}");
    }
    assert_eq!(find(&model, &parse_path("z", '.')), Ok(&json!(0)));
    assert_eq!(get_value("z", &model), None);
}
