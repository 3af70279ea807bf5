//! End-to-end resolution scenarios covering collections, nested
//! resolvables, and mutator chains.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use stencil_domain::{Collection, CollectionItemContext, Context, Resolvable, Value};
use stencil_resolver::VariableResolver;

fn context(entries: &[(&str, &str)]) -> Context {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::text(*value)))
        .collect()
}

fn newline_unless_last(resolved: String, item: Option<CollectionItemContext>) -> String {
    match item {
        Some(item) if !item.is_last() => resolved + "\n",
        _ => resolved,
    }
}

#[test]
fn resolves_collection_of_strings_inline() {
    let collection = Collection::create(vec!["item3".into(), "item1".into(), "item2".into()]);

    let resolver = VariableResolver::new();
    let resolved = resolver.resolve(&Resolvable::from(collection)).unwrap();

    assert_eq!(resolved, "item3item1item2");
}

#[test]
fn resolves_collection_of_resolvables_in_order() {
    let collection = Collection::create(vec![
        Resolvable::new(
            "Hello {{ first_name }} {{ last_name }}.",
            context(&[("first_name", "User"), ("last_name", "Name")]),
        )
        .into(),
        Resolvable::new(
            "Proceed to room {{ room_number }} to learn {{ subject }}.",
            context(&[("room_number", "101"), ("subject", "French")]),
        )
        .into(),
    ]);

    let resolver = VariableResolver::new();
    let resolved = resolver.resolve(&Resolvable::from(collection)).unwrap();

    assert_eq!(
        resolved,
        "Hello User Name.Proceed to room 101 to learn French."
    );
}

#[test]
fn resolves_collection_with_item_mutator() {
    let collection = Collection::create(vec![
        Resolvable::new(
            "Hello {{ first_name }} {{ last_name }}.",
            context(&[("first_name", "User"), ("last_name", "Name")]),
        )
        .with_mutator(|resolved, _| resolved + "\n")
        .into(),
        Resolvable::new(
            "Proceed to room {{ room_number }} to learn {{ subject }}.",
            context(&[("room_number", "101"), ("subject", "French")]),
        )
        .into(),
    ]);

    let resolver = VariableResolver::new();
    let resolved = resolver.resolve(&Resolvable::from(collection)).unwrap();

    assert_eq!(
        resolved,
        "Hello User Name.\nProceed to room 101 to learn French."
    );
}

#[test]
fn item_mutators_receive_position_context() {
    let items: Vec<Value> = ["item1", "item2", "item3"]
        .into_iter()
        .map(|name| {
            Resolvable::new("{{ name }}", context(&[("name", name)]))
                .with_mutator(newline_unless_last)
                .into()
        })
        .collect();

    let resolver = VariableResolver::new();
    let resolved = resolver
        .resolve(&Resolvable::from(Collection::create(items)))
        .unwrap();

    assert_eq!(resolved, "item1\nitem2\nitem3");
}

#[test]
fn collection_mutator_runs_after_item_mutators() {
    let items: Vec<Value> = ["item1", "item2", "item3"]
        .into_iter()
        .map(|name| {
            Resolvable::new("{{ name }}", context(&[("name", name)]))
                .with_mutator(newline_unless_last)
                .into()
        })
        .collect();

    let resolvable =
        Resolvable::from(Collection::create(items)).with_mutator(|resolved, _| resolved + "!");

    let resolver = VariableResolver::new();
    assert_eq!(
        resolver.resolve(&resolvable).unwrap(),
        "item1\nitem2\nitem3!"
    );
}

#[test]
fn collection_mutator_sees_concatenated_output() {
    let collection = Collection::create(vec![
        "item3\n".into(),
        "item1\n".into(),
        "item2\n".into(),
    ]);

    let resolvable = Resolvable::from(collection).with_mutator(|resolved, _| {
        let mut lines: Vec<String> = resolved
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{line}!")
                }
            })
            .collect();
        lines.sort();

        lines.join("\n").trim().to_string()
    });

    let resolver = VariableResolver::new();
    assert_eq!(
        resolver.resolve(&resolvable).unwrap(),
        "item1!\nitem2!\nitem3!"
    );
}

#[test]
fn resolves_stringable_collection_items() {
    let collection = Collection::new(
        vec![
            Value::stringable(101_u32),
            Value::text(" and "),
            Value::stringable(202_u32),
        ],
        "entry",
    );

    assert_eq!(collection.template(), "{{ entry0 }} and {{ entry1 }}");

    let resolver = VariableResolver::new();
    let resolved = resolver.resolve(&Resolvable::from(collection)).unwrap();
    assert_eq!(resolved, "101 and 202");
}

#[test]
fn resolves_collection_nested_in_template_context() {
    let names = Collection::new(
        vec![
            Resolvable::new("{{ name }}", context(&[("name", "Jon")])).into(),
            Value::text(", "),
            Resolvable::new("{{ name }}", context(&[("name", "Jane")])).into(),
        ],
        "name_item",
    );

    let mut outer = Context::new();
    outer.insert(
        "names".to_string(),
        Value::resolvable(Resolvable::from(names)),
    );

    let resolver = VariableResolver::new();
    let resolved = resolver
        .resolve(&Resolvable::new("Welcome {{ names }}.", outer))
        .unwrap();

    assert_eq!(resolved, "Welcome Jon, Jane.");
}

#[test]
fn unresolved_collection_item_reports_synthesized_template() {
    let collection = Collection::new(
        vec![Value::resolvable(Resolvable::new("{{ name }}", Context::new()))],
        "item",
    );

    let resolver = VariableResolver::new();
    let error = resolver.resolve(&Resolvable::from(collection)).unwrap_err();

    assert_eq!(error.variable(), "name");
    assert_eq!(error.template(), "{{ item0 }}");
}

#[test]
fn pre_resolved_content_passes_through() {
    let resolver = VariableResolver::new();
    let resolved = resolver
        .resolve(&Resolvable::content("already resolved"))
        .unwrap();

    assert_eq!(resolved, "already resolved");
}
