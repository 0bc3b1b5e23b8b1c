//! Behaviour-driven coverage for the catalog loader.
//!
//! Scenarios load named resources and check the resulting structure or the
//! positioned error reported for malformed input.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tsloc_common::{Catalog, MessageStatus, ParseError, ParseErrorKind, load_str};

mod support;

use support::resources::named_resource;
use support::steps::StepText;

#[derive(Default)]
struct LoaderWorld {
    resource: RefCell<Option<&'static str>>,
    outcome: RefCell<Option<Result<Catalog, ParseError>>>,
}

#[fixture]
fn world() -> LoaderWorld {
    LoaderWorld::default()
}

fn catalog(world: &LoaderWorld) -> Catalog {
    match world.outcome.borrow().as_ref() {
        Some(Ok(catalog)) => catalog.clone(),
        Some(Err(error)) => panic!("the resource should load: {error}"),
        None => panic!("the resource should have been loaded"),
    }
}

fn error(world: &LoaderWorld) -> ParseError {
    match world.outcome.borrow().as_ref() {
        Some(Err(error)) => error.clone(),
        Some(Ok(_)) => panic!("the resource should have failed to load"),
        None => panic!("the resource should have been loaded"),
    }
}

#[given("the resource {name}")]
fn given_resource(world: &LoaderWorld, name: StepText) {
    let text = named_resource(&name.into_inner());
    world.resource.borrow_mut().replace(text);
}

#[when("the resource is loaded")]
fn when_loaded(world: &LoaderWorld) {
    let text = world
        .resource
        .borrow()
        .unwrap_or_else(|| panic!("a resource should have been chosen"));
    world.outcome.borrow_mut().replace(load_str(text));
}

#[then("the catalog has {count} contexts")]
fn then_context_count(world: &LoaderWorld, count: usize) {
    assert_eq!(catalog(world).contexts().len(), count);
}

#[then("the catalog language is {language}")]
fn then_language(world: &LoaderWorld, language: StepText) {
    assert_eq!(
        catalog(world).language(),
        Some(language.into_inner().as_str())
    );
}

#[then("context {context} holds {count} message for {source}")]
fn then_message_count(world: &LoaderWorld, context: StepText, count: usize, source: StepText) {
    let catalog = catalog(world);
    let name = context.into_inner();
    let source = source.into_inner();
    let context = catalog
        .context(&name)
        .unwrap_or_else(|| panic!("context `{name}` should exist"));

    let matching = context
        .messages()
        .iter()
        .filter(|message| message.source() == source)
        .count();
    assert_eq!(matching, count);
}

#[then("the message {source} in context {context} is {status}")]
fn then_status(world: &LoaderWorld, source: StepText, context: StepText, status: MessageStatus) {
    let catalog = catalog(world);
    let source = source.into_inner();
    let message = catalog
        .find(&context.into_inner(), &source, None)
        .unwrap_or_else(|| panic!("message `{source}` should exist"));
    assert_eq!(message.status(), status);
}

#[then("loading fails")]
fn then_fails(world: &LoaderWorld) {
    let _ = error(world);
}

#[then("loading fails with a missing source error")]
fn then_missing_source(world: &LoaderWorld) {
    let error = error(world);
    assert!(
        matches!(error.kind(), ParseErrorKind::MissingSource { .. }),
        "unexpected error: {error}"
    );
}

#[then("loading fails with an unknown status error")]
fn then_unknown_status(world: &LoaderWorld) {
    let error = error(world);
    assert!(
        matches!(error.kind(), ParseErrorKind::UnknownStatus { .. }),
        "unexpected error: {error}"
    );
}

#[then("the error is reported on line {line}")]
fn then_line(world: &LoaderWorld, line: usize) {
    assert_eq!(error(world).position().line, line);
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 0)]
fn scenario_german_sample(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 1)]
fn scenario_duplicate_keys(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 2)]
fn scenario_vanished(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 3)]
fn scenario_missing_source(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 4)]
fn scenario_unknown_status(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 5)]
fn scenario_unterminated(world: LoaderWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_loader.feature", index = 6)]
fn scenario_repeated_context(world: LoaderWorld) {
    let _ = world;
}
