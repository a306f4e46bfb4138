//! Raw and logic field access driven through the store service.

use crate::in_memory::helpers::{TestStore, runtime, store};
use missive::message::{domain::MessageId, error::NotFound, services::MessageStoreError};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Raw fields resolve to the stored attributes in canonical string form.
#[rstest]
fn get_field_from_message(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let message = rt
        .block_on(store.create("Potato"))
        .expect("creation should succeed");

    let text = rt
        .block_on(store.raw_field(message.id(), "text"))
        .expect("text field resolves");
    assert_eq!(text, "Potato");

    let posted = rt
        .block_on(store.raw_field(message.id(), "datePosted"))
        .expect("datePosted field resolves");
    assert!(!posted.is_empty());

    let edited = rt
        .block_on(store.raw_field(message.id(), "dateEdited"))
        .expect("dateEdited field resolves");
    assert_eq!(edited, posted);
}

/// A name outside the raw-field set reports not found.
#[rstest]
fn fail_to_get_missing_field(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let message = rt
        .block_on(store.create("Potato"))
        .expect("creation should succeed");

    let result = rt.block_on(store.raw_field(message.id(), "friends"));
    assert!(matches!(
        result,
        Err(MessageStoreError::NotFound(NotFound::RawField(name))) if name == "friends"
    ));
}

/// Logic fields compute deterministically from the current text.
#[rstest]
fn get_logic_field_from_message(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let message = rt
        .block_on(store.create("Potato"))
        .expect("creation should succeed");

    let first = rt
        .block_on(store.logic_field(message.id(), "palindrome"))
        .expect("palindrome resolves");
    let second = rt
        .block_on(store.logic_field(message.id(), "palindrome"))
        .expect("palindrome resolves");

    assert_eq!(first, "false");
    assert_eq!(first, second);
}

/// A name outside the logic catalog reports not found.
#[rstest]
fn fail_to_get_missing_logic_field(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let message = rt
        .block_on(store.create("Potato"))
        .expect("creation should succeed");

    let result = rt.block_on(store.logic_field(message.id(), "special"));
    assert!(matches!(
        result,
        Err(MessageStoreError::NotFound(NotFound::LogicField(name))) if name == "special"
    ));
}

/// Field access on an unknown message reports the message as not found.
#[rstest]
fn field_access_on_missing_message(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let raw = rt.block_on(store.raw_field(MessageId::new(-1), "text"));
    assert!(matches!(
        raw,
        Err(MessageStoreError::NotFound(NotFound::Message(_)))
    ));

    let logic = rt.block_on(store.logic_field(MessageId::new(-1), "palindrome"));
    assert!(matches!(
        logic,
        Err(MessageStoreError::NotFound(NotFound::Message(_)))
    ));
}

/// Logic values track edits: stale answers never survive an update.
#[rstest]
fn logic_field_recomputes_after_update(runtime: io::Result<Runtime>, store: TestStore) {
    let rt = runtime.expect("runtime creation");

    let message = rt
        .block_on(store.create("Potato"))
        .expect("creation should succeed");

    rt.block_on(store.update(message.id(), "racecar"))
        .expect("update should succeed");

    let palindrome = rt
        .block_on(store.logic_field(message.id(), "palindrome"))
        .expect("palindrome resolves");
    assert_eq!(palindrome, "true");
}
