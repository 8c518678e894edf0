#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_returns_none_for_a_missing_key() {
    remove("missing");
    assert_eq!(read("missing"), None);
}

#[test]
fn write_then_read_round_trips() {
    write("flag", "true");
    assert_eq!(read("flag"), Some("true".to_owned()));
}

#[test]
fn write_replaces_an_existing_value() {
    write("flag", "true");
    write("flag", "later");
    assert_eq!(read("flag"), Some("later".to_owned()));
}

#[test]
fn remove_deletes_the_entry() {
    write("flag", "true");
    remove("flag");
    assert_eq!(read("flag"), None);
}

#[test]
fn remove_of_a_missing_key_is_harmless() {
    remove("never-written");
    remove("never-written");
    assert_eq!(read("never-written"), None);
}

#[test]
fn keys_are_independent() {
    write("auth", "true");
    write("other", "value");
    remove("other");
    assert_eq!(read("auth"), Some("true".to_owned()));
    assert_eq!(read("other"), None);
}
