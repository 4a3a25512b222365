//! Contract Test: Persistence
//!
//! Whatever a session ends with is what the next session starts with.

mod common;

use addressbook_core::{AddressBook, BookStore, FileBookStore, Record, Session, open_store};
use addressbook_core::config::StoreConfig;
use addressbook_core::session::SessionEnd;
use common::*;
use tempfile::tempdir;

fn varied_book() -> AddressBook {
    let mut book = AddressBook::new();
    reply(&mut book, "add Ivan 0501234567");
    reply(&mut book, "add Ivan 0501234567");
    reply(&mut book, "add-birthday Ivan 01.01.2000");
    book.add_record(Record::new("Olena"));
    reply(&mut book, "add Petro 0671234567");
    book.add_record(Record::new("Olena"));
    let mut taras = Record::new("Taras");
    taras.add_birthday("29.02.2024").expect("leap day");
    book.add_record(taras);
    book
}

#[tokio::test]
async fn save_then_load_preserves_content_and_order() {
    let dir = tempdir().unwrap();
    let store = FileBookStore::new(dir.path().join("addressbook.json"))
        .await
        .unwrap();

    let book = varied_book();
    store.save(&book).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, book);
    let names: Vec<_> = loaded.iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Ivan", "Olena", "Petro", "Olena", "Taras"]);
}

#[tokio::test]
async fn session_saves_on_exit_and_next_session_resumes() {
    let dir = tempdir().unwrap();
    let config = StoreConfig::File {
        path: dir.path().join("addressbook.json").display().to_string(),
    };

    let mut first = Session::open(open_store(&config).await.unwrap()).await.unwrap();
    let mut output = Vec::new();
    let end = first
        .run(
            "add Ivan 0501234567\nadd-birthday Ivan 01.01.2000\nexit\n".as_bytes(),
            &mut output,
            today,
        )
        .await
        .unwrap();
    assert_eq!(end, SessionEnd::ExitCommand);

    let mut second = Session::open(open_store(&config).await.unwrap()).await.unwrap();
    assert_eq!(second.book(), first.book());

    let mut output = Vec::new();
    second
        .run("birthdays\nclose\n".as_bytes(), &mut output, today)
        .await
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Користувачі, яких потрібно привітати на наступному тижні:\nIvan\n"));
}

#[tokio::test]
async fn memory_store_config_never_touches_disk() {
    let store = open_store(&StoreConfig::Memory).await.unwrap();
    assert_eq!(store.describe(), "memory");

    let book = varied_book();
    store.save(&book).await.unwrap();
    assert_eq!(store.load().await.unwrap(), book);
}
