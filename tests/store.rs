use std::collections::HashSet;

use tokio::task::JoinSet;

use sharebin::code::{CODE_ALPHABET, CODE_LENGTH};
use sharebin::store::{MemoryBackend, PasteStore};

fn store() -> PasteStore<MemoryBackend> {
    PasteStore::new(MemoryBackend::new())
}

#[tokio::test]
async fn created_pastes_round_trip() {
    let mut store = store();

    let paste = store.create_paste("hello world").await.unwrap();
    assert_eq!(paste.code.len(), CODE_LENGTH);
    assert!(paste.code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    assert_eq!(paste.content, "hello world");

    let fetched = store.get_paste(&paste.code).await.unwrap().unwrap();
    assert_eq!(fetched, paste);
}

#[tokio::test]
async fn content_is_stored_verbatim() {
    let mut store = store();

    // leading/trailing whitespace is only used for the emptiness check
    let content = "  fn main() {}\n";
    let paste = store.create_paste(content).await.unwrap();
    let fetched = store.get_paste(&paste.code).await.unwrap().unwrap();
    assert_eq!(fetched.content, content);
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let mut store = store();

    let paste = store.create_paste("hello world").await.unwrap();
    let lowered = paste.code.to_ascii_lowercase();

    let fetched = store.get_paste(&lowered).await.unwrap().unwrap();
    assert_eq!(fetched.content, "hello world");
    assert!(store.paste_exists(&lowered).await.unwrap());
}

#[tokio::test]
async fn unknown_code_is_absent_not_an_error() {
    let mut store = store();

    assert_eq!(store.get_paste("ZZZZZZ").await.unwrap(), None);
    assert!(!store.paste_exists("ZZZZZZ").await.unwrap());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let mut store = store();

    let paste = store.create_paste("ephemeral").await.unwrap();
    assert!(store.delete_paste(&paste.code).await.unwrap());
    assert_eq!(store.get_paste(&paste.code).await.unwrap(), None);
    assert!(!store.delete_paste(&paste.code).await.unwrap());
    assert!(!store.delete_paste(&paste.code).await.unwrap());
}

#[tokio::test]
async fn concurrent_creates_never_share_a_code() {
    let store = store();
    let mut tasks = JoinSet::new();

    for _ in 0..32 {
        let mut store = store.clone();
        tasks.spawn(async move { store.create_paste("same content").await.unwrap().code });
    }

    let mut codes = HashSet::new();
    while let Some(code) = tasks.join_next().await {
        assert!(codes.insert(code.unwrap()));
    }
    assert_eq!(codes.len(), 32);
}
