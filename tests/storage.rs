//! Save sinks and loading saved stories back into the editor.

mod common;

use common::*;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use storyreel::story::{PayloadError, SaveKind, SavePayload, SlideKind, SlideSequence};
use storyreel::storage::{load_payload, FileSink, MemorySink, SaveError, StorySink};
use tempfile::TempDir;

fn payload(kind: SaveKind, title: &str, slides: SlideSequence) -> SavePayload {
    SavePayload::new(
        kind,
        title,
        "Travel",
        vec!["sea".into()],
        slides,
        SystemTime::now(),
    )
}

#[tokio::test]
async fn file_sink_writes_loadable_json() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path().join("stories"));
    let original = payload(SaveKind::Published, "Day at the Sea", mixed_sequence());

    let receipt = sink.save(original.clone()).await.unwrap();
    assert_eq!(receipt.kind, SaveKind::Published);
    let expected = dir.path().join("stories").join("day-at-the-sea-published.json");
    assert_eq!(receipt.location, expected.display().to_string());
    assert!(expected.exists());
    assert!(!expected.with_extension("json.tmp").exists());

    let loaded = load_payload(&expected).await.unwrap();
    assert_eq!(loaded, original);
    assert!(loaded.published_at.is_some());
}

#[tokio::test]
async fn drafts_and_published_use_separate_files() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path());
    let draft = sink
        .save(payload(SaveKind::Draft, "Trip", text_sequence(1)))
        .await
        .unwrap();
    let published = sink
        .save(payload(SaveKind::Published, "Trip", text_sequence(2)))
        .await
        .unwrap();
    assert_ne!(draft.location, published.location);
    assert!(draft.location.ends_with("trip-draft.json"));
}

#[tokio::test]
async fn saving_again_overwrites() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path());
    sink.save(payload(SaveKind::Draft, "Trip", text_sequence(1)))
        .await
        .unwrap();
    let receipt = sink
        .save(payload(SaveKind::Draft, "Trip", text_sequence(3)))
        .await
        .unwrap();
    let loaded = load_payload(std::path::Path::new(&receipt.location))
        .await
        .unwrap();
    assert_eq!(loaded.slides.len(), 3);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path().join("out"));

    let err = sink
        .save(payload(SaveKind::Draft, "  ", SlideSequence::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SaveError::Invalid(PayloadError::Empty)));

    let err = sink
        .save(payload(SaveKind::Published, "", text_sequence(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, SaveError::Invalid(PayloadError::MissingTitle)));

    let err = sink
        .save(payload(SaveKind::Published, "Title", SlideSequence::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SaveError::Invalid(PayloadError::NoSlides)));

    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn loading_missing_or_corrupt_files_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let err = load_payload(&missing).await.unwrap_err();
    assert!(matches!(err, SaveError::Read { .. }));
    assert!(err.to_string().starts_with("Failed to read"));

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, b"{ not json").unwrap();
    assert!(matches!(
        load_payload(&corrupt).await,
        Err(SaveError::Json(_))
    ));
}

#[tokio::test]
async fn memory_sink_records_payloads_in_order() {
    let sink = MemorySink::with_delay(Duration::from_millis(5));
    let shared: Arc<dyn StorySink> = Arc::new(sink.clone());

    shared
        .save(payload(SaveKind::Draft, "First", SlideSequence::new()))
        .await
        .unwrap();
    let receipt = shared
        .save(payload(SaveKind::Published, "Second", text_sequence(1)))
        .await
        .unwrap();

    assert_eq!(receipt.location, "memory://2");
    let saved = sink.saved();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].title, "First");
    assert_eq!(saved[1].kind, SaveKind::Published);
}

#[tokio::test]
async fn saved_story_round_trips_into_the_editor() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path());
    let mut slides = SlideSequence::new();
    slides.append(SlideKind::Text, "intro");
    slides.append(SlideKind::Image, png_data_uri());
    let receipt = sink
        .save(payload(SaveKind::Draft, "Round trip", slides.clone()))
        .await
        .unwrap();

    let loaded = load_payload(std::path::Path::new(&receipt.location))
        .await
        .unwrap();
    let mut app = make_app();
    app.load_story(loaded);

    assert_eq!(app.editor().title, "Round trip");
    assert_eq!(app.editor().genre_name(), "Travel");
    assert_eq!(app.editor().slides, slides);
    assert!(!app.editor().dirty);
}
