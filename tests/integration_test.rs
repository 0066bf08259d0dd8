use std::fs;

use tagger::app::{App, AppEvent, AppMode};
use tagger::form::{AnswerForm, OutputFormat};
use tagger::input;
use tagger::tagging::TokenId;

#[test]
fn end_to_end_tagging() {
    let path = std::env::temp_dir().join("tagger_e2e_words.txt");
    fs::write(&path, "# night sky\nfull moon\nstars\n\nclouds & rain\n").unwrap();

    let pool = input::file::load(&path.to_string_lossy()).expect("Should load word list");
    assert_eq!(pool.tokens.len(), 3);
    assert!(pool.source.starts_with("file:"));

    let mut app = App::with_pool(AnswerForm::new("tags", false), pool);
    app.handle_event(AppEvent::Select(TokenId(2)));
    app.handle_event(AppEvent::Select(TokenId(0)));
    app.handle_event(AppEvent::Select(TokenId(0)));
    app.handle_event(AppEvent::Reorder { from: 1, to: 0 });
    assert_eq!(app.controller().serialize(), "full moon clouds & rain");

    app.handle_event(AppEvent::Submit);
    assert_eq!(app.mode(), AppMode::Submitted);

    let submission = app.take_submission().expect("Should have a submission");
    assert_eq!(submission.encode(OutputFormat::Plain).unwrap(), "full moon clouds & rain");
    assert_eq!(
        submission.encode(OutputFormat::Form).unwrap(),
        "tags=full+moon+clouds+%26+rain"
    );
    assert_eq!(
        submission.encode(OutputFormat::Json).unwrap(),
        r#"{"tags":"full moon clouds & rain"}"#
    );

    fs::remove_file(path).unwrap();
}

#[test]
fn end_to_end_quit_without_submitting() {
    let pool = input::from_text("a b c").unwrap();
    let mut app = App::with_pool(AnswerForm::default(), pool);
    app.handle_event(AppEvent::Select(TokenId(0)));
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
    assert!(app.take_submission().is_none());
}

#[test]
fn submission_written_to_file() {
    let out = std::env::temp_dir().join("tagger_e2e_answer.txt");
    let pool = input::from_text("cat the").unwrap();
    let mut app = App::with_pool(AnswerForm::default(), pool);
    app.handle_event(AppEvent::Select(TokenId(0)));
    app.handle_event(AppEvent::Select(TokenId(1)));
    app.handle_event(AppEvent::Submit);

    let submission = app.take_submission().unwrap();
    submission.write_to(OutputFormat::Form, Some(&out)).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "answer=cat+the\n");

    fs::remove_file(out).unwrap();
}
