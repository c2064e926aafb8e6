//! Round-trip law: writing a document and parsing it back yields an
//! equal document, field for field.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use todayfile_engine::{Document, ListItem, Status, Task, TaskList};

fn write_to_string(doc: &Document) -> String {
    let mut out = Vec::new();
    doc.write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn reparse(doc: &Document) -> Document {
    Document::parse(write_to_string(doc).as_bytes()).unwrap()
}

#[test]
fn constructed_document_survives_a_round_trip() {
    let doc = Document {
        startup: vec![
            ListItem {
                number: 1,
                description: "Catch up on slack".to_string(),
                status: Status::default(),
            },
            ListItem {
                number: 2,
                description: "Read the inbox".to_string(),
                status: Status {
                    name: "DONE".to_string(),
                    comment: "all clear".to_string(),
                    date: NaiveDate::from_ymd_opt(2020, 6, 7),
                },
            },
        ],
        notes: vec![
            "foop boop doop This is a note.".to_string(),
            "note important_facts ".to_string(),
        ],
        log: vec![
            "8:30 Starting work".to_string(),
            "9:00 Standup".to_string(),
        ],
        tasks: TaskList::new(vec![
            Task {
                id: "SOMEJIRA-123".to_string(),
                description: "description of a todo task".to_string(),
                status: Status {
                    name: "IN PROGRESS".to_string(),
                    comment: "waiting for customer".to_string(),
                    date: NaiveDate::from_ymd_opt(2020, 6, 7),
                },
                comments: vec!["* Some note".to_string(), "* Some other note".to_string()],
                blank_below: true,
            },
            Task {
                description: "Some other random task".to_string(),
                ..Task::default()
            },
        ]),
    };

    assert_eq!(reparse(&doc), doc);
}

#[test]
fn comments_with_separators_survive_a_round_trip() {
    let doc = Document {
        tasks: TaskList::new(vec![Task {
            id: "TASK-3".to_string(),
            description: "chase the vendor".to_string(),
            status: Status {
                name: "WAITING".to_string(),
                comment: "pinged twice - no answer yet".to_string(),
                date: NaiveDate::from_ymd_opt(2021, 2, 10),
            },
            ..Task::default()
        }]),
        ..Document::default()
    };

    assert_eq!(reparse(&doc), doc);
}

#[test]
fn date_only_statuses_survive_a_round_trip() {
    let doc = Document {
        startup: vec![ListItem {
            number: 1,
            description: "water the plants".to_string(),
            status: Status {
                date: NaiveDate::from_ymd_opt(2020, 1, 5),
                ..Status::default()
            },
        }],
        ..Document::default()
    };

    assert_eq!(reparse(&doc), doc);
}

#[test]
fn parsed_document_survives_a_round_trip() {
    let text = "Morning Start Up:\n\
                1. Catch up on slack \n\
                2. Check the calendar [DONE - Jan  5, 2020]\n\
                \n\
                Notes:\n\
                note deploy\n\
                \n\
                Log:\n\
                8:30 Starting work\n\
                \n\
                TODO:\n\
                TASK-240 - Another Task [WAITING - waiting to hear from client multi-hyphen-word - Jan 5, 2020]\n\
                \tcall them after lunch\n\
                \n\
                Yet another task.\n\
                \n";

    let doc = Document::parse(text.as_bytes()).unwrap();
    let reparsed = reparse(&doc);
    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.tasks.next_id(), 241);

    // A second write is byte-for-byte stable.
    assert_eq!(write_to_string(&reparsed), write_to_string(&doc));
}
