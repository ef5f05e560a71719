//! End-to-end fold of a listener transcript into collection snapshots.

use stockpile::store::sse::{CollectionCache, FeedEvent, FeedParser};

/// A realistic session: initial full put, a record added, a record
/// updated, a record removed, interleaved keep-alives, then cancel.
const TRANSCRIPT: &str = concat!(
    "event: put\n",
    "data: {\"path\":\"/\",\"data\":{\"a1\":{\"name\":\"Bolts\",\"quantity\":4,\"tag\":\"hardware\"},\"b2\":{\"name\":\"Tape\",\"quantity\":1}}}\n",
    "\n",
    "event: keep-alive\n",
    "data: null\n",
    "\n",
    "event: put\n",
    "data: {\"path\":\"/c3\",\"data\":{\"name\":\"Glue\",\"description\":\"wood glue\",\"quantity\":2}}\n",
    "\n",
    "event: put\n",
    "data: {\"path\":\"/b2\",\"data\":{\"name\":\"Tape\",\"quantity\":0}}\n",
    "\n",
    "event: put\n",
    "data: {\"path\":\"/a1\",\"data\":null}\n",
    "\n",
    "event: cancel\n",
    "data: null\n",
    "\n",
);

#[test]
fn transcript_folds_to_the_expected_collection() {
    let mut parser = FeedParser::new();
    let mut cache = CollectionCache::new();
    let mut snapshots = 0;
    let mut cancelled = false;

    for event in parser.push(TRANSCRIPT.as_bytes()) {
        if event == FeedEvent::Cancel {
            cancelled = true;
            break;
        }
        if cache.apply(&event) {
            snapshots += 1;
        }
    }

    assert!(cancelled);
    // Four applied changes; the keep-alive produced no snapshot.
    assert_eq!(snapshots, 4);

    let items = cache.snapshot();
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Tape", "Glue"]);
    let tape = items.iter().find(|i| i.name == "Tape").unwrap();
    assert_eq!(tape.quantity, 0);
    let glue = items.iter().find(|i| i.name == "Glue").unwrap();
    assert_eq!(glue.description, "wood glue");
    assert_eq!(glue.id, "c3");
}

#[test]
fn byte_by_byte_delivery_parses_identically() {
    let mut parser = FeedParser::new();
    let mut events = Vec::new();
    for byte in TRANSCRIPT.as_bytes() {
        events.extend(parser.push(std::slice::from_ref(byte)));
    }
    // 1 put + 1 keep-alive + 3 puts + 1 cancel.
    assert_eq!(events.len(), 6);
}
