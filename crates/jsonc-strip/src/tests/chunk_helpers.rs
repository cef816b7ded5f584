use alloc::{vec, vec::Vec};

use crate::chunk_utils::{partition, produce_chunks};

#[test]
fn produce_chunks_example() {
    let payload = b"[\"foo\",\"bar\"]";
    let chunks = produce_chunks(payload, 5);
    let expected: Vec<&[u8]> = vec![
        &b"[\"f"[..],
        &b"oo\""[..],
        &b",\"b"[..],
        &b"ar\""[..],
        &b"]"[..],
    ];
    assert_eq!(chunks, expected);
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_more_parts_than_bytes() {
    let chunks = produce_chunks(b"ab", 5);
    let expected: Vec<&[u8]> = vec![&b"a"[..], &b"b"[..]];
    assert_eq!(chunks, expected);
}

#[test]
fn partition_never_yields_empty_chunks() {
    let payload = b"/* a */ [1, 2]";
    let chunks = partition(payload, &[0, 100, 3, 7, 2, 9]);
    assert!(chunks.iter().all(|c| !c.is_empty()));
    assert_eq!(chunks.concat(), payload);
    // first split is 1 + (0 % 14)
    assert_eq!(chunks[0], b"/");
}

#[test]
fn partition_without_splits_is_whole() {
    let payload = b"[1]";
    assert_eq!(partition(payload, &[]), vec![&payload[..]]);
}
