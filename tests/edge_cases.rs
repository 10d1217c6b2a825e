//! Edge case tests for chatstats
//!
//! These tests cover malformed lines, unusual authors and bodies, and the
//! two error paths of the aggregator.

use chatstats::ChatstatsError;
use chatstats::core::aggregate;
use chatstats::emoji::EmojiTable;
use chatstats::parsing::{extract_authors, hours_of, messages_of};
use chatstats::prelude::*;

// =========================================================================
// Empty and malformed input
// =========================================================================

#[test]
fn test_empty_log() {
    let report = aggregate("").unwrap();
    assert!(report.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn test_header_only_export() {
    let report = analyze_export("26.10.24, 10:00 - Alice: hi", &AnalyzerConfig::new()).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_only_garbage_lines() {
    let log = "no timestamp here\n\
               ------------------\n\
               \n\
               Reminder: 10:00 - bring 2.5 kg.";
    assert!(aggregate(log).unwrap().is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let log = "26.10.24, 10:00 - Alice: hi\r\n26.10.24, 11:00 - Alice: bye\r\n";
    let report = aggregate(log).unwrap();
    let alice = report.get("Alice").unwrap();

    assert_eq!(alice.messages, 2);
    assert_eq!(alice.characters, 5);
}

#[test]
fn test_continuation_line_ignored() {
    let log = "26.10.24, 10:00 - Alice: first line\nsecond line without a colon";
    let report = aggregate(log).unwrap();
    assert_eq!(report.get("Alice").unwrap().messages, 1);
}

#[test]
fn test_colon_inside_body_kept() {
    let lines = ["26.10.24, 10:00 - Alice: meet at 12:30, ok?"];
    assert_eq!(messages_of(&lines, "Alice"), vec!["meet at 12:30, ok?"]);
}

#[test]
fn test_empty_body() {
    let report = aggregate("26.10.24, 10:00 - Alice:").unwrap();
    let alice = report.get("Alice").unwrap();

    assert_eq!(alice.messages, 1);
    assert_eq!(alice.characters, 0);
    assert_eq!(alice.avg_msg_length, 0.0);
    assert_eq!(alice.most_used_words, Some(vec![]));
    assert!(alice.sentiment_undefined());
}

#[test]
fn test_blank_author_name_skipped() {
    let lines = ["26.10.24, 10:00 - : hi", "26.10.24, 10:00 - Bob: yo"];
    assert_eq!(extract_authors(&lines, '.'), vec!["Bob"]);
}

// =========================================================================
// Author attribution
// =========================================================================

#[test]
fn test_substring_author_claims_longer_name() {
    let log = "26.10.24, 10:00 - Al: hi\n26.10.24, 11:00 - Alice: hello there";
    let report = aggregate(log).unwrap();

    assert_eq!(report.get("Al").unwrap().messages, 2);
    assert_eq!(report.get("Alice").unwrap().messages, 1);
}

#[test]
fn test_unicode_authors() {
    let log = "26.10.24, 10:00 - Иван: Привет\n\
               26.10.24, 11:00 - 村上: こんにちは\n\
               26.10.24, 12:00 - 🔥FireUser🔥: yo";
    let report = aggregate(log).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(report.get("Иван").unwrap().characters, 6);
    assert_eq!(report.get("村上").unwrap().characters, 5);
    assert_eq!(report.get("🔥FireUser🔥").unwrap().most_active_hour, "12");
}

#[test]
fn test_unicode_words_lowercased() {
    let log = "26.10.24, 10:00 - Иван: ПРИВЕТ привет мир";
    let report = aggregate(log).unwrap();
    assert_eq!(
        report.get("Иван").unwrap().most_used_words,
        Some(vec![("привет".to_string(), 2), ("мир".to_string(), 1)])
    );
}

#[test]
fn test_ghost_author_recorded_as_failure() {
    let log = "26.10.24, 10:00:00 - Ghost hi\n26.10.24, 10:00 - Alice: hi";
    let report = aggregate(log).unwrap();

    assert_eq!(report.authors().collect::<Vec<_>>(), vec!["Alice"]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures.contains_key("Ghost hi"));
}

// =========================================================================
// Hours
// =========================================================================

#[test]
fn test_hour_tie_goes_to_lowest() {
    let log = "26.10.24, 22:00 - Alice: a\n\
               26.10.24, 07:00 - Alice: b\n\
               26.10.24, 22:30 - Alice: c\n\
               26.10.24, 07:30 - Alice: d";
    assert_eq!(aggregate(log).unwrap().get("Alice").unwrap().most_active_hour, "07");
}

#[test]
fn test_midnight_zero_padded() {
    let report = aggregate("26.10.24, 00:05 - Alice: late").unwrap();
    assert_eq!(report.get("Alice").unwrap().most_active_hour, "00");
}

#[test]
fn test_hour_out_of_range_aborts() {
    let err = aggregate("26.10.24, 25:00 - Alice: hi").unwrap_err();
    assert!(err.is_hour_parse());
    match err {
        ChatstatsError::HourParse { line, token } => {
            assert_eq!(line, 1);
            assert_eq!(token, "25:00");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_hour_parse_reports_line() {
    let lines = [
        "26.10.24, 10:00 - Alice: hi",
        "26.10.24, 10:01 - Bob: hey",
        "Alice: forwarded without a timestamp",
    ];
    let err = hours_of(&lines, "Alice").unwrap_err();
    assert!(matches!(
        err,
        ChatstatsError::HourParse { line: 3, ref token } if token == "forwarded"
    ));

    assert_eq!(hours_of(&lines, "Bob").unwrap(), vec![10]);
}

// =========================================================================
// Emoji handling
// =========================================================================

#[test]
fn test_zwj_sequence_is_one_emoji() {
    let report = aggregate("26.10.24, 10:00 - Alice: family 👨‍👩‍👧 time").unwrap();
    assert_eq!(
        report.get("Alice").unwrap().emojis,
        vec![("👨‍👩‍👧".to_string(), 1.0)]
    );
}

#[test]
fn test_flag_is_one_emoji() {
    assert_eq!(EmojiTable::standard().extract("from 🇰🇿!"), vec!["🇰🇿"]);
}

#[test]
fn test_lone_skin_tone_not_counted() {
    let report = aggregate("26.10.24, 10:00 - Alice: 🏽 hi").unwrap();
    let alice = report.get("Alice").unwrap();

    assert!(alice.emojis.is_empty());
    assert_eq!(alice.most_used_words, Some(vec![("hi".to_string(), 1)]));
}

#[test]
fn test_skin_tones_are_distinct_emojis() {
    let log = "26.10.24, 10:00 - Alice: 👍🏽 👍🏽 👍";
    let report = aggregate(log).unwrap();
    let emojis = &report.result["Alice"].emojis;

    assert_eq!(emojis.len(), 2);
    assert_eq!(emojis[0].0, "👍🏽");
    assert!((emojis[0].1 - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(emojis[1].0, "👍");
}

#[test]
fn test_emoji_only_message_has_no_words_or_sentiment() {
    let report = aggregate("26.10.24, 10:00 - Alice: 😀😀😀").unwrap();
    let alice = report.get("Alice").unwrap();

    assert_eq!(alice.characters, 3);
    assert_eq!(alice.most_used_words, Some(vec![]));
    assert!(alice.sentiment_undefined());
}

// =========================================================================
// Media and links
// =========================================================================

#[test]
fn test_single_media_message_disables_word_ranking() {
    let log = "26.10.24, 10:00 - Alice: lots of words here\n\
               26.10.24, 10:01 - Alice: <Media omitted>";
    let report = aggregate(log).unwrap();
    let alice = &report.result["Alice"];

    assert_eq!(alice.media_count, 1);
    assert_eq!(alice.most_used_words, None);
}

#[test]
fn test_repeated_urls_counted() {
    let log = "26.10.24, 10:00 - Alice: https://a.io https://a.io\n\
               26.10.24, 10:01 - Alice: see http://b.io";
    assert_eq!(aggregate(log).unwrap().result["Alice"].url_count, 3);
}
