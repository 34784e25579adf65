use bookfreq_fs::{atomic_read, write_error_log, write_report};
use bookfreq_words::Analysis;
use tempfile::tempdir;

#[test]
fn test_reports_from_analysis() {
    let dir = tempdir().unwrap();
    let analysis = Analysis::from_text("the The the cat\r\n");

    let all = dir.path().join("AllGroupedWords.txt");
    write_report(&all, analysis.all()).unwrap();

    let text = String::from_utf8(atomic_read(&all).unwrap()).unwrap();
    assert_eq!(
        text,
        "Word:the ===== Count:2\nWord:The ===== Count:1\nWord:cat ===== Count:1\n"
    );
}

#[test]
fn test_length_report_writes_references() {
    let dir = tempdir().unwrap();
    let analysis = Analysis::from_text("Natasha Natasha Pierre Bolkonsky");

    let path = dir.path().join("50WordsOrderedByLength.txt");
    let n = write_report(&path, analysis.top_by_length()).unwrap();

    assert_eq!(n, 2);
    let text = String::from_utf8(atomic_read(&path).unwrap()).unwrap();
    assert_eq!(text, "Word:Natasha ===== Count:2\nWord:Bolkonsky ===== Count:1\n");
}

#[test]
fn test_repeated_runs_accumulate() {
    let dir = tempdir().unwrap();
    let analysis = Analysis::from_text("a b a");
    let path = dir.path().join("50WordsOrderedByCount.txt");

    write_report(&path, analysis.top_by_count()).unwrap();
    write_report(&path, analysis.top_by_count()).unwrap();

    let text = String::from_utf8(atomic_read(&path).unwrap()).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert_eq!(text.lines().filter(|l| *l == "Word:a ===== Count:2").count(), 2);
}

#[test]
fn test_every_line_matches_format() {
    let dir = tempdir().unwrap();
    let analysis = Analysis::from_text("It was in July, 1805, and the speaker was the well-known Anna Pávlovna");
    let path = dir.path().join("AllGroupedWords.txt");
    write_report(&path, analysis.all()).unwrap();

    let text = String::from_utf8(atomic_read(&path).unwrap()).unwrap();
    for line in text.lines() {
        let rest = line.strip_prefix("Word:").unwrap();
        let (word, count) = rest.split_once(" ===== Count:").unwrap();
        assert!(!word.is_empty());
        assert!(count.parse::<usize>().unwrap() >= 1);
    }
}

#[test]
fn test_error_log_is_not_appended() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ErrorLog.txt");

    write_error_log(&path, "network error: connection refused").unwrap();
    write_error_log(&path, "HTTP error: server responded with status 404").unwrap();

    let text = String::from_utf8(atomic_read(&path).unwrap()).unwrap();
    assert_eq!(text, "HTTP error: server responded with status 404");
}
