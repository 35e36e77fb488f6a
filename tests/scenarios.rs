//! Literal input/output scenarios, one test per concrete example.

use folio::{restore, Chunker, SplitterConfig, TextSplitter};

fn splitter_with(chunk_size: usize, overlap: usize, separators: &[&str]) -> TextSplitter {
    let config = SplitterConfig::builder()
        .chunk_size(chunk_size)
        .chunk_overlap(overlap)
        .separators(separators.iter().map(|s| (*s).to_string()).collect())
        .build()
        .unwrap();
    TextSplitter::with_config(config).unwrap()
}

#[test]
fn scenario_1_empty_input() {
    let splitter = splitter_with(100, 10, &["\n", "。", " "]);
    assert_eq!(splitter.chunk(""), vec![]);
}

#[test]
fn scenario_2_below_threshold_single_chunk() {
    let splitter = splitter_with(100, 10, &["\n", "。", " "]);
    let chunks = splitter.chunk("Hello, world.");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].start, 0);
    assert_eq!(chunks[0].end, 13);
    assert_eq!(chunks[0].text, "Hello, world.");
}

#[test]
fn scenario_3_simple_split_with_overlap() {
    let text = "AAAAA\nBBBBB\nCCCCC";
    let splitter = splitter_with(8, 2, &["\n"]);
    let chunks = splitter.chunk(text);

    assert!(chunks.len() >= 2);
    let len_fn = splitter.config().len_function();
    for chunk in &chunks {
        assert!(len_fn(&chunk.text) <= 8, "chunk exceeded budget: {chunk:?}");
    }
    // Second chunk begins with a suffix carried over from the first.
    assert!(chunks[1].text.starts_with("BB") || chunks[1].start < chunks[0].end);
    assert_eq!(restore(&chunks), text);
}

#[test]
fn scenario_4_protected_image_kept_intact() {
    let text = "before ![a](http://x/y.png) after";
    let splitter = splitter_with(15, 0, &[" "]);
    let chunks = splitter.chunk(text);

    assert!(chunks.iter().any(|c| c.text.contains("![a](http://x/y.png)")));
}

#[test]
fn scenario_5_heading_injection() {
    let text = format!("# H1\ntext1\n## H2\ntext2\n{}", "x".repeat(400));
    let splitter = splitter_with(120, 20, &["\n", "。", " "]);
    let chunks = splitter.chunk(&text);

    assert!(chunks.len() >= 2);
    // Every chunk after the one holding the headings themselves should carry
    // the outline forward, unless it's already inside that chunk's text.
    for chunk in chunks.iter().skip(1) {
        let already_has_both = chunk.text.contains("# H1") && chunk.text.contains("## H2");
        let carries_prefix = chunk.text.starts_with("# H1\n## H2\n");
        assert!(
            already_has_both || carries_prefix,
            "chunk missing heading context: {:?}",
            &chunk.text[..chunk.text.len().min(60)]
        );
    }
}

#[test]
fn scenario_6_oversized_protected_span_is_dropped_without_crash() {
    let big_formula = format!("$${}$$", "a".repeat(2000));
    let text = format!("intro {big_formula} outro");
    let splitter = splitter_with(200, 10, &["\n", "。", " "]);
    let chunks = splitter.chunk(&text);

    assert!(!chunks.is_empty());
    assert_eq!(restore(&chunks), text);
}

#[test]
fn scenario_7_alternation_priority_favors_earlier_separator() {
    let text = "aaa。bbb ccc";
    let splitter = splitter_with(6, 0, &["\n", "。", " "]);
    let chunks = splitter.chunk(text);

    assert!(!chunks.is_empty());
    // "。" precedes " " in the hierarchy, so the first boundary should land
    // right after "aaa。", not at the space.
    assert!(chunks[0].text.starts_with("aaa。"));
}
