use unicode::{
    casefold, grapheme_find, grapheme_length, grapheme_next_break, grapheme_substr,
    line_next_break, line_next_hard_break, sentence_next_break, strip, text_width,
    word_next_break, OffsetMapper, ToUtf8PositionMapper,
};

#[test]
fn test_grapheme_substr_keeps_clusters_whole() {
    let text = "e\u{301}\u{301}f";
    assert_eq!(grapheme_substr(text, 0, 1), "e\u{301}\u{301}");
    assert_eq!(grapheme_length(text, 0), 2);
}

#[test]
fn test_line_break_after_space() {
    // a legal break falls immediately before the 'd'
    assert_eq!(line_next_break("abc def", 0), 4);
}

#[test]
fn test_break_functions_agree_on_plain_ascii() {
    let text = "word";
    assert_eq!(grapheme_next_break(text, 0), 1);
    assert_eq!(word_next_break(text, 0), 4);
    assert_eq!(sentence_next_break(text, 0), 4);
    assert_eq!(line_next_break(text, 0), 4);
    assert_eq!(line_next_hard_break(text, 0), 4);
}

#[test]
fn test_flag_emoji_pairs() {
    // two flags, four regional indicators
    let flags = "\u{1f1fa}\u{1f1f8}\u{1f1eb}\u{1f1f7}";
    assert_eq!(grapheme_length(flags, 0), 2);
    assert_eq!(grapheme_substr(flags, 1, 2), "\u{1f1eb}\u{1f1f7}");
}

#[test]
fn test_find_refuses_partial_clusters() {
    let text = "ae\u{301}b";
    assert_eq!(grapheme_find(text, "e", 0, text.len()), None);
    assert_eq!(grapheme_find(text, "e\u{301}", 0, text.len()), Some(1));
    assert_eq!(grapheme_find(text, "b", 0, text.len()), Some(4));
}

#[test]
fn test_fold_and_strip_pipeline() {
    let raw = "Crème BRÛLÉE!";
    let folded = casefold(raw);
    assert_eq!(folded, "crème brûlée!");
    assert_eq!(strip(&folded), "creme brulee");
}

#[test]
fn test_width_of_mixed_text() {
    assert_eq!(text_width("abc", 0), 3);
    assert_eq!(text_width("中文ab", 0), 6);
    assert_eq!(text_width("e\u{301}", 0), 1);
}

#[test]
fn test_sentence_boundaries_in_prose() {
    let text = "It works. Mostly.";
    let first = sentence_next_break(text, 0);
    assert_eq!(first, 10);
    assert_eq!(sentence_next_break(text, first), text.len());
}

#[test]
fn test_offset_mappers_compose() {
    let text = "aé中";
    let mut to_utf8 = ToUtf8PositionMapper::new(text);
    assert_eq!(to_utf8.map(2).unwrap(), 3);

    let mut mapper = OffsetMapper::new();
    mapper.add("hello", 100, 105);
    mapper.add_separator("-");
    mapper.add("there", 200, 205);
    assert_eq!(mapper.text(), "hello-there");
    assert_eq!(mapper.map(7).unwrap(), 201);
}

#[test]
fn test_hard_breaks_only() {
    let text = "one two\nthree four";
    assert_eq!(line_next_hard_break(text, 0), 8);
    // the soft break machinery sees many more opportunities
    assert_eq!(line_next_break(text, 0), 4);
}
