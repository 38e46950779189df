use cram_core::reduce::split_sentences;

#[test]
fn splits_after_terminal_punctuation() {
    let text = "Does it work? It does! Great stuff.";
    let sentences = split_sentences(text);

    assert_eq!(
        sentences,
        vec!["Does it work?", "It does!", "Great stuff."],
        "punctuation must stay attached to the preceding sentence"
    );
}

#[test]
fn period_without_following_whitespace_is_not_a_boundary() {
    let sentences = split_sentences("Version 2.5 improves throughput.");
    assert_eq!(sentences, vec!["Version 2.5 improves throughput."]);
}

#[test]
fn collapses_line_breaks_before_splitting() {
    let text = "One sentence here\ncontinues on a new line. Second sentence follows.";
    let sentences = split_sentences(text);

    assert_eq!(
        sentences,
        vec![
            "One sentence here continues on a new line.",
            "Second sentence follows.",
        ]
    );

    let blank_lines = "Alpha beta gamma.\n\n\nDelta epsilon zeta.";
    assert_eq!(
        split_sentences(blank_lines),
        vec!["Alpha beta gamma.", "Delta epsilon zeta."]
    );
}

#[test]
fn discards_noise_pieces() {
    // "Yes." is four characters: below the noise threshold, not a sentence.
    let sentences = split_sentences("Hello world. Yes. This is fine!");
    assert_eq!(sentences, vec!["Hello world.", "This is fine!"]);
}

#[test]
fn trailing_text_without_punctuation_is_kept() {
    let sentences = split_sentences("Trailing words without a full stop");
    assert_eq!(sentences, vec!["Trailing words without a full stop"]);
}

#[test]
fn abbreviations_terminate_sentences() {
    // Known heuristic limitation: no abbreviation handling.
    let sentences = split_sentences("For example, e.g. some cases.");
    assert_eq!(sentences, vec!["For example, e.g.", "some cases."]);
}

#[test]
fn empty_and_whitespace_input_produce_nothing() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("   \n\n  ").is_empty());
}

#[test]
fn segmentation_is_idempotent() {
    let text = "First sentence here. Second sentence there!\nThird one closes.";
    assert_eq!(split_sentences(text), split_sentences(text));
}
