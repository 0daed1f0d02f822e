use pauta_core::markers::{BODY_MARKER, CAPTION_MARKER, DEFAULT_TITLE, HEADLINE_MARKER};
use pauta_writer::parse::parse_llm_output;
use proptest::prelude::*;

#[test]
fn sections_are_trimmed() {
    let raw = format!("{HEADLINE_MARKER}   X  \n\n{BODY_MARKER}\n Y \n{CAPTION_MARKER}\n\n Z \n");
    let article = parse_llm_output(&raw);
    assert_eq!(article.title, "X");
    assert_eq!(article.body, "Y");
    assert_eq!(article.social_caption, "Z");
}

#[test]
fn preamble_before_headline_marker_stays_in_title() {
    let article = parse_llm_output("Claro! TÍTULO: Manchete\nCORPO: corpo");
    assert_eq!(article.title, "Claro!  Manchete");
}

fn marker() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(HEADLINE_MARKER),
        Just(BODY_MARKER),
        Just(CAPTION_MARKER),
    ]
}

proptest! {
    #[test]
    fn parser_is_total_over_arbitrary_text(raw in any::<String>()) {
        let article = parse_llm_output(&raw);
        prop_assert_eq!(article.title.trim(), article.title.as_str());
        if !raw.contains(BODY_MARKER) {
            prop_assert_eq!(article.title.as_str(), DEFAULT_TITLE);
        }
        prop_assert_eq!(article.body.trim(), article.body.as_str());
        prop_assert_eq!(article.social_caption.trim(), article.social_caption.as_str());
    }

    #[test]
    fn parser_is_total_over_shuffled_markers(
        chunks in proptest::collection::vec((marker(), ".{0,20}"), 0..6)
    ) {
        let raw: String = chunks.iter().map(|(m, text)| format!("{m}{text}")).collect();
        let article = parse_llm_output(&raw);
        prop_assert_eq!(article.title.trim(), article.title.as_str());
        if !raw.contains(CAPTION_MARKER) {
            prop_assert_eq!(article.social_caption.as_str(), "");
        }
        if !raw.contains(BODY_MARKER) {
            prop_assert_eq!(article.title.as_str(), DEFAULT_TITLE);
        }
    }

    #[test]
    fn well_formed_sections_round_trip(
        title in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]",
        body in "[a-z][a-z .]{0,80}[a-z.]",
        caption in "[a-z#][a-z #]{0,40}[a-z]",
    ) {
        let raw = format!("{HEADLINE_MARKER} {title}\n{BODY_MARKER} {body}\n{CAPTION_MARKER} {caption}");
        let article = parse_llm_output(&raw);
        prop_assert_eq!(article.title, title);
        prop_assert_eq!(article.body, body);
        prop_assert_eq!(article.social_caption, caption);
    }
}
