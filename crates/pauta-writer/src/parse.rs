use pauta_core::markers::{BODY_MARKER, CAPTION_MARKER, DEFAULT_TITLE, HEADLINE_MARKER};
use pauta_core::GeneratedArticle;

/// Split a raw model reply into title, body and caption.
///
/// Total over all strings: any marker may be missing or out of order and the
/// result is still a well-formed article, possibly with empty sections.
pub fn parse_llm_output(raw: &str) -> GeneratedArticle {
    let (main, social_caption) = match raw.split_once(CAPTION_MARKER) {
        Some((main, caption)) => (main, caption.trim().to_string()),
        None => (raw, String::new()),
    };

    let (title, body) = match main.split_once(BODY_MARKER) {
        Some((head, body)) => (extract_title(head), body.trim().to_string()),
        None => (
            DEFAULT_TITLE.to_string(),
            strip_headline_marker(main).trim().to_string(),
        ),
    };

    GeneratedArticle {
        title,
        body,
        social_caption,
    }
}

/// Everything before the body marker is the headline, with its marker
/// removed if present. May be empty when the model wrote no headline.
fn extract_title(head: &str) -> String {
    strip_headline_marker(head).trim().to_string()
}

fn strip_headline_marker(text: &str) -> String {
    text.replacen(HEADLINE_MARKER, "", 1)
}
