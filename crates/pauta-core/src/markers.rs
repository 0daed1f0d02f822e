//! Literal strings shared by the prompt builder and the response parser.
//!
//! The three section markers are the protocol between the instruction we
//! send and the text we get back. Both sides must import them from here.

/// Prefix of the headline line in the model reply.
pub const HEADLINE_MARKER: &str = "TÍTULO:";

/// Prefix of the article body in the model reply.
pub const BODY_MARKER: &str = "CORPO:";

/// Prefix of the social-media caption in the model reply.
pub const CAPTION_MARKER: &str = "INSTAGRAM:";

pub const OUTLET_NAME: &str = "Catalão Online";

/// Closing line every article body must carry.
pub const ATTRIBUTION_LINE: &str = "Fonte: Catalão Online";

/// Mandatory last line of the caption.
pub const CALL_TO_ACTION: &str = "🔗 Confira a matéria completa no link da bio";

/// Title used when the reply carries no recoverable headline.
pub const DEFAULT_TITLE: &str = "Notícia Catalão Online";

/// Rendered in place of the date/time when either is missing.
pub const UNKNOWN_DATE: &str = "Data recente";
