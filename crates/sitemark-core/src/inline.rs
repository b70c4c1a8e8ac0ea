use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{InlineSpan, SpanSeq};
use crate::error::ParseError;

// Alt text admits no brackets and URLs admit no parens, so a single
// non-greedy-free pattern is enough.
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("image pattern"));
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("link pattern"));

/// Splits raw text into an ordered sequence of inline spans.
///
/// Passes run in a fixed order: images, then links, then the three delimiter
/// styles. Image syntax is link syntax prefixed with `!`, so images must be
/// lifted out first, and both bracket passes must run before the delimiter
/// passes so that emphasis markers inside link text are not split.
pub fn tokenize(text: &str) -> Result<SpanSeq, ParseError> {
    let mut spans = vec![InlineSpan::Text(text.to_string())];
    spans = split_images(spans);
    spans = split_links(spans);
    spans = split_delimiter(spans, "**", InlineSpan::Bold)?;
    spans = split_delimiter(spans, "_", InlineSpan::Italic)?;
    spans = split_delimiter(spans, "`", InlineSpan::Code)?;
    Ok(spans)
}

fn split_images(spans: SpanSeq) -> SpanSeq {
    split_bracketed(spans, &IMAGE_PATTERN, false, |alt, url| InlineSpan::Image {
        alt,
        url,
    })
}

fn split_links(spans: SpanSeq) -> SpanSeq {
    split_bracketed(spans, &LINK_PATTERN, true, |text, url| InlineSpan::Link {
        text,
        url,
    })
}

/// Lifts every `[..](..)` match out of the text spans, leaving surrounding
/// text as plain spans (only if non-empty). Spans that are already typed
/// pass through untouched.
///
/// `skip_bang` drops matches preceded by `!`: the regex crate has no
/// lookbehind, so the link pass checks the preceding byte instead.
fn split_bracketed(
    spans: SpanSeq,
    pattern: &Regex,
    skip_bang: bool,
    make: fn(String, String) -> InlineSpan,
) -> SpanSeq {
    let mut out = Vec::new();
    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };
        let mut cursor = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = caps.get(0).expect("whole match");
            if skip_bang && text[..whole.start()].ends_with('!') {
                continue;
            }
            if whole.start() > cursor {
                out.push(InlineSpan::Text(text[cursor..whole.start()].to_string()));
            }
            out.push(make(caps[1].to_string(), caps[2].to_string()));
            cursor = whole.end();
        }
        if cursor < text.len() {
            out.push(InlineSpan::Text(text[cursor..].to_string()));
        }
    }
    out
}

/// One delimiter pass over the spans still tagged as plain text.
///
/// Splitting on the delimiter must yield an odd number of parts (parts
/// alternate plain/delimited, starting and ending plain); an even count
/// means a delimiter was left unterminated. Empty parts are dropped.
fn split_delimiter(
    spans: SpanSeq,
    delimiter: &'static str,
    make: fn(String) -> InlineSpan,
) -> Result<SpanSeq, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };
        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter { delimiter });
        }
        for (idx, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if idx % 2 == 0 {
                out.push(InlineSpan::Text((*part).to_string()));
            } else {
                out.push(make((*part).to_string()));
            }
        }
    }
    Ok(out)
}
