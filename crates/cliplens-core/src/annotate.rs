use std::sync::LazyLock;

use cliplens_types::LinkSpan;
use regex::{Matches, Regex};
use url::Url;

/// Combined link grammar, two branches with leftmost-first precedence:
///
/// 1. Clean URL: optional scheme or `www.` prefix, dot-separated hostname
///    labels, alphabetic top-level label of two or more characters, optional
///    `/`-led path.
/// 2. OCR-damaged URL: same shape, but the dot before the top-level label may
///    carry stray spaces/tabs on either side. Without whitespace as a hard
///    boundary this would fire on ordinary sentence punctuation, so the
///    top-level label is restricted to a closed allow-list and must end at a
///    word boundary.
const LINK_PATTERN: &str = r"(?i)(?:https?://|www\.)?(?:[a-z0-9][a-z0-9-]*\.)+[a-z]{2,}(?:/\S*)?|(?:https?://|www\.)?(?:[a-z0-9][a-z0-9-]*\.)*[a-z0-9][a-z0-9-]*[ \t]*\.[ \t]*(?:com|org|net|edu|gov|app|dev|io|ai|co|ru|eu|es|cn|uz)\b(?:/\S*)?";

static LINK_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(LINK_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        // Link detection is best-effort; a broken pattern must never keep
        // the raw text from being displayed.
        tracing::error!("link pattern failed to compile, link detection disabled: {e}");
        None
    }
});

/// Scan `text` for URL-shaped substrings.
///
/// Returns a lazy iterator of [`LinkSpan`]s in ascending `start` order.
/// Matches are non-overlapping, at most one per starting offset. Candidates
/// whose normalized form does not parse as an absolute URL are dropped.
pub fn annotate(text: &str) -> LinkSpans<'_> {
    LinkSpans {
        matches: LINK_RE.as_ref().map(|re| re.find_iter(text)),
    }
}

pub struct LinkSpans<'t> {
    matches: Option<Matches<'static, 't>>,
}

impl<'t> Iterator for LinkSpans<'t> {
    type Item = LinkSpan;

    fn next(&mut self) -> Option<LinkSpan> {
        let matches = self.matches.as_mut()?;
        for m in matches.by_ref() {
            match normalize(m.as_str()) {
                Some(url) => {
                    return Some(LinkSpan {
                        start: m.start(),
                        end: m.end(),
                        url,
                    });
                }
                None => continue,
            }
        }
        None
    }
}

/// Strip whitespace the OCR pass may have inserted, ensure a scheme is
/// present, and validate the result. `None` means the candidate is discarded.
fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let candidate = if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        cleaned
    } else {
        format!("https://{cleaned}")
    };

    match Url::parse(&candidate) {
        Ok(_) => Some(candidate),
        Err(e) => {
            tracing::debug!("dropping malformed link candidate {candidate:?}: {e}");
            None
        }
    }
}
