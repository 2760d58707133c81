//! Reference identifiers.

use std::fmt;

use url::Url;

/// An absolute identifier with a scheme, e.g. `https://example.org/notes/1`.
///
/// The original text is kept verbatim so a parse/serialize round trip never
/// normalizes it; [`Iri::url`] gives the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    /// Parses `s`, succeeding only when it carries a scheme.
    pub fn parse(s: &str) -> Option<Iri> {
        let url = Url::parse(s).ok()?;
        if url.scheme().is_empty() {
            return None;
        }
        Some(Iri {
            raw: s.to_string(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Iri {
            raw: url.to_string(),
            url,
        }
    }
}
