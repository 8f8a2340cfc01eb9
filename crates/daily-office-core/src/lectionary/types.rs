//! Reading references and the readings appointed for a session.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A scripture passage.
///
/// A missing `start_verse` means the start of `start_chapter`; a missing
/// `end_verse` means the end of `end_chapter`. Verse counts are not checked
/// here; the text loader clamps against the real chapter length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRef {
    pub book: String,
    pub start_chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_verse: Option<u32>,
    pub end_chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_verse: Option<u32>,
}

impl ReadingRef {
    /// A whole chapter.
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            start_chapter: chapter,
            start_verse: None,
            end_chapter: chapter,
            end_verse: None,
        }
    }

    /// A verse range within one chapter.
    pub fn verses(book: impl Into<String>, chapter: u32, start: u32, end: u32) -> Self {
        Self {
            book: book.into(),
            start_chapter: chapter,
            start_verse: Some(start),
            end_chapter: chapter,
            end_verse: Some(end),
        }
    }

    /// Last verse to read, given the real length of `end_chapter`.
    pub fn clamped_end_verse(&self, verses_in_end_chapter: u32) -> u32 {
        self.end_verse
            .map_or(verses_in_end_chapter, |v| v.min(verses_in_end_chapter))
    }
}

impl fmt::Display for ReadingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.start_chapter)?;
        if let Some(v) = self.start_verse {
            write!(f, ":{v}")?;
        }
        match (self.end_chapter == self.start_chapter, self.end_verse) {
            (true, Some(v)) if self.start_verse.is_some() => write!(f, "-{v}"),
            (true, Some(v)) => write!(f, ":1-{v}"),
            (true, None) => Ok(()),
            (false, Some(v)) => write!(f, "-{}:{v}", self.end_chapter),
            (false, None) => write!(f, "-{}", self.end_chapter),
        }
    }
}

/// First and second lessons for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReadings {
    #[serde(default, deserialize_with = "one_or_many")]
    pub first: Vec<ReadingRef>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub second: Vec<ReadingRef>,
}

impl DailyReadings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

/// A lesson that may offer an alternative passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingChoice {
    #[serde(deserialize_with = "one_or_many")]
    pub primary: Vec<ReadingRef>,
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub alternative: Option<Vec<ReadingRef>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(ReadingRef),
    Many(Vec<ReadingRef>),
}

impl From<OneOrMany> for Vec<ReadingRef> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(r) => vec![r],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Accept a single reference or a list of them.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<ReadingRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?
        .map(Vec::from)
        .unwrap_or_default())
}

fn optional_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<ReadingRef>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(Vec::from))
}
