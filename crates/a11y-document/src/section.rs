//! Section extraction from accessibility documents.
//!
//! Each document is split at level-2 headings into a fixed set of named sections. The heading
//! text decides which section the following lines belong to; level-1 headings are dropped.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// The fixed set of sections a document can be split into.
///
/// Variants are declared in priority order, which is also the order used when sections are
/// listed or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    /// Overview notes about the component.
    GeneralNotes,
    /// Gherkin-style acceptance criteria.
    Gherkin,
    /// Condensed testing criteria.
    Condensed,
    /// Full testing criteria.
    Criteria,
    /// Demonstration videos.
    Videos,
    /// Android-specific developer notes.
    AndroidDeveloperNotes,
    /// iOS-specific developer notes.
    IosDeveloperNotes,
    /// Developer notes, and anything under an unrecognized heading.
    DeveloperNotes,
}

impl SectionKey {
    /// All section keys in priority order.
    pub const ALL: [Self; 8] = [
        Self::GeneralNotes,
        Self::Gherkin,
        Self::Condensed,
        Self::Criteria,
        Self::Videos,
        Self::AndroidDeveloperNotes,
        Self::IosDeveloperNotes,
        Self::DeveloperNotes,
    ];

    /// Heading keywords checked in order; the first substring match wins.
    const KEYWORDS: [(&'static str, Self); 7] = [
        ("general notes", Self::GeneralNotes),
        ("gherkin", Self::Gherkin),
        ("condensed", Self::Condensed),
        ("criteria", Self::Criteria),
        ("videos", Self::Videos),
        ("android developer notes", Self::AndroidDeveloperNotes),
        ("ios developer notes", Self::IosDeveloperNotes),
    ];

    /// Returns the camelCase key used in the JSON content file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneralNotes => "generalNotes",
            Self::Gherkin => "gherkin",
            Self::Condensed => "condensed",
            Self::Criteria => "criteria",
            Self::Videos => "videos",
            Self::AndroidDeveloperNotes => "androidDeveloperNotes",
            Self::IosDeveloperNotes => "iosDeveloperNotes",
            Self::DeveloperNotes => "developerNotes",
        }
    }

    /// Returns the display title used when a section is rendered.
    pub fn title(self) -> &'static str {
        match self {
            Self::GeneralNotes => "General Notes",
            Self::Gherkin => "Gherkin Acceptance Criteria",
            Self::Condensed => "Condensed Criteria",
            Self::Criteria => "Criteria",
            Self::Videos => "Videos",
            Self::AndroidDeveloperNotes => "Android Developer Notes",
            Self::IosDeveloperNotes => "iOS Developer Notes",
            Self::DeveloperNotes => "Developer Notes",
        }
    }

    /// Classifies level-2 heading text into a section key.
    ///
    /// Returns `None` when no keyword matches; such headings fall through to
    /// [`SectionKey::DeveloperNotes`] and keep their heading line.
    pub fn classify(heading: &str) -> Option<Self> {
        let heading = heading.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| heading.contains(keyword))
            .map(|&(_, key)| key)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown section key: {s}"))
    }
}

/// Extracted section text for one document.
///
/// A section is present only when its trimmed text is non-empty. Maps deserialized from JSON
/// follow the same rule: blank values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMap {
    /// General notes section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    general_notes: Option<String>,
    /// Gherkin section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    gherkin: Option<String>,
    /// Condensed section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    condensed: Option<String>,
    /// Criteria section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    criteria: Option<String>,
    /// Videos section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    videos: Option<String>,
    /// Android developer notes section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    android_developer_notes: Option<String>,
    /// iOS developer notes section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    ios_developer_notes: Option<String>,
    /// Developer notes section.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_blank")]
    developer_notes: Option<String>,
}

impl SectionMap {
    /// Returns the text of a section, if present.
    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    /// Returns true if the section is present.
    pub fn contains(&self, key: SectionKey) -> bool {
        self.slot(key).is_some()
    }

    /// Stores trimmed text under `key`, replacing any earlier value.
    ///
    /// Blank text is ignored so that the map never holds an empty section.
    pub fn insert(&mut self, key: SectionKey, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            *self.slot_mut(key) = Some(text.to_string());
        }
    }

    /// Iterates over present sections in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        SectionKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|text| (key, text)))
    }

    /// Returns the keys of present sections in priority order.
    pub fn keys(&self) -> Vec<SectionKey> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns the number of present sections.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no section is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the storage slot for a key.
    fn slot(&self, key: SectionKey) -> &Option<String> {
        match key {
            SectionKey::GeneralNotes => &self.general_notes,
            SectionKey::Gherkin => &self.gherkin,
            SectionKey::Condensed => &self.condensed,
            SectionKey::Criteria => &self.criteria,
            SectionKey::Videos => &self.videos,
            SectionKey::AndroidDeveloperNotes => &self.android_developer_notes,
            SectionKey::IosDeveloperNotes => &self.ios_developer_notes,
            SectionKey::DeveloperNotes => &self.developer_notes,
        }
    }

    /// Returns the mutable storage slot for a key.
    fn slot_mut(&mut self, key: SectionKey) -> &mut Option<String> {
        match key {
            SectionKey::GeneralNotes => &mut self.general_notes,
            SectionKey::Gherkin => &mut self.gherkin,
            SectionKey::Condensed => &mut self.condensed,
            SectionKey::Criteria => &mut self.criteria,
            SectionKey::Videos => &mut self.videos,
            SectionKey::AndroidDeveloperNotes => &mut self.android_developer_notes,
            SectionKey::IosDeveloperNotes => &mut self.ios_developer_notes,
            SectionKey::DeveloperNotes => &mut self.developer_notes,
        }
    }
}

/// Deserializes an optional section, treating blank text as absent.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Splits markdown text into sections at level-2 headings.
///
/// Lines before the first level-2 heading belong to developer notes. Level-1 headings are
/// dropped wherever they appear. A heading whose text matches no section keyword starts a
/// developer notes section and is kept as its first line.
pub fn extract_sections(content: &str) -> SectionMap {
    let mut sections = SectionMap::default();
    let mut current = SectionKey::DeveloperNotes;
    let mut buffer: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if let Some(heading) = h2_text(line) {
            sections.insert(current, &buffer.join("\n"));
            buffer.clear();

            match SectionKey::classify(heading) {
                Some(key) => current = key,
                None => {
                    current = SectionKey::DeveloperNotes;
                    buffer.push(line);
                }
            }
        } else if !is_h1(line) {
            buffer.push(line);
        }
    }

    sections.insert(current, &buffer.join("\n"));
    sections
}

/// Returns the heading text if `line` is a level-2 heading.
///
/// A level-2 heading is `##`, at least one whitespace character, then at least one more
/// character. The returned text has leading whitespace removed and may be empty when the
/// heading is whitespace only.
fn h2_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    let mut chars = rest.chars();
    let separator = chars.next()?;
    if !separator.is_whitespace() || chars.as_str().is_empty() {
        return None;
    }
    Some(rest.trim_start())
}

/// Returns true if `line` is a level-1 heading (`#` followed by whitespace).
fn is_h1(line: &str) -> bool {
    line.strip_prefix('#')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gherkin_and_developer_notes() {
        let sections =
            extract_sections("# Title\n## Gherkin\nGiven X\n## Developer Notes\nUse aria-label");

        assert_eq!(sections.get(SectionKey::Gherkin), Some("Given X"));
        assert_eq!(
            sections.get(SectionKey::DeveloperNotes),
            Some("## Developer Notes\nUse aria-label")
        );
        assert!(!sections.contains(SectionKey::GeneralNotes));
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_no_h2_headings_goes_to_developer_notes() {
        let sections = extract_sections("# Button\n\nSome intro.\n\n### Details\nMore text.");

        assert_eq!(sections.keys(), vec![SectionKey::DeveloperNotes]);
        assert_eq!(
            sections.get(SectionKey::DeveloperNotes),
            Some("Some intro.\n\n### Details\nMore text.")
        );
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        assert!(extract_sections("").is_empty());
        assert!(extract_sections("# Only a title\n\n   \n").is_empty());
    }

    #[test]
    fn test_consecutive_headings_skip_empty_section() {
        let sections = extract_sections("## General Notes\n## Criteria\n- item one");

        assert!(!sections.contains(SectionKey::GeneralNotes));
        assert_eq!(sections.get(SectionKey::Criteria), Some("- item one"));
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(
            SectionKey::classify("Gherkin Criteria"),
            Some(SectionKey::Gherkin)
        );
        assert_eq!(
            SectionKey::classify("General Gherkin Notes"),
            Some(SectionKey::Gherkin)
        );
        assert_eq!(
            SectionKey::classify("Condensed Criteria"),
            Some(SectionKey::Condensed)
        );
        assert_eq!(
            SectionKey::classify("iOS Developer Notes"),
            Some(SectionKey::IosDeveloperNotes)
        );
        assert_eq!(
            SectionKey::classify("ANDROID DEVELOPER NOTES"),
            Some(SectionKey::AndroidDeveloperNotes)
        );
        assert_eq!(SectionKey::classify("Developer Notes"), None);
        assert_eq!(SectionKey::classify("Code examples"), None);
    }

    #[test]
    fn test_recognized_heading_line_is_dropped() {
        let sections = extract_sections("## Videos\n[demo](https://example.com)");

        assert_eq!(
            sections.get(SectionKey::Videos),
            Some("[demo](https://example.com)")
        );
    }

    #[test]
    fn test_unrecognized_heading_line_is_kept() {
        let sections = extract_sections("## Code examples\n```html\n<button>\n```");

        assert_eq!(
            sections.get(SectionKey::DeveloperNotes),
            Some("## Code examples\n```html\n<button>\n```")
        );
    }

    #[test]
    fn test_later_section_replaces_earlier() {
        let sections = extract_sections("Preamble text\n## Notes\nSecond block");

        assert_eq!(
            sections.get(SectionKey::DeveloperNotes),
            Some("## Notes\nSecond block")
        );
    }

    #[test]
    fn test_h1_dropped_inside_sections() {
        let sections = extract_sections("## Criteria\n# Stray title\n- one\n#hashtag");

        assert_eq!(sections.get(SectionKey::Criteria), Some("- one\n#hashtag"));
    }

    #[test]
    fn test_deeper_headings_are_body_text() {
        let sections = extract_sections("## Condensed\n### Keyboard\n- Tab focuses");

        assert_eq!(
            sections.get(SectionKey::Condensed),
            Some("### Keyboard\n- Tab focuses")
        );
    }

    #[test]
    fn test_present_sections_are_never_blank() {
        let inputs = [
            "## General Notes\n\n\n## Gherkin\n  \n## Criteria\nreal",
            "\n\n## Videos\n\t\n",
            "text\n## Condensed\n",
        ];
        for input in inputs {
            for (_, text) in extract_sections(input).iter() {
                assert!(!text.trim().is_empty(), "blank section from {input:?}");
                assert_eq!(text, text.trim());
            }
        }
    }

    #[test]
    fn test_h2_requires_whitespace_and_text() {
        assert_eq!(h2_text("## Gherkin"), Some("Gherkin"));
        assert_eq!(h2_text("##\tCriteria"), Some("Criteria"));
        assert_eq!(h2_text("##Gherkin"), None);
        assert_eq!(h2_text("### Sub"), None);
        assert_eq!(h2_text("## "), None);
        assert_eq!(h2_text("##  "), Some(""));
        assert_eq!(h2_text("##"), None);
    }

    #[test]
    fn test_is_h1() {
        assert!(is_h1("# Title"));
        assert!(is_h1("#\tTitle"));
        assert!(!is_h1("## Title"));
        assert!(!is_h1("#hashtag"));
        assert!(!is_h1("#"));
    }

    #[test]
    fn test_section_key_round_trip_names() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>(), Ok(key));
        }
        assert!("bogus".parse::<SectionKey>().is_err());
    }

    #[test]
    fn test_deserialize_drops_blank_sections() {
        let map: SectionMap =
            serde_json::from_str(r#"{"gherkin": "Given X", "criteria": "  ", "videos": null}"#)
                .unwrap();

        assert_eq!(map.keys(), vec![SectionKey::Gherkin]);
    }
}
