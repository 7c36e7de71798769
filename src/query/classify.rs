//! Decorative icon class for a record.

use crate::catalog::ToolRecord;

/// Semantic class used to pick a record's glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    Image,
    Video,
    Audio,
    Writing,
    Dev,
    Productivity,
    Default,
}

/// Keyword table, evaluated top to bottom.
const RULES: &[(IconClass, &[&str])] = &[
    (IconClass::Image, &["image", "midjourney", "dalle"]),
    (IconClass::Video, &["video", "runway"]),
    (IconClass::Audio, &["audio", "music", "sound"]),
    (IconClass::Writing, &["writing", "write", "text", "gpt", "gemini"]),
    (IconClass::Dev, &["dev", "code", "copilot"]),
    (IconClass::Productivity, &["productivity", "product"]),
];

impl IconClass {
    /// Classify a record by its lowercased category and name.
    pub fn of(record: &ToolRecord) -> Self {
        Self::classify(record.category.as_deref(), &record.name)
    }

    /// Classify from raw category and name.
    pub fn classify(category: Option<&str>, name: &str) -> Self {
        let category = category.unwrap_or_default().to_lowercase();
        let name = name.to_lowercase();

        RULES
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|kw| category.contains(kw) || name.contains(kw))
            })
            .map(|(class, _)| *class)
            .unwrap_or(IconClass::Default)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            IconClass::Image => "📷",
            IconClass::Video => "🎬",
            IconClass::Audio => "🔊",
            IconClass::Writing => "✒",
            IconClass::Dev => "⌨",
            IconClass::Productivity => "⚡",
            IconClass::Default => "📦",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IconClass::Image => "image",
            IconClass::Video => "video",
            IconClass::Audio => "audio",
            IconClass::Writing => "writing",
            IconClass::Dev => "dev",
            IconClass::Productivity => "productivity",
            IconClass::Default => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_category() {
        assert_eq!(IconClass::classify(Some("Image Generation"), "X"), IconClass::Image);
        assert_eq!(IconClass::classify(Some("Video"), "X"), IconClass::Video);
        assert_eq!(IconClass::classify(Some("Sound Design"), "X"), IconClass::Audio);
        assert_eq!(IconClass::classify(Some("Writing"), "X"), IconClass::Writing);
        assert_eq!(IconClass::classify(Some("Developer Tools"), "X"), IconClass::Dev);
        assert_eq!(IconClass::classify(Some("Productivity"), "X"), IconClass::Productivity);
    }

    #[test]
    fn test_classify_by_name() {
        assert_eq!(IconClass::classify(None, "Midjourney"), IconClass::Image);
        assert_eq!(IconClass::classify(None, "Runway"), IconClass::Video);
        assert_eq!(IconClass::classify(None, "ChatGPT"), IconClass::Writing);
        assert_eq!(IconClass::classify(None, "GitHub Copilot"), IconClass::Dev);
    }

    #[test]
    fn test_first_matching_class_wins() {
        // "Text to Video" hits both video and writing; video is checked first
        assert_eq!(IconClass::classify(Some("Text to Video"), "X"), IconClass::Video);
        // Name can win over a later category match
        assert_eq!(IconClass::classify(Some("Code"), "Midjourney"), IconClass::Image);
    }

    #[test]
    fn test_classify_default() {
        assert_eq!(IconClass::classify(None, "Notion"), IconClass::Default);
        assert_eq!(IconClass::classify(Some(""), "Zapier"), IconClass::Default);
    }

    #[test]
    fn test_classify_record() {
        let record = ToolRecord::new(1, "Suno").with_category("Music");
        assert_eq!(IconClass::of(&record), IconClass::Audio);
        assert_eq!(IconClass::of(&record).label(), "audio");
    }
}
