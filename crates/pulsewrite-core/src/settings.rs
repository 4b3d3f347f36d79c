//! Advanced campaign settings.
//!
//! Every group is a flat record of toggles and sliders. All fields carry
//! `#[serde(default)]` so a partially stored group is completed from the
//! defaults on load instead of being reset wholesale.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Crawl depth and page limits for URL/keyword extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionSettings {
    /// Link depth to follow from each seed, 1 through 5.
    pub depth: u8,
    pub max_pages: u32,
    pub include_comments: bool,
    pub include_images: bool,
    pub language: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            depth: 2,
            max_pages: 10,
            include_comments: true,
            include_images: false,
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreprocessingSettings {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub remove_punctuation: bool,
    pub remove_numbers: bool,
    pub lemmatize: bool,
}

impl Default for PreprocessingSettings {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            remove_punctuation: true,
            remove_numbers: false,
            lemmatize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntitySettings {
    pub extract_people: bool,
    pub extract_organizations: bool,
    pub extract_locations: bool,
    pub extract_products: bool,
    /// Minimum recognizer confidence in `[0.0, 1.0]`.
    pub min_confidence: f32,
}

impl Default for EntitySettings {
    fn default() -> Self {
        Self {
            extract_people: true,
            extract_organizations: true,
            extract_locations: true,
            extract_products: false,
            min_confidence: 0.6,
        }
    }
}

/// Topic-modeling backend requested from the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTool {
    #[default]
    Lda,
    Nmf,
    Bertopic,
}

impl std::fmt::Display for TopicTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicTool::Lda => write!(f, "lda"),
            TopicTool::Nmf => write!(f, "nmf"),
            TopicTool::Bertopic => write!(f, "bertopic"),
        }
    }
}

impl std::str::FromStr for TopicTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lda" => Ok(TopicTool::Lda),
            "nmf" => Ok(TopicTool::Nmf),
            "bertopic" => Ok(TopicTool::Bertopic),
            other => Err(format!("unknown topic tool '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelingSettings {
    pub topic_tool: TopicTool,
    pub num_topics: u32,
    pub min_topic_size: u32,
    pub iterations: u32,
}

impl Default for ModelingSettings {
    fn default() -> Self {
        Self {
            topic_tool: TopicTool::Lda,
            num_topics: 5,
            min_topic_size: 3,
            iterations: 100,
        }
    }
}

/// The four settings groups a campaign always carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    pub extraction: ExtractionSettings,
    pub preprocessing: PreprocessingSettings,
    pub entity: EntitySettings,
    pub modeling: ModelingSettings,
}

impl AdvancedSettings {
    /// Check slider values against the ranges the settings panel allows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSetting`] naming the first field
    /// that is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.extraction.depth) {
            return Err(ValidationError::InvalidSetting {
                field: "depth",
                reason: format!("{} is outside 1..=5", self.extraction.depth),
            });
        }
        if self.extraction.max_pages == 0 {
            return Err(ValidationError::InvalidSetting {
                field: "max_pages",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(1..=50).contains(&self.modeling.num_topics) {
            return Err(ValidationError::InvalidSetting {
                field: "num_topics",
                reason: format!("{} is outside 1..=50", self.modeling.num_topics),
            });
        }
        if !(0.0..=1.0).contains(&self.entity.min_confidence) {
            return Err(ValidationError::InvalidSetting {
                field: "min_confidence",
                reason: format!("{} is outside 0.0..=1.0", self.entity.min_confidence),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AdvancedSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_group_is_completed_from_defaults() {
        let json = r#"{"preprocessing": {"lowercase": false}, "modeling": {"numTopics": 8}}"#;
        let settings: AdvancedSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.preprocessing.lowercase);
        assert!(settings.preprocessing.remove_stopwords);
        assert_eq!(settings.modeling.num_topics, 8);
        assert_eq!(settings.modeling.topic_tool, TopicTool::Lda);
        assert_eq!(settings.extraction, ExtractionSettings::default());
    }

    #[test]
    fn stored_values_are_not_overwritten_on_load() {
        let json = r#"{"preprocessing": {"lowercase": false, "removeStopwords": false,
            "removePunctuation": false, "removeNumbers": true, "lemmatize": false}}"#;
        let settings: AdvancedSettings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.preprocessing,
            PreprocessingSettings {
                lowercase: false,
                remove_stopwords: false,
                remove_punctuation: false,
                remove_numbers: true,
                lemmatize: false,
            }
        );
    }

    #[test]
    fn rejects_depth_out_of_range() {
        let mut settings = AdvancedSettings::default();
        settings.extraction.depth = 9;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSetting { field: "depth", .. }));
    }

    #[test]
    fn rejects_zero_topics() {
        let mut settings = AdvancedSettings::default();
        settings.modeling.num_topics = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_confidence_above_one() {
        let mut settings = AdvancedSettings::default();
        settings.entity.min_confidence = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn topic_tool_parses_case_insensitively() {
        assert_eq!("BERTopic".parse::<TopicTool>().unwrap(), TopicTool::Bertopic);
        assert!("kmeans".parse::<TopicTool>().is_err());
    }
}
