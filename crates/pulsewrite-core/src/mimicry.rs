//! Author-mimicry workflow.
//!
//! A staged flow: collect samples, pick style features, analyze, train,
//! generate. Each stage's completion unlocks the next. Analysis and training
//! progress is simulated: the caller drives [`MimicryWorkflow::tick`] from a
//! fixed-interval timer, and generation returns one of two canned paragraphs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::author::{AuthorProfileDraft, WritingSample};

const GENERATED_SAMPLES: [&str; 2] = [
    "Great stories don't start with a product. They start with a problem your reader \
     already feels. Name it plainly, show you understand why it matters, and only then \
     offer the way out. Keep the sentences short. Let the details do the persuading.",
    "Your audience is busy, skeptical and smart. Respect that. Lead with the one insight \
     they can use today, back it with a concrete example, and close with a single clear \
     next step. Anything else is noise they will scroll past.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimicryStage {
    Samples,
    Features,
    Analyze,
    Train,
    Generate,
}

impl std::fmt::Display for MimicryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MimicryStage::Samples => "samples",
            MimicryStage::Features => "features",
            MimicryStage::Analyze => "analyze",
            MimicryStage::Train => "train",
            MimicryStage::Generate => "generate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleFeature {
    Vocabulary,
    SentenceStructure,
    Tone,
    Punctuation,
    Formatting,
    RhetoricalDevices,
}

impl StyleFeature {
    pub const ALL: [StyleFeature; 6] = [
        StyleFeature::Vocabulary,
        StyleFeature::SentenceStructure,
        StyleFeature::Tone,
        StyleFeature::Punctuation,
        StyleFeature::Formatting,
        StyleFeature::RhetoricalDevices,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StyleFeature::Vocabulary => "vocabulary",
            StyleFeature::SentenceStructure => "sentence_structure",
            StyleFeature::Tone => "tone",
            StyleFeature::Punctuation => "punctuation",
            StyleFeature::Formatting => "formatting",
            StyleFeature::RhetoricalDevices => "rhetorical_devices",
        }
    }
}

impl std::str::FromStr for StyleFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        StyleFeature::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| format!("unknown style feature '{s}'"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MimicryError {
    #[error("{stage} is locked until {requires} is complete")]
    StageLocked {
        stage: MimicryStage,
        requires: MimicryStage,
    },

    #[error("writing sample is empty")]
    EmptySample,

    #[error("profile name is required")]
    MissingProfileName,

    #[error("nothing has been generated yet")]
    NothingGenerated,

    #[error("analysis must finish before the profile can be saved")]
    AnalysisIncomplete,
}

/// Progress of a simulated stage, in whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageProgress {
    pub percent: u8,
    pub running: bool,
}

impl StageProgress {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.percent >= 100
    }

    fn start(&mut self) {
        self.percent = 0;
        self.running = true;
    }

    fn advance(&mut self, step: u8) {
        self.percent = self.percent.saturating_add(step).min(100);
        if self.percent >= 100 {
            self.running = false;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MimicryWorkflow {
    samples: Vec<WritingSample>,
    features: BTreeSet<StyleFeature>,
    analysis: StageProgress,
    training: StageProgress,
    generated: Option<usize>,
    pub profile_name: String,
    pub profile_description: String,
}

impl MimicryWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample. Changing the inputs invalidates analysis and everything after it.
    ///
    /// # Errors
    ///
    /// Returns [`MimicryError::EmptySample`] for whitespace-only text.
    pub fn add_sample(&mut self, sample: WritingSample) -> Result<(), MimicryError> {
        if sample.is_blank() {
            return Err(MimicryError::EmptySample);
        }
        self.samples.push(sample);
        self.reset_from_analysis();
        Ok(())
    }

    pub fn remove_sample(&mut self, id: &str) -> bool {
        let before = self.samples.len();
        self.samples.retain(|s| s.id != id);
        let removed = self.samples.len() != before;
        if removed {
            self.reset_from_analysis();
        }
        removed
    }

    /// Flip a style feature; returns whether it is now selected.
    pub fn toggle_feature(&mut self, feature: StyleFeature) -> bool {
        let selected = if self.features.remove(&feature) {
            false
        } else {
            self.features.insert(feature);
            true
        };
        self.reset_from_analysis();
        selected
    }

    #[must_use]
    pub fn samples(&self) -> &[WritingSample] {
        &self.samples
    }

    #[must_use]
    pub fn features(&self) -> &BTreeSet<StyleFeature> {
        &self.features
    }

    #[must_use]
    pub fn analysis(&self) -> StageProgress {
        self.analysis
    }

    #[must_use]
    pub fn training(&self) -> StageProgress {
        self.training
    }

    #[must_use]
    pub fn is_stage_complete(&self, stage: MimicryStage) -> bool {
        match stage {
            MimicryStage::Samples => self.samples.iter().any(|s| !s.is_blank()),
            MimicryStage::Features => !self.features.is_empty(),
            MimicryStage::Analyze => self.analysis.is_complete(),
            MimicryStage::Train => self.training.is_complete(),
            MimicryStage::Generate => self.generated.is_some(),
        }
    }

    /// The first stage that is not yet complete.
    #[must_use]
    pub fn current_stage(&self) -> MimicryStage {
        [
            MimicryStage::Samples,
            MimicryStage::Features,
            MimicryStage::Analyze,
            MimicryStage::Train,
        ]
        .into_iter()
        .find(|s| !self.is_stage_complete(*s))
        .unwrap_or(MimicryStage::Generate)
    }

    fn require(&self, stage: MimicryStage, requires: MimicryStage) -> Result<(), MimicryError> {
        if self.is_stage_complete(requires) {
            Ok(())
        } else {
            Err(MimicryError::StageLocked { stage, requires })
        }
    }

    /// # Errors
    ///
    /// Returns [`MimicryError::StageLocked`] until samples and features are complete.
    pub fn start_analysis(&mut self) -> Result<(), MimicryError> {
        self.require(MimicryStage::Analyze, MimicryStage::Samples)?;
        self.require(MimicryStage::Analyze, MimicryStage::Features)?;
        self.reset_from_analysis();
        self.analysis.start();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`MimicryError::StageLocked`] until analysis is complete.
    pub fn start_training(&mut self) -> Result<(), MimicryError> {
        self.require(MimicryStage::Train, MimicryStage::Analyze)?;
        self.training = StageProgress::default();
        self.generated = None;
        self.training.start();
        Ok(())
    }

    /// Advance whichever simulated stage is running by `step` percent.
    ///
    /// Returns the running stage and its new percentage, or `None` when no
    /// stage is running.
    pub fn tick(&mut self, step: u8) -> Option<(MimicryStage, u8)> {
        if self.analysis.running {
            self.analysis.advance(step);
            Some((MimicryStage::Analyze, self.analysis.percent))
        } else if self.training.running {
            self.training.advance(step);
            Some((MimicryStage::Train, self.training.percent))
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// Returns [`MimicryError::StageLocked`] until training is complete.
    pub fn generate(&mut self) -> Result<&'static str, MimicryError> {
        self.require(MimicryStage::Generate, MimicryStage::Train)?;
        self.generated = Some(0);
        Ok(GENERATED_SAMPLES[0])
    }

    /// Swap to the other canned paragraph.
    ///
    /// # Errors
    ///
    /// Returns [`MimicryError::NothingGenerated`] before the first [`Self::generate`].
    pub fn regenerate(&mut self) -> Result<&'static str, MimicryError> {
        let current = self.generated.ok_or(MimicryError::NothingGenerated)?;
        let next = (current + 1) % GENERATED_SAMPLES.len();
        self.generated = Some(next);
        Ok(GENERATED_SAMPLES[next])
    }

    #[must_use]
    pub fn generated_text(&self) -> Option<&'static str> {
        self.generated.map(|i| GENERATED_SAMPLES[i])
    }

    /// Save is disabled while the trimmed name is empty, and otherwise
    /// requires a completed analysis.
    #[must_use]
    pub fn can_save_profile(&self) -> bool {
        !self.profile_name.trim().is_empty() && self.analysis.is_complete()
    }

    /// Bundle the samples into the `createAuthorPersonality` payload.
    ///
    /// # Errors
    ///
    /// Returns [`MimicryError::MissingProfileName`] for a blank name and
    /// [`MimicryError::AnalysisIncomplete`] when analysis has not completed.
    pub fn profile_draft(&self) -> Result<AuthorProfileDraft, MimicryError> {
        if self.profile_name.trim().is_empty() {
            return Err(MimicryError::MissingProfileName);
        }
        if !self.analysis.is_complete() {
            return Err(MimicryError::AnalysisIncomplete);
        }
        Ok(AuthorProfileDraft {
            name: self.profile_name.trim().to_string(),
            description: self.profile_description.trim().to_string(),
            samples: self
                .samples
                .iter()
                .filter(|s| !s.is_blank())
                .map(|s| s.text.clone())
                .collect(),
            features: self.features.iter().map(|f| f.as_str().to_string()).collect(),
        })
    }

    fn reset_from_analysis(&mut self) {
        self.analysis = StageProgress::default();
        self.training = StageProgress::default();
        self.generated = None;
    }
}

#[cfg(test)]
#[path = "mimicry_test.rs"]
mod tests;
