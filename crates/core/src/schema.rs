//! Prompt specification schema: the configuration root, its section
//! records, and the canonical default instance.
//!
//! Section records and record lists are held behind [`Arc`] so that
//! cloning a snapshot is a handful of reference bumps and an update only
//! copies the branch it touches (see `update`). The serialized form is
//! snake_case JSON; enum fields serialize to their wire strings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ElementId;

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

/// Generation mode for the downstream image model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    #[default]
    Standard,
    Thinking,
}

/// All valid generation mode wire values.
pub const VALID_GENERATION_MODES: &[&str] = &["standard", "thinking"];

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Thinking => "thinking",
        }
    }

    /// Parse a wire string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "standard" => Ok(Self::Standard),
            "thinking" => Ok(Self::Thinking),
            _ => Err(CoreError::Validation(format!(
                "Invalid generation_mode '{s}'. Must be one of: {}",
                VALID_GENERATION_MODES.join(", ")
            ))),
        }
    }
}

/// Output resolution tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

/// All valid resolution wire values.
pub const VALID_RESOLUTIONS: &[&str] = &["1K", "2K", "4K"];

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }

    /// Parse a wire string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "1K" => Ok(Self::OneK),
            "2K" => Ok(Self::TwoK),
            "4K" => Ok(Self::FourK),
            _ => Err(CoreError::Validation(format!(
                "Invalid resolution '{s}'. Must be one of: {}",
                VALID_RESOLUTIONS.join(", ")
            ))),
        }
    }
}

/// Output aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "custom")]
    Custom,
}

/// All valid aspect ratio wire values.
pub const VALID_ASPECT_RATIOS: &[&str] = &["1:1", "16:9", "9:16", "custom"];

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Custom => "custom",
        }
    }

    /// Parse a wire string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "1:1" => Ok(Self::Square),
            "16:9" => Ok(Self::Landscape),
            "9:16" => Ok(Self::Portrait),
            "custom" => Ok(Self::Custom),
            _ => Err(CoreError::Validation(format!(
                "Invalid aspect_ratio '{s}'. Must be one of: {}",
                VALID_ASPECT_RATIOS.join(", ")
            ))),
        }
    }
}

/// Speed/quality trade-off for generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPriority {
    #[default]
    Balanced,
    Speed,
    Quality,
}

/// All valid quality priority wire values.
pub const VALID_QUALITY_PRIORITIES: &[&str] = &["balanced", "speed", "quality"];

impl QualityPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Speed => "speed",
            Self::Quality => "quality",
        }
    }

    /// Parse a wire string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            "quality" => Ok(Self::Quality),
            _ => Err(CoreError::Validation(format!(
                "Invalid quality_priority '{s}'. Must be one of: {}",
                VALID_QUALITY_PRIORITIES.join(", ")
            ))),
        }
    }
}

/// Accuracy priority for grounded (fact-checked) generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyPriority {
    High,
    #[default]
    Medium,
}

/// All valid accuracy priority wire values.
pub const VALID_ACCURACY_PRIORITIES: &[&str] = &["high", "medium"];

impl AccuracyPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    /// Parse a wire string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            _ => Err(CoreError::Validation(format!(
                "Invalid accuracy_priority '{s}'. Must be one of: {}",
                VALID_ACCURACY_PRIORITIES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Open enum: reference image purpose
// ---------------------------------------------------------------------------

/// Purpose of a reference image.
///
/// Open enum: the four known values are modelled as variants, and any
/// other string is carried through verbatim in [`ReferencePurpose::Other`].
/// Unknown values are never coerced to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferencePurpose {
    #[serde(rename = "style reference")]
    Style,
    #[serde(rename = "composition reference")]
    Composition,
    #[serde(rename = "color reference")]
    Color,
    #[serde(rename = "character reference")]
    Character,
    #[serde(untagged)]
    Other(String),
}

/// The known reference purpose wire values.
pub const KNOWN_REFERENCE_PURPOSES: &[&str] = &[
    "style reference",
    "composition reference",
    "color reference",
    "character reference",
];

impl ReferencePurpose {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Style => "style reference",
            Self::Composition => "composition reference",
            Self::Color => "color reference",
            Self::Character => "character reference",
            Self::Other(s) => s,
        }
    }

    /// Parse a wire string. Total: unknown values become [`Self::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "style reference" => Self::Style,
            "composition reference" => Self::Composition,
            "color reference" => Self::Color,
            "character reference" => Self::Character,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl Default for ReferencePurpose {
    fn default() -> Self {
        Self::Style
    }
}

// ---------------------------------------------------------------------------
// Section records
// ---------------------------------------------------------------------------

/// Resolution, aspect ratio and quality trade-off for the output image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpecifications {
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
    pub quality_priority: QualityPriority,
}

/// What the image depicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub primary_subject: String,
    pub environment: String,
    pub atmosphere: String,
    pub style: String,
    pub time_of_day: String,
}

/// Virtual camera parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraControls {
    pub angle: String,
    pub focal_length: String,
    pub depth_of_field: String,
    pub composition: String,
}

/// The main light source, nested one level below [`LightingSetup`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryLight {
    #[serde(rename = "type")]
    pub light_type: String,
    pub direction: String,
    pub intensity: String,
}

/// Scene lighting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightingSetup {
    pub primary_light: PrimaryLight,
    pub shadows: String,
    pub color_temperature: String,
    pub special_effects: String,
}

/// Tone, mood and palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorGrading {
    pub overall_tone: String,
    pub color_palette: Vec<String>,
    pub mood: String,
}

/// A text overlay placed on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text_content: String,
    pub position: String,
    pub font_style: String,
    pub size: String,
    pub color: String,
    pub effects: String,
    pub language: String,
}

impl Default for TextElement {
    fn default() -> Self {
        Self {
            text_content: String::new(),
            position: String::new(),
            font_style: String::new(),
            size: String::new(),
            color: String::new(),
            effects: String::new(),
            language: "English".to_string(),
        }
    }
}

/// A reference image the model should borrow from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Display label assigned at creation time ("length + 1"). Not a
    /// stable key: removal and re-append can reuse a value.
    pub image_id: ElementId,
    pub purpose: ReferencePurpose,
    pub extract_elements: Vec<String>,
    pub apply_to: String,
    pub transfer_intensity: String,
}

impl ReferenceImage {
    /// Fully-populated default record for the list factory.
    pub fn new(image_id: ElementId) -> Self {
        Self {
            image_id,
            purpose: ReferencePurpose::default(),
            extract_elements: Vec::new(),
            apply_to: String::new(),
            transfer_intensity: "100%".to_string(),
        }
    }
}

/// A character appearing in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display label assigned at creation time ("length + 1"). Not a
    /// stable key: removal and re-append can reuse a value.
    pub character_id: ElementId,
    pub detailed_description: String,
    pub clothing: String,
    pub pose: String,
    pub position_in_scene: String,
    pub consistency_reference: String,
}

impl Character {
    /// Fully-populated default record for the list factory.
    pub fn new(character_id: ElementId) -> Self {
        Self {
            character_id,
            detailed_description: String::new(),
            clothing: String::new(),
            pose: String::new(),
            position_in_scene: String::new(),
            consistency_reference: String::new(),
        }
    }
}

/// Factual grounding (search-backed generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grounding {
    pub enabled: bool,
    pub search_queries: Vec<String>,
    pub data_requirements: Vec<String>,
    pub accuracy_priority: AccuracyPriority,
}

/// Artistic direction and negative constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConstraints {
    pub artistic_style: String,
    pub inspiration: String,
    pub must_avoid: Vec<String>,
}

/// Delivery constraints (where and how the image will be used).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalRequirements {
    pub intended_use: String,
    pub safe_zones: String,
    pub brand_guidelines: Vec<String>,
}

/// Series-consistency constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyRequirements {
    pub maintain_across_series: bool,
    pub locked_elements: Vec<String>,
    pub variable_elements: Vec<String>,
}

// ---------------------------------------------------------------------------
// Configuration root
// ---------------------------------------------------------------------------

/// The configuration root: one fully-populated instance per editing
/// session.
///
/// Every field has a defined default, so a fresh instance is complete and
/// serializable as-is. Sections and record lists sit behind [`Arc`]:
/// cloning a `PromptSpec` is cheap, and two snapshots share every branch
/// that no update has touched. Consumers must never mutate through a
/// shared snapshot; all mutation goes through the update channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub generation_mode: GenerationMode,
    pub output_specifications: OutputSpecifications,
    pub scene_description: Arc<SceneDescription>,
    pub camera_controls: Arc<CameraControls>,
    pub lighting_setup: Arc<LightingSetup>,
    pub color_grading: Arc<ColorGrading>,
    pub text_elements: Arc<Vec<TextElement>>,
    pub reference_images: Arc<Vec<ReferenceImage>>,
    pub characters: Arc<Vec<Character>>,
    pub grounding: Arc<Grounding>,
    pub style_constraints: Arc<StyleConstraints>,
    pub technical_requirements: Arc<TechnicalRequirements>,
    pub consistency_requirements: Arc<ConsistencyRequirements>,
}

impl PromptSpec {
    /// The canonical default instance (session start / reset target).
    pub fn new() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- defaults --

    #[test]
    fn default_root_is_fully_populated() {
        let spec = PromptSpec::new();
        assert_eq!(spec.generation_mode, GenerationMode::Standard);
        assert_eq!(spec.output_specifications.resolution, Resolution::OneK);
        assert_eq!(spec.output_specifications.aspect_ratio, AspectRatio::Square);
        assert_eq!(
            spec.output_specifications.quality_priority,
            QualityPriority::Balanced
        );
        assert!(spec.scene_description.primary_subject.is_empty());
        assert!(spec.color_grading.color_palette.is_empty());
        assert!(spec.characters.is_empty());
        assert!(!spec.grounding.enabled);
        assert_eq!(spec.grounding.accuracy_priority, AccuracyPriority::Medium);
        assert!(!spec.consistency_requirements.maintain_across_series);
    }

    #[test]
    fn text_element_defaults_to_english() {
        let el = TextElement::default();
        assert_eq!(el.language, "English");
        assert!(el.text_content.is_empty());
    }

    #[test]
    fn reference_image_factory_defaults() {
        let image = ReferenceImage::new(3);
        assert_eq!(image.image_id, 3);
        assert_eq!(image.purpose, ReferencePurpose::Style);
        assert_eq!(image.transfer_intensity, "100%");
        assert!(image.extract_elements.is_empty());
    }

    #[test]
    fn character_factory_defaults() {
        let ch = Character::new(1);
        assert_eq!(ch.character_id, 1);
        assert!(ch.detailed_description.is_empty());
    }

    // -- enum wire strings --

    #[test]
    fn closed_enums_round_trip_wire_values() {
        for s in VALID_GENERATION_MODES {
            assert_eq!(GenerationMode::parse(s).unwrap().as_str(), *s);
        }
        for s in VALID_RESOLUTIONS {
            assert_eq!(Resolution::parse(s).unwrap().as_str(), *s);
        }
        for s in VALID_ASPECT_RATIOS {
            assert_eq!(AspectRatio::parse(s).unwrap().as_str(), *s);
        }
        for s in VALID_QUALITY_PRIORITIES {
            assert_eq!(QualityPriority::parse(s).unwrap().as_str(), *s);
        }
        for s in VALID_ACCURACY_PRIORITIES {
            assert_eq!(AccuracyPriority::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn closed_enum_rejects_unknown_value() {
        let err = Resolution::parse("8K").unwrap_err();
        assert!(err.to_string().contains("Invalid resolution"));
        assert!(err.to_string().contains("1K, 2K, 4K"));
    }

    #[test]
    fn parse_failures_are_validation_errors() {
        use assert_matches::assert_matches;

        assert_matches!(AspectRatio::parse("4:3"), Err(CoreError::Validation(_)));
        assert_matches!(GenerationMode::parse(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn enum_serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_value(AspectRatio::Landscape).unwrap(),
            serde_json::json!("16:9")
        );
        assert_eq!(
            serde_json::to_value(Resolution::FourK).unwrap(),
            serde_json::json!("4K")
        );
        assert_eq!(
            serde_json::to_value(GenerationMode::Thinking).unwrap(),
            serde_json::json!("thinking")
        );
    }

    // -- open enum --

    #[test]
    fn reference_purpose_parses_known_values() {
        for s in KNOWN_REFERENCE_PURPOSES {
            let purpose = ReferencePurpose::parse(s);
            assert_eq!(purpose.as_str(), *s);
            assert!(!matches!(purpose, ReferencePurpose::Other(_)));
        }
    }

    #[test]
    fn reference_purpose_passes_unknown_strings_through() {
        let purpose = ReferencePurpose::parse("texture reference");
        assert_eq!(purpose, ReferencePurpose::Other("texture reference".into()));
        assert_eq!(purpose.as_str(), "texture reference");
    }

    #[test]
    fn reference_purpose_serde_round_trips_unknown() {
        let purpose = ReferencePurpose::Other("pose reference".into());
        let json = serde_json::to_value(&purpose).unwrap();
        assert_eq!(json, serde_json::json!("pose reference"));
        let back: ReferencePurpose = serde_json::from_value(json).unwrap();
        assert_eq!(back, purpose);
    }

    #[test]
    fn reference_purpose_serde_round_trips_known() {
        let json = serde_json::to_value(ReferencePurpose::Composition).unwrap();
        assert_eq!(json, serde_json::json!("composition reference"));
        let back: ReferencePurpose = serde_json::from_value(json).unwrap();
        assert_eq!(back, ReferencePurpose::Composition);
    }

    // -- root serde shape --

    #[test]
    fn root_serializes_with_snake_case_keys() {
        let spec = PromptSpec::new();
        let value = serde_json::to_value(&spec).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("generation_mode"));
        assert!(obj.contains_key("output_specifications"));
        assert!(obj.contains_key("consistency_requirements"));
        assert_eq!(value["lighting_setup"]["primary_light"]["type"], "");
        assert_eq!(value["grounding"]["accuracy_priority"], "medium");
    }

    #[test]
    fn root_round_trips_through_json() {
        let mut spec = PromptSpec::new();
        spec.generation_mode = GenerationMode::Thinking;
        let json = serde_json::to_string(&spec).unwrap();
        let back: PromptSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
