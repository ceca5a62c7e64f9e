//! Field update engine: typed field paths and the reducer that maps
//! (snapshot, intent) to the next snapshot.
//!
//! Paths are enums rather than strings, so an edit can only ever address
//! a field that exists in the schema; the "invalid path" failure mode is
//! unrepresentable. Closed-enum leaves take their enum value, text
//! leaves take a `String`, booleans take a `bool`.
//!
//! [`reduce`] never mutates its input. It clones the root (a handful of
//! `Arc` bumps) and rewrites only the branch the intent addresses via
//! [`Arc::make_mut`], so the old snapshot stays valid and the two roots
//! share every untouched section.

use std::sync::Arc;

use crate::list;
use crate::schema::{
    AccuracyPriority, AspectRatio, Character, GenerationMode, PromptSpec, QualityPriority,
    ReferenceImage, Resolution, TextElement,
};
use crate::types::ElementId;

// ---------------------------------------------------------------------------
// Field paths
// ---------------------------------------------------------------------------

/// Free-text keys under `scene_description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneField {
    PrimarySubject,
    Environment,
    Atmosphere,
    Style,
    TimeOfDay,
}

/// Free-text keys under `camera_controls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraField {
    Angle,
    FocalLength,
    DepthOfField,
    Composition,
}

/// Free-text keys under `lighting_setup.primary_light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryLightField {
    Type,
    Direction,
    Intensity,
}

/// Free-text keys directly under `lighting_setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingField {
    Shadows,
    ColorTemperature,
    SpecialEffects,
}

/// Free-text keys under `color_grading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGradingField {
    OverallTone,
    Mood,
}

/// Free-text keys under `style_constraints`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    ArtisticStyle,
    Inspiration,
}

/// Free-text keys under `technical_requirements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechnicalField {
    IntendedUse,
    SafeZones,
}

/// The text tag lists of the schema (ordered sequences of trimmed,
/// non-blank strings). `extract_elements` is not here: it lives inside a
/// [`ReferenceImage`] record and is edited by whole-record replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    ColorPalette,
    SearchQueries,
    DataRequirements,
    MustAvoid,
    BrandGuidelines,
    LockedElements,
    VariableElements,
}

// ---------------------------------------------------------------------------
// Edits and intents
// ---------------------------------------------------------------------------

/// One leaf assignment: exactly one scalar field of the root changes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    GenerationMode(GenerationMode),
    Resolution(Resolution),
    AspectRatio(AspectRatio),
    QualityPriority(QualityPriority),
    Scene(SceneField, String),
    Camera(CameraField, String),
    PrimaryLight(PrimaryLightField, String),
    Lighting(LightingField, String),
    ColorGrading(ColorGradingField, String),
    GroundingEnabled(bool),
    AccuracyPriority(AccuracyPriority),
    Style(StyleField, String),
    Technical(TechnicalField, String),
    MaintainAcrossSeries(bool),
}

/// The single update channel: every mutation of the canonical root is one
/// of these, applied through [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Assign one scalar leaf.
    Field(FieldEdit),
    /// Append a trimmed tag (no-op when blank).
    PushTag(TagField, String),
    /// Remove the tag at an index.
    RemoveTag(TagField, usize),
    AddCharacter,
    UpdateCharacter(usize, Character),
    RemoveCharacter(usize),
    AddTextElement,
    UpdateTextElement(usize, TextElement),
    RemoveTextElement(usize),
    AddReferenceImage,
    UpdateReferenceImage(usize, ReferenceImage),
    RemoveReferenceImage(usize),
    /// Replace the root wholesale with the default instance.
    Reset,
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Apply one intent to a snapshot, producing the next snapshot.
///
/// The input is never mutated; callers may keep the old root for
/// comparison. Record-list indices must come from the current list —
/// out-of-range indices panic.
pub fn reduce(spec: &PromptSpec, intent: Intent) -> PromptSpec {
    match intent {
        Intent::Field(edit) => apply_field_edit(spec, edit),

        Intent::PushTag(field, text) => {
            let mut next = spec.clone();
            let tags = tag_list_mut(&mut next, field);
            *tags = list::append_text(tags, &text);
            next
        }
        Intent::RemoveTag(field, index) => {
            let mut next = spec.clone();
            let tags = tag_list_mut(&mut next, field);
            *tags = list::remove_at(tags, index);
            next
        }

        Intent::AddCharacter => {
            let mut next = spec.clone();
            next.characters = Arc::new(list::append_record(spec.characters.as_slice(), |current| {
                Character::new(current.len() as ElementId + 1)
            }));
            next
        }
        Intent::UpdateCharacter(index, character) => {
            let mut next = spec.clone();
            next.characters = Arc::new(list::update_record_at(
                spec.characters.as_slice(),
                index,
                character,
            ));
            next
        }
        Intent::RemoveCharacter(index) => {
            let mut next = spec.clone();
            next.characters = Arc::new(list::remove_at(spec.characters.as_slice(), index));
            next
        }

        Intent::AddTextElement => {
            let mut next = spec.clone();
            next.text_elements = Arc::new(list::append_record(spec.text_elements.as_slice(), |_| {
                TextElement::default()
            }));
            next
        }
        Intent::UpdateTextElement(index, element) => {
            let mut next = spec.clone();
            next.text_elements = Arc::new(list::update_record_at(
                spec.text_elements.as_slice(),
                index,
                element,
            ));
            next
        }
        Intent::RemoveTextElement(index) => {
            let mut next = spec.clone();
            next.text_elements = Arc::new(list::remove_at(spec.text_elements.as_slice(), index));
            next
        }

        Intent::AddReferenceImage => {
            let mut next = spec.clone();
            next.reference_images =
                Arc::new(list::append_record(spec.reference_images.as_slice(), |current| {
                    ReferenceImage::new(current.len() as ElementId + 1)
                }));
            next
        }
        Intent::UpdateReferenceImage(index, image) => {
            let mut next = spec.clone();
            next.reference_images = Arc::new(list::update_record_at(
                spec.reference_images.as_slice(),
                index,
                image,
            ));
            next
        }
        Intent::RemoveReferenceImage(index) => {
            let mut next = spec.clone();
            next.reference_images = Arc::new(list::remove_at(spec.reference_images.as_slice(), index));
            next
        }

        Intent::Reset => PromptSpec::default(),
    }
}

/// Assign one scalar leaf, copying only the section that holds it.
pub fn apply_field_edit(spec: &PromptSpec, edit: FieldEdit) -> PromptSpec {
    let mut next = spec.clone();
    match edit {
        FieldEdit::GenerationMode(mode) => next.generation_mode = mode,
        FieldEdit::Resolution(resolution) => {
            next.output_specifications.resolution = resolution;
        }
        FieldEdit::AspectRatio(ratio) => next.output_specifications.aspect_ratio = ratio,
        FieldEdit::QualityPriority(priority) => {
            next.output_specifications.quality_priority = priority;
        }
        FieldEdit::Scene(field, value) => {
            let scene = Arc::make_mut(&mut next.scene_description);
            match field {
                SceneField::PrimarySubject => scene.primary_subject = value,
                SceneField::Environment => scene.environment = value,
                SceneField::Atmosphere => scene.atmosphere = value,
                SceneField::Style => scene.style = value,
                SceneField::TimeOfDay => scene.time_of_day = value,
            }
        }
        FieldEdit::Camera(field, value) => {
            let camera = Arc::make_mut(&mut next.camera_controls);
            match field {
                CameraField::Angle => camera.angle = value,
                CameraField::FocalLength => camera.focal_length = value,
                CameraField::DepthOfField => camera.depth_of_field = value,
                CameraField::Composition => camera.composition = value,
            }
        }
        FieldEdit::PrimaryLight(field, value) => {
            let lighting = Arc::make_mut(&mut next.lighting_setup);
            match field {
                PrimaryLightField::Type => lighting.primary_light.light_type = value,
                PrimaryLightField::Direction => lighting.primary_light.direction = value,
                PrimaryLightField::Intensity => lighting.primary_light.intensity = value,
            }
        }
        FieldEdit::Lighting(field, value) => {
            let lighting = Arc::make_mut(&mut next.lighting_setup);
            match field {
                LightingField::Shadows => lighting.shadows = value,
                LightingField::ColorTemperature => lighting.color_temperature = value,
                LightingField::SpecialEffects => lighting.special_effects = value,
            }
        }
        FieldEdit::ColorGrading(field, value) => {
            let grading = Arc::make_mut(&mut next.color_grading);
            match field {
                ColorGradingField::OverallTone => grading.overall_tone = value,
                ColorGradingField::Mood => grading.mood = value,
            }
        }
        FieldEdit::GroundingEnabled(enabled) => {
            Arc::make_mut(&mut next.grounding).enabled = enabled;
        }
        FieldEdit::AccuracyPriority(priority) => {
            Arc::make_mut(&mut next.grounding).accuracy_priority = priority;
        }
        FieldEdit::Style(field, value) => {
            let constraints = Arc::make_mut(&mut next.style_constraints);
            match field {
                StyleField::ArtisticStyle => constraints.artistic_style = value,
                StyleField::Inspiration => constraints.inspiration = value,
            }
        }
        FieldEdit::Technical(field, value) => {
            let requirements = Arc::make_mut(&mut next.technical_requirements);
            match field {
                TechnicalField::IntendedUse => requirements.intended_use = value,
                TechnicalField::SafeZones => requirements.safe_zones = value,
            }
        }
        FieldEdit::MaintainAcrossSeries(maintain) => {
            Arc::make_mut(&mut next.consistency_requirements).maintain_across_series = maintain;
        }
    }
    next
}

/// Read access to a tag list by path (the render collaborator binds tag
/// widgets through this).
pub fn tag_list(spec: &PromptSpec, field: TagField) -> &[String] {
    match field {
        TagField::ColorPalette => &spec.color_grading.color_palette,
        TagField::SearchQueries => &spec.grounding.search_queries,
        TagField::DataRequirements => &spec.grounding.data_requirements,
        TagField::MustAvoid => &spec.style_constraints.must_avoid,
        TagField::BrandGuidelines => &spec.technical_requirements.brand_guidelines,
        TagField::LockedElements => &spec.consistency_requirements.locked_elements,
        TagField::VariableElements => &spec.consistency_requirements.variable_elements,
    }
}

fn tag_list_mut(spec: &mut PromptSpec, field: TagField) -> &mut Vec<String> {
    match field {
        TagField::ColorPalette => &mut Arc::make_mut(&mut spec.color_grading).color_palette,
        TagField::SearchQueries => &mut Arc::make_mut(&mut spec.grounding).search_queries,
        TagField::DataRequirements => &mut Arc::make_mut(&mut spec.grounding).data_requirements,
        TagField::MustAvoid => &mut Arc::make_mut(&mut spec.style_constraints).must_avoid,
        TagField::BrandGuidelines => {
            &mut Arc::make_mut(&mut spec.technical_requirements).brand_guidelines
        }
        TagField::LockedElements => {
            &mut Arc::make_mut(&mut spec.consistency_requirements).locked_elements
        }
        TagField::VariableElements => {
            &mut Arc::make_mut(&mut spec.consistency_requirements).variable_elements
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
