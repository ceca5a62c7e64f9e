//! Form field catalog: the render collaborator's map of the schema.
//!
//! Each scalar, enum, checkbox and tag-list leaf of the root gets a
//! [`FieldDef`] carrying its machine path, display label, widget kind,
//! section and (for selects) the allowed wire values. Record-list
//! interiors (characters, text elements, reference images) are rendered
//! from the record types themselves and are not listed here.

use serde::{Deserialize, Serialize};

use crate::schema::{
    VALID_ACCURACY_PRIORITIES, VALID_ASPECT_RATIOS, VALID_GENERATION_MODES,
    VALID_QUALITY_PRIORITIES, VALID_RESOLUTIONS,
};

// ---------------------------------------------------------------------------
// Widget kind and section enums
// ---------------------------------------------------------------------------

/// The widget a field binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
    TagList,
}

/// Logical grouping for display in the form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    General,
    Scene,
    Camera,
    Lighting,
    ColorGrading,
    Characters,
    TextOverlays,
    ReferenceImages,
    Grounding,
    Constraints,
}

impl FormSection {
    /// Human-readable section title.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General & Output",
            Self::Scene => "Scene Description",
            Self::Camera => "Camera Controls",
            Self::Lighting => "Lighting Setup",
            Self::ColorGrading => "Color Grading",
            Self::Characters => "Characters",
            Self::TextOverlays => "Text Elements",
            Self::ReferenceImages => "Reference Images",
            Self::Grounding => "Grounding (Facts)",
            Self::Constraints => "Requirements & Constraints",
        }
    }
}

// ---------------------------------------------------------------------------
// Field definition
// ---------------------------------------------------------------------------

/// Definition of a single form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Dotted path into the serialized root (e.g. `scene_description.style`).
    pub name: String,
    /// Human-readable display label.
    pub label: String,
    /// Widget kind.
    pub kind: FieldKind,
    /// Display section / group.
    pub section: FormSection,
    /// Example text shown in an empty input.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub placeholder: String,
    /// Allowed wire values for Select fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

fn text(name: &str, label: &str, section: FormSection, placeholder: &str) -> FieldDef {
    FieldDef {
        name: name.into(),
        label: label.into(),
        kind: FieldKind::Text,
        section,
        placeholder: placeholder.into(),
        options: vec![],
    }
}

fn select(name: &str, label: &str, section: FormSection, options: &[&str]) -> FieldDef {
    FieldDef {
        name: name.into(),
        label: label.into(),
        kind: FieldKind::Select,
        section,
        placeholder: String::new(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn checkbox(name: &str, label: &str, section: FormSection) -> FieldDef {
    FieldDef {
        name: name.into(),
        label: label.into(),
        kind: FieldKind::Checkbox,
        section,
        placeholder: String::new(),
        options: vec![],
    }
}

fn tag_list(name: &str, label: &str, section: FormSection, placeholder: &str) -> FieldDef {
    FieldDef {
        name: name.into(),
        label: label.into(),
        kind: FieldKind::TagList,
        section,
        placeholder: placeholder.into(),
        options: vec![],
    }
}

// ---------------------------------------------------------------------------
// Standard catalog
// ---------------------------------------------------------------------------

/// Return the canonical form field catalog.
///
/// Order is display order within and across sections.
pub fn standard_field_defs() -> Vec<FieldDef> {
    use FormSection::*;

    vec![
        // --- General & Output ---
        select(
            "generation_mode",
            "Generation Mode",
            General,
            VALID_GENERATION_MODES,
        ),
        select(
            "output_specifications.resolution",
            "Resolution",
            General,
            VALID_RESOLUTIONS,
        ),
        select(
            "output_specifications.aspect_ratio",
            "Aspect Ratio",
            General,
            VALID_ASPECT_RATIOS,
        ),
        select(
            "output_specifications.quality_priority",
            "Quality Priority",
            General,
            VALID_QUALITY_PRIORITIES,
        ),
        // --- Scene Description ---
        text(
            "scene_description.primary_subject",
            "Primary Subject",
            Scene,
            "e.g. A futuristic robot playing chess",
        ),
        text(
            "scene_description.environment",
            "Environment",
            Scene,
            "e.g. A neon-lit rainy alleyway in Tokyo",
        ),
        text(
            "scene_description.atmosphere",
            "Atmosphere",
            Scene,
            "e.g. Mysterious, melancholic",
        ),
        text("scene_description.style", "Style", Scene, "e.g. Cyberpunk, Noir"),
        text(
            "scene_description.time_of_day",
            "Time of Day",
            Scene,
            "e.g. Midnight, Golden Hour",
        ),
        // --- Camera Controls ---
        text(
            "camera_controls.angle",
            "Camera Angle",
            Camera,
            "e.g. Low angle, Bird's eye",
        ),
        text(
            "camera_controls.focal_length",
            "Focal Length",
            Camera,
            "e.g. 35mm, Wide-angle, Telephoto",
        ),
        text(
            "camera_controls.depth_of_field",
            "Depth of Field",
            Camera,
            "e.g. Shallow depth of field, Bokeh",
        ),
        text(
            "camera_controls.composition",
            "Composition",
            Camera,
            "e.g. Rule of thirds, Centered",
        ),
        // --- Lighting Setup ---
        text(
            "lighting_setup.primary_light.type",
            "Type",
            Lighting,
            "e.g. Softbox",
        ),
        text(
            "lighting_setup.primary_light.direction",
            "Direction",
            Lighting,
            "e.g. From left",
        ),
        text(
            "lighting_setup.primary_light.intensity",
            "Intensity",
            Lighting,
            "e.g. High",
        ),
        text(
            "lighting_setup.shadows",
            "Shadows",
            Lighting,
            "e.g. Long dramatic shadows",
        ),
        text(
            "lighting_setup.color_temperature",
            "Color Temperature",
            Lighting,
            "e.g. 5600K, Warm",
        ),
        text(
            "lighting_setup.special_effects",
            "Special Effects",
            Lighting,
            "e.g. Volumetric fog, Lens flare",
        ),
        // --- Color Grading ---
        text(
            "color_grading.overall_tone",
            "Overall Tone",
            ColorGrading,
            "e.g. Cinematic, Muted",
        ),
        text("color_grading.mood", "Mood", ColorGrading, "e.g. Nostalgic"),
        tag_list(
            "color_grading.color_palette",
            "Color Palette",
            ColorGrading,
            "e.g. #FF0000, Teal, Burnt Orange",
        ),
        // --- Grounding ---
        checkbox("grounding.enabled", "Enable Grounding", Grounding),
        tag_list(
            "grounding.search_queries",
            "Search Queries",
            Grounding,
            "Add query...",
        ),
        tag_list(
            "grounding.data_requirements",
            "Data Requirements",
            Grounding,
            "Add requirement...",
        ),
        select(
            "grounding.accuracy_priority",
            "Accuracy Priority",
            Grounding,
            VALID_ACCURACY_PRIORITIES,
        ),
        // --- Requirements & Constraints ---
        text(
            "style_constraints.artistic_style",
            "Artistic Style",
            Constraints,
            "e.g. 3D Render",
        ),
        text(
            "style_constraints.inspiration",
            "Inspiration",
            Constraints,
            "e.g. 1980s sci-fi book covers",
        ),
        tag_list(
            "style_constraints.must_avoid",
            "Must Avoid (Negative Prompt)",
            Constraints,
            "Add item...",
        ),
        text(
            "technical_requirements.intended_use",
            "Intended Use",
            Constraints,
            "e.g. Web Banner",
        ),
        text(
            "technical_requirements.safe_zones",
            "Safe Zones",
            Constraints,
            "e.g. Keep top third clear for headline",
        ),
        tag_list(
            "technical_requirements.brand_guidelines",
            "Brand Guidelines",
            Constraints,
            "Add guideline...",
        ),
        checkbox(
            "consistency_requirements.maintain_across_series",
            "Maintain Across Series",
            Constraints,
        ),
        tag_list(
            "consistency_requirements.locked_elements",
            "Locked Elements",
            Constraints,
            "Add element...",
        ),
        tag_list(
            "consistency_requirements.variable_elements",
            "Variable Elements",
            Constraints,
            "Add element...",
        ),
    ]
}

/// The catalog filtered to one section, in display order.
pub fn defs_for_section(section: FormSection) -> Vec<FieldDef> {
    standard_field_defs()
        .into_iter()
        .filter(|def| def.section == section)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let defs = standard_field_defs();
        let names: HashSet<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn every_select_has_options_and_nothing_else_does() {
        for def in standard_field_defs() {
            match def.kind {
                FieldKind::Select => {
                    assert!(!def.options.is_empty(), "select {} has no options", def.name)
                }
                _ => assert!(def.options.is_empty(), "{} should not carry options", def.name),
            }
        }
    }

    #[test]
    fn select_options_match_schema_wire_values() {
        let defs = standard_field_defs();
        let resolution = defs
            .iter()
            .find(|d| d.name == "output_specifications.resolution")
            .unwrap();
        assert_eq!(resolution.options, ["1K", "2K", "4K"]);

        let accuracy = defs
            .iter()
            .find(|d| d.name == "grounding.accuracy_priority")
            .unwrap();
        assert_eq!(accuracy.options, ["high", "medium"]);
    }

    #[test]
    fn section_filter_returns_display_order() {
        let scene = defs_for_section(FormSection::Scene);
        let names: Vec<_> = scene.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "scene_description.primary_subject",
                "scene_description.environment",
                "scene_description.atmosphere",
                "scene_description.style",
                "scene_description.time_of_day",
            ]
        );
    }

    #[test]
    fn record_list_sections_have_no_scalar_defs() {
        assert!(defs_for_section(FormSection::Characters).is_empty());
        assert!(defs_for_section(FormSection::TextOverlays).is_empty());
        assert!(defs_for_section(FormSection::ReferenceImages).is_empty());
    }

    #[test]
    fn section_labels_are_non_empty() {
        for section in [
            FormSection::General,
            FormSection::Scene,
            FormSection::Camera,
            FormSection::Lighting,
            FormSection::ColorGrading,
            FormSection::Characters,
            FormSection::TextOverlays,
            FormSection::ReferenceImages,
            FormSection::Grounding,
            FormSection::Constraints,
        ] {
            assert!(!section.label().is_empty());
        }
    }

    #[test]
    fn checkbox_fields_cover_both_booleans() {
        let defs = standard_field_defs();
        let checkboxes: Vec<_> = defs
            .iter()
            .filter(|d| d.kind == FieldKind::Checkbox)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            checkboxes,
            [
                "grounding.enabled",
                "consistency_requirements.maintain_across_series"
            ]
        );
    }
}
