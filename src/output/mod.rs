//! Serializers and renderers for a scorecard snapshot.
//!
//! - [`summary`]: plain-text summary for the clipboard, and its parser
//! - [`image`]: 800x600 PNG export, live or blank template
//! - [`json`]: machine-readable report
//! - [`terminal`]: colored live view for the CLI

pub mod image;
pub mod json;
pub mod summary;
pub mod terminal;

pub use image::{
    layout_for, rasterize, to_image_artifact, to_image_artifact_with, ImageArtifact,
    ImageOptions, ScorecardLayout, Theme, BLANK_IMAGE_FILE_NAME, IMAGE_FILE_NAME,
};
pub use json::{build_report, to_json_string, ScorecardReport};
pub use summary::{parse_summary, to_summary_text, to_summary_text_with};
pub use terminal::render_terminal;
