//! Image export of the scorecard.
//!
//! Export runs in three steps, each usable on its own:
//!
//! 1. [`layout_for`] places title, per-dimension rows and the footer on a
//!    fixed 800x600 canvas. Pure geometry, no rendering.
//! 2. [`ScorecardLayout::to_svg`] turns the layout into SVG markup.
//! 3. [`rasterize`] renders the SVG with resvg and encodes a PNG.
//!
//! Blank templates are produced from a zeroed snapshot built inside
//! [`to_image_artifact_with`]; the caller's assessment is only borrowed.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::core::{Assessment, Dimension, MAX_SCORE};
use crate::errors::ScorecardError;
use crate::insights::{recompute, Insight};
use crate::output::summary::{format_value, SUMMARY_TITLE};
use crate::scoring::{color_key_for, ColorKey};

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

pub const IMAGE_FILE_NAME: &str = "ai-scorecard.png";
pub const BLANK_IMAGE_FILE_NAME: &str = "ai-scorecard-blank.png";

const MARGIN_X: f64 = 60.0;
const TITLE_BASELINE: f64 = 64.0;
const FIRST_ROW_TOP: f64 = 110.0;
const ROW_HEIGHT: f64 = 76.0;
const LABEL_OFFSET: f64 = 20.0;
const BAR_OFFSET: f64 = 32.0;
const BAR_HEIGHT: f64 = 20.0;
const DIVIDER_Y: f64 = 496.0;
const AGGREGATE_BASELINE: f64 = 536.0;
const MATURITY_BASELINE: f64 = 570.0;
const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";

/// Canvas palette. Tier fill colors do not depend on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#111827",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Theme::Light => "#111827",
            Theme::Dark => "#f9fafb",
        }
    }

    pub fn muted_text(&self) -> &'static str {
        match self {
            Theme::Light => "#4b5563",
            Theme::Dark => "#9ca3af",
        }
    }

    /// Unfilled part of a bar.
    pub fn track(&self) -> &'static str {
        match self {
            Theme::Light => "#e5e7eb",
            Theme::Dark => "#374151",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One dimension row: label, `"{value}/10"` text and a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub dimension: Dimension,
    pub label: String,
    pub value_text: String,
    /// Share of the track that is filled, `value / 10`.
    pub fill_fraction: f64,
    pub color: ColorKey,
    pub track: Rect,
    pub label_baseline: f64,
}

impl BarRow {
    /// Filled part of the track.
    pub fn fill(&self) -> Rect {
        Rect {
            width: self.track.width * self.fill_fraction,
            ..self.track
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterBlock {
    pub aggregate_text: String,
    pub maturity_text: String,
    pub color: ColorKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScorecardLayout {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub title: String,
    pub rows: Vec<BarRow>,
    pub footer: FooterBlock,
}

/// Place a snapshot on the canvas.
pub fn layout_for(
    assessment: &Assessment,
    aggregate: f64,
    insight: &Insight,
    theme: Theme,
) -> ScorecardLayout {
    let track_width = f64::from(CANVAS_WIDTH) - 2.0 * MARGIN_X;

    let rows = assessment
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let top = FIRST_ROW_TOP + ROW_HEIGHT * i as f64;
            BarRow {
                dimension: score.dimension,
                label: score.label().to_string(),
                value_text: format!("{}/10", format_value(score.value())),
                fill_fraction: score.value() / MAX_SCORE,
                color: color_key_for(score.value()),
                track: Rect {
                    x: MARGIN_X,
                    y: top + BAR_OFFSET,
                    width: track_width,
                    height: BAR_HEIGHT,
                },
                label_baseline: top + LABEL_OFFSET,
            }
        })
        .collect();

    ScorecardLayout {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        theme,
        title: SUMMARY_TITLE.to_string(),
        rows,
        footer: FooterBlock {
            aggregate_text: format!("Overall Score: {aggregate:.1}/10"),
            maturity_text: format!("Maturity: {}", insight.maturity_level),
            color: color_key_for(aggregate),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn text_element(
    svg: &mut String,
    x: f64,
    y: f64,
    size: u32,
    weight: &str,
    anchor: &str,
    fill: &str,
    content: &str,
) {
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{size}" font-weight="{weight}" text-anchor="{anchor}" fill="{fill}">{}</text>"#,
        html_escape::encode_text(content)
    );
}

impl ScorecardLayout {
    pub fn to_svg(&self) -> String {
        let theme = self.theme;
        let right = f64::from(self.width) - MARGIN_X;
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            theme.background()
        );
        text_element(
            &mut svg,
            MARGIN_X,
            TITLE_BASELINE,
            32,
            "bold",
            "start",
            theme.text(),
            &self.title,
        );

        for row in &self.rows {
            text_element(
                &mut svg,
                row.track.x,
                row.label_baseline,
                18,
                "normal",
                "start",
                theme.text(),
                &row.label,
            );
            text_element(
                &mut svg,
                right,
                row.label_baseline,
                18,
                "bold",
                "end",
                theme.text(),
                &row.value_text,
            );

            let radius = row.track.height / 2.0;
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{}"/>"#,
                row.track.x,
                row.track.y,
                row.track.width,
                row.track.height,
                theme.track()
            );
            let fill = row.fill();
            if fill.width > 0.0 {
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{}"/>"#,
                    fill.x,
                    fill.y,
                    fill.width,
                    fill.height,
                    row.color.hex()
                );
            }
        }

        let _ = writeln!(
            svg,
            r#"  <line x1="{MARGIN_X}" y1="{DIVIDER_Y}" x2="{right}" y2="{DIVIDER_Y}" stroke="{}" stroke-width="1"/>"#,
            theme.track()
        );
        text_element(
            &mut svg,
            MARGIN_X,
            AGGREGATE_BASELINE,
            24,
            "bold",
            "start",
            &self.footer.color.hex(),
            &self.footer.aggregate_text,
        );
        text_element(
            &mut svg,
            MARGIN_X,
            MATURITY_BASELINE,
            18,
            "normal",
            "start",
            theme.muted_text(),
            &self.footer.maturity_text,
        );

        svg.push_str("</svg>\n");
        svg
    }
}

/// Render SVG markup to PNG bytes.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<Vec<u8>, ScorecardError> {
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg::{Options, Tree};

    let _span = tracing::debug_span!("rasterize", width, height).entered();

    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| ScorecardError::render(format!("SVG parse failed: {e}")))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ScorecardError::render("Pixmap allocation failed"))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let buffer = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ScorecardError::encode("Raster size does not match canvas"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(buffer)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| ScorecardError::encode(e.to_string()))?;

    tracing::debug!(bytes = png.len(), "encoded scorecard png");
    Ok(png)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Render a zeroed template instead of the given snapshot
    pub blank: bool,
    pub theme: Theme,
}

/// Rendered export ready to hand to a download/save service.
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    pub file_name: &'static str,
    pub layout: ScorecardLayout,
    pub png: Vec<u8>,
}

/// Export with the default (light) theme.
pub fn to_image_artifact(
    assessment: &Assessment,
    aggregate: f64,
    insight: &Insight,
    blank: bool,
) -> Result<ImageArtifact, ScorecardError> {
    let options = ImageOptions {
        blank,
        ..Default::default()
    };
    to_image_artifact_with(assessment, aggregate, insight, &options)
}

pub fn to_image_artifact_with(
    assessment: &Assessment,
    aggregate: f64,
    insight: &Insight,
    options: &ImageOptions,
) -> Result<ImageArtifact, ScorecardError> {
    let (layout, file_name) = if options.blank {
        let blank = Assessment::zeroed();
        let (blank_aggregate, blank_insight) = recompute(&blank);
        (
            layout_for(&blank, blank_aggregate, &blank_insight, options.theme),
            BLANK_IMAGE_FILE_NAME,
        )
    } else {
        (
            layout_for(assessment, aggregate, insight, options.theme),
            IMAGE_FILE_NAME,
        )
    };

    let png = rasterize(&layout.to_svg(), layout.width, layout.height)?;
    Ok(ImageArtifact {
        file_name,
        layout,
        png,
    })
}
