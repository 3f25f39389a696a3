//! AI usage scorecard.
//!
//! Five capability dimensions are rated on a 0-10 scale. From those values
//! the crate derives an aggregate score, a tier per value, a maturity level
//! with strengths and growth suggestions, and serializes the result as a
//! text summary or a PNG image.
//!
//! ```rust
//! use scorecard::{recompute, to_summary_text, Assessment, MaturityLevel};
//!
//! let assessment = Assessment::new([9.0, 8.5, 9.0, 5.0, 2.0]);
//! let (aggregate, insight) = recompute(&assessment);
//!
//! assert_eq!(aggregate, 6.7);
//! assert_eq!(insight.maturity_level, MaturityLevel::Developing);
//! assert!(to_summary_text(&assessment, aggregate, &insight).contains("Depth: 9/10 (Strong)"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod insights;
pub mod io;
pub mod output;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{sanitize_value, Assessment, Dimension, DimensionScore};
pub use crate::errors::ScorecardError;
pub use crate::insights::{generate_insights, recompute, Insight, MaturityLevel};
pub use crate::output::{
    parse_summary, to_image_artifact, to_image_artifact_with, to_summary_text, ImageArtifact,
    ImageOptions, Theme,
};
pub use crate::scoring::{color_key_for, compute_aggregate, tier_for, ColorKey, Tier};
pub use crate::session::{ScorecardSession, ScorecardSnapshot};
