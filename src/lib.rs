//! Closes gaps in digitized line networks.
//!
//! Given a collection of line features, the stitcher finds endpoints that
//! connect to no other line, pairs them by proximity, filters the pairings
//! by angular alignment and synthesizes straight artificial lines until the
//! yield of new connections dries up.

pub mod container;
pub mod error;
pub mod geometry;
pub mod stitch;

pub use error::StitchError;
pub use stitch::builder::{close_gaps, GapStitcher, RoundReport, StitchOutcome};
pub use stitch::feature::{ArtificialLine, LineFeature, SyntheticAttributes};
pub use stitch::rules::StitchRules;
