//! Questionnaire bank and answer scoring. Produces the `DiscScore` the
//! profile pipeline consumes.

pub mod handlers;
pub mod questionnaire;
pub mod scoring;
