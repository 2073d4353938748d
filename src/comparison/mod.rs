/*!
 * Provider comparison.
 *
 * - **Orchestrator**: drives a comparison through its phases
 * - **Report**: scored candidates, recommendation and response payload
 */

pub mod orchestrator;
pub mod report;

pub use orchestrator::{ComparisonOutcome, ComparisonPhase, ComparisonService};
pub use report::{ComparisonResponse, ScoreReport, TranslationCandidate};
