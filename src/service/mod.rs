pub mod analysis;
pub mod arbiter;
pub mod claims;
pub mod integrator;
pub mod llm;
pub mod parse;
pub mod perspectives;
pub mod response;

pub use analysis::{AnalysisOutcome, AnalysisService};
pub use llm::LlmClient;
