pub mod aggregator;
pub mod analyzer;
pub mod report;
pub mod sentiment;
pub mod text;

pub use aggregator::PersonaAggregator;
pub use analyzer::{parse_profile_username, UserAnalyzer};
pub use report::{render_persona_report, write_report_file};
pub use sentiment::{label_for_compound, SentimentClassifier};
