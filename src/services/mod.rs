pub mod insights;
pub mod llm;
