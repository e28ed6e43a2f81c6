use bfhl_core::{FileReport, SubmitResponse};

#[derive(Debug)]
pub struct SubmitResult {
    pub endpoint: String,
    pub entry_count: usize,
    pub sections: Vec<SectionSummary>,
    pub file_report: Option<FileReport>,
    pub response: SubmitResponse,
}

#[derive(Debug)]
pub struct SectionSummary {
    pub label: &'static str,
    pub items: Vec<String>,
}
