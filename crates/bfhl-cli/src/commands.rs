use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use bfhl_client::{Attachment, ClientConfig, SubmitClient};
use bfhl_core::{FilterOption, FilterSelection, Payload, SubmitResponse};

use crate::cli::{FilterOptionArg, SubmitArgs};
use crate::summary::apply_table_style;
use crate::types::{SectionSummary, SubmitResult};

pub fn run_options() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Option", "Response key"]);
    apply_table_style(&mut table);
    for option in FilterOption::all() {
        table.add_row(vec![option.label(), option.key()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitResult> {
    let input = read_payload_text(&args.payload)?;
    let payload = Payload::parse(&input)?;
    debug!(entry_count = payload.len(), "payload parsed");

    let attachment = match &args.file {
        Some(path) => Some(
            Attachment::from_path(path)
                .with_context(|| format!("read attachment {}", path.display()))?,
        ),
        None => None,
    };
    let sent_attachment = attachment.is_some();

    let config = match &args.endpoint {
        Some(url) => ClientConfig::new(url.clone()),
        None => ClientConfig::default(),
    };
    let endpoint = config.submit_url();
    info!(
        endpoint = %endpoint,
        entry_count = payload.len(),
        attachment = sent_attachment,
        "submitting payload"
    );

    let client = SubmitClient::new(config)?;
    let response = client.submit(&payload, attachment)?;

    let selection = filter_selection(&args.select);
    let sections = build_sections(&response, &selection);

    Ok(SubmitResult {
        endpoint,
        entry_count: payload.len(),
        sections,
        file_report: sent_attachment.then(|| response.file_report()),
        response,
    })
}

/// Read the payload text from a file, or from stdin when the path is `-`.
fn read_payload_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("read payload from stdin")?;
        Ok(input)
    } else {
        fs::read_to_string(path).with_context(|| format!("read payload {}", path.display()))
    }
}

/// Selection to render: the `--select` flags in the order given, or every
/// option when none were passed.
fn filter_selection(selected: &[FilterOptionArg]) -> FilterSelection {
    let mut selection = FilterSelection::new();
    if selected.is_empty() {
        for option in FilterOption::all() {
            selection.toggle(*option, true);
        }
    } else {
        for arg in selected {
            selection.toggle(to_filter_option(*arg), true);
        }
    }
    selection
}

fn to_filter_option(arg: FilterOptionArg) -> FilterOption {
    match arg {
        FilterOptionArg::Alphabets => FilterOption::Alphabets,
        FilterOptionArg::Numbers => FilterOption::Numbers,
        FilterOptionArg::HighestLowercaseAlphabet => FilterOption::HighestLowercaseAlphabet,
    }
}

fn build_sections(response: &SubmitResponse, selection: &FilterSelection) -> Vec<SectionSummary> {
    selection
        .iter()
        .map(|option| SectionSummary {
            label: option.label(),
            items: response.section_items(option.key()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_selection_defaults_to_all_options() {
        let selection = filter_selection(&[]);
        let ordered: Vec<_> = selection.iter().collect();
        assert_eq!(ordered, FilterOption::all());
    }

    #[test]
    fn test_explicit_selection_preserves_flag_order() {
        let selection = filter_selection(&[
            FilterOptionArg::Numbers,
            FilterOptionArg::Alphabets,
            FilterOptionArg::Numbers,
        ]);
        let ordered: Vec<_> = selection.iter().collect();
        assert_eq!(ordered, vec![FilterOption::Numbers, FilterOption::Alphabets]);
    }

    #[test]
    fn test_sections_follow_selection_order() {
        let response = SubmitResponse::new(json!({
            "alphabets": ["A", "C"],
            "numbers": [],
        }));
        let selection = filter_selection(&[FilterOptionArg::Numbers, FilterOptionArg::Alphabets]);

        let sections = build_sections(&response, &selection);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Numbers");
        assert!(sections[0].items.is_empty());
        assert_eq!(sections[1].label, "Alphabets");
        assert_eq!(sections[1].items, ["A", "C"]);
    }
}
