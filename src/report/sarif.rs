use super::runs::build_runs;
use super::ConvertOptions;
use crate::error::Result;
use crate::types::diagnostic::Diagnostic;
use crate::types::sarif::{Run, SarifDocument};

pub fn build_document(
    diagnostics: &[Diagnostic],
    options: &ConvertOptions,
) -> Result<SarifDocument> {
    options.validate()?;

    // Some SARIF consumers reject a document whose `runs` is empty.
    let runs = if diagnostics.is_empty() {
        vec![Run::new(options.placeholder_tool.as_str(), Vec::new())]
    } else {
        build_runs(diagnostics, &options.root)
    };

    Ok(SarifDocument::new(runs))
}

pub fn encode(document: &SarifDocument, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    Ok(bytes)
}

pub fn to_sarif(diagnostics: &[Diagnostic], options: &ConvertOptions) -> Result<Vec<u8>> {
    let document = build_document(diagnostics, options)?;
    encode(&document, options.pretty)
}
