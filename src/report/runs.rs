use super::result::map_result;
use crate::types::diagnostic::Diagnostic;
use crate::types::sarif::Run;
use indexmap::IndexMap;
use std::path::Path;

/// Diagnostics grouped by `compiler_name`. Groups keep first-occurrence
/// order and each group keeps input order.
pub fn group_by_compiler(diagnostics: &[Diagnostic]) -> IndexMap<&str, Vec<&Diagnostic>> {
    let mut groups: IndexMap<&str, Vec<&Diagnostic>> = IndexMap::new();
    for diagnostic in diagnostics {
        groups
            .entry(diagnostic.compiler_name.as_str())
            .or_default()
            .push(diagnostic);
    }
    groups
}

pub fn build_runs(diagnostics: &[Diagnostic], root: &Path) -> Vec<Run> {
    let groups = group_by_compiler(diagnostics);
    tracing::debug!(
        diagnostics = diagnostics.len(),
        runs = groups.len(),
        "grouped diagnostics by compiler"
    );

    groups
        .into_iter()
        .map(|(name, members)| {
            let results = members
                .into_iter()
                .map(|diagnostic| map_result(diagnostic, root))
                .collect();
            Run::new(name, results)
        })
        .collect()
}
