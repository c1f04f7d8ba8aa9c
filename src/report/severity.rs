use crate::types::diagnostic::Severity;
use crate::types::sarif::{Kind, Level};

pub fn kind(severity: Severity) -> Kind {
    match severity {
        Severity::Error | Severity::Warning | Severity::Hint => Kind::Fail,
        Severity::Information => Kind::Informational,
    }
}

pub fn level(severity: Severity) -> Level {
    match severity {
        Severity::Error => Level::Error,
        Severity::Warning => Level::Warning,
        Severity::Hint => Level::Note,
        Severity::Information => Level::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_table() {
        let table = [
            (Severity::Error, Kind::Fail, Level::Error),
            (Severity::Warning, Kind::Fail, Level::Warning),
            (Severity::Hint, Kind::Fail, Level::Note),
            (Severity::Information, Kind::Informational, Level::None),
        ];
        for (severity, expected_kind, expected_level) in table {
            assert_eq!(kind(severity), expected_kind, "kind for {severity}");
            assert_eq!(level(severity), expected_level, "level for {severity}");
        }
    }
}
