use super::{region, severity, uri};
use crate::types::diagnostic::Diagnostic;
use crate::types::sarif::{ArtifactLocation, Location, Message, PhysicalLocation, SarifResult};
use std::path::Path;

pub fn map_result(diagnostic: &Diagnostic, root: &Path) -> SarifResult {
    SarifResult {
        message: Message {
            text: String::from_utf8_lossy(&diagnostic.message).into_owned(),
        },
        kind: severity::kind(diagnostic.severity),
        level: severity::level(diagnostic.severity),
        locations: vec![Location {
            physical_location: PhysicalLocation {
                artifact_location: ArtifactLocation {
                    uri: uri::relative_uri(&diagnostic.file, root),
                },
                region: region::normalize(diagnostic.position),
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::diagnostic::{Position, Severity};
    use crate::types::sarif::{Kind, Level, Region};

    #[test]
    fn maps_every_field_of_a_warning() {
        let diagnostic = Diagnostic::new(
            "Elixir",
            "unused var",
            Severity::Warning,
            "/proj/lib/x.ex",
            Position::LineColumn(10, 3),
        );

        let result = map_result(&diagnostic, Path::new("/proj"));

        assert_eq!(result.message.text, "unused var");
        assert_eq!(result.kind, Kind::Fail);
        assert_eq!(result.level, Level::Warning);
        assert_eq!(result.locations.len(), 1);
        let location = &result.locations[0].physical_location;
        assert_eq!(location.artifact_location.uri, "lib/x.ex");
        assert_eq!(
            location.region,
            Region {
                start_line: 10,
                start_column: 3,
                end_line: 10,
                end_column: 3,
            }
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let diagnostic = Diagnostic::new(
            "Elixir",
            vec![b'b', b'a', b'd', 0xff, b'!'],
            Severity::Information,
            "/proj/mix.exs",
            Position::Absent,
        );

        let result = map_result(&diagnostic, Path::new("/proj"));

        assert_eq!(result.message.text, "bad\u{fffd}!");
        assert_eq!(result.kind, Kind::Informational);
        assert_eq!(result.level, Level::None);
    }
}
