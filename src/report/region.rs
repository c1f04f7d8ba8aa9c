use crate::types::diagnostic::Position;
use crate::types::sarif::Region;

pub fn normalize(position: Position) -> Region {
    let (start_line, start_column, end_line, end_column) = match position {
        Position::Absent => (1, 1, 1, 1),
        Position::Line(line) => (line, 1, line, 1),
        Position::LineColumn(line, column) => (line, column, line, column),
        Position::Range(start_line, start_column, end_line, end_column) => {
            (start_line, start_column, end_line, end_column)
        }
    };

    if [start_line, start_column, end_line, end_column].contains(&0) {
        tracing::debug!(?position, "raising zero coordinates to 1");
    }

    // Compilers report 0 for "unknown"; SARIF regions are 1-based.
    Region {
        start_line: start_line.max(1),
        start_column: start_column.max(1),
        end_line: end_line.max(1),
        end_column: end_column.max(1),
    }
}
