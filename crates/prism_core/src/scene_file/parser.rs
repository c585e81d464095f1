//! Line-by-line scene file parser.

use thiserror::Error;

use super::records::SceneRecord;

/// Number of values following every tag.
const VALUES_PER_RECORD: usize = 4;

/// Errors that can occur during scene parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at line {line}: '{tag}' needs 4 values, found {found}")]
    MissingValues { line: usize, tag: String, found: usize },

    #[error("Invalid number at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Scene file parser.
pub struct SceneParser<'a> {
    content: &'a str,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Parse every record in file order.
    ///
    /// Unknown tags are skipped with a warning. Values beyond the fourth
    /// are ignored.
    pub fn parse(&self) -> ParseResult<Vec<SceneRecord>> {
        let mut records = Vec::new();

        for (index, line) in self.content.lines().enumerate() {
            let line_num = index + 1;
            let mut tokens = line.split_whitespace();

            let Some(tag) = tokens.next() else {
                continue;
            };
            if tag.starts_with('#') {
                continue;
            }
            if !SceneRecord::is_known_tag(tag) {
                log::warn!("Skipping unknown record '{}' at line {}", tag, line_num);
                continue;
            }

            let values = parse_values(tokens, tag, line_num)?;
            if let Some(record) = SceneRecord::from_tag(tag, values) {
                records.push(record);
            }
        }

        Ok(records)
    }
}

/// Parse the four numbers following a tag.
fn parse_values<'t>(
    mut tokens: impl Iterator<Item = &'t str>,
    tag: &str,
    line: usize,
) -> ParseResult<[f32; VALUES_PER_RECORD]> {
    let mut values = [0.0; VALUES_PER_RECORD];

    for (found, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| ParseError::MissingValues {
            line,
            tag: tag.to_string(),
            found,
        })?;
        *slot = token.parse().map_err(|_| ParseError::InvalidNumber {
            line,
            value: token.to_string(),
        })?;
    }

    Ok(values)
}

/// Parse scene file contents into records.
pub fn parse_scene(content: &str) -> ParseResult<Vec<SceneRecord>> {
    SceneParser::new(content).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ObjectStatus;
    use prism_math::Vec3;

    #[test]
    fn test_parse_records_in_order() {
        let content = "
e 0.0 0.0 4.0 1.0
a 0.1 0.2 0.3 1.0
o 0.0 0.0 -1.0 0.5
c 1.0 0.0 0.0 10.0
";

        let records = parse_scene(content).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(
            records[0],
            SceneRecord::Eye {
                position: Vec3::new(0.0, 0.0, 4.0),
                screen_distance: 1.0
            }
        );
        assert_eq!(
            records[1],
            SceneRecord::Ambient {
                intensity: Vec3::new(0.1, 0.2, 0.3)
            }
        );
        assert_eq!(
            records[2],
            SceneRecord::Object {
                params: [0.0, 0.0, -1.0, 0.5],
                status: ObjectStatus::Diffuse
            }
        );
    }

    #[test]
    fn test_object_tags_set_status() {
        let records = parse_scene("o 0 0 0 1\nr 0 0 0 1\nt 0 0 0 1\n").unwrap();
        let statuses: Vec<_> = records
            .iter()
            .map(|r| match r {
                SceneRecord::Object { status, .. } => *status,
                other => panic!("unexpected record {other:?}"),
            })
            .collect();

        assert_eq!(
            statuses,
            vec![ObjectStatus::Diffuse, ObjectStatus::Reflective, ObjectStatus::Transparent]
        );
    }

    #[test]
    fn test_comments_blanks_and_unknown_tags_are_skipped() {
        let content = "# a comment\n\n   \nx 1 2 3 4\ni 0.5 0.5 0.5 1\n";
        let records = parse_scene(content).unwrap();

        assert_eq!(
            records,
            vec![SceneRecord::Intensity {
                intensity: Vec3::splat(0.5)
            }]
        );
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let records = parse_scene("p 1 2 3 0.9 42\n").unwrap();
        assert_eq!(
            records,
            vec![SceneRecord::SpotPosition {
                position: Vec3::new(1.0, 2.0, 3.0),
                cutoff: 0.9
            }]
        );
    }

    #[test]
    fn test_missing_values_error() {
        let err = parse_scene("e 0 0 4 1\nd 0 -1\n").unwrap_err();
        match err {
            ParseError::MissingValues { line, tag, found } => {
                assert_eq!(line, 2);
                assert_eq!(tag, "d");
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number_error() {
        let err = parse_scene("\n\nc 1 0 zero 5\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_scene("c 1 0 zero 5").unwrap_err().to_string().contains("line 1"));
    }
}
