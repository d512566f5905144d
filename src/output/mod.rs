use crate::rename::{RenameOperation, RenameSet};
use std::io::{self, Write};

/// Display a single planned rename as `{original} ->\t{target}`
pub fn display_operation(op: &RenameOperation<'_>, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{} ->\t{}", op.original, op.target)
}

/// Display every planned rename, one per line
pub fn display_rename_set(set: &RenameSet, writer: &mut impl Write) -> io::Result<()> {
    for op in set.operations() {
        display_operation(&op, writer)?;
    }
    Ok(())
}

/// Display the rename set as a JSON array of `{"from", "to"}` objects for scripting
pub fn display_json(set: &RenameSet, writer: &mut impl Write) -> io::Result<()> {
    let operations: Vec<RenameOperation> = set.operations().collect();
    serde_json::to_writer_pretty(&mut *writer, &operations)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_set() -> RenameSet {
        let mut set = RenameSet::new();
        set.insert("Show S01E02.mp4".to_string(), "ep2.mp4".to_string())
            .unwrap();
        set.insert("Show S01E01.mp4".to_string(), "ep1.mp4".to_string())
            .unwrap();
        set
    }

    #[test]
    fn test_display_operation() {
        let mut output = Vec::new();

        display_operation(&RenameOperation::new("ep1.mp4", "Show S01E01.mp4"), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ep1.mp4 ->\tShow S01E01.mp4\n"
        );
    }

    #[test]
    fn test_display_rename_set() {
        let mut output = Vec::new();

        display_rename_set(&create_test_set(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ep1.mp4 ->\tShow S01E01.mp4");
        assert_eq!(lines[1], "ep2.mp4 ->\tShow S01E02.mp4");
    }

    #[test]
    fn test_display_rename_set_empty() {
        let mut output = Vec::new();

        display_rename_set(&RenameSet::new(), &mut output).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_display_json() {
        let mut output = Vec::new();

        display_json(&create_test_set(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let entries = value.as_array().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["from"], "ep1.mp4");
        assert_eq!(entries[0]["to"], "Show S01E01.mp4");
        assert_eq!(entries[1]["from"], "ep2.mp4");
    }

    #[test]
    fn test_display_json_empty() {
        let mut output = Vec::new();

        display_json(&RenameSet::new(), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap().trim(), "[]");
    }
}
