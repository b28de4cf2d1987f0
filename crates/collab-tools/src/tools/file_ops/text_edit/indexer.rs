//! Terminator-preserving line splitting

use super::types::LineEnding;

/// Split `content` into lines, each retaining its terminator (LF or CRLF;
/// the final line may carry none). Concatenating the result reproduces
/// `content` byte-for-byte.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(content[start..=i].to_string());
            start = i + 1;
        }
    }

    if start < content.len() {
        lines.push(content[start..].to_string());
    }

    lines
}

/// Dominant line ending of `content`: the style of its first terminator,
/// LF when there is none.
pub fn detect_line_ending(content: &str) -> LineEnding {
    match content.find('\n') {
        Some(i) if i > 0 && content.as_bytes()[i - 1] == b'\r' => LineEnding::CrLf,
        _ => LineEnding::Lf,
    }
}

/// Whether a single indexed line carries a terminator.
pub fn has_terminator(line: &str) -> bool {
    line.ends_with('\n')
}

/// Append `ending` to `line` when it lacks a terminator.
pub fn ensure_terminator(line: &mut String, ending: LineEnding) {
    if !has_terminator(line) {
        line.push_str(ending.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_terminator_only_input() {
        assert_eq!(split_lines("\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn test_missing_final_terminator() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn test_crlf_lines_kept_whole() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r\n", "b\r\n"]);
    }

    #[test]
    fn test_round_trip_is_byte_exact() {
        for content in ["", "x", "a\nb\nc\n", "a\r\nb", "\n", "mixed\r\nlf\nend"] {
            assert_eq!(split_lines(content).concat(), content);
        }
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(detect_line_ending("a\nb\n"), LineEnding::Lf);
        assert_eq!(detect_line_ending("a\r\nb\r\n"), LineEnding::CrLf);
        assert_eq!(detect_line_ending("no terminator"), LineEnding::Lf);
        assert_eq!(detect_line_ending(""), LineEnding::Lf);
    }

    #[test]
    fn test_ensure_terminator() {
        let mut line = "tail".to_string();
        ensure_terminator(&mut line, LineEnding::CrLf);
        assert_eq!(line, "tail\r\n");

        let mut terminated = "done\n".to_string();
        ensure_terminator(&mut terminated, LineEnding::Lf);
        assert_eq!(terminated, "done\n");
    }
}
