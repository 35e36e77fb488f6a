//! Re-alignment of recursively split pieces against protected spans.
//!
//! Recursive splitting doesn't know about protected spans and may cut one
//! in half, or merge it into a neighboring piece. This pass walks both the
//! split pieces and the protected spans in lockstep (mirroring the cursor
//! in the original `_join`) and re-cuts the pieces so that every protected
//! span appears as exactly one element of the result, with everything
//! around it preserved and in order. Concatenating the output always
//! reproduces the original text exactly — this is a re-alignment, not a
//! content-changing step.

use crate::protected::ProtectedSpan;

/// Splice `splits` against `protected` so each protected span becomes a
/// single contiguous piece.
///
/// `splits` must concatenate to the same text that `protected`'s byte
/// offsets were computed against.
#[must_use]
pub fn splice(splits: &[String], protected: &[ProtectedSpan]) -> Vec<String> {
    let text: String = splits.concat();

    let mut result = Vec::new();
    let mut protect_idx = 0usize;
    // `point` is the cursor's absolute byte position; it may run ahead of
    // the current split's end when a protected span crosses split boundaries.
    let mut point = 0usize;
    let mut start = 0usize;

    for split in splits {
        let end = start + split.len();
        let mut cur_start = point.min(end);

        while protect_idx < protected.len() {
            let span = &protected[protect_idx];

            if end <= span.start {
                break;
            }

            if point < span.start {
                result.push(text[cur_start..span.start].to_string());
                point = span.start;
                cur_start = point;
            }

            result.push(text[span.start..span.end].to_string());
            protect_idx += 1;

            if point < span.end {
                point = span.end;
            }
            cur_start = point.min(end);

            if cur_start >= end {
                break;
            }
        }

        if cur_start < end {
            result.push(text[cur_start..end].to_string());
            point = end;
        }

        start = end;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_protected_spans_returns_splits_unchanged() {
        let splits = vec!["hello ".to_string(), "world".to_string()];
        let result = splice(&splits, &[]);
        assert_eq!(result, splits);
    }

    #[test]
    fn protected_span_spanning_two_splits_is_reunited() {
        let text = "![alt](url)";
        let splits = vec![text[..4].to_string(), text[4..].to_string()];
        let protected = vec![ProtectedSpan {
            start: 0,
            end: text.len(),
        }];
        let result = splice(&splits, &protected);
        assert_eq!(result.concat(), text);
        assert!(result.contains(&text.to_string()));
    }

    #[test]
    fn protected_span_in_middle_of_single_split_is_separated() {
        let text = "before ![alt](url) after";
        let splits = vec![text.to_string()];
        let span_start = text.find("![alt](url)").unwrap();
        let span_end = span_start + "![alt](url)".len();
        let protected = vec![ProtectedSpan {
            start: span_start,
            end: span_end,
        }];
        let result = splice(&splits, &protected);
        assert_eq!(result.concat(), text);
        assert!(result.contains(&"![alt](url)".to_string()));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn span_spanning_three_splits_emits_full_content_once() {
        let text = "aa[[link-content]]bb";
        let span_start = text.find("[[link-content]]").unwrap();
        let span_end = span_start + "[[link-content]]".len();
        let protected = vec![ProtectedSpan {
            start: span_start,
            end: span_end,
        }];
        // Split into three pieces, the middle one entirely inside the span.
        let splits: Vec<String> = vec![
            text[..span_start + 3].to_string(),
            text[span_start + 3..span_start + 10].to_string(),
            text[span_start + 10..].to_string(),
        ];
        assert_eq!(splits.concat(), text);
        let result = splice(&splits, &protected);
        assert_eq!(result.concat(), text);
        assert_eq!(
            result.iter().filter(|p| p.as_str() == "[[link-content]]").count(),
            1
        );
    }

    #[test]
    fn multiple_protected_spans_across_many_splits() {
        let text = "a [one](1) b [two](2) c";
        let one_start = text.find("[one](1)").unwrap();
        let two_start = text.find("[two](2)").unwrap();
        let protected = vec![
            ProtectedSpan {
                start: one_start,
                end: one_start + "[one](1)".len(),
            },
            ProtectedSpan {
                start: two_start,
                end: two_start + "[two](2)".len(),
            },
        ];
        let splits: Vec<String> = vec![
            text[..3].to_string(),
            text[3..one_start + 4].to_string(),
            text[one_start + 4..two_start + 2].to_string(),
            text[two_start + 2..].to_string(),
        ];
        assert_eq!(splits.concat(), text);
        let result = splice(&splits, &protected);
        assert_eq!(result.concat(), text);
        assert!(result.contains(&"[one](1)".to_string()));
        assert!(result.contains(&"[two](2)".to_string()));
    }
}
