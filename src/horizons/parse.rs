use crate::error::BodyError;

/// One raw state row extracted from the ephemeris block: x, y, z, vx, vy, vz.
pub type RawState = [f64; 6];

/// Extract state vectors from a Horizons text response.
///
/// The data block sits between the `$$SOE` and `$$EOE` markers. With
/// `VEC_TABLE=3` each state row carries at least six numeric fields
/// (x, y, z in km then vx, vy, vz in km/s); epoch lines and other header
/// noise inside the block carry labels and are skipped.
///
/// A line inside the block made of numbers only but with fewer than six of
/// them is a truncated record and fails the whole body.
pub fn parse_vector_table(body: &str, text: &str) -> Result<Vec<RawState>, BodyError> {
    let mut rows = Vec::new();
    let mut in_data = false;

    for (line_no, line) in text.lines().enumerate() {
        if line.contains("$$SOE") {
            in_data = true;
            continue;
        }
        if line.contains("$$EOE") {
            break;
        }
        if !in_data {
            continue;
        }

        match classify_line(line) {
            LineKind::State(values) => rows.push(values),
            LineKind::Noise => {}
            LineKind::Truncated(count) => {
                return Err(BodyError::MalformedRow {
                    body: body.to_string(),
                    line: line_no + 1,
                    reason: format!("expected 6 numeric fields, found {}", count),
                });
            }
        }
    }

    Ok(rows)
}

enum LineKind {
    /// A full state row (first six numeric fields).
    State(RawState),
    /// Epoch line, label line, or blank; not a data record.
    Noise,
    /// Numbers only, but fewer than six of them.
    Truncated(usize),
}

fn classify_line(line: &str) -> LineKind {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return LineKind::Noise;
    }

    let mut values = Vec::with_capacity(tokens.len());
    let mut all_numeric = true;
    for token in &tokens {
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => all_numeric = false,
        }
    }

    if values.len() >= 6 {
        let mut row = [0.0; 6];
        row.copy_from_slice(&values[..6]);
        LineKind::State(row)
    } else if all_numeric {
        LineKind::Truncated(values.len())
    } else {
        // Labelled line (epoch, units, ...) — not a state record.
        LineKind::Noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = "\
*******************************************************************************
Ephemeris / API_USER
$$SOE
2460676.500000000 = A.D. 2025-Jan-01 00:00:00.0000 TDB
-2.48e7 1.44e8 -1.7e3 -29.8 -5.2 0.001
2460677.500000000 = A.D. 2025-Jan-02 00:00:00.0000 TDB
-2.73e7 1.43e8 -1.6e3 -29.6 -5.7 0.001
$$EOE
*******************************************************************************";

    #[test]
    fn test_extracts_state_rows() {
        let rows = parse_vector_table("Earth", SAMPLE_RESPONSE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], [-2.48e7, 1.44e8, -1.7e3, -29.8, -5.2, 0.001]);
        assert_eq!(rows[1][3], -29.6);
    }

    #[test]
    fn test_skips_epoch_lines() {
        // Epoch lines carry "A.D." and "TDB" labels; they must not be
        // mistaken for truncated records.
        let text = "$$SOE\n2460676.5 = A.D. 2025-Jan-01 00:00:00.0000 TDB\n$$EOE";
        let rows = parse_vector_table("Earth", text).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_block_yields_no_rows() {
        let rows = parse_vector_table("Mars", "$$SOE\n$$EOE").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_markers_yields_no_rows() {
        let rows = parse_vector_table("Mars", "no data here").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_truncated_row_is_malformed() {
        let text = "$$SOE\n1.0 2.0 3.0\n$$EOE";
        let err = parse_vector_table("Europa", text).unwrap_err();
        match err {
            BodyError::MalformedRow { body, line, reason } => {
                assert_eq!(body, "Europa");
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_scientific_notation_counts_as_numeric() {
        // "E+07" style tokens parse as f64 and must not be treated as labels.
        let text = "$$SOE\n-2.48E+07 1.44E+08 -1.7E+03 -2.98E+01 -5.2E+00 1.0E-03\n$$EOE";
        let rows = parse_vector_table("Earth", text).unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0][0] + 2.48e7).abs() < 1.0);
    }

    #[test]
    fn test_comma_separated_fields() {
        let text = "$$SOE\n-2.48e7, 1.44e8, -1.7e3, -29.8, -5.2, 0.001,\n$$EOE";
        let rows = parse_vector_table("Earth", text).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_extra_fields_ignored() {
        // Some table layouts append range/light-time columns; only the first
        // six numbers matter.
        let text = "$$SOE\n1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0\n$$EOE";
        let rows = parse_vector_table("Earth", text).unwrap();
        assert_eq!(rows, vec![[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]]);
    }
}
