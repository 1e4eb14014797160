use crate::models::{ProjectInput, ProjectRecord};

/// Lines of code treated as one unit of invested time.
const LOC_PER_TIME_UNIT: f64 = 500.0;

/// Fills zero-valued raw metrics from the structural stats carried on the
/// input record:
///
/// - time: LOC / 500, floored at 1
/// - success: 5 points per file plus LOC / 200, capped at 100, rescaled to [0, 1]
/// - contribution: reciprocal of the contributor count; 1.0 when unknown
///
/// Metrics the caller supplied (non-zero) are left untouched. Opt-in via
/// configuration — with inference off, missing metrics stay at their zero
/// defaults.
pub fn infer_structural_metrics(record: &mut ProjectRecord, input: &ProjectInput) {
    if record.time_spent == 0.0 {
        record.time_spent = (input.lines_of_code / LOC_PER_TIME_UNIT).max(1.0);
    }
    if record.success_score == 0.0 {
        let raw = input.file_count * 5.0 + input.lines_of_code / 200.0;
        record.success_score = raw.min(100.0) / 100.0;
    }
    if record.contribution_score == 0.0 {
        record.contribution_score = if input.contributors.is_empty() {
            1.0
        } else {
            1.0 / input.contributors.len() as f64
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(input: &ProjectInput) -> ProjectRecord {
        ProjectRecord::from(input)
    }

    #[test]
    fn test_time_inferred_from_lines_of_code() {
        let input = ProjectInput {
            lines_of_code: 1000.0,
            ..ProjectInput::default()
        };
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.time_spent, 2.0);
    }

    #[test]
    fn test_time_floored_at_one_unit() {
        let input = ProjectInput::default();
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.time_spent, 1.0);
    }

    #[test]
    fn test_success_from_files_and_loc() {
        let input = ProjectInput {
            file_count: 4.0,
            lines_of_code: 2000.0,
            ..ProjectInput::default()
        };
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        // (4*5 + 2000/200) / 100 = 0.3
        assert!((record.success_score - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_success_capped_at_one() {
        let input = ProjectInput {
            file_count: 100.0,
            lines_of_code: 50_000.0,
            ..ProjectInput::default()
        };
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.success_score, 1.0);
    }

    #[test]
    fn test_contribution_is_reciprocal_of_contributors() {
        let input = ProjectInput {
            contributors: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..ProjectInput::default()
        };
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.contribution_score, 0.25);
    }

    #[test]
    fn test_contribution_defaults_to_sole_author() {
        let input = ProjectInput::default();
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.contribution_score, 1.0);
    }

    #[test]
    fn test_caller_supplied_metrics_untouched() {
        let input = ProjectInput {
            time_spent: 7.0,
            success_score: 0.5,
            contribution_score: 0.9,
            lines_of_code: 10_000.0,
            file_count: 50.0,
            contributors: vec!["a".into(), "b".into()],
            ..ProjectInput::default()
        };
        let mut record = record_from(&input);
        infer_structural_metrics(&mut record, &input);
        assert_eq!(record.time_spent, 7.0);
        assert_eq!(record.success_score, 0.5);
        assert_eq!(record.contribution_score, 0.9);
    }
}
