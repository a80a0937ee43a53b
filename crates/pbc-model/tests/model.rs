use pbc_model::{
    AccountingStandard, AuditType, BatchSummary, CategoryAssignment, ClassifierOptions,
    ConfidenceLevel, ConfidenceThreshold, MappingResult, MatchMethod, Resolution,
};

fn result(level: ConfidenceLevel, score: f64) -> MappingResult {
    let category = if level == ConfidenceLevel::Low {
        CategoryAssignment::Unmapped
    } else {
        CategoryAssignment::Mapped("Cash on Hand".to_string())
    };
    MappingResult::new(
        1,
        "Cash",
        Resolution {
            category,
            confidence_score: score,
            confidence_level: level,
            match_method: MatchMethod::Keyword,
            matched_term: String::new(),
        },
    )
}

#[test]
fn summary_counts_levels_and_success_rate() {
    let mut results = Vec::new();
    results.extend((0..6).map(|_| result(ConfidenceLevel::High, 90.0)));
    results.extend((0..2).map(|_| result(ConfidenceLevel::Medium, 70.0)));
    results.extend((0..2).map(|_| result(ConfidenceLevel::Low, 20.0)));

    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.total_ledgers, 10);
    assert_eq!(summary.high_confidence_count, 6);
    assert_eq!(summary.medium_confidence_count, 2);
    assert_eq!(summary.low_confidence_count, 2);
    assert_eq!(summary.success_rate, 80.0);
    assert_eq!(summary.average_confidence_score, 72.0);
    assert_eq!(summary.needs_review(), 2);
}

#[test]
fn empty_results_give_zero_summary() {
    let summary = BatchSummary::from_results(&[]);
    assert_eq!(summary, BatchSummary::default());
    assert_eq!(summary.success_rate, 0.0);
}

#[test]
fn summary_rounds_to_two_decimals() {
    let results = vec![
        result(ConfidenceLevel::High, 80.0),
        result(ConfidenceLevel::Low, 10.0),
        result(ConfidenceLevel::Low, 10.0),
    ];
    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.success_rate, 33.33);
    assert_eq!(summary.average_confidence_score, 33.33);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ClassifierOptions = serde_json::from_str(r#"{"audit_type":"Tax"}"#).unwrap();
    assert_eq!(options.audit_type, AuditType::Tax);
    assert_eq!(options.accounting_standard, AccountingStandard::IndianGaap);
    assert_eq!(options.threshold.value(), 60);
}

#[test]
fn options_reject_out_of_range_threshold() {
    let parsed: Result<ClassifierOptions, _> = serde_json::from_str(r#"{"threshold":250}"#);
    assert!(parsed.is_err());

    let options = ClassifierOptions::new()
        .with_accounting_standard(AccountingStandard::IndAs)
        .with_threshold(ConfidenceThreshold::new(75).unwrap());
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"Ind AS\""));
    assert!(json.contains("\"threshold\":75"));
}
