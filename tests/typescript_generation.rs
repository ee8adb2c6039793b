//! TypeScript Generation Tests
//!
//! Validates that the records a splits browser front end consumes can be
//! exported to TypeScript when the tauri feature is enabled.

#[cfg(feature = "tauri")]
#[test]
fn test_output_types_implement_specta_type() {
    use specta::Type;

    fn assert_type<T: Type>() {}

    // Time and result records
    assert_type::<splitscope::TimeValue>();
    assert_type::<splitscope::ResultStatus>();
    assert_type::<splitscope::Competitor>();
    assert_type::<splitscope::Owner>();
    assert_type::<splitscope::DubiousRange>();

    // Class set outputs
    assert_type::<splitscope::FastestSplit>();
    assert_type::<splitscope::ChartType>();
    assert_type::<splitscope::ChartData>();
    assert_type::<splitscope::DataColumn>();

    // Configuration
    assert_type::<splitscope::AnalysisConfig>();
    assert_type::<splitscope::RepairMode>();
}

#[cfg(not(feature = "tauri"))]
#[test]
fn test_tauri_feature_disabled() {
    // Types still compile and serialize without specta::Type.
    let _ = splitscope::ChartType::SplitsGraph;
    let _ = splitscope::RepairMode::default();
}
