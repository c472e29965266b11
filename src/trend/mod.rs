//! 2~5회 검사 기록에 걸친 추세 분석.
//! 두께 추세, 지적 사항 비교, 부재 열화 가속도를 한 번에 산출한다.

pub mod degradation;
pub mod findings;
pub mod snapshot;
pub mod thickness;

use serde::Serialize;

use crate::outcome::CalcResult;

pub use degradation::{
    classify_acceleration, component_degradation, ComponentDegradation, DegradationTrend,
};
pub use findings::{
    compare_findings, FindingComparison, FindingMatcher, FindingStatus, PrefixSimilarityMatcher,
};
pub use snapshot::{validate_sequence, ComponentRecord, Finding, InspectionSnapshot};
pub use thickness::{thickness_trends, ThicknessTrend};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub thickness: Vec<ThicknessTrend>,
    pub findings: Vec<FindingComparison>,
    pub degradation: Vec<ComponentDegradation>,
}

/// 검사 순서를 먼저 검증한 뒤 세 가지 추세를 모두 계산한다.
pub fn analyze_trends(
    snapshots: &[InspectionSnapshot],
    matcher: &dyn FindingMatcher,
) -> CalcResult<TrendReport> {
    validate_sequence(snapshots)?;
    Ok(TrendReport {
        thickness: thickness_trends(snapshots)?,
        findings: compare_findings(snapshots, matcher)?,
        degradation: component_degradation(snapshots)?,
    })
}
