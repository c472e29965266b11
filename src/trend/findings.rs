use chrono::NaiveDate;
use serde::Serialize;

use crate::outcome::CalcResult;

use super::snapshot::{validate_sequence, Finding, InspectionSnapshot};

/// 두 지적 사항이 같은 문제인지 판단하는 전략.
pub trait FindingMatcher {
    fn is_same(&self, a: &Finding, b: &Finding) -> bool;
}

/// 같은 섹션 + 같은 유형 + 정규화한 설명 앞부분이 같거나 서로 포함하면 같은 지적으로 본다.
///
/// 근사 판정이다. 더 강한 유사도 척도가 필요하면 `FindingMatcher`를 따로 구현한다.
#[derive(Debug, Clone, Copy)]
pub struct PrefixSimilarityMatcher {
    pub prefix_chars: usize,
}

impl Default for PrefixSimilarityMatcher {
    fn default() -> Self {
        Self { prefix_chars: 50 }
    }
}

impl FindingMatcher for PrefixSimilarityMatcher {
    fn is_same(&self, a: &Finding, b: &Finding) -> bool {
        if normalize(&a.section) != normalize(&b.section) {
            return false;
        }
        if normalize(&a.finding_type) != normalize(&b.finding_type) {
            return false;
        }
        let pa: String = normalize(&a.description).chars().take(self.prefix_chars).collect();
        let pb: String = normalize(&b.description).chars().take(self.prefix_chars).collect();
        pa == pb || pa.contains(&pb) || pb.contains(&pa)
    }
}

fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    /// 최신 검사에만 있음
    New,
    /// 이전 검사에만 있고 최신 검사에 없음
    Resolved,
    /// 두 번 이상의 검사에 나타나고 최신 검사에도 있음
    Recurring,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingComparison {
    pub finding: Finding,
    pub status: FindingStatus,
    /// 해당 지적이 나타난 검사 수
    pub occurrences: usize,
    pub first_seen: NaiveDate,
}

/// 최신 검사와 이전 검사들의 지적 사항을 비교해 신규/해소/반복으로 분류한다.
pub fn compare_findings(
    snapshots: &[InspectionSnapshot],
    matcher: &dyn FindingMatcher,
) -> CalcResult<Vec<FindingComparison>> {
    validate_sequence(snapshots)?;
    let (latest, earlier) = match snapshots.split_last() {
        Some(parts) => parts,
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    for finding in &latest.findings {
        let seen_in: Vec<&InspectionSnapshot> = earlier
            .iter()
            .filter(|s| s.findings.iter().any(|e| matcher.is_same(finding, e)))
            .collect();
        let occurrences = 1 + seen_in.len();
        let first_seen = seen_in
            .first()
            .map_or(latest.inspection_date, |s| s.inspection_date);
        out.push(FindingComparison {
            finding: finding.clone(),
            status: if occurrences >= 2 {
                FindingStatus::Recurring
            } else {
                FindingStatus::New
            },
            occurrences,
            first_seen,
        });
    }

    let mut resolved: Vec<FindingComparison> = Vec::new();
    for snapshot in earlier {
        for finding in &snapshot.findings {
            if latest.findings.iter().any(|l| matcher.is_same(finding, l)) {
                continue;
            }
            // 같은 검사 안의 중복 지적은 한 번만 센다.
            let already_counted = snapshot
                .findings
                .iter()
                .take_while(|f| !std::ptr::eq(*f, finding))
                .any(|f| matcher.is_same(f, finding));
            if let Some(existing) = resolved
                .iter_mut()
                .find(|r| matcher.is_same(&r.finding, finding))
            {
                if !already_counted {
                    existing.occurrences += 1;
                }
                continue;
            }
            resolved.push(FindingComparison {
                finding: finding.clone(),
                status: FindingStatus::Resolved,
                occurrences: 1,
                first_seen: snapshot.inspection_date,
            });
        }
    }
    out.extend(resolved);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(section: &str, kind: &str, text: &str) -> Finding {
        Finding {
            section: section.into(),
            finding_type: kind.into(),
            description: text.into(),
        }
    }

    #[test]
    fn normalization_ignores_case_and_punctuation() {
        assert_eq!(normalize("  Pitting, near   N2-nozzle! "), "pitting near n2 nozzle");
    }

    #[test]
    fn prefix_containment_matches() {
        let m = PrefixSimilarityMatcher::default();
        let a = finding("Shell", "Corrosion", "Pitting near N2 nozzle");
        let b = finding("shell", "corrosion", "Pitting near N2 nozzle, 0.040 in deep, 3 pits");
        assert!(m.is_same(&a, &b));
        let c = finding("Head", "Corrosion", "Pitting near N2 nozzle");
        assert!(!m.is_same(&a, &c));
    }
}
