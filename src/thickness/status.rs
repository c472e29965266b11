use serde::Serialize;

/// 위치별 상태 등급. 선언 순서가 심각도 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Good,
    Caution,
    Monitor,
    Critical,
}

impl StatusTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTier::Good => "good",
            StatusTier::Caution => "caution",
            StatusTier::Monitor => "monitor",
            StatusTier::Critical => "critical",
        }
    }
}

/// 부식률(mils/yr) 기준 등급: >10 critical, >5 monitor, >2 caution.
pub fn tier_from_rate_mpy(mils_per_year: f64) -> StatusTier {
    if mils_per_year > 10.0 {
        StatusTier::Critical
    } else if mils_per_year > 5.0 {
        StatusTier::Monitor
    } else if mils_per_year > 2.0 {
        StatusTier::Caution
    } else {
        StatusTier::Good
    }
}

/// 잔여수명 기준 등급: <2년 critical, <5년 monitor.
pub fn tier_from_remaining_life(years: f64) -> StatusTier {
    if years < 2.0 {
        StatusTier::Critical
    } else if years < 5.0 {
        StatusTier::Monitor
    } else {
        StatusTier::Good
    }
}

/// 두 신호 중 더 심각한 쪽을 택한다. 신호가 하나도 없으면 `None`.
pub fn combined_tier(rate_mpy: Option<f64>, remaining_life_years: Option<f64>) -> Option<StatusTier> {
    let by_rate = rate_mpy.map(tier_from_rate_mpy);
    let by_life = remaining_life_years.map(tier_from_remaining_life);
    by_rate.into_iter().chain(by_life).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_severe_signal_wins() {
        assert_eq!(combined_tier(Some(1.0), Some(1.5)), Some(StatusTier::Critical));
        assert_eq!(combined_tier(Some(6.0), Some(30.0)), Some(StatusTier::Monitor));
        assert_eq!(combined_tier(None, None), None);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(tier_from_rate_mpy(10.0), StatusTier::Monitor);
        assert_eq!(tier_from_rate_mpy(2.0), StatusTier::Good);
        assert_eq!(tier_from_remaining_life(5.0), StatusTier::Good);
        assert_eq!(tier_from_remaining_life(2.0), StatusTier::Monitor);
    }
}
