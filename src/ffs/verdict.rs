use serde::Serialize;

/// FFS 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Acceptable,
    AcceptableWithMonitoring,
    Monitor,
    NotAcceptable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Acceptable => "acceptable",
            Verdict::AcceptableWithMonitoring => "acceptable-with-monitoring",
            Verdict::Monitor => "monitor",
            Verdict::NotAcceptable => "not-acceptable",
        }
    }
}

/// 안전계수 판정 구간. 각 값은 해당 판정의 하한(포함)이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictBands {
    pub monitor_from: f64,
    pub with_monitoring_from: f64,
    pub acceptable_from: f64,
}

/// 전면/국부 감육: <1.0 불가, [1.0,1.5) 긴급 감시, [1.5,2.0) 감시 조건부 허용, ≥2.0 허용.
pub const METAL_LOSS_BANDS: VerdictBands = VerdictBands {
    monitor_from: 1.0,
    with_monitoring_from: 1.5,
    acceptable_from: 2.0,
};

/// 균열: <1.0 불가, [1.0,2.0) 감시, [2.0,3.0) 감시 조건부 허용, ≥3.0 허용.
pub const CRACK_BANDS: VerdictBands = VerdictBands {
    monitor_from: 1.0,
    with_monitoring_from: 2.0,
    acceptable_from: 3.0,
};

impl VerdictBands {
    pub fn classify(&self, safety_factor: f64) -> Verdict {
        if safety_factor >= self.acceptable_from {
            Verdict::Acceptable
        } else if safety_factor >= self.with_monitoring_from {
            Verdict::AcceptableWithMonitoring
        } else if safety_factor >= self.monitor_from {
            Verdict::Monitor
        } else {
            Verdict::NotAcceptable
        }
    }
}
