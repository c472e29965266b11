//! FFS(API 579 형식) Level 1 선별 평가.
//! 전면 감육, 국부 감육, 균열형 결함. 각각 독립적인 순수 함수다.

pub mod crack;
pub mod general;
pub mod local;
pub mod verdict;

use serde::Serialize;

pub use crack::{assess_crack, CrackInput};
pub use general::{assess_general_metal_loss, GeneralMetalLossInput};
pub use local::{assess_local_metal_loss, folias_factor, LocalMetalLossInput};
pub use verdict::{Verdict, VerdictBands, CRACK_BANDS, METAL_LOSS_BANDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    GeneralMetalLoss,
    LocalMetalLoss,
    Crack,
}

/// 평가 종류별 중간값.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssessmentDetails {
    GeneralMetalLoss {
        thickness_ratio: f64,
        pressure_ratio: f64,
    },
    LocalMetalLoss {
        folias_factor: f64,
        depth_ratio: f64,
        applied_stress_psi: f64,
        allowable_stress_psi: f64,
    },
    Crack {
        applied_stress_intensity: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FfsAssessmentResult {
    pub kind: AssessmentKind,
    pub safety_factor: f64,
    pub verdict: Verdict,
    pub details: AssessmentDetails,
}
