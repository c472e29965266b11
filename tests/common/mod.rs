//! 통합 테스트 공용 헬퍼.
#![allow(dead_code)]

use chrono::NaiveDate;

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
