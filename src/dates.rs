//! 검사일 간 경과 연수 계산.

use chrono::{Datelike, Months, NaiveDate};

/// 두 날짜 사이의 경과 연수를 계산한다.
///
/// 기념일 단위로 온전한 연수를 센 뒤, 남은 일수를 다음 기념일까지의 일수(365 또는 366)로
/// 나눈다. 2023-03-15 → 2024-03-15는 정확히 1.0년이다. `to`가 앞서면 음수를 돌려준다.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    if to < from {
        return -years_between(to, from);
    }
    let mut whole = (to.year() - from.year()).max(0) as u32;
    let mut anchor = add_years(from, whole);
    while whole > 0 && anchor > to {
        whole -= 1;
        anchor = add_years(from, whole);
    }
    let next = add_years(from, whole + 1);
    let span = (next - anchor).num_days();
    let rest = (to - anchor).num_days();
    if span <= 0 {
        return whole as f64;
    }
    whole as f64 + rest as f64 / span as f64
}

// 2/29 기준일은 평년에 2/28로 맞춰진다.
fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn anniversaries_are_whole_years() {
        assert_eq!(years_between(d(2021, 6, 1), d(2022, 6, 1)), 1.0);
        assert_eq!(years_between(d(2020, 1, 10), d(2022, 1, 10)), 2.0);
        // 윤년을 걸쳐도 정확히 1년
        assert_eq!(years_between(d(2023, 3, 1), d(2024, 3, 1)), 1.0);
    }

    #[test]
    fn partial_year_and_reverse() {
        let half = years_between(d(2023, 1, 1), d(2023, 7, 2));
        assert!((half - 182.0 / 365.0).abs() < 1e-12);
        assert_eq!(years_between(d(2022, 6, 1), d(2021, 6, 1)), -1.0);
        assert_eq!(years_between(d(2022, 6, 1), d(2022, 6, 1)), 0.0);
    }

    #[test]
    fn leap_day_anchor() {
        let y = years_between(d(2020, 2, 29), d(2021, 2, 28));
        assert_eq!(y, 1.0);
    }
}
