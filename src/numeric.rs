//! 허용오차 비교와 반올림 규칙.
//!
//! 치수 계열 경계값 판정은 부동소수 오차를 흡수하기 위해 모두 이 함수들을 거친다.
//! 반올림은 모두 짝수 반올림(round half to even)이다.

/// 비교 허용오차.
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

pub fn approx_lt(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

pub fn approx_le(a: f64, b: f64) -> bool {
    a < b || approx_eq(a, b)
}

pub fn approx_gt(a: f64, b: f64) -> bool {
    approx_lt(b, a)
}

pub fn approx_ge(a: f64, b: f64) -> bool {
    approx_le(b, a)
}

/// 정수로 짝수 반올림한다.
pub fn round_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// 소수점 `digits` 자리로 짝수 반올림한다.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

/// `multiple`의 배수 중 가장 가까운 값으로 반올림한다.
pub fn round_to_multiple(value: f64, multiple: f64) -> f64 {
    (value / multiple).round_ties_even() * multiple
}

/// 허용오차 안에서 다음 정수에 붙어 있는 값은 그 정수로 본다.
pub fn floor_tolerant(value: f64) -> f64 {
    (value + EPSILON).floor()
}

/// 허용오차 안에서 아래 정수에 붙어 있는 값은 그 정수로 본다.
pub fn ceil_tolerant(value: f64) -> f64 {
    (value - EPSILON).ceil()
}
