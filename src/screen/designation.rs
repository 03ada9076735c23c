//! 형식 기호(호칭) 문자열.
//!
//! `РКЭ 1612(0015).1492.10` 처럼 구조 기호, 폭/높이 호칭, 괄호 안의 수로 폭/그레이트
//! 호칭(스크린 호칭과 다를 때만), 프로파일 이름, 공칭 간격 [mm] 순으로 붙인다.

use std::fmt::Write;

use crate::catalog::Construction;
use crate::numeric::round_to;

/// 호칭 구성 요소.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignationParts<'a> {
    pub construction: Construction,
    pub width_class: i32,
    pub height_class: i32,
    pub channel_width_class: i32,
    pub grate_height_class: i32,
    pub profile_name: &'a str,
    /// 공칭 간격 [m]
    pub gap: f64,
}

/// 스크린 호칭과 같으면 "00"으로 적는다.
fn override_slot(out: &mut String, value: i32, screen_value: i32) {
    if value == screen_value {
        out.push_str("00");
    } else {
        let _ = write!(out, "{value:02}");
    }
}

/// 형식 기호 문자열을 만든다.
pub fn format_designation(parts: &DesignationParts<'_>) -> String {
    let mut out = format!(
        "{} {:02}{:02}",
        parts.construction.abbreviation(),
        parts.width_class,
        parts.height_class
    );
    if parts.channel_width_class != parts.width_class
        || parts.grate_height_class != parts.height_class
    {
        out.push('(');
        override_slot(&mut out, parts.channel_width_class, parts.width_class);
        override_slot(&mut out, parts.grate_height_class, parts.height_class);
        out.push(')');
    }
    // 10.0 -> "10", 5.5 -> "5.5"
    let gap_mm = round_to(parts.gap * 1000.0, 3);
    let _ = write!(out, ".{}.{}", parts.profile_name, gap_mm);
    out
}
