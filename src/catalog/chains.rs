/// 소형 구조 체인 길이 [m] (높이 호칭별).
pub const SMALL_CHAIN_LENGTHS: &[(i32, f64)] = &[
    (3, 3.528),
    (6, 4.032),
    (9, 4.662),
    (12, 5.292),
    (15, 5.922),
];

pub fn small_chain_length(height_class: i32) -> Option<f64> {
    SMALL_CHAIN_LENGTHS
        .iter()
        .find(|(hs, _)| *hs == height_class)
        .map(|(_, length)| *length)
}
