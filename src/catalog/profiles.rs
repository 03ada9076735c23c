/// 필터 프로파일 카탈로그.
///
/// 형상계수는 Kirschmer 손실식에 쓰이는 값이며, 질량은 그레이트 높이 호칭에
/// 대한 선형 회귀식(`mass_slope * gs + mass_intercept`, kg/본)으로 주어진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterProfile {
    pub name: &'static str,
    /// 프로파일 두께 [m]
    pub width: f64,
    /// true면 삽입식, false면 용접식 캔버스
    pub is_removable: bool,
    pub shape_factor: f64,
    pub mass_slope: f64,
    pub mass_intercept: f64,
}

impl FilterProfile {
    pub const fn new(
        name: &'static str,
        width: f64,
        is_removable: bool,
        shape_factor: f64,
        mass_slope: f64,
        mass_intercept: f64,
    ) -> Self {
        Self {
            name,
            width,
            is_removable,
            shape_factor,
            mass_slope,
            mass_intercept,
        }
    }

    /// 그레이트 높이 호칭에 대한 프로파일 1본의 질량 [kg].
    pub fn mass(&self, grate_height_class: i32) -> f64 {
        self.mass_slope * f64::from(grate_height_class) + self.mass_intercept
    }
}

pub fn profiles() -> &'static [FilterProfile] {
    PROFILES
}

pub fn find_profile(name: &str) -> Option<&'static FilterProfile> {
    PROFILES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

// 두께 : 형상계수 (Kiryanova 표) 5.5 : 0.95, 8 : 0.95, 9.5 : 1.5, 6 : 2.42
const PROFILES: &[FilterProfile] = &[
    FilterProfile::new("3999", 0.0095, false, 1.5, 0.1167, -0.13),
    FilterProfile::new("341", 0.0055, false, 0.95, 0.0939, -0.1067),
    FilterProfile::new("777", 0.0078, false, 0.95, 0.1887, -0.194),
    FilterProfile::new("1492", 0.008, true, 0.95, 0.2481, -0.4829),
    FilterProfile::new("6x30", 0.006, false, 2.42, 0.144, -0.158),
    FilterProfile::new("6x60", 0.006, true, 2.42, 0.2881, -0.5529),
];
