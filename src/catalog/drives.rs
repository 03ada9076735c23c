//! 감속모터 및 과부하 스프링 카탈로그. 각 세트는 정격 토크 오름차순이다.

use super::Construction;

const RPM: f64 = std::f64::consts::PI / 30.0;

/// 감속모터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveUnit {
    pub designation: &'static str,
    /// 질량 [kg]
    pub mass: f64,
    /// 출력 [W]
    pub power: f64,
    /// 출력 토크 [N·m]
    pub torque: f64,
    /// 출력축 회전속도 [rad/s]
    pub speed: f64,
}

impl DriveUnit {
    /// 회전속도 [rpm].
    pub fn speed_rpm(&self) -> f64 {
        self.speed / RPM
    }
}

/// 감속모터와 짝을 이루는 예압 스프링.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub designation: &'static str,
    /// 스프링 상수 [N/m]
    pub rate: f64,
}

/// 카탈로그 한 줄: 감속모터 + 스프링.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveOption {
    pub drive: DriveUnit,
    pub spring: Spring,
}

/// 구조 형식에 맞는 카탈로그를 정격 토크 오름차순으로 반환한다.
pub fn drive_catalog(construction: Construction) -> &'static [DriveOption] {
    match construction {
        Construction::Small => SMALL_DRIVES,
        Construction::Large => LARGE_DRIVES,
    }
}

const SMALL_DRIVES: &[DriveOption] = &[DriveOption {
    drive: DriveUnit {
        designation: "SK 12080 AZBHVL-63LP/4",
        mass: 35.0,
        power: 180.0,
        torque: 244.0,
        speed: 4.8 * RPM,
    },
    spring: Spring {
        designation: "1L38151 IMPEX-READY s.c.",
        rate: 16.3e3,
    },
}];

const LARGE_DRIVES: &[DriveOption] = &[
    DriveOption {
        drive: DriveUnit {
            designation: "SK 32100 AZBHVL-71LP/4",
            mass: 64.0,
            power: 370.0,
            torque: 826.0,
            speed: 2.2 * RPM,
        },
        spring: Spring {
            designation: "1S51151 IMPEX-READY s.c.",
            rate: 60e3,
        },
    },
    DriveOption {
        drive: DriveUnit {
            designation: "SK 32100 AZBHVL-80LP/4",
            mass: 67.0,
            power: 750.0,
            torque: 1663.0,
            speed: 2.2 * RPM,
        },
        spring: Spring {
            designation: "3S51126 IMPEX-READY s.c.",
            rate: 154e3,
        },
    },
    DriveOption {
        drive: DriveUnit {
            designation: "SK 43125 AZBHVL-90SP/4",
            mass: 129.0,
            power: 1100.0,
            torque: 3052.0,
            speed: 2.4 * RPM,
        },
        spring: Spring {
            designation: "4S63151 IMPEX-READY s.c.",
            rate: 396e3,
        },
    },
    DriveOption {
        drive: DriveUnit {
            designation: "SK 9053.1 AZBH-90SP/4",
            mass: 214.0,
            power: 1100.0,
            torque: 4265.0,
            speed: 2.5 * RPM,
        },
        spring: Spring {
            designation: "4S63151 IMPEX-READY s.c.",
            rate: 801e3,
        },
    },
];
