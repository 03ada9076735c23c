//! 계산 과정 기록.
//!
//! 계산 단계마다 (이름, 값, 단위)를 순서대로 남긴다. 문자열 가공은 하지 않으며
//! 표시 형식은 출력 계층이 정한다.

use tracing::trace;

/// 기록 값의 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceUnit {
    Meter,
    Kilogram,
    NewtonMeter,
    Count,
    SizeClass,
    Ratio,
}

impl TraceUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TraceUnit::Meter => "m",
            TraceUnit::Kilogram => "kg",
            TraceUnit::NewtonMeter => "N·m",
            TraceUnit::Count => "pcs",
            TraceUnit::SizeClass => "",
            TraceUnit::Ratio => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub name: &'static str,
    pub value: f64,
    pub unit: TraceUnit,
}

/// 순서가 보존되는 계산 기록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcTrace {
    steps: Vec<TraceStep>,
}

impl CalcTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단계를 기록하고 값을 그대로 돌려준다.
    pub fn record(&mut self, name: &'static str, value: f64, unit: TraceUnit) -> f64 {
        trace!(step = name, value, unit = unit.symbol(), "calculation step");
        self.steps.push(TraceStep { name, value, unit });
        value
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// 같은 이름이 여러 번 기록되었다면 마지막 값을 돌려준다.
    pub fn find(&self, name: &str) -> Option<f64> {
        self.steps
            .iter()
            .rev()
            .find(|step| step.name == name)
            .map(|step| step.value)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
