//! Validated simulation parameters

use super::error::SimulationError;
use super::stats::AveragingMode;
use super::types::Side;

/// Arrival rate and light period for both approaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimParams {
    pub arrival_rate_left: u8,
    pub period_left: u32,
    pub arrival_rate_right: u8,
    pub period_right: u32,
}

impl SimParams {
    /// Build parameters from raw integers, rejecting anything out of range
    pub fn new(
        arrival_rate_left: i64,
        period_left: i64,
        arrival_rate_right: i64,
        period_right: i64,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            arrival_rate_left: arrival_rate("arrival rate (left)", arrival_rate_left)?,
            period_left: period("light period (left)", period_left)?,
            arrival_rate_right: arrival_rate("arrival rate (right)", arrival_rate_right)?,
            period_right: period("light period (right)", period_right)?,
        })
    }

    pub fn arrival_rate(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.arrival_rate_left,
            Side::Right => self.arrival_rate_right,
        }
    }

    pub fn period(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.period_left,
            Side::Right => self.period_right,
        }
    }
}

fn arrival_rate(field: &'static str, value: i64) -> Result<u8, SimulationError> {
    if !(0..=100).contains(&value) {
        return Err(SimulationError::invalid(
            field,
            format!("{value} is not a percentage between 0 and 100"),
        ));
    }
    u8::try_from(value).map_err(|e| SimulationError::invalid(field, e.to_string()))
}

fn period(field: &'static str, value: i64) -> Result<u32, SimulationError> {
    if value < 1 {
        return Err(SimulationError::invalid(
            field,
            format!("{value} must be at least 1 iteration"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| SimulationError::invalid(field, format!("{value} is too large")))
}

/// Knobs that apply to every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub averaging: AveragingMode,
    /// Clearance-phase iterations after which a run is abandoned
    ///
    /// Unbounded by default: the green light always switches within
    /// `period + 1` iterations, so every run drains on its own.
    pub max_clearance: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            averaging: AveragingMode::Halving,
            max_clearance: None,
        }
    }
}

impl RunOptions {
    pub fn new(
        averaging: AveragingMode,
        max_clearance: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if max_clearance == Some(0) {
            return Err(SimulationError::invalid(
                "max clearance",
                "must allow at least one clearance iteration",
            ));
        }
        Ok(Self {
            averaging,
            max_clearance,
        })
    }
}
