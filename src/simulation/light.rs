//! Traffic light state machine
//!
//! A light owns the queue of vehicles on its approach and keeps running
//! statistics as vehicles depart.

use log::trace;

use super::error::SimulationError;
use super::queue::VehicleQueue;
use super::stats::{AveragingMode, LightStats};
use super::types::{LightStatus, Side, Vehicle};

/// Result of evaluating the controller for one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightChange {
    /// Colours swapped; the iteration carries no traffic
    Switched,
    /// Green light kept its colour and its timer was decremented
    Held,
}

/// One traffic light and its approach
#[derive(Debug, Clone)]
pub struct SimLight {
    pub side: Side,
    /// Iterations the light stays green per green phase
    pub period: u32,
    /// Countdown to the next switch, only decremented while green
    pub timer: u32,
    pub status: LightStatus,
    pub avg_wait: f64,
    pub max_wait: u64,
    /// Vehicles ever enqueued at this light
    pub vehicle_count: u64,
    /// Vehicles that have departed
    pub departures: u64,
    /// Post-arrival iterations during which the queue was occupied
    pub clearance_time: u64,
    pub queue: VehicleQueue,
}

impl SimLight {
    pub fn new(side: Side, period: u32, status: LightStatus) -> Self {
        Self {
            side,
            period,
            timer: period,
            status,
            avg_wait: 0.0,
            max_wait: 0,
            vehicle_count: 0,
            departures: 0,
            clearance_time: 0,
            queue: VehicleQueue::new(),
        }
    }

    pub fn is_green(&self) -> bool {
        self.status == LightStatus::Green
    }

    /// Advance the controller for this (green) light
    ///
    /// When the timer has run out the colours swap and the timer is reset to
    /// the period; otherwise the timer counts down by one.
    pub fn update(&mut self, other: &mut SimLight) -> LightChange {
        if self.timer == 0 {
            self.timer = self.period;
            self.status = LightStatus::Red;
            other.status = LightStatus::Green;
            trace!("{} light turned red, {} light turned green", self.side, other.side);
            LightChange::Switched
        } else {
            self.timer -= 1;
            LightChange::Held
        }
    }

    /// Queue a new vehicle that arrived at `iteration`
    pub fn enqueue(&mut self, iteration: u64) -> Result<(), SimulationError> {
        self.queue.enqueue(Vehicle::new(iteration))?;
        self.vehicle_count += 1;
        Ok(())
    }

    /// Let the front vehicle through and fold its wait into the statistics
    ///
    /// Returns the departed vehicle's wait, or `None` if the queue was empty.
    pub fn release_vehicle(&mut self, iteration: u64, mode: AveragingMode) -> Option<u64> {
        let vehicle = self.queue.dequeue()?;
        let wait = vehicle.wait_until(iteration);
        self.record_departure(wait, mode);
        Some(wait)
    }

    pub fn record_departure(&mut self, wait: u64, mode: AveragingMode) {
        self.departures += 1;
        self.avg_wait = mode.blend(self.avg_wait, wait as f64, self.departures);
        self.max_wait = self.max_wait.max(wait);
    }

    /// Count one clearance iteration if vehicles are still waiting
    pub fn note_clearance(&mut self) {
        if !self.queue.is_empty() {
            self.clearance_time += 1;
        }
    }

    pub fn stats(&self) -> LightStats {
        LightStats {
            avg_wait: self.avg_wait,
            max_wait: self.max_wait,
            vehicle_count: self.vehicle_count,
            clearance_time: self.clearance_time,
        }
    }
}
