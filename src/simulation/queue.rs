//! FIFO queue of vehicles waiting at a light

use std::collections::VecDeque;

use super::error::SimulationError;
use super::types::Vehicle;

/// Vehicles waiting at one light, front of the queue first
#[derive(Debug, Clone, Default)]
pub struct VehicleQueue {
    vehicles: VecDeque<Vehicle>,
}

impl VehicleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle to the back of the queue
    ///
    /// Storage is reserved fallibly so that running out of memory surfaces as
    /// `AllocationFailure` instead of aborting the process.
    pub fn enqueue(&mut self, vehicle: Vehicle) -> Result<(), SimulationError> {
        self.vehicles
            .try_reserve(1)
            .map_err(|e| SimulationError::AllocationFailure(e.to_string()))?;
        self.vehicles.push_back(vehicle);
        Ok(())
    }

    /// Remove the vehicle at the front of the queue
    pub fn dequeue(&mut self) -> Option<Vehicle> {
        self.vehicles.pop_front()
    }

    pub fn peek(&self) -> Option<&Vehicle> {
        self.vehicles.front()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}
