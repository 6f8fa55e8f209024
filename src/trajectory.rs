//! Trajectory generators
//!
//! A trajectory is a finite, lazily evaluated sequence of vehicle states
//! indexed by step. The send loop only sees the [`Trajectory`] trait, so
//! new flight shapes plug in without touching the loop.

use crate::types::VehicleState;

/// Finite sequence of vehicle states
pub trait Trajectory {
    /// Number of states in the sequence
    fn len(&self) -> usize;

    /// State at `step`. Only meaningful for `step < len()`.
    fn state_at(&self, step: usize) -> VehicleState;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy iterator over all states
    fn states(&self) -> TrajectoryIter<'_, Self>
    where
        Self: Sized,
    {
        TrajectoryIter {
            trajectory: self,
            step: 0,
        }
    }
}

impl<T: Trajectory + ?Sized> Trajectory for Box<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn state_at(&self, step: usize) -> VehicleState {
        (**self).state_at(step)
    }
}

/// Iterator produced by [`Trajectory::states`]
pub struct TrajectoryIter<'a, T: Trajectory + ?Sized> {
    trajectory: &'a T,
    step: usize,
}

impl<T: Trajectory + ?Sized> Iterator for TrajectoryIter<'_, T> {
    type Item = VehicleState;

    fn next(&mut self) -> Option<VehicleState> {
        if self.step >= self.trajectory.len() {
            return None;
        }
        let state = self.trajectory.state_at(self.step);
        self.step += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trajectory.len().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl<T: Trajectory + ?Sized> ExactSizeIterator for TrajectoryIter<'_, T> {}

/// Straight-line movement with constant orientation and linear battery drain
///
/// Arithmetic is done in `f64` and narrowed once, so `116.4 + 0.001 * 3`
/// lands on the `f32` nearest to `116.403`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTrajectory {
    pub start: [f64; 3],
    /// Position change per step
    pub delta: [f64; 3],
    pub orientation: [f32; 4],
    pub battery_start: f64,
    /// Battery decrease per step
    pub battery_drain: f64,
    pub steps: usize,
}

impl LinearTrajectory {
    /// Ten steps from (116.4, 39.9, 0), climbing 1 per step while drifting
    /// 0.001 in x and y, battery 100 draining 1 per step.
    pub fn reference() -> Self {
        Self {
            start: [116.4, 39.9, 0.0],
            delta: [0.001, 0.001, 1.0],
            orientation: [0.0, 1.0, 0.0, 0.0],
            battery_start: 100.0,
            battery_drain: 1.0,
            steps: 10,
        }
    }
}

impl Trajectory for LinearTrajectory {
    fn len(&self) -> usize {
        self.steps
    }

    fn state_at(&self, step: usize) -> VehicleState {
        let i = step as f64;
        let position = [
            (self.start[0] + self.delta[0] * i) as f32,
            (self.start[1] + self.delta[1] * i) as f32,
            (self.start[2] + self.delta[2] * i) as f32,
        ];
        let battery = (self.battery_start - self.battery_drain * i) as f32;
        VehicleState::new(position, self.orientation, battery)
    }
}

/// Linear legs played back to back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedTrajectory {
    legs: Vec<LinearTrajectory>,
}

impl SegmentedTrajectory {
    pub fn new(legs: Vec<LinearTrajectory>) -> Self {
        Self { legs }
    }

    /// Climb to 10, fly a 5x5 square, descend back to the ground.
    ///
    /// Battery starts at 100 and each leg picks up where the previous one
    /// left off.
    pub fn square_mission() -> Self {
        const ORIENTATION: [f32; 4] = [0.0, 1.0, 0.0, 0.0];

        let leg = |start: [f64; 3], delta: [f64; 3], battery_start: f64, steps: usize| {
            LinearTrajectory {
                start,
                delta,
                orientation: ORIENTATION,
                battery_start,
                battery_drain: 1.0,
                steps,
            }
        };

        Self::new(vec![
            leg([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], 100.0, 10),
            leg([0.0, 0.0, 10.0], [0.0, 1.0, 0.0], 90.0, 5),
            leg([0.0, 5.0, 10.0], [1.0, 0.0, 0.0], 85.0, 5),
            leg([5.0, 5.0, 10.0], [0.0, -1.0, 0.0], 80.0, 5),
            leg([5.0, 0.0, 10.0], [-1.0, 0.0, 0.0], 75.0, 5),
            leg([0.0, 0.0, 10.0], [0.0, 0.0, -1.0], 70.0, 10),
        ])
    }
}

impl Trajectory for SegmentedTrajectory {
    fn len(&self) -> usize {
        self.legs.iter().map(|leg| leg.steps).sum()
    }

    fn state_at(&self, step: usize) -> VehicleState {
        let mut offset = step;
        for leg in &self.legs {
            if offset < leg.steps {
                return leg.state_at(offset);
            }
            offset -= leg.steps;
        }

        // Past the end: hold the final pose of the last leg
        match self.legs.last() {
            Some(leg) => leg.state_at(leg.steps.saturating_sub(1)),
            None => VehicleState::default(),
        }
    }
}
