//! Step → phase arithmetic for loop-style animations
//!
//! A bounded loop is narrated as some initialisation steps, then one fixed-size
//! group of steps per iteration (`condition`, `body`, and for a `for` loop an
//! `increment`), then the final failing condition check.
//!
//! ```text
//! step:      0 ..= init_cost | init_cost+1 .. | ... | last
//! phase:     Init            | C B I C B I .. | ... | Done (condition false)
//! ```

/// Shape of a loop narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopShape {
    /// Steps (after step 0) spent on initialisation
    pub init_cost: usize,
    /// Steps per iteration
    pub iter_cost: usize,
    /// Number of iterations that run the body
    pub bound: usize,
}

/// What a loop is doing at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Init,
    Condition { iteration: usize, holds: bool },
    Body { iteration: usize },
    Increment { iteration: usize },
    /// The condition has just failed; the loop is finished
    Done { iteration: usize },
}

impl LoopShape {
    /// `for (i = 0; i < bound; i++)`: two init steps, then condition/body/increment
    pub const fn for_loop(bound: usize) -> Self {
        LoopShape {
            init_cost: 2,
            iter_cost: 3,
            bound,
        }
    }

    /// `while (i < bound) { ...; i++; }`: condition/body pairs from step 1
    pub const fn while_loop(bound: usize) -> Self {
        LoopShape {
            init_cost: 0,
            iter_cost: 2,
            bound,
        }
    }

    /// Step of the final failing condition check
    pub fn last_step(&self) -> usize {
        self.iter_cost
            .saturating_mul(self.bound)
            .saturating_add(self.init_cost + 1)
    }

    /// Phase at `step`. The body and increment only ever run for
    /// iterations below `bound`; everything past them is `Done`.
    pub fn phase(&self, step: usize) -> LoopPhase {
        if step <= self.init_cost {
            return LoopPhase::Init;
        }

        let offset = step - self.init_cost - 1;
        let iteration = offset / self.iter_cost;
        let subphase = offset % self.iter_cost;

        if iteration >= self.bound {
            return LoopPhase::Done {
                iteration: self.bound,
            };
        }

        match subphase {
            0 => LoopPhase::Condition {
                iteration,
                holds: true,
            },
            1 => LoopPhase::Body { iteration },
            _ => LoopPhase::Increment { iteration },
        }
    }
}

impl LoopPhase {
    /// Value of the loop variable at this phase
    pub fn counter(&self) -> usize {
        match *self {
            LoopPhase::Init => 0,
            LoopPhase::Condition { iteration, .. }
            | LoopPhase::Body { iteration }
            | LoopPhase::Increment { iteration }
            | LoopPhase::Done { iteration } => iteration,
        }
    }

    /// Result of the condition check shown at this phase.
    ///
    /// `Done` reports the final failing check so the condition node can still
    /// be coloured red.
    pub fn condition_result(&self) -> Option<bool> {
        match *self {
            LoopPhase::Condition { holds, .. } => Some(holds),
            LoopPhase::Done { .. } => Some(false),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, LoopPhase::Done { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_loop_phases() {
        let shape = LoopShape::for_loop(5);

        assert_eq!(shape.phase(0), LoopPhase::Init);
        assert_eq!(shape.phase(2), LoopPhase::Init);
        assert_eq!(
            shape.phase(3),
            LoopPhase::Condition {
                iteration: 0,
                holds: true
            }
        );
        assert_eq!(shape.phase(4), LoopPhase::Body { iteration: 0 });
        assert_eq!(shape.phase(5), LoopPhase::Increment { iteration: 0 });
        assert_eq!(shape.phase(17), LoopPhase::Increment { iteration: 4 });
        assert_eq!(shape.phase(18), LoopPhase::Done { iteration: 5 });
        assert_eq!(shape.phase(18).condition_result(), Some(false));
    }

    #[test]
    fn test_while_loop_phases() {
        let shape = LoopShape::while_loop(5);

        assert_eq!(shape.phase(0), LoopPhase::Init);
        assert_eq!(
            shape.phase(1),
            LoopPhase::Condition {
                iteration: 0,
                holds: true
            }
        );
        assert_eq!(shape.phase(2), LoopPhase::Body { iteration: 0 });
        assert_eq!(shape.phase(10), LoopPhase::Body { iteration: 4 });

        let last = shape.phase(11);
        assert!(last.is_done());
        assert_eq!(last.counter(), 5);
        assert_eq!(last.condition_result(), Some(false));
    }

    #[test]
    fn test_zero_bound_finishes_on_first_check() {
        assert!(LoopShape::for_loop(0).phase(3).is_done());
        assert!(LoopShape::while_loop(0).phase(1).is_done());
    }

    #[test]
    fn test_last_step_matches_budget() {
        assert_eq!(LoopShape::for_loop(5).last_step(), 18);
        assert_eq!(LoopShape::while_loop(5).last_step(), 11);
        assert_eq!(LoopShape::for_loop(usize::MAX).last_step(), usize::MAX);
    }

    #[test]
    fn test_body_never_runs_past_the_bound() {
        for shape in [LoopShape::for_loop(3), LoopShape::while_loop(3)] {
            let mut bodies = 0;
            for step in 0..=shape.last_step() + 6 {
                match shape.phase(step) {
                    LoopPhase::Body { iteration } => {
                        assert!(iteration < shape.bound, "step {}", step);
                        bodies += 1;
                    }
                    LoopPhase::Increment { iteration } | LoopPhase::Condition { iteration, .. } => {
                        assert!(iteration < shape.bound, "step {}", step)
                    }
                    LoopPhase::Init | LoopPhase::Done { .. } => {}
                }
            }
            assert_eq!(bodies, shape.bound);
        }
    }

    #[test]
    fn test_phase_is_done_past_the_end() {
        let shape = LoopShape::for_loop(2);
        for step in 9..20 {
            assert!(shape.phase(step).is_done(), "step {}", step);
        }
    }
}
