use crate::DecisionProcess;


/// Fixed-length walk where every step picks one of three lanes.
/// Lane rewards depend on the step so different lines have different values.
#[derive(Debug, Clone)]
pub(crate) struct LaneWalk {
    steps_left: usize,
    total: f64,
}

impl LaneWalk {
    pub(crate) fn new(steps: usize) -> Self {
        LaneWalk {
            steps_left: steps,
            total: 0.0,
        }
    }

    pub(crate) fn outcome_value(&self) -> f64 {
        self.total
    }
}

impl DecisionProcess for LaneWalk {
    type Choice = u8;

    fn legal_choices(&self) -> Vec<u8> {
        if self.steps_left == 0 {
            Vec::new()
        } else {
            vec![0, 1, 2]
        }
    }

    fn apply(&mut self, choice: &u8) {
        let step = self.steps_left as f64;
        self.total += match choice {
            0 => 1.0,
            1 => step,
            _ => -step,
        };
        self.steps_left -= 1;
    }

    fn outcome(&self) -> f64 {
        self.total
    }
}

/// One decision between two fixed payouts.
#[derive(Debug, Clone, Default)]
pub(crate) struct TwoArms {
    taken: Option<u8>,
}

impl DecisionProcess for TwoArms {
    type Choice = u8;

    fn legal_choices(&self) -> Vec<u8> {
        match self.taken {
            Some(_) => Vec::new(),
            None => vec![0, 1],
        }
    }

    fn apply(&mut self, choice: &u8) {
        self.taken = Some(*choice);
    }

    fn outcome(&self) -> f64 {
        match self.taken {
            Some(1) => 5.0,
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}
