use crate::resilience::structs::circuit_admission::CircuitAdmission;

impl CircuitAdmission {
    /// Records a healthy response. A not-found result is a healthy
    /// response and should land here.
    pub fn succeed(mut self) {
        self.settled = true;
        self.breaker.record_success(self.trial);
    }

    /// Records a transient failure.
    pub fn fail(mut self) {
        self.settled = true;
        self.breaker.record_failure(self.trial);
    }
}

impl Drop for CircuitAdmission {
    fn drop(&mut self) {
        if !self.settled && self.trial {
            self.breaker.release_trial();
        }
    }
}
