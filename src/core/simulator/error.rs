use crate::quantity::percent::Percent;

/// Terminal simulation outcomes: no plan is produced.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid trip parameters: {0}")]
    InvalidInput(String),

    #[error(
        "Battery critically low ({:.0}%). Cannot safely reach the next closest charging \
         station from current location. Please charge your EV before attempting this leg.",
        .state_of_charge.0
    )]
    BatteryCriticallyLow { state_of_charge: Percent },

    #[error(
        "Insufficient battery to reach the next calculated charging station. Trip may not be \
         feasible as planned."
    )]
    InsufficientBattery,

    #[error(
        "Could not complete the trip plan. The destination might be unreachable with the provided \
         parameters or simulated charging network."
    )]
    Infeasible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critically_low_message() {
        let error = SimulationError::BatteryCriticallyLow { state_of_charge: Percent(5.000_000_1) };
        assert!(error.to_string().starts_with("Battery critically low (5%). Cannot safely reach"));
    }
}
