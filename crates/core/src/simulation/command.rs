//! Parameter-change commands issued by a front end
//!
//! A front end never recomputes curves itself. It turns each user
//! interaction into a `Command` and hands it to
//! [`FogSimulation::apply`](super::FogSimulation::apply), which mutates the
//! parameters and re-sweeps both curves.

use crate::core_types::{Param, ParameterSet};
use serde::{Deserialize, Serialize};

/// One user interaction with the parameter panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Set a parameter to a physical value (clamped into its bounds)
    Set(Param, f64),
    /// Set a parameter from a slider position
    SetSlider(Param, i64),
    /// Switch between the linear and geometric overlap approximations
    ToggleXsi,
    /// Restore every parameter to its default
    Reset,
}

impl Command {
    /// Apply this command to `params`; derived quantities are refreshed
    pub(crate) fn apply_to(self, params: &mut ParameterSet) {
        match self {
            Command::Set(param, value) => {
                params.set(param, value);
            }
            Command::SetSlider(param, position) => {
                params.set_from_slider(param, position);
            }
            Command::ToggleXsi => params.toggle_xsi_mode(),
            Command::Reset => *params = ParameterSet::default(),
        }
    }
}
