//! Settings Reducer
//!
//! Only moves the highlighted row. Value changes go through the preferences
//! middleware, which answers with `SettingsAction::Applied`.

use crate::actions::SettingsAction;
use crate::state::SettingsState;

pub fn reduce_settings(mut state: SettingsState, action: &SettingsAction) -> SettingsState {
    match action {
        SettingsAction::NavigateNext => state.selected = state.selected.next(),
        SettingsAction::NavigatePrevious => state.selected = state.selected.previous(),
        _ => {}
    }
    state
}
