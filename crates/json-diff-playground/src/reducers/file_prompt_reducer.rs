//! File Prompt Reducer

use crate::actions::FilePromptAction;
use crate::state::FilePromptState;

pub fn reduce_file_prompt(mut state: FilePromptState, action: &FilePromptAction) -> FilePromptState {
    match action {
        FilePromptAction::Opened { side, listing } => {
            state.side = *side;
            state.listing = listing.clone();
            state.filter.clear();
            state.selected = 0;
        }
        FilePromptAction::Char(c) => {
            state.filter.push(*c);
            state.selected = 0;
        }
        FilePromptAction::Backspace => {
            state.filter.pop();
            state.selected = 0;
        }
        FilePromptAction::ClearLine => {
            state.filter.clear();
            state.selected = 0;
        }
        FilePromptAction::NavigateNext => {
            let visible = state.visible().len();
            if visible > 0 {
                state.selected = (state.selected + 1).min(visible - 1);
            }
        }
        FilePromptAction::NavigatePrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        // Handled by the file prompt middleware
        FilePromptAction::Open | FilePromptAction::Confirm | FilePromptAction::Cancel => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FileListing, PromptEntry};
    use json_diff_workspace::Side;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn listing() -> FileListing {
        let entry = |label: &str| PromptEntry {
            path: PathBuf::from(label),
            label: label.to_string(),
            is_dir: false,
        };
        FileListing {
            dir: PathBuf::from("/data"),
            entries: vec![entry("a.json"), entry("b.json"), entry("c.json")],
        }
    }

    #[test]
    fn test_opened_resets_filter_and_selection() {
        let state = FilePromptState {
            filter: "old".to_string(),
            selected: 2,
            ..Default::default()
        };
        let state = reduce_file_prompt(
            state,
            &FilePromptAction::Opened {
                side: Side::Right,
                listing: listing(),
            },
        );

        assert_eq!(state.side, Side::Right);
        assert_eq!(state.filter, "");
        assert_eq!(state.selected, 0);
        assert_eq!(state.listing.entries.len(), 3);
    }

    #[test]
    fn test_typing_filters_and_navigation_clamps() {
        let mut state = FilePromptState {
            listing: listing(),
            ..Default::default()
        };
        state = reduce_file_prompt(state, &FilePromptAction::NavigateNext);
        state = reduce_file_prompt(state, &FilePromptAction::Char('b'));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_entry().map(|e| e.label.as_str()), Some("b.json"));

        state = reduce_file_prompt(state, &FilePromptAction::NavigateNext);
        assert_eq!(state.selected, 0);

        state = reduce_file_prompt(state, &FilePromptAction::Backspace);
        assert_eq!(state.visible().len(), 3);
    }
}
