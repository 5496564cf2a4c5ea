//! Toolbar View Model

use crate::command_id::CommandId;
use crate::state::AppState;
use json_diff_workspace::ExampleCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarEntry {
    pub hint: String,
    pub label: &'static str,
    /// Disabled entries are drawn dimmed
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarViewModel {
    pub entries: Vec<ToolbarEntry>,
    /// Name and description of the loaded example
    pub example: Option<(&'static str, &'static str)>,
}

const TOOLBAR_COMMANDS: [CommandId; 8] = [
    CommandId::WorkspaceCompare,
    CommandId::ExamplesOpen,
    CommandId::WorkspaceImport,
    CommandId::WorkspaceFormat,
    CommandId::WorkspaceExportData,
    CommandId::WorkspaceExportDocument,
    CommandId::SettingsOpen,
    CommandId::KeyBindingsOpen,
];

impl ToolbarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let workspace = &state.workspace.snapshot.state;
        let can_export = workspace.can_export();

        let entries = TOOLBAR_COMMANDS
            .iter()
            .filter_map(|&command| {
                let hint = state.keymap.hint_for_command(command)?.to_string();
                let enabled = match command {
                    CommandId::WorkspaceExportData | CommandId::WorkspaceExportDocument => {
                        can_export
                    }
                    _ => true,
                };
                Some(ToolbarEntry {
                    hint,
                    label: command.title(),
                    enabled,
                })
            })
            .collect();

        let example = workspace
            .selected_example()
            .and_then(|id| ExampleCatalog::builtin().by_id(id))
            .map(|example| (example.name, example.description));

        Self { entries, example }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_diff_viewer::{RenderConfig, StructuralDiffEngine, TreeRenderSurface};
    use json_diff_workspace::{FsFileAdapter, WorkspaceAction, WorkspaceController};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn export_enabled(vm: &ToolbarViewModel) -> Vec<bool> {
        vm.entries
            .iter()
            .filter(|e| e.label.starts_with("Export"))
            .map(|e| e.enabled)
            .collect()
    }

    #[test]
    fn test_exports_disabled_without_result() {
        let vm = ToolbarViewModel::from_state(&AppState::default());
        assert_eq!(vm.entries.len(), TOOLBAR_COMMANDS.len());
        assert_eq!(vm.entries[0].hint, "F5");
        assert_eq!(export_enabled(&vm), vec![false, false]);
        assert_eq!(vm.example, None);
    }

    #[test]
    fn test_example_and_result_enable_exports() {
        let mut controller = WorkspaceController::new(
            Arc::new(StructuralDiffEngine::new()),
            Box::new(TreeRenderSurface::new(RenderConfig::default())),
            Arc::new(FsFileAdapter::new(".")),
        );
        controller.dispatch(WorkspaceAction::SelectExample("basic".into()));
        controller.dispatch(WorkspaceAction::Compare);

        let mut state = AppState::default();
        state.workspace.snapshot = controller.snapshot();

        let vm = ToolbarViewModel::from_state(&state);
        assert_eq!(export_enabled(&vm), vec![true, true]);
        assert_eq!(vm.example.map(|(name, _)| name), Some("Basic object"));
    }
}
