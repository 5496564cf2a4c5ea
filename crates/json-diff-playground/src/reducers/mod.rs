//! Reducers
//!
//! Pure state transitions, run on the main thread for every action that
//! reaches the end of the middleware chain.

mod app_reducer;
mod example_picker_reducer;
mod file_prompt_reducer;
mod key_bindings_reducer;
mod result_pane_reducer;
mod settings_reducer;
mod status_bar_reducer;

pub use app_reducer::reduce;
pub use example_picker_reducer::reduce_example_picker;
pub use file_prompt_reducer::reduce_file_prompt;
pub use key_bindings_reducer::reduce_key_bindings;
pub use result_pane_reducer::reduce_result_pane;
pub use settings_reducer::reduce_settings;
pub use status_bar_reducer::reduce_status_bar;
