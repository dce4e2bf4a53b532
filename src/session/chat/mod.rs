// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Chat session module
mod session;
pub mod commands;
mod input;
mod animation;
mod runner;

// Re-export main structures and functions
pub use session::{ChatSession, ChatState, ChatView, NullView, SubmitOutcome};
pub use commands::{COMMANDS, HELP_COMMAND, HISTORY_COMMAND, EXIT_COMMAND, QUIT_COMMAND};
pub use input::{create_editor, read_user_input, InputEvent};
pub use animation::{show_loading_animation, waiting_label};
pub use runner::{run_interactive_session, TerminalView};
