use crate::app::commands::EditorCommand;
use crate::app::engine::SketchEngine;
use crate::app::events::EditorEffect;

pub struct CommandHandler;

impl CommandHandler {
    /// Undo and redo are gated on their stacks; a command against an
    /// empty stack is a no-op the host can use to disable its buttons.
    pub fn execute(engine: &mut SketchEngine, command: EditorCommand) -> EditorEffect {
        match command {
            EditorCommand::Undo => {
                if engine.can_undo() {
                    engine.undo()
                } else {
                    EditorEffect::None
                }
            }
            EditorCommand::Redo => {
                if engine.can_redo() {
                    engine.redo()
                } else {
                    EditorEffect::None
                }
            }
            EditorCommand::ClearHistory => {
                engine.clear_history();
                EditorEffect::None
            }
        }
    }
}
