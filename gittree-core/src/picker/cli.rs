use super::{PickResponse, provider::DirectoryPicker};
use std::process::Command;

/// Runs an external picker program and reads the chosen directory from its stdout,
/// e.g. `zenity --file-selection --directory`.
pub struct CommandPicker {
    program: String,
    args: Vec<String>,
}

impl CommandPicker {
    /// `None` when `command` is empty.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl DirectoryPicker for CommandPicker {
    fn pick_directory(&self) -> PickResponse {
        let output = match Command::new(&self.program).args(&self.args).output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("failed to run directory picker {}: {e}", self.program);
                return PickResponse::Failed(format!("{}: {e}", self.program));
            }
        };

        if !output.status.success() {
            log::debug!("directory picker exited with {}", output.status);
            return PickResponse::Cancelled;
        }

        PickResponse::from_output(&String::from_utf8_lossy(&output.stdout))
    }
}
