use super::PickResponse;

/// A native "choose a directory" dialog, configured for a single selection
pub trait DirectoryPicker: Send + Sync {
    /// Blocks until the user chooses or dismisses.
    fn pick_directory(&self) -> PickResponse;
}

/// Stands in when no picker command is configured. The front-end prompts for a path
/// instead, so a pick that still reaches it is answered with a cancel.
pub struct NoPicker;

impl DirectoryPicker for NoPicker {
    fn pick_directory(&self) -> PickResponse {
        log::warn!("directory pick requested but no picker command is configured");
        PickResponse::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_picker_always_cancels() {
        assert_eq!(NoPicker.pick_directory(), PickResponse::Cancelled);
    }
}
