use super::{PickResponse, provider::DirectoryPicker};
use std::sync::Mutex;

/// Returns `response` on every pick and counts calls
pub struct MockDirectoryPicker {
    pub response: PickResponse,
    pub picks: Mutex<usize>,
}

impl MockDirectoryPicker {
    pub fn new(response: PickResponse) -> Self {
        Self {
            response,
            picks: Mutex::new(0),
        }
    }

    pub fn pick_count(&self) -> usize {
        *self.picks.lock().unwrap()
    }
}

impl Default for MockDirectoryPicker {
    fn default() -> Self {
        Self::new(PickResponse::Cancelled)
    }
}

impl DirectoryPicker for MockDirectoryPicker {
    fn pick_directory(&self) -> PickResponse {
        *self.picks.lock().unwrap() += 1;
        self.response.clone()
    }
}
