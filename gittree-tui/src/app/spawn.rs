use gittree_core::{Effect, GitProvider, picker::DirectoryPicker, run_effect};
use std::{
    sync::{Arc, atomic::Ordering},
    thread,
};

use super::EventSender;

/// Run one effect on its own thread. Effects for different tabs never wait on each other.
pub(super) fn spawn_effect(
    effect: Effect,
    git: &Arc<dyn GitProvider>,
    picker: &Arc<dyn DirectoryPicker>,
    sender: &EventSender,
) {
    let git = Arc::clone(git);
    let picker = Arc::clone(picker);
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        log::debug!("tab {}: running {effect:?}", effect.tab());
        let event = run_effect(effect, git.as_ref(), picker.as_ref());
        sender.send(event);
    });
}
