use std::path::PathBuf;

/// Every user interaction produces an Action. The UI never calls git or the picker directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Tabs
    NewTab,
    CloseActiveTab,
    NextTab,
    PrevTab,
    /// 1-based position in the tab strip
    SelectTabPosition(usize),

    // Repository initialization
    StartOpen,
    StartClone,
    StartCreate,
    DismissPrompt,
    ConfirmPrompt,
    PromptNextField,
    /// Open a path given on the command line in the active tab, bypassing the picker
    OpenPath(PathBuf),

    // Prompt text editing
    InputPush(char),
    InputPop,
    InputDeleteWord,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    CompletePath,

    // Branches
    MoveBranchSelection(i32),

    Quit,
}
