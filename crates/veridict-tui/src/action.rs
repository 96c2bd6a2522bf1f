/// User intent, decoupled from raw terminal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Resize(u16, u16),
    /// Switch the active input tab (Text <-> File).
    SwitchModality,
    /// Submit the active modality for analysis.
    Submit,
    /// "Analyze Another" — back to a clean Idle state.
    Reset,
    /// A character for the article editor. `'\x08'` is the backspace sentinel.
    Input(char),
    /// Drop the selected file.
    RemoveFile,
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    /// Enter: start editing / open picker / enter directory / pick file,
    /// depending on context.
    DrillIn,
    /// Esc: leave editing, close overlays, back out of the picker.
    NavigateBack,
    ToggleHelp,
    None,
}
