/// Overall phase of the quiz controller.
///
/// `Error` and `Empty` are terminal for the current load cycle: the
/// only way forward is to rerun the program. `Finished` can loop back
/// into `Quiz` via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Questions have not been loaded yet.
    Loading,
    /// The load failed; a user-facing message is kept by the app.
    Error,
    /// The load succeeded but returned zero questions.
    Empty,
    /// Actively presenting questions.
    Quiz,
    /// All questions answered; final score is frozen.
    Finished,
}
