/// A dismissible error dialog. It carries one message; dismissal closes it
/// and is terminal for that error instance, there is no retry wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorModal {
    message: String,
    open: bool,
}

impl ErrorModal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            open: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Seam between controllers and whatever renders dialogs. The terminal
/// front-end prints them; tests substitute a recording implementation.
pub trait ModalService: Send + Sync {
    fn open_error(&self, modal: ErrorModal);
}

/// Renders error modals to stderr. A terminal session has no pending dialog
/// state, so the modal is dismissed as soon as it is shown.
pub struct TerminalModalService;

impl ModalService for TerminalModalService {
    fn open_error(&self, mut modal: ErrorModal) {
        tracing::error!(message = modal.message(), "showing error modal");
        eprintln!("+---------------------------------------------+");
        eprintln!("| Erro: {}", modal.message());
        eprintln!("+---------------------------------------------+");
        modal.dismiss();
    }
}
