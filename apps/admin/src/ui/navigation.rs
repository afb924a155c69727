/// Navigation seam: controllers only ever ask to return to the previous
/// view after a successful save.
pub trait Navigator: Send + Sync {
    fn back(&self);
}

/// Terminal navigation has no history stack to pop; going back just reports
/// where the user lands.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn back(&self) {
        tracing::info!("navigating back to the previous view");
        println!("Salvo. Voltando para a listagem.");
    }
}
