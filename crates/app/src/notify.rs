use shared_types::Notice;
use shared_ui::{ToastOptions, Toasts};

/// Show a transient notification. Fire-and-forget.
pub fn show(toasts: &Toasts, notice: &Notice) {
    tracing::debug!(title = %notice.title, "showing notice");
    toasts.info(
        notice.title.clone(),
        ToastOptions::new().description(notice.description.clone()),
    );
}
