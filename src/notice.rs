use std::{fmt, sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::sleep};

use crate::view::View;

/// How long a notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// State of the notice element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Option<Severity>,
    pub hidden: bool,
}

impl Notice {
    /// class attribute, e.g. `error hidden`
    pub fn class(&self) -> String {
        match (self.severity, self.hidden) {
            (Some(severity), true) => format!("{} hidden", severity),
            (Some(severity), false) => severity.to_string(),
            (None, true) => "hidden".to_string(),
            (None, false) => String::new(),
        }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Notice {
            text: String::new(),
            severity: None,
            hidden: true,
        }
    }
}

/// Show `text` on the notice element and hide it again after [`NOTICE_DURATION`].
///
/// Earlier timers are not cancelled: a newer message replaces the text, but
/// the older timer still hides the element at its own deadline.
pub async fn show_message<V>(view: &Arc<V>, text: &str, severity: Severity) -> JoinHandle<()>
where
    V: View + ?Sized + 'static,
{
    view.show_notice(text, severity).await;

    let view = Arc::clone(view);
    tokio::spawn(async move {
        sleep(NOTICE_DURATION).await;
        view.hide_notice().await;
    })
}
