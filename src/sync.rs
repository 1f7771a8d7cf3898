//! Keeps a time input and checkbox in step with the remote alarm.

use crate::client::AlarmApi;
use crate::errors::SyncResult;
use crate::form::{parse_form, render_form, Checkbox, RenderStyle, StatusText, TimeInput};
use crate::models::AlarmRecord;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const SAVED_MESSAGE: &str = "Saved";

/// Stand-in for widgets without a status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatus;

impl StatusText for NoStatus {
    fn hide(&mut self) {}

    fn fade_in(&mut self, _text: &str) {}
}

/// Synchronizes form controls with the `/alarm` resource.
///
/// The controls themselves are the only state: every save re-parses them and
/// every successful response is rendered back into them.
pub struct AlarmFormSync<A, T, C, S = NoStatus> {
    api: A,
    time: T,
    enabled: C,
    status: Option<S>,
    style: RenderStyle,
}

impl<A, T, C> AlarmFormSync<A, T, C, NoStatus> {
    pub fn new(api: A, time: T, enabled: C) -> Self {
        Self {
            api,
            time,
            enabled,
            status: None,
            style: RenderStyle::default(),
        }
    }
}

impl<A, T, C, S> AlarmFormSync<A, T, C, S> {
    /// Attaches a status line that is hidden on save and faded in on success.
    pub fn with_status<S2: StatusText>(self, status: S2) -> AlarmFormSync<A, T, C, S2> {
        AlarmFormSync {
            api: self.api,
            time: self.time,
            enabled: self.enabled,
            status: Some(status),
            style: self.style,
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn time_input(&self) -> &T {
        &self.time
    }

    pub fn time_input_mut(&mut self) -> &mut T {
        &mut self.time
    }

    pub fn checkbox(&self) -> &C {
        &self.enabled
    }

    pub fn checkbox_mut(&mut self) -> &mut C {
        &mut self.enabled
    }

    pub fn status(&self) -> Option<&S> {
        self.status.as_ref()
    }
}

impl<A, T, C, S> AlarmFormSync<A, T, C, S>
where
    A: AlarmApi,
    T: TimeInput,
    C: Checkbox,
    S: StatusText,
{
    /// Loads the current alarm into the form. On failure the form is left as is.
    pub async fn initialize(&mut self) -> SyncResult<AlarmRecord> {
        let alarm = self.api.fetch().await?;
        debug!("loaded alarm {alarm:?}");
        self.render(&alarm);
        Ok(alarm)
    }

    /// Saves the form and renders the server's answer.
    ///
    /// Malformed time input rejects the save before any request is made.
    pub async fn on_save_triggered(&mut self) -> SyncResult<AlarmRecord> {
        if let Some(status) = self.status.as_mut() {
            status.hide();
        }

        let alarm = parse_form(&self.time, &self.enabled)?;
        let saved = self.api.replace(&alarm).await?;
        info!("saved alarm {saved:?}");

        self.render(&saved);
        if let Some(status) = self.status.as_mut() {
            status.fade_in(SAVED_MESSAGE);
        }
        Ok(saved)
    }

    /// Initializes, then saves once per activation until the sender is dropped.
    ///
    /// Failures are logged and the loop carries on.
    pub async fn run(mut self, mut activations: mpsc::Receiver<()>) -> Self {
        if let Err(err) = self.initialize().await {
            warn!("failed to load alarm: {err}");
        }

        while activations.recv().await.is_some() {
            if let Err(err) = self.on_save_triggered().await {
                warn!("failed to save alarm: {err}");
            }
        }
        self
    }

    fn render(&mut self, alarm: &AlarmRecord) {
        render_form(alarm, self.style, &mut self.time, &mut self.enabled);
    }
}
