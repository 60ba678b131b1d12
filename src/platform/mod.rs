//! Browser platform events, modeled as discrete inputs to the session.
//!
//! The catalog and favorites core never depends on anything in here; these
//! surfaces are optional enhancements driven through [`PlatformHooks`].

mod install_prompt;
mod update_channel;

pub use install_prompt::{InstallPrompt, PromptAction};
pub use update_channel::UpdateChannel;

use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Calls back into the hosting page. Implemented by the rendering glue.
pub trait PlatformHooks: Send {
    fn show_install_cta(&mut self);
    fn hide_install_cta(&mut self);
    fn trigger_install_prompt(&mut self);
    fn reload_page(&mut self);
}

/// Discrete events delivered by the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    BeforeInstallPrompt,
    CtaDelayElapsed,
    CtaClicked,
    InstallOutcome { accepted: bool },
    WorkerRegistered { scope: String },
    WorkerRegistrationFailed { message: String },
    ControllerChanged,
}

/// Routes platform events through the install-prompt and update-channel
/// state machines and applies their effects via the hooks.
pub struct Platform<H: PlatformHooks> {
    hooks: H,
    install_prompt: InstallPrompt,
    update_channel: UpdateChannel,
    cta_delay: Duration,
    events: UnboundedSender<PlatformEvent>,
}

impl<H: PlatformHooks> Platform<H> {
    /// Returns the platform and the event receiver the session loop drains
    /// back into `handle_event`. Timer-produced events (the CTA delay) come
    /// in through the same channel as platform-produced ones.
    pub fn new(hooks: H, cta_delay: Duration) -> (Platform<H>, UnboundedReceiver<PlatformEvent>) {
        let (events, receiver) = unbounded_channel();
        (
            Platform {
                hooks,
                install_prompt: InstallPrompt::new(),
                update_channel: UpdateChannel::new(),
                cta_delay,
                events,
            },
            receiver,
        )
    }

    pub fn handle_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::BeforeInstallPrompt => {
                let actions = self.install_prompt.on_before_install();
                self.apply(actions);
            }
            PlatformEvent::CtaDelayElapsed => {
                let actions = self.install_prompt.on_cta_delay_elapsed();
                self.apply(actions);
            }
            PlatformEvent::CtaClicked => {
                let actions = self.install_prompt.on_cta_clicked();
                self.apply(actions);
            }
            PlatformEvent::InstallOutcome { accepted } => {
                self.install_prompt.on_prompt_outcome(accepted);
            }
            PlatformEvent::WorkerRegistered { scope } => {
                self.update_channel.on_registration_succeeded(&scope);
            }
            PlatformEvent::WorkerRegistrationFailed { message } => {
                self.update_channel.on_registration_failed(&message);
            }
            PlatformEvent::ControllerChanged => {
                if self.update_channel.on_controller_changed() {
                    self.hooks.reload_page();
                }
            }
        }
    }

    fn apply(&mut self, actions: Vec<PromptAction>) {
        for action in actions {
            match action {
                PromptAction::ArmCtaTimer => self.arm_cta_timer(),
                PromptAction::ShowCta => self.hooks.show_install_cta(),
                PromptAction::HideCta => self.hooks.hide_install_cta(),
                PromptAction::TriggerPrompt => self.hooks.trigger_install_prompt(),
            }
        }
    }

    fn arm_cta_timer(&self) {
        let events = self.events.clone();
        let delay = self.cta_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(PlatformEvent::CtaDelayElapsed);
        });
    }
}
