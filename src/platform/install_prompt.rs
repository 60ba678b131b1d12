use tracing::info;

/// Side effects the event loop must apply after an install-prompt
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// Arm the call-to-action delay timer.
    ArmCtaTimer,
    /// Inject the call-to-action control into the page.
    ShowCta,
    /// Remove the call-to-action control.
    HideCta,
    /// Re-trigger the platform's own install prompt.
    TriggerPrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// The platform prompt was intercepted and deferred.
    Deferred,
    /// The delay elapsed with the prompt still deferred; the CTA is visible.
    CtaVisible,
    /// The deferred prompt was handed back to the platform.
    Consumed,
}

/// Install-prompt flow: the platform's install event is deferred, and if it
/// is still unused after a fixed delay a call-to-action control appears.
/// Clicking the control hides it unconditionally and re-triggers the
/// platform prompt if one is still deferred.
///
/// Transitions are pure; the returned [`PromptAction`]s are applied by the
/// platform driver.
pub struct InstallPrompt {
    state: State,
}

impl InstallPrompt {
    pub fn new() -> InstallPrompt {
        InstallPrompt { state: State::Idle }
    }

    /// The platform fired its before-install event; its default action has
    /// been deferred.
    pub fn on_before_install(&mut self) -> Vec<PromptAction> {
        self.state = State::Deferred;
        vec![PromptAction::ArmCtaTimer]
    }

    /// The CTA delay elapsed. Shows the CTA only if no decision was made in
    /// the meantime.
    pub fn on_cta_delay_elapsed(&mut self) -> Vec<PromptAction> {
        if self.state != State::Deferred {
            return Vec::new();
        }
        self.state = State::CtaVisible;
        vec![PromptAction::ShowCta]
    }

    /// The user clicked the CTA. The control goes away no matter what; the
    /// platform prompt fires only while one is still deferred.
    pub fn on_cta_clicked(&mut self) -> Vec<PromptAction> {
        let mut actions = vec![PromptAction::HideCta];
        if matches!(self.state, State::Deferred | State::CtaVisible) {
            actions.push(PromptAction::TriggerPrompt);
            self.state = State::Consumed;
        }
        actions
    }

    /// The user answered the platform prompt.
    pub fn on_prompt_outcome(&mut self, accepted: bool) {
        self.state = State::Consumed;
        if accepted {
            info!("User accepted the install prompt");
        } else {
            info!("User dismissed the install prompt");
        }
    }
}

impl Default for InstallPrompt {
    fn default() -> Self {
        Self::new()
    }
}
