use yew::prelude::*;
use log::{info, warn};
use gloo_console::log;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::forms::{FormStyles, InterestForm, NameForm, StudentIdForm};
use crate::wizard::{Submission, Wizard, WizardEvent, WizardRecord, WizardStep};

const THANK_YOU: &str = "Thank you for submitting!";

pub enum WizardMsg {
    Submit(Submission),
}

/// The three full-height form sections and the wizard behind them.
pub struct WizardSections {
    wizard: Wizard,
    name_ref: NodeRef,
    student_id_ref: NodeRef,
    interests_ref: NodeRef,
}

impl WizardSections {
    fn section_for(&self, step: WizardStep) -> Option<&NodeRef> {
        match step {
            WizardStep::Name => Some(&self.name_ref),
            WizardStep::StudentId => Some(&self.student_id_ref),
            WizardStep::Interests => Some(&self.interests_ref),
            WizardStep::Done => None,
        }
    }

    fn bring_into_view(&self, step: WizardStep) {
        let Some(element) = self.section_for(step).and_then(|node| node.cast::<Element>()) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn acknowledge(record: &WizardRecord) {
    info!("Wizard completed for {}", record.name);
    match serde_json::to_string(record) {
        Ok(json) => log!("Form data submitted:", json),
        Err(e) => warn!("Could not serialise submitted record: {}", e),
    }
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(THANK_YOU) {
            warn!("Could not show acknowledgment: {:?}", e);
        }
    }
}

impl Component for WizardSections {
    type Message = WizardMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(),
            name_ref: NodeRef::default(),
            student_id_ref: NodeRef::default(),
            interests_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WizardMsg::Submit(submission) => match self.wizard.submit(submission) {
                Some(WizardEvent::Advanced(step)) => {
                    self.bring_into_view(step);
                    true
                }
                Some(WizardEvent::Completed(record)) => {
                    acknowledge(&record);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_name = link.callback(|name: String| WizardMsg::Submit(Submission::Name(name)));
        let on_student_id =
            link.callback(|id: String| WizardMsg::Submit(Submission::StudentId(id)));
        let on_interests = link
            .callback(|interests: Vec<String>| WizardMsg::Submit(Submission::Interests(interests)));

        html! {
            <>
                <FormStyles />
                <div ref={self.name_ref.clone()} class="wizard-section page-section">
                    <NameForm on_submit={on_name} />
                </div>
                <div ref={self.student_id_ref.clone()} class="wizard-section page-section">
                    <StudentIdForm on_submit={on_student_id} />
                </div>
                <div ref={self.interests_ref.clone()} class="wizard-section page-section">
                    <InterestForm
                        value={self.wizard.record().interests.clone()}
                        on_submit={on_interests}
                    />
                </div>
            </>
        }
    }
}
