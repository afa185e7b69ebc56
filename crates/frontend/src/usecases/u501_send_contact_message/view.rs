use super::api::EmailJsClient;
use super::view_model::ContactFormViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::SectionHeading;
use crate::shared::icons::icon;
use contracts::domain::a001_profile::profile;
use contracts::shared::config::EmailConfig;
use contracts::shared::section::SectionId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_send_contact_message::{
    ContactField, NoticeKind, SendContactMessage,
};
use leptos::ev;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<EmailConfig>().unwrap_or_default();
    let client = EmailJsClient::new(config);
    let vm = ContactFormViewModel::new();

    let value = move |field: ContactField| Signal::derive(move || vm.value(field));
    let error = move |field: ContactField| Signal::derive(move || vm.error(field));
    let on_input =
        move |field: ContactField| Callback::new(move |text: String| vm.set_field(field, text));
    let disabled = Signal::derive(move || vm.is_submitting());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(client.clone());
    };

    view! {
        <section id=SectionId::Contact.as_str() class="section">
            <div class="section__inner section__inner--narrow">
                <SectionHeading
                    title=SendContactMessage::display_name()
                    subtitle="Have a project in mind or want to talk about AI? Send me a message."
                />
                {move || vm.notice().map(|notice| {
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Failure => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <div class="notice">
                                <span>{notice.message}</span>
                                <button
                                    class="button button--icon"
                                    aria-label="Dismiss"
                                    on:click=move |_| vm.dismiss_notice()
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </MessageBar>
                    }
                })}
                <form class="form contact__form" novalidate=true on:submit=on_submit>
                    <div class="form__row">
                        <Input
                            id="contact-name"
                            label=ContactField::Name.label()
                            value=value(ContactField::Name)
                            on_input=on_input(ContactField::Name)
                            error=error(ContactField::Name)
                            disabled=disabled
                        />
                        <Input
                            id="contact-email"
                            label=ContactField::Email.label()
                            input_type="email"
                            value=value(ContactField::Email)
                            on_input=on_input(ContactField::Email)
                            error=error(ContactField::Email)
                            disabled=disabled
                        />
                    </div>
                    <Input
                        id="contact-subject"
                        label=ContactField::Subject.label()
                        placeholder="Optional"
                        value=value(ContactField::Subject)
                        on_input=on_input(ContactField::Subject)
                        disabled=disabled
                    />
                    <Textarea
                        id="contact-message"
                        label=ContactField::Message.label()
                        rows=5
                        value=value(ContactField::Message)
                        on_input=on_input(ContactField::Message)
                        error=error(ContactField::Message)
                        disabled=disabled
                    />
                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || vm.is_submitting()
                    >
                        {move || {
                            if vm.is_submitting() {
                                view! {
                                    <Spinner size=SpinnerSize::Tiny />
                                    "Sending..."
                                }
                                .into_any()
                            } else {
                                "Send Message".into_any()
                            }
                        }}
                    </button>
                </form>
                <p class="contact__phone">
                    {icon("phone")}
                    <span>{format!("Cell: {}", profile().phone)}</span>
                </p>
            </div>
        </section>
    }
}
