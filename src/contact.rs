use dioxus::prelude::*;
use kk_studios_lib::{
    contact::{ContactField, SubmissionState},
    content::SOCIAL_LINKS,
    AppMessage,
};

use crate::app::SiteState;

fn status_line(state: &SubmissionState) -> Option<(String, &'static str)> {
    match state {
        SubmissionState::Idle => None,
        SubmissionState::Pending => Some(("Sending...".to_string(), "status pending")),
        SubmissionState::Rejected(e) => Some((e.to_string(), "status error")),
        SubmissionState::Accepted => Some((
            "Thanks! We'll get back to you soon.".to_string(),
            "status success",
        )),
        SubmissionState::Failed(e) => Some((e.to_string(), "status error")),
    }
}

#[component]
pub fn Contact() -> Element {
    let state = use_context::<Signal<SiteState>>();
    let tx = use_coroutine_handle::<AppMessage>();

    let (name, email, message, pending, status) = {
        let state = state.read();
        let form = &state.contact;
        (
            form.field(ContactField::Name).to_string(),
            form.field(ContactField::Email).to_string(),
            form.field(ContactField::Message).to_string(),
            form.is_pending(),
            status_line(form.state()),
        )
    };
    let edit = move |field: ContactField| {
        move |e: FormEvent| tx.send(AppMessage::EditContact(field, e.value()))
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact-form",
                h2 { "CONTACT ROARK" }
                form {
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        tx.send(AppMessage::SubmitContact);
                    },
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: name,
                        disabled: pending,
                        oninput: edit(ContactField::Name),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email,
                        disabled: pending,
                        oninput: edit(ContactField::Email),
                    }
                    textarea {
                        placeholder: "Add a message",
                        value: message,
                        disabled: pending,
                        oninput: edit(ContactField::Message),
                    }
                    button { r#type: "submit", disabled: pending, "SUBMIT" }
                }
                if let Some((text, class)) = status {
                    p { class, "{text}" }
                }
            }
            div { class: "socials",
                for (label, href) in SOCIAL_LINKS {
                    a {
                        key: "{label}",
                        href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {label}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kk_studios_lib::contact::ValidationError;

    #[test]
    fn idle_form_has_no_status() {
        assert_eq!(status_line(&SubmissionState::Idle), None);
    }

    #[test]
    fn rejection_shows_missing_fields() {
        let state = SubmissionState::Rejected(ValidationError::MissingFields(vec![
            ContactField::Email,
        ]));
        let (text, class) = status_line(&state).unwrap();
        assert_eq!(text, "please fill in your email");
        assert_eq!(class, "status error");
    }
}
