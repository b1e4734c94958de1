use std::{cell::RefCell, fmt, rc::Rc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::email::{DeliveryError, Mailer};

// how long the "message sent" panel stays up before the form comes back empty
pub const SENT_RESET_DELAY: Duration = Duration::from_secs(5);

// the only thing the visitor ever sees when a send fails, whatever the cause
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send your message. Please try again later.";

// structs and types

// the four fields of the contact form
//
// the serialized names double as the email template variables
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ContactFormInput {
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FromName,
    ReplyTo,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FromName, Field::ReplyTo, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FromName => "Name",
            Field::ReplyTo => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FromName => &self.from_name,
            Field::ReplyTo => &self.reply_to,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FromName => self.from_name = value,
            Field::ReplyTo => self.reply_to = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    // presence is the only check; format and length are left to the provider
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = ContactFormInput::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionState::Sending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionState::Sent)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
}

// ContactForm
//
// the state owned by the contact page.  the transitions are
//
//   Idle/Failed --begin--> Sending --finish(Ok)--> Sent --expire_sent--> Idle (cleared)
//                                  --finish(Err)-> Failed (input kept)
//
// begin() does not refuse to start while a send is already in flight; the page
// disables the button instead
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub input: ContactFormInput,
    pub state: SubmissionState,
}

impl ContactForm {
    pub fn begin(&mut self) -> Result<ContactFormInput, ContactError> {
        if let Some(field) = self.input.first_missing() {
            return Err(ContactError::MissingField(field));
        }

        self.state = SubmissionState::Sending;
        Ok(self.input.clone())
    }

    pub fn finish(&mut self, result: Result<(), DeliveryError>) {
        self.state = match result {
            Ok(()) => SubmissionState::Sent,
            Err(_) => SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_owned()),
        };
    }

    pub fn expire_sent(&mut self) {
        if self.state.is_sent() {
            self.input.clear();
            self.state = SubmissionState::Idle;
        }
    }
}

// seams for the submission flow
//
// the page keeps its ContactForm inside a reactive signal, which cannot be held
// across an await, so submit() only touches the form through short closures
pub trait FormCell {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for Rc<RefCell<ContactForm>> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[async_trait(?Send)]
pub trait Delay {
    async fn delay(&self, duration: Duration);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

// run one submission start to finish
//
// the returned future resolves only after the sent panel has been reset, so
// dropping it early (navigating away) simply leaves the form as it was
pub async fn submit<C, M, D>(
    cell: &mut C,
    mailer: &M,
    delay: &D,
) -> Result<SubmitOutcome, ContactError>
where
    C: FormCell,
    M: Mailer,
    D: Delay,
{
    let input = cell.with_form(|form| form.begin())?;

    let result = mailer.send(&input).await;
    if let Err(err) = &result {
        error!("failed to send email: {err}");
    }

    let outcome = match result {
        Ok(()) => SubmitOutcome::Delivered,
        Err(_) => SubmitOutcome::Failed,
    };
    cell.with_form(|form| form.finish(result));

    if outcome == SubmitOutcome::Delivered {
        info!("contact message delivered");
        delay.delay(SENT_RESET_DELAY).await;
        cell.with_form(|form| form.expire_sent());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tokio::time::{Instant, sleep};

    use super::*;

    struct TokioDelay;

    #[async_trait(?Send)]
    impl Delay for TokioDelay {
        async fn delay(&self, duration: Duration) {
            sleep(duration).await;
        }
    }

    // records every call and what the form looked like while the call was out
    struct FakeMailer {
        fail: bool,
        form: Rc<RefCell<ContactForm>>,
        calls: Cell<usize>,
        seen: RefCell<Vec<(ContactFormInput, SubmissionState)>>,
    }

    impl FakeMailer {
        fn new(form: &Rc<RefCell<ContactForm>>, fail: bool) -> Self {
            FakeMailer {
                fail,
                form: form.clone(),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Mailer for FakeMailer {
        async fn send(&self, input: &ContactFormInput) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            self.seen
                .borrow_mut()
                .push((input.clone(), self.form.borrow().state.clone()));

            if self.fail {
                Err(DeliveryError::Rejected {
                    status: 503,
                    body: "service unavailable".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn ada() -> ContactFormInput {
        ContactFormInput {
            from_name: "Ada".to_owned(),
            reply_to: "ada@example.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        }
    }

    fn form_with(input: ContactFormInput) -> Rc<RefCell<ContactForm>> {
        Rc::new(RefCell::new(ContactForm {
            input,
            state: SubmissionState::Idle,
        }))
    }

    #[tokio::test]
    async fn empty_field_is_never_dispatched() {
        for field in Field::ALL {
            let mut input = ada();
            input.set(field, String::new());

            let mut form = form_with(input.clone());
            let mailer = FakeMailer::new(&form, false);

            let result = submit(&mut form, &mailer, &TokioDelay).await;

            assert_eq!(result, Err(ContactError::MissingField(field)));
            assert_eq!(mailer.calls.get(), 0);
            assert_eq!(form.borrow().state, SubmissionState::Idle);
            assert_eq!(form.borrow().input, input);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_message_resets_after_delay() {
        let mut form = form_with(ada());
        let mailer = FakeMailer::new(&form, false);
        let observed = form.clone();
        let start = Instant::now();

        let watch = async {
            sleep(SENT_RESET_DELAY - Duration::from_millis(10)).await;
            let during = observed.borrow().clone();
            sleep(Duration::from_millis(20)).await;
            let after = observed.borrow().clone();
            (during, after)
        };

        let (outcome, (during, after)) =
            tokio::join!(submit(&mut form, &mailer, &TokioDelay), watch);

        assert_eq!(outcome, Ok(SubmitOutcome::Delivered));
        assert!(start.elapsed() >= SENT_RESET_DELAY);

        // exactly one call, made while the form was in Sending
        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(*mailer.seen.borrow(), vec![(ada(), SubmissionState::Sending)]);

        assert_eq!(during.state, SubmissionState::Sent);
        assert_eq!(during.input, ada());

        assert_eq!(after.state, SubmissionState::Idle);
        assert_eq!(after.input, ContactFormInput::default());
        assert_eq!(*form.borrow(), ContactForm::default());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_waits_the_full_delay() {
        let mut form = form_with(ada());
        let mailer = FakeMailer::new(&form, false);
        let start = Instant::now();

        submit(&mut form, &mailer, &TokioDelay).await.unwrap();

        // the paused clock only moves when a timer is due, and the only timer is the reset
        let elapsed = start.elapsed();
        assert!(elapsed >= SENT_RESET_DELAY);
        assert!(elapsed < SENT_RESET_DELAY + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_message_keeps_input() {
        let mut form = form_with(ada());
        let mailer = FakeMailer::new(&form, true);
        let start = Instant::now();

        let outcome = submit(&mut form, &mailer, &TokioDelay).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Failed));
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(mailer.seen.borrow()[0].1, SubmissionState::Sending);

        let form = form.borrow();
        assert_eq!(form.state, SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_owned()));
        assert_eq!(form.state.error(), Some(DELIVERY_FAILED_MESSAGE));
        assert_eq!(form.input, ada());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_message_can_be_resent() {
        let mut form = form_with(ada());

        let failing = FakeMailer::new(&form, true);
        submit(&mut form, &failing, &TokioDelay).await.unwrap();
        assert!(form.borrow().state.error().is_some());

        let working = FakeMailer::new(&form, false);
        let outcome = submit(&mut form, &working, &TokioDelay).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Delivered));
        assert_eq!(*working.seen.borrow(), vec![(ada(), SubmissionState::Sending)]);
        assert_eq!(*form.borrow(), ContactForm::default());
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut form = ContactForm {
            input: ada(),
            state: SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_owned()),
        };

        assert_eq!(form.begin(), Ok(ada()));
        assert!(form.state.is_sending());
        assert_eq!(form.state.error(), None);
    }

    #[test]
    fn expire_only_applies_to_sent() {
        let failed = SubmissionState::Failed(DELIVERY_FAILED_MESSAGE.to_owned());

        for state in [SubmissionState::Idle, SubmissionState::Sending, failed] {
            let mut form = ContactForm {
                input: ada(),
                state: state.clone(),
            };
            form.expire_sent();

            assert_eq!(form.state, state);
            assert_eq!(form.input, ada());
        }
    }

    #[test]
    fn missing_field_names_the_field() {
        let mut input = ada();
        input.subject.clear();
        input.message.clear();

        assert_eq!(input.first_missing(), Some(Field::Subject));
        assert_eq!(
            ContactError::MissingField(Field::Subject).to_string(),
            "Subject is required"
        );
        assert_eq!(ada().first_missing(), None);
    }
}
