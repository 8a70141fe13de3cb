use iced::widget::text_editor;

/// State for the contact form stub.
///
/// Submission never leaves the process: it sets a fixed acknowledgement,
/// clears the fields, and arms a 5 s clear. The epoch counter ties each
/// pending clear to the submission that created it, so a stale timer can
/// never clip the feedback of a newer submission.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub body: text_editor::Content,
    pub feedback: Option<String>,
    epoch: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intercepts a submission: records the acknowledgement, clears every
    /// field, and returns the epoch the delayed clear must present.
    pub fn acknowledge(&mut self, message: &str) -> u64 {
        self.feedback = Some(message.to_string());
        self.name.clear();
        self.email.clear();
        self.body = text_editor::Content::new();
        self.epoch += 1;
        self.epoch
    }

    /// Clears the feedback, but only for the submission that armed it.
    pub fn expire(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.feedback = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACK: &str = "Message sent (demo). I'll get back to you soon!";

    #[test]
    fn acknowledge_clears_fields_and_sets_feedback() {
        let mut form = ContactForm::new();
        form.name = "Sam".to_string();
        form.email = "sam@example.com".to_string();
        form.body = text_editor::Content::with_text("hello there");

        form.acknowledge(ACK);

        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.body.text().trim().is_empty());
        assert_eq!(form.feedback.as_deref(), Some(ACK));
    }

    #[test]
    fn matching_expiry_clears_feedback_exactly_once() {
        let mut form = ContactForm::new();
        let epoch = form.acknowledge(ACK);

        form.expire(epoch);
        assert!(form.feedback.is_none());

        // A second firing of the same timer changes nothing
        form.expire(epoch);
        assert!(form.feedback.is_none());
    }

    #[test]
    fn stale_expiry_never_clears_newer_feedback() {
        let mut form = ContactForm::new();
        let first = form.acknowledge(ACK);
        let _second = form.acknowledge(ACK);

        form.expire(first);
        assert_eq!(form.feedback.as_deref(), Some(ACK));
    }
}
