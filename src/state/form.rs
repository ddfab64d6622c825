// Add-FAQ form state.
// Holds the question and answer text being typed and the submit guard.

use crate::api::NewFaq;

/// Editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Single-line question input.
    Question,
    /// Multi-line answer input.
    Answer,
}

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
}

impl FaqForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Question => &mut self.question,
            FormField::Answer => &mut self.answer,
        }
    }

    /// Append a typed character to a field.
    pub fn insert(&mut self, field: FormField, c: char) {
        self.field_mut(field).push(c);
    }

    /// Start a new line in the answer. The question is single-line.
    pub fn newline(&mut self, field: FormField) {
        if field == FormField::Answer {
            self.answer.push('\n');
        }
    }

    /// Delete the last character of a field.
    pub fn backspace(&mut self, field: FormField) {
        self.field_mut(field).pop();
    }

    /// Both fields contain something other than whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }

    /// Request body with the fields exactly as typed.
    pub fn to_new_faq(&self) -> NewFaq {
        NewFaq {
            question: self.question.clone(),
            answer: self.answer.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.question.clear();
        self.answer.clear();
    }
}
