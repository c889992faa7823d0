use uuid::Uuid;

use crate::{templates::Notice, validate::FieldErrors};

/// Tags one submit attempt in the logs. Attempts are never deduplicated.
pub fn attempt_id() -> String {
    Uuid::new_v4().to_string()
}

/// Values, errors and in-flight state for one form instance.
#[derive(Debug, Clone, Default)]
pub struct FormSession<T> {
    pub values: T,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl<T: Default> FormSession<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            submitting: false,
            notice: None,
        }
    }

    /// Runs `check` over the current values and returns whether they passed.
    pub fn validate(&mut self, check: impl Fn(&T) -> FieldErrors) -> bool {
        self.errors = check(&self.values);
        self.errors.is_empty()
    }

    /// False while an earlier attempt is still in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.notice = None;
        true
    }

    pub fn succeed(&mut self, notice: Notice) {
        self.values = T::default();
        self.errors = FieldErrors::new();
        self.submitting = false;
        self.notice = Some(notice);
    }

    pub fn fail(&mut self, notice: Notice) {
        self.submitting = false;
        self.notice = Some(notice);
    }
}
