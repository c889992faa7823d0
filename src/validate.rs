//! Field-level checks for the booking, contact and testimonial forms.
//!
//! Every rule looks at one field in isolation. A form is valid when the
//! returned [`FieldErrors`] is empty.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    BookingRequest, ContactMessage, TestimonialDraft, CONTENT_MAX, MAX_RATING, MIN_RATING,
    NAME_MAX, ROLE_MAX,
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]{10,}$").expect("phone pattern"));

/// Invalid field name to message. A missing key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Message for `field`, or an empty string. Templates use this directly.
    pub fn message(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// First message wins; later rules for the same field are ignored.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn max_len(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn validate_booking(form: &BookingRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !required(&form.full_name) {
        errors.insert("fullName", "Name is required");
    } else if !max_len(&form.full_name, NAME_MAX) {
        errors.insert("fullName", "Name must be less than 100 characters");
    }

    if !required(&form.email) {
        errors.insert("email", "Email is required");
    } else if !email(&form.email) {
        errors.insert("email", "Invalid email format");
    }

    if !required(&form.phone) {
        errors.insert("phone", "Phone is required");
    } else if !phone(&form.phone) {
        errors.insert("phone", "Invalid phone number");
    }

    if !required(&form.service_type) {
        errors.insert("serviceType", "Please select a service");
    }
    if !required(&form.property_type) {
        errors.insert("propertyType", "Please select property type");
    }
    if !required(&form.preferred_date) {
        errors.insert("preferredDate", "Please select a date");
    }

    errors
}

pub fn validate_contact(form: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !required(&form.name) {
        errors.insert("name", "Name is required");
    } else if !max_len(&form.name, NAME_MAX) {
        errors.insert("name", "Name must be less than 100 characters");
    }

    if !required(&form.email) {
        errors.insert("email", "Email is required");
    } else if !email(&form.email) {
        errors.insert("email", "Invalid email format");
    }

    // Phone is optional here, but a filled-in number still has to look like one.
    if required(&form.phone) && !phone(&form.phone) {
        errors.insert("phone", "Invalid phone number");
    }

    if !required(&form.message) {
        errors.insert("message", "Message is required");
    }

    errors
}

pub fn validate_testimonial(form: &TestimonialDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !required(&form.name) {
        errors.insert("name", "Name is required");
    } else if !max_len(&form.name, NAME_MAX) {
        errors.insert("name", "Name must be less than 100 characters");
    }

    if !max_len(&form.role, ROLE_MAX) {
        errors.insert("role", "Role must be less than 100 characters");
    }

    if !(MIN_RATING..=MAX_RATING).contains(&form.rating) {
        errors.insert("rating", "Please select a rating");
    }

    if !required(&form.content) {
        errors.insert("content", "Testimonial is required");
    } else if !max_len(&form.content, CONTENT_MAX) {
        errors.insert("content", "Testimonial must be less than 500 characters");
    }

    errors
}
