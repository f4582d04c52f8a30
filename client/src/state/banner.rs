//! Greeting and error lines shown above the sketcher.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::net::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub greeting: Option<String>,
    pub error: Option<String>,
}

impl BannerState {
    pub fn set_greeting(&mut self, text: String) {
        self.greeting = Some(text);
    }

    /// Record a failed request. The latest failure wins.
    pub fn set_error(&mut self, err: &ApiError) {
        self.error = Some(err.banner_message());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn greeting_line(&self) -> String {
        match &self.greeting {
            Some(text) => format!("we have a greeting: {text}"),
            None => "we dont have a greeting".to_owned(),
        }
    }

    pub fn error_line(&self) -> Option<String> {
        self.error.as_ref().map(|message| format!("ERROR: {message}"))
    }
}
