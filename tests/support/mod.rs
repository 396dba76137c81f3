//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use zmon_cli::core::credentials::{Credential, Prompter};
use zmon_cli::core::session::{Method, Response, Transport};
use zmon_cli::error::Result;

/// Prompter with pre-scripted answers.
#[derive(Default)]
pub struct ScriptedPrompter {
    texts: Mutex<VecDeque<String>>,
    passwords: Mutex<VecDeque<String>>,
    password_prompts: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&self, answer: &str) {
        self.texts.lock().unwrap().push_back(answer.to_string());
    }

    pub fn push_password(&self, answer: &str) {
        self.passwords.lock().unwrap().push_back(answer.to_string());
    }

    /// Users that were asked for a password, in order.
    pub fn password_prompts(&self) -> Vec<String> {
        self.password_prompts.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&self, label: &str, default: Option<&str>) -> Result<String> {
        match self.texts.lock().unwrap().pop_front() {
            Some(answer) => Ok(answer),
            None => Ok(default
                .unwrap_or_else(|| panic!("no scripted answer for prompt '{}'", label))
                .to_string()),
        }
    }

    fn prompt_password(&self, user: &str) -> Result<String> {
        self.password_prompts.lock().unwrap().push(user.to_string());
        Ok(self
            .passwords
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted password"))
    }

    fn confirm(&self, _label: &str) -> Result<bool> {
        Ok(false)
    }
}

/// Transport that replays scripted responses and records every call.
pub struct StubTransport {
    responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<(Method, String, Credential)>>,
}

impl StubTransport {
    pub fn new(responses: &[(u16, &str)]) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .iter()
                    .map(|(status, body)| Response {
                        status: *status,
                        body: body.to_string(),
                    })
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Method, String, Credential)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Transport for StubTransport {
    fn send(
        &self,
        method: Method,
        url: &str,
        credential: &Credential,
        _body: Option<&str>,
    ) -> Result<Response> {
        self.calls
            .lock()
            .unwrap()
            .push((method, url.to_string(), credential.clone()));
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted"))
    }
}
