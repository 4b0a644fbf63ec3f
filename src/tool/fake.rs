/// Recording `ToolRunner` used by unit tests.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::io;

use super::{ToolError, ToolRunner};
use crate::flags::fixtures::{HELM_TEMPLATE_HELP, KUBECONFORM_HELP};

/// Scripted answer to a help query.
#[derive(Debug, Clone)]
pub enum HelpReply {
    Text(String),
    Exit(i32),
    Missing,
}

/// One recorded pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Template(Vec<String>),
    Validate(Vec<String>, Vec<u8>),
    Relay(Vec<String>, Vec<(String, String)>),
}

/// Answers help queries from fixtures and records everything else.
///
/// Template and validator runs succeed unless an exit code was queued with
/// [`FakeRunner::template_exits`] / [`FakeRunner::validate_exits`].
pub struct FakeRunner {
    helm_help: HelpReply,
    kubeconform_help: HelpReply,
    template: RefCell<VecDeque<i32>>,
    validate: RefCell<VecDeque<i32>>,
    relay: RefCell<VecDeque<i32>>,
    queries: RefCell<usize>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            helm_help: HelpReply::Text(HELM_TEMPLATE_HELP.to_owned()),
            kubeconform_help: HelpReply::Text(KUBECONFORM_HELP.to_owned()),
            template: RefCell::default(),
            validate: RefCell::default(),
            relay: RefCell::default(),
            queries: RefCell::default(),
            calls: RefCell::default(),
        }
    }
}

impl FakeRunner {
    pub fn helm_help(mut self, reply: HelpReply) -> Self {
        self.helm_help = reply;
        self
    }

    pub fn kubeconform_help(mut self, reply: HelpReply) -> Self {
        self.kubeconform_help = reply;
        self
    }

    pub fn template_exits(self, codes: &[i32]) -> Self {
        self.template.borrow_mut().extend(codes);
        self
    }

    pub fn validate_exits(self, codes: &[i32]) -> Self {
        self.validate.borrow_mut().extend(codes);
        self
    }

    pub fn relay_exits(self, codes: &[i32]) -> Self {
        self.relay.borrow_mut().extend(codes);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn queries(&self) -> usize {
        *self.queries.borrow()
    }

    fn reply(&self, reply: &HelpReply, program: String) -> Result<Vec<u8>, ToolError> {
        *self.queries.borrow_mut() += 1;
        match reply {
            HelpReply::Text(text) => Ok(text.clone().into_bytes()),
            HelpReply::Exit(code) => Err(ToolError::Exit {
                program,
                code: *code,
            }),
            HelpReply::Missing => Err(ToolError::Spawn {
                program,
                source: io::Error::from_raw_os_error(2),
            }),
        }
    }
}

fn strings(argv: &[OsString]) -> Vec<String> {
    argv.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

fn outcome(queue: &RefCell<VecDeque<i32>>, program: &str) -> Result<(), ToolError> {
    match queue.borrow_mut().pop_front() {
        Some(code) if code != 0 => Err(ToolError::Exit {
            program: program.to_owned(),
            code,
        }),
        _ => Ok(()),
    }
}

impl ToolRunner for FakeRunner {
    fn capture(&self, argv: &[OsString]) -> Result<Vec<u8>, ToolError> {
        let args = strings(argv);
        let program = args.first().cloned().unwrap_or_default();
        match args.get(1..).unwrap_or_default() {
            [sub, help] if sub == "template" && help == "--help" => {
                self.reply(&self.helm_help, program)
            }
            [help] if help == "-h" => self.reply(&self.kubeconform_help, program),
            _ => {
                self.calls.borrow_mut().push(Call::Template(args.clone()));
                outcome(&self.template, &program)?;
                Ok(format!("# rendered by {}\n", args.join(" ")).into_bytes())
            }
        }
    }

    fn feed(&self, argv: &[OsString], input: &[u8]) -> Result<(), ToolError> {
        let args = strings(argv);
        let program = args.first().cloned().unwrap_or_default();
        self.calls
            .borrow_mut()
            .push(Call::Validate(args, input.to_vec()));
        outcome(&self.validate, &program)
    }

    fn relay(&self, argv: &[OsString], envs: &[(String, String)]) -> Result<(), ToolError> {
        let args = strings(argv);
        let program = args.first().cloned().unwrap_or_default();
        self.calls
            .borrow_mut()
            .push(Call::Relay(args, envs.to_vec()));
        outcome(&self.relay, &program)
    }
}
