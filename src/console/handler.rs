//! Console command handling
//!
//! Applies parsed commands to a [`FormBinding`] and renders results into a
//! [`LoginView`].

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::binding::FormBinding;
use crate::console::parser::Command;
use crate::validation::Validator;
use crate::view::LoginView;

pub const HELP_TEXT: &str = "Commands:\n  email <address>\n  password <text>\n  submit\n  show\n  clear\n  help\n  quit";

#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandOutcome {
    fn reply(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Continue,
            message: Some(message.into()),
        }
    }

    fn silent() -> Self {
        Self {
            status: CommandStatus::Continue,
            message: None,
        }
    }
}

/// Console-side state: the bound form plus the view it renders into.
pub struct ConsoleState {
    binding: FormBinding,
    view: Rc<RefCell<LoginView>>,
}

impl ConsoleState {
    pub fn new(validator: Validator) -> Self {
        let binding = FormBinding::new(validator);
        let view = Rc::new(RefCell::new(LoginView::new()));

        let target = Rc::clone(&view);
        binding.observe_results(move |result| target.borrow_mut().render(result));

        Self { binding, view }
    }

    pub fn binding(&self) -> &FormBinding {
        &self.binding
    }

    pub fn view(&self) -> LoginView {
        self.view.borrow().clone()
    }

    pub fn handle_command(&mut self, command: &Command) -> CommandOutcome {
        match command {
            Command::Email(value) => {
                self.binding.set_email_address(value.as_str());
                CommandOutcome::silent()
            }
            Command::Password(value) => {
                self.binding.set_password(value.as_str());
                CommandOutcome::silent()
            }
            Command::Submit => {
                self.binding.submit();
                CommandOutcome::reply(self.view.borrow().to_string())
            }
            Command::Show => CommandOutcome::reply(self.view.borrow().to_string()),
            Command::Clear => {
                self.binding.reset();
                *self.view.borrow_mut() = LoginView::new();
                CommandOutcome::reply("Form cleared")
            }
            Command::Help => CommandOutcome::reply(HELP_TEXT),
            Command::Quit => {
                info!("Console session ended by user");
                CommandOutcome {
                    status: CommandStatus::Quit,
                    message: Some("Goodbye".to_string()),
                }
            }
            Command::Unknown(raw) => {
                CommandOutcome::reply(format!("Unknown command: {:?} (try \"help\")", raw))
            }
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}
