use anyhow::Result;
use derive_more::Display;
use fieldcheck::models::{toggle_love, ToggleState};
use fieldcheck::utils::input_validation::{
    validate_email, validate_login_password, validate_password, validate_username,
    ValidationResult,
};
use inquire::{Password, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./fieldcheck.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None to leave the menu,
/// or Some(()) to show it again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors without leaving,
    /// until the menu asks to exit.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

/// Prompts for one field until its rule accepts the value,
/// printing the rule's message after each rejected attempt.
fn prompt_until_valid(label: &str, rule: fn(&str) -> ValidationResult) -> Result<String> {
    loop {
        let value = Text::new(label).prompt()?;

        match rule(&value) {
            ValidationResult::Valid => return Ok(value),
            ValidationResult::Invalid(message) => println!("{message}"),
        }
    }
}

/// Same loop for passwords, with masked input.
fn prompt_password_until_valid(
    label: &str,
    rule: fn(&str) -> ValidationResult,
) -> Result<String> {
    loop {
        let value = Password::new(label)
            .without_confirmation()
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .prompt()?;

        match rule(&value) {
            ValidationResult::Valid => return Ok(value),
            ValidationResult::Invalid(message) => println!("{message}"),
        }
    }
}

pub struct App {
    love: ToggleState,
}

impl App {
    pub fn new() -> Self {
        App {
            love: ToggleState::default(),
        }
    }

    pub fn start(&mut self) {
        println!("Welcome to fieldcheck, the form playground.");
        self.enter_loop();
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Sign up")]
            SignUp,
            #[display("Log in")]
            LogIn,
            #[display("Toggle love")]
            ToggleLove,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::SignUp => {
                let username = prompt_until_valid("Username:", validate_username)?;
                let _email = prompt_until_valid("Email:", validate_email)?;
                let _password = prompt_password_until_valid("Password:", validate_password)?;

                info!("Sign-up form accepted for {username}");
                println!("All fields are valid, {username}. Nothing is stored.");
                Ok(MENU_LOOP)
            }
            Choice::LogIn => {
                let username = prompt_until_valid("Username:", validate_username)?;
                let _password =
                    prompt_password_until_valid("Password:", validate_login_password)?;

                info!("Login form accepted for {username}");
                println!("Login form is valid. There is no account database to check against.");
                Ok(MENU_LOOP)
            }
            Choice::ToggleLove => {
                self.love = toggle_love(self.love);
                println!(
                    "Love is now {}.",
                    if self.love.is_on() { "on" } else { "off" }
                );
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    App::new().start();
    Ok(())
}
