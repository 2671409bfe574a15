//! Interactive menu session.
//!
//! This is pure I/O plumbing around [`Roster`]: it collects raw text input,
//! validates it (index bounds, non-empty fields, existing files) before
//! calling into the core, and renders results and errors. Core errors are
//! displayed and the session returns to the main menu instead of crashing.

use std::path::Path;

use crate::core::format::RosterFormat;
use crate::core::roster::Roster;
use crate::domain::model::Participant;
use crate::domain::ports::{ConfigProvider, Console, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    DiscountCode,
    List,
    Cancel,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::DiscountCode),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Cancel),
            "5" => Some(MenuChoice::Save),
            "6" => Some(MenuChoice::Load),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct MenuSession<C: Console, S: Storage, P: ConfigProvider> {
    console: C,
    storage: S,
    config: P,
    roster: Roster,
}

impl<C: Console, S: Storage, P: ConfigProvider> MenuSession<C, S, P> {
    pub fn new(console: C, storage: S, config: P) -> Self {
        Self::with_roster(console, storage, config, Roster::new())
    }

    pub fn with_roster(console: C, storage: S, config: P, roster: Roster) -> Self {
        Self {
            console,
            storage,
            config,
            roster,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The underlying console, for inspecting output after a scripted run.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs the menu loop until the operator exits. Only console failures
    /// (closed stdin) end the session early; roster errors are displayed
    /// and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.main_menu_choice()? {
                MenuChoice::Register => self.register_participant()?,
                MenuChoice::DiscountCode => self.show_discount_code(),
                MenuChoice::List => self.list_participants(),
                MenuChoice::Cancel => self.cancel_participant()?,
                MenuChoice::Save => self.save_roster()?,
                MenuChoice::Load => self.load_roster()?,
                MenuChoice::Exit => return Ok(()),
            }
        }
    }

    fn main_menu_choice(&mut self) -> Result<MenuChoice> {
        let title = self.config.conference_name().to_string();
        self.banner(&title);
        self.console.show("1 Register a participant");
        self.console.show("2 Access a discount code for the conference");
        self.console.show("3 List all participants");
        self.console.show("4 Cancel a participant");
        self.console.show("5 Save to file");
        self.console.show("6 Load from file");
        self.console.show("7 Exit program");

        loop {
            let input = self.console.prompt("Please enter your option: ")?;
            if let Some(choice) = MenuChoice::from_input(&input) {
                return Ok(choice);
            }
            self.console
                .show_error("Please enter a valid menu option: 1-7.");
        }
    }

    fn register_participant(&mut self) -> Result<()> {
        self.banner("Add a new participant to the conference");

        let first_name = self.prompt_required("Enter first name: ")?;
        let last_name = self.prompt_required("Enter last name: ")?;
        let email = self.prompt_required("Enter email: ")?;
        let special_request = self.console.prompt("Enter special meal requests: ")?;

        self.console.show("");
        self.console
            .show("The following participant has been registered:");
        self.console.show(&format!(
            "First name: {}\nLast name: {}\nEmail: {}\nSpecial Requests: {}",
            first_name, last_name, email, special_request
        ));

        self.roster.add_participant(Participant::new(
            first_name,
            last_name,
            email,
            special_request,
        ));

        Ok(())
    }

    fn show_discount_code(&mut self) {
        self.banner("Conference discount code");
        let code = self.roster.discount_code();
        self.console
            .show(&format!("Code for 50% meal discount: {}", code));
    }

    fn list_participants(&mut self) {
        self.banner("Conference participants");

        if self.roster.is_empty() {
            self.console
                .show("There are no participants registered for this conference.");
        } else {
            self.show_participant_list();
        }
    }

    fn cancel_participant(&mut self) -> Result<()> {
        self.banner("Cancel participant from the conference");

        if self.roster.is_empty() {
            self.console
                .show("There are no participants registered for this conference.");
            return Ok(());
        }

        self.show_participant_list();

        // The printed list is 1-based; subtract one before touching the roster.
        let index = loop {
            let input = self
                .console
                .prompt("Enter the participant number to be cancelled: ")?;

            match input.trim().parse::<usize>() {
                Ok(number) if number >= 1 && number <= self.roster.len() => break number - 1,
                _ => self
                    .console
                    .show_error("Please enter a number from the above list."),
            }
        };

        match self.roster.remove_participant(index) {
            Ok(removed) => {
                self.console
                    .show("The following participant has been cancelled:");
                self.console.show(&format!(
                    "First name: {}\nLast name: {}\nEmail: {}",
                    removed.first_name, removed.last_name, removed.email
                ));
            }
            Err(err) => self.console.show_error(&err.to_string()),
        }

        Ok(())
    }

    fn save_roster(&mut self) -> Result<()> {
        self.banner("Save conference to file");

        let format = match self.format() {
            Ok(format) => format,
            Err(err) => {
                self.console.show_error(&err.to_string());
                return Ok(());
            }
        };

        let path = loop {
            let input = self.console.prompt("Enter file path: ")?;
            if !input.trim().is_empty() {
                break input;
            }
            self.console
                .show_error("You have entered an incorrect file path.");
        };

        match self.roster.save(&self.storage, Path::new(&path), format) {
            Ok(full_path) => self.console.show(&format!(
                "Your conference is saved to file: {}",
                full_path.display()
            )),
            Err(err) => self.console.show_error(&err.to_string()),
        }

        Ok(())
    }

    fn load_roster(&mut self) -> Result<()> {
        self.banner("Load conference from file");

        let format = match self.format() {
            Ok(format) => format,
            Err(err) => {
                self.console.show_error(&err.to_string());
                return Ok(());
            }
        };

        let path = loop {
            let input = self.console.prompt("Enter file path: ")?;
            if self.storage.exists(Path::new(&input)) {
                break input;
            }
            self.console
                .show_error(&format!("File {} does not exist!", input));
        };

        match Roster::load(&self.storage, Path::new(&path), format) {
            Ok(roster) => {
                // Wholesale replacement, fresh discount code included. Adopted
                // only after a successful load; on failure the current roster
                // stays as it is.
                self.roster = roster;
                self.console
                    .show(&format!("Your conference is loaded from file: {}", path));
            }
            Err(err) => self.console.show_error(&err.to_string()),
        }

        Ok(())
    }

    fn show_participant_list(&mut self) {
        for (index, participant) in self.roster.participants().iter().enumerate() {
            self.console.show(&format!(
                "{} First name: {} Last name: {} Email: {}",
                index + 1,
                participant.first_name,
                participant.last_name,
                participant.email
            ));
        }
    }

    fn prompt_required(&mut self, message: &str) -> Result<String> {
        loop {
            let input = self.console.prompt(message)?;
            if !input.trim().is_empty() {
                return Ok(input);
            }
            self.console.show_error("You have to enter a value!");
        }
    }

    /// The configured on-disk format. An unknown name is a configuration
    /// error surfaced to the operator, not silently replaced by the default.
    fn format(&self) -> Result<RosterFormat> {
        self.config.roster_format().parse()
    }

    fn banner(&mut self, text: &str) {
        let banner_text = format!("**** {} ****", text);
        let banner_stars = "*".repeat(banner_text.len());

        self.console.show("");
        self.console.show(&banner_text);
        self.console.show(&banner_stars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::path::PathBuf;

    struct ScriptedConsole {
        inputs: VecDeque<String>,
        shown: Vec<String>,
        errors: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                shown: Vec::new(),
                errors: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn prompt(&mut self, _message: &str) -> Result<String> {
            self.inputs.pop_front().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "script exhausted").into()
            })
        }

        fn show(&mut self, message: &str) {
            self.shown.push(message.to_string());
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<PathBuf, String>>,
    }

    impl MemoryStorage {
        fn with_file(path: &str, contents: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(PathBuf::from(path), contents.to_string());
            storage
        }

        fn file(&self, path: &str) -> Option<String> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MemoryStorage {
        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
                .into()
            })
        }

        fn write_string(&self, path: &Path, contents: &str) -> Result<PathBuf> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(path.to_path_buf())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    struct MockConfig {
        format: String,
    }

    impl MockConfig {
        fn legacy() -> Self {
            Self::with_format("legacy")
        }

        fn with_format(format: &str) -> Self {
            Self {
                format: format.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn conference_name(&self) -> &str {
            "Test Conference"
        }

        fn default_roster_path(&self) -> Option<&str> {
            None
        }

        fn roster_format(&self) -> &str {
            &self.format
        }
    }

    fn session(inputs: &[&str]) -> MenuSession<ScriptedConsole, MemoryStorage, MockConfig> {
        MenuSession::new(
            ScriptedConsole::new(inputs),
            MemoryStorage::default(),
            MockConfig::legacy(),
        )
    }

    #[test]
    fn test_register_participant_adds_to_roster() {
        let mut session = session(&[
            "1",
            "Anna",
            "Andersson",
            "anna@andersson.se",
            "Vegan",
            "7",
        ]);

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert_eq!(
            session.roster().participants()[0],
            Participant::new("Anna", "Andersson", "anna@andersson.se", "Vegan")
        );
    }

    #[test]
    fn test_register_reprompts_on_empty_required_field() {
        let mut session = session(&["1", "", "Anna", "Andersson", "anna@andersson.se", "", "7"]);

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        // Special requests may be empty; only the first name was re-prompted.
        assert_eq!(session.roster().participants()[0].special_request, "");
        assert!(session
            .console
            .errors
            .contains(&"You have to enter a value!".to_string()));
    }

    #[test]
    fn test_invalid_menu_option_reprompts() {
        let mut session = session(&["9", "abc", "2", "7"]);

        session.run().unwrap();

        assert_eq!(session.console.errors.len(), 2);
        let code = session.roster().discount_code();
        assert!(session
            .console
            .shown
            .iter()
            .any(|line| line.contains(&code)));
    }

    #[test]
    fn test_cancel_removes_the_numbered_participant() {
        let mut roster = Roster::new();
        roster.add_participant(Participant::new("Anna", "Andersson", "anna@a.se", ""));
        roster.add_participant(Participant::new("Bo", "Berg", "bo@berg.se", ""));

        let mut session = MenuSession::with_roster(
            ScriptedConsole::new(&["4", "2", "7"]),
            MemoryStorage::default(),
            MockConfig::legacy(),
            roster,
        );

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert_eq!(session.roster().participants()[0].first_name, "Anna");
    }

    #[test]
    fn test_cancel_reprompts_on_out_of_range_number() {
        let mut roster = Roster::new();
        roster.add_participant(Participant::new("Anna", "Andersson", "anna@a.se", ""));

        let mut session = MenuSession::with_roster(
            ScriptedConsole::new(&["4", "5", "0", "1", "7"]),
            MemoryStorage::default(),
            MockConfig::legacy(),
            roster,
        );

        session.run().unwrap();

        assert!(session.roster().is_empty());
        assert_eq!(
            session
                .console
                .errors
                .iter()
                .filter(|e| e.contains("from the above list"))
                .count(),
            2
        );
    }

    #[test]
    fn test_cancel_on_empty_roster_returns_to_menu() {
        let mut session = session(&["4", "7"]);

        session.run().unwrap();

        assert!(session.roster().is_empty());
        assert!(session
            .console
            .shown
            .contains(&"There are no participants registered for this conference.".to_string()));
    }

    #[test]
    fn test_save_writes_roster_file() {
        let mut session = session(&[
            "1",
            "Anna",
            "Andersson",
            "anna@andersson.se",
            "Vegan",
            "5",
            "out/conf.txt",
            "7",
        ]);

        session.run().unwrap();

        assert_eq!(
            session.storage.file("out/conf.txt").unwrap(),
            "Anna,Andersson,anna@andersson.se,Vegan\n"
        );
    }

    #[test]
    fn test_save_reprompts_on_empty_path() {
        let mut session = session(&["5", "", "conf.txt", "7"]);

        session.run().unwrap();

        assert!(session.storage.file("conf.txt").is_some());
        assert!(session
            .console
            .errors
            .contains(&"You have entered an incorrect file path.".to_string()));
    }

    #[test]
    fn test_load_replaces_roster_with_fresh_discount_code() {
        let storage = MemoryStorage::with_file("conf.txt", "Anna,Andersson,anna@a.se,Vegan\n");
        let mut session = MenuSession::new(
            ScriptedConsole::new(&["6", "conf.txt", "7"]),
            storage,
            MockConfig::legacy(),
        );
        let old_code = session.roster().discount_code();

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert_eq!(session.roster().participants()[0].first_name, "Anna");
        assert_ne!(session.roster().discount_code(), old_code);
    }

    #[test]
    fn test_load_reprompts_until_file_exists() {
        let storage = MemoryStorage::with_file("good.txt", "Bo,Berg,bo@berg.se,\n");
        let mut session = MenuSession::new(
            ScriptedConsole::new(&["6", "missing.txt", "good.txt", "7"]),
            storage,
            MockConfig::legacy(),
        );

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert!(session
            .console
            .errors
            .contains(&"File missing.txt does not exist!".to_string()));
    }

    #[test]
    fn test_session_ends_when_console_input_is_closed() {
        // Exhausted input stands in for closed stdin: the console answers
        // with an error, never an endless stream of empty strings, so the
        // re-prompt loops terminate instead of spinning.
        let mut session = session(&["1", "Anna"]);

        let err = session.run().unwrap_err();

        assert!(matches!(err, crate::utils::error::RosterError::IoError(_)));
        assert!(session.console.errors.is_empty());
    }

    #[test]
    fn test_unknown_format_shows_config_error_on_save() {
        let mut session = MenuSession::new(
            ScriptedConsole::new(&["5", "7"]),
            MemoryStorage::default(),
            MockConfig::with_format("xml"),
        );

        session.run().unwrap();

        assert!(session
            .console
            .errors
            .iter()
            .any(|e| e.contains("Unsupported roster format: xml")));
        assert!(session.storage.files.borrow().is_empty());
    }

    #[test]
    fn test_unknown_format_shows_config_error_on_load() {
        let storage = MemoryStorage::with_file("conf.txt", "Anna,Andersson,anna@a.se,Vegan\n");
        let mut session = MenuSession::new(
            ScriptedConsole::new(&["6", "7"]),
            storage,
            MockConfig::with_format("xml"),
        );

        session.run().unwrap();

        assert!(session
            .console
            .errors
            .iter()
            .any(|e| e.contains("Unsupported roster format: xml")));
        assert!(session.roster().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_current_roster() {
        let storage = MemoryStorage::with_file("bad.txt", "only,three,fields\n");
        let mut roster = Roster::new();
        roster.add_participant(Participant::new("Anna", "Andersson", "anna@a.se", ""));

        let mut session = MenuSession::with_roster(
            ScriptedConsole::new(&["6", "bad.txt", "7"]),
            storage,
            MockConfig::legacy(),
            roster,
        );

        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert_eq!(session.roster().participants()[0].first_name, "Anna");
        assert!(session
            .console
            .errors
            .iter()
            .any(|e| e.contains("Malformed roster line 1")));
    }
}
