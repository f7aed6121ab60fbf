//! Simulated shell commands: whoami, pwd, ls, cd, cat, echo, history, date,
//! clear.

use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the simulated shell commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// whoami / pwd / ls
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text("visitor".to_string()))
    }
}

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text("~/portfolio".to_string()))
    }
}

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            include_str!("../content/ls.txt").to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

const DIRECTORIES: [&str; 7] = ["projects", "skills", "about", "contact", "resume", "home", "~"];

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory (simulated)"
    }
    fn usage(&self) -> &str {
        "cd <dir>"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&dir) = args.first() else {
            return Err(TermfolioError::Command("cd: missing operand".to_string()));
        };
        if DIRECTORIES.contains(&dir) {
            Ok(CommandOutput::Text(format!("Changed directory to ~/{dir}")))
        } else {
            Err(TermfolioError::Command(format!(
                "cd: no such file or directory: {dir}"
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

const FILES: [(&str, &str); 4] = [
    ("about.md", include_str!("../content/file_about_md.txt")),
    ("contact.txt", include_str!("../content/file_contact_txt.txt")),
    ("education.md", include_str!("../content/file_education_md.txt")),
    ("resume.pdf", include_str!("../content/file_resume_pdf.txt")),
];

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&file) = args.first() else {
            return Err(TermfolioError::Command(
                "cat: missing file operand".to_string(),
            ));
        };
        let name = file.strip_prefix("~/").unwrap_or(file);
        FILES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, body)| CommandOutput::Text(body.to_string()))
            .ok_or_else(|| {
                TermfolioError::Command(format!("cat: {file}: No such file or directory"))
            })
    }
}

// ---------------------------------------------------------------------------
// echo / history / date / clear
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text to terminal"
    }
    fn usage(&self) -> &str {
        "echo <text>"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if env.history.is_empty() {
            return Ok(CommandOutput::Text("No commands in history yet.".to_string()));
        }
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>3}  {cmd}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            env.now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        ))
    }
}

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
