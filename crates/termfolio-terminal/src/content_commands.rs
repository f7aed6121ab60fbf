//! Portfolio pages: help, about, skills, projects, resume, education,
//! contact, achievements, welcome.

use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the portfolio page commands (and the `experience` alias).
pub fn register_content_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ProjectsCmd));
    for page in PAGES {
        reg.register(Box::new(page));
    }
    reg.register_alias("experience", "resume");
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

/// A command whose output is a fixed block of text.
#[derive(Clone, Copy)]
struct StaticPage {
    name: &'static str,
    description: &'static str,
    body: &'static str,
}

impl Command for StaticPage {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(self.body.to_string()))
    }
}

const PAGES: [StaticPage; 7] = [
    StaticPage {
        name: "about",
        description: "Snapshot of who I am and what I do",
        body: include_str!("../content/about.txt"),
    },
    StaticPage {
        name: "skills",
        description: "Technical toolkit and focus areas",
        body: include_str!("../content/skills.txt"),
    },
    StaticPage {
        name: "resume",
        description: "Internship highlights & condensed CV",
        body: include_str!("../content/resume.txt"),
    },
    StaticPage {
        name: "education",
        description: "Academic record & certifications",
        body: include_str!("../content/education.txt"),
    },
    StaticPage {
        name: "contact",
        description: "Ways to reach me",
        body: include_str!("../content/contact.txt"),
    },
    StaticPage {
        name: "achievements",
        description: "Leadership, certifications, milestones",
        body: include_str!("../content/achievements.txt"),
    },
    StaticPage {
        name: "welcome",
        description: "Replay the intro banner",
        body: include_str!("../content/welcome.txt"),
    },
];

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

const COMMAND_ROWS: &[(&str, &str)] = &[
    ("about", "Snapshot of who I am and what I do"),
    ("resume", "Internship highlights & condensed CV"),
    ("experience", "Alias for resume"),
    ("education", "Academic record & certifications"),
    ("skills", "Technical toolkit and focus areas"),
    ("projects", "List featured builds"),
    ("projects show <id>", "Deep dive into a project"),
    ("achievements", "Leadership, certifications, milestones"),
    ("contact", "Ways to reach me"),
    ("welcome", "Replay the intro banner"),
    ("whoami", "Display current user"),
    ("pwd", "Print working directory"),
    ("ls", "List directory contents"),
    ("cd <dir>", "Change directory (simulated)"),
    ("cat <file>", "Display file contents"),
    ("echo <text>", "Print text to terminal"),
    ("clear", "Clear terminal screen"),
    ("history", "Show command history"),
    ("date", "Display current date and time"),
    ("themes ls", "List available themes"),
    ("themes set <name>", "Switch color themes"),
    ("sound on|off", "Toggle sound effects"),
    ("help", "Display this help message"),
    ("exit", "Reload the terminal"),
];

const SHORTCUT_ROWS: &[(&str, &str)] = &[
    ("Tab", "Auto-complete commands"),
    ("↑ / ↓", "Navigate command history"),
    ("Ctrl + L", "Clear screen"),
    ("Ctrl + U", "Clear current line"),
    ("Ctrl + C", "Cancel current command"),
    ("Ctrl + A", "Move cursor to start"),
    ("Ctrl + E", "Move cursor to end"),
    ("Ctrl + D", "Quit (on an empty line)"),
];

/// Render a two-column ASCII table with `+---+` borders.
fn build_table(headers: (&str, &str), rows: &[(&str, &str)]) -> String {
    let width = |s: &str| s.chars().count();
    let left = rows
        .iter()
        .map(|(l, _)| width(l))
        .chain([width(headers.0)])
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, r)| width(r))
        .chain([width(headers.1)])
        .max()
        .unwrap_or(0);

    let border = format!("+{}+{}+", "-".repeat(left + 2), "-".repeat(right + 2));
    let row = |l: &str, r: &str| format!("| {l:<left$} | {r:<right$} |");

    let mut lines = vec![border.clone(), row(headers.0, headers.1), border.clone()];
    lines.extend(rows.iter().map(|(l, r)| row(l, r)));
    lines.push(border);
    lines.join("\n")
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display this help message"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let text = [
            String::new(),
            "Available Commands:".to_string(),
            build_table(("Command", "Description"), COMMAND_ROWS),
            String::new(),
            "Keyboard Shortcuts:".to_string(),
            build_table(("Shortcut", "Action"), SHORTCUT_ROWS),
            String::new(),
            "💡 Pro Tip: Try 'projects' to see what I've built!".to_string(),
        ]
        .join("\n");
        Ok(CommandOutput::Text(text))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct Project {
    id: u32,
    title: &'static str,
    stack: &'static str,
    highlight: &'static str,
    detail: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "PillBox",
        stack: "Next.js · Firebase · Flask · Git",
        highlight: "Medication delivery platform improving elderly access by 30%.",
        detail: include_str!("../content/project_pillbox.txt"),
    },
    Project {
        id: 2,
        title: "FAQ-ChatBot",
        stack: "BERT · NLTK · Flask · Scikit-learn",
        highlight: "Intelligent FAQ assistant with 40% better answer accuracy.",
        detail: include_str!("../content/project_faq_chatbot.txt"),
    },
];

fn project_list() -> String {
    let summaries: Vec<String> = PROJECTS
        .iter()
        .map(|p| {
            format!(
                "\n[{}] {}\n    ⚙️  Tech: {}\n    🚀 {}",
                p.id, p.title, p.stack, p.highlight
            )
        })
        .collect();
    format!(
        "\n┌─────────────────────────────────────────────────────────┐\n\
         │ Featured Projects                                       │\n\
         └─────────────────────────────────────────────────────────┘\n\
         {}\n\n\
         Usage:\n  \
         projects show <id>    View detailed breakdown\n  \
         projects back         Return to this list\n\n\
         💡 Try: projects show 1\n",
        summaries.join("\n")
    )
}

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List featured builds"
    }
    fn usage(&self) -> &str {
        "projects [show <id> | back]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args {
            [] | ["back", ..] => Ok(CommandOutput::Text(project_list())),
            ["show", id, ..] if !id.is_empty() => {
                let found = id
                    .parse::<u32>()
                    .ok()
                    .and_then(|n| PROJECTS.iter().find(|p| p.id == n));
                match found {
                    Some(project) => Ok(CommandOutput::Text(project.detail.to_string())),
                    None => Err(TermfolioError::Command(format!(
                        "Project {id} not found. Try 'projects' to see all available projects."
                    ))),
                }
            },
            _ => Err(TermfolioError::Command(
                "Invalid command. Usage: projects show <id> or projects back.".to_string(),
            )),
        }
    }
}
