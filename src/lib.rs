//! Search and open plain-text notes from the command line.
//!
//! Positional arguments are search words: notes whose relative path or
//! contents match every word are listed oldest-first, followed by a
//! bottom entry (label `0`) that is either the exact-match note for the
//! query or an offer to create it. The chosen file is handed to the
//! user's editor, and the editor's exit status becomes ours.

use std::env;
use std::error::Error;
use std::fs;

pub mod config;
pub mod editor;
mod format;
pub mod prompt;
mod scan;
mod search;
mod select;

use crate::config::Settings;
use crate::editor::{CommandLauncher, EditorLauncher};
use crate::format::FormatContext;
use crate::prompt::{ConsolePrompter, Prompter};

/// Parse the command line, resolve settings and run the interactive flow.
/// Returns the process exit code: the editor's status, or `0` for runs
/// that end before an editor is launched.
pub fn entry() -> Result<i32, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = config::parse_args(args)?;
    if cli.help {
        print_help();
        return Ok(0);
    }
    let settings = config::resolve(cli)?;
    let launcher = CommandLauncher::new(&settings.editor);
    run(&settings, &mut ConsolePrompter, &launcher)
}

/// The interactive notes command: discover, filter, pick, edit.
pub fn run(
    settings: &Settings,
    prompter: &mut dyn Prompter,
    launcher: &dyn EditorLauncher,
) -> Result<i32, Box<dyn Error>> {
    if !settings.notes_dir.is_dir() {
        let question = format!(
            "Create directory {} (y/n)?",
            settings.notes_dir.display()
        );
        match prompt::get_boolean(prompter, &question, "y")? {
            None => return Ok(0),
            Some(false) => {
                return Err(
                    format!("Cannot go on without {}.", settings.notes_dir.display()).into(),
                );
            }
            Some(true) => {
                fs::create_dir_all(&settings.notes_dir)?;
                println!("Created {}", settings.notes_dir.display());
                if settings.search_words.is_empty() {
                    return Ok(0);
                }
            }
        }
    }

    let paths = scan::discover_notes(&settings.notes_dir, &settings.extension)?;
    if paths.is_empty() && settings.search_words.is_empty() {
        return Err("You don't have any notes yet.".into());
    }

    let matching = search::filter_notes(&settings.notes_dir, paths, &settings.search_words)?;
    let list = select::build_selection(
        &settings.notes_dir,
        matching,
        &settings.search_words,
        &settings.extension,
    )?;

    let ctx = FormatContext::from_env();
    let width = terminal_columns().unwrap_or(96).clamp(40, 160);
    let Some(chosen) = select::choose(&list, prompter, &ctx, width)? else {
        return Ok(0);
    };

    // Nested note names like `cooking/tofu soup` need their subdirectory.
    if let Some(parent) = chosen.path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(launcher.open(&chosen.path)?)
}

pub(crate) fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| width.0 as usize)
}

fn print_help() {
    println!(
        "\
notefind - search and open plain text notes
Usage:
  notefind [options] [search words...]

To create a new note run `notefind My New Note`.
To find notes about tofu recipes and choose one to open run
`notefind tofu recipe`. To list all notes and choose one to open
run `notefind` with no arguments.

Options:
  -e, --editor <cmd>      the text editor to use (default: $EDITOR, then vi)
  -d, --directory <path>  the notes directory to use (default: {dir})
  -x, --extension <ext>   the note filename extension (default: {ext})
  -c, --config <path>     config file to read (default: ~/{cfg})
  -h, --help              show this message

Config file:
  An INI-style file with keys editor, directory and extension. Command
  line flags override it; it overrides the environment.

Environment:
  EDITOR                  default editor command
  NOTEFIND_DIR            override the default notes directory
  NO_COLOR                disable colored menu output
",
        dir = config::DEFAULT_DIRECTORY,
        ext = config::DEFAULT_EXTENSION,
        cfg = config::CONFIG_FILE_NAME,
    );
}
