use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DIRECTORY: &str = "~/txt";
pub const DEFAULT_EXTENSION: &str = ".txt";
pub const DEFAULT_EDITOR: &str = "vi";
pub const CONFIG_FILE_NAME: &str = ".notefindrc";

/// Raw command line: flag values plus positional search words.
#[derive(Default, Debug)]
pub struct CliArgs {
    pub editor: Option<String>,
    pub directory: Option<String>,
    pub extension: Option<String>,
    pub config: Option<PathBuf>,
    pub search_words: Vec<String>,
    pub help: bool,
}

/// Everything the interactive flow needs, resolved once up front.
/// Precedence: command line, then config file, then environment, then
/// built-in defaults.
pub struct Settings {
    pub notes_dir: PathBuf,
    pub editor: String,
    pub extension: String,
    pub search_words: Vec<String>,
}

fn flag_value(
    iter: &mut std::vec::IntoIter<String>,
    flag: &str,
) -> Result<String, Box<dyn Error>> {
    iter.next()
        .ok_or_else(|| format!("Provide a value after {flag}").into())
}

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, Box<dyn Error>> {
    let mut cli = CliArgs::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-e" | "--editor" => {
                cli.editor = Some(flag_value(&mut iter, "-e/--editor")?);
            }
            "-d" | "--directory" => {
                cli.directory = Some(flag_value(&mut iter, "-d/--directory")?);
            }
            "-x" | "--extension" => {
                cli.extension = Some(flag_value(&mut iter, "-x/--extension")?);
            }
            "-c" | "--config" => {
                cli.config = Some(PathBuf::from(flag_value(&mut iter, "-c/--config")?));
            }
            "-h" | "--help" => cli.help = true,
            other if other.len() > 1 && other.starts_with('-') => {
                return Err(format!("Unknown flag: {other}").into());
            }
            _ => cli.search_words.push(arg),
        }
    }
    Ok(cli)
}

/// Fallback values read from the INI-style config file. A single default
/// section; `[section]` headers and `#`/`;` comments are tolerated.
#[derive(Default, Debug, PartialEq)]
pub struct FileConfig {
    pub editor: Option<String>,
    pub directory: Option<String>,
    pub extension: Option<String>,
}

pub fn parse_config(raw: &str) -> FileConfig {
    let mut cfg = FileConfig::default();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with(';')
            || line.starts_with('[')
        {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "editor" => cfg.editor = Some(value.to_string()),
            "directory" => cfg.directory = Some(value.to_string()),
            "extension" => cfg.extension = Some(value.to_string()),
            _ => {}
        }
    }
    cfg
}

fn load_config_file(
    explicit: Option<&Path>,
    home: Option<&str>,
) -> Result<FileConfig, Box<dyn Error>> {
    if let Some(path) = explicit {
        let raw = fs::read_to_string(path).map_err(|err| {
            format!("could not read config file {}: {err}", path.display())
        })?;
        return Ok(parse_config(&raw));
    }
    // The default config file is optional.
    let Some(home) = home else {
        return Ok(FileConfig::default());
    };
    match fs::read_to_string(Path::new(home).join(CONFIG_FILE_NAME)) {
        Ok(raw) => Ok(parse_config(&raw)),
        Err(_) => Ok(FileConfig::default()),
    }
}

pub fn expand_tilde(path: &str, home: Option<&str>) -> Result<PathBuf, Box<dyn Error>> {
    if path != "~" && !path.starts_with("~/") {
        return Ok(PathBuf::from(path));
    }
    let home = home.ok_or("HOME not set; pass -d or set NOTEFIND_DIR")?;
    let rest = path.trim_start_matches('~').trim_start_matches('/');
    let mut expanded = PathBuf::from(home);
    if !rest.is_empty() {
        expanded.push(rest);
    }
    Ok(expanded)
}

pub fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

pub fn resolve(cli: CliArgs) -> Result<Settings, Box<dyn Error>> {
    let home = env::var("HOME").ok();
    let file = load_config_file(cli.config.as_deref(), home.as_deref())?;

    let editor = cli
        .editor
        .or(file.editor)
        .or_else(|| env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    let extension = normalize_extension(
        &cli.extension
            .or(file.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
    );

    let directory = cli
        .directory
        .or(file.directory)
        .or_else(|| env::var("NOTEFIND_DIR").ok().filter(|d| !d.is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTORY.to_string());
    let notes_dir = std::path::absolute(expand_tilde(&directory, home.as_deref())?)?;

    Ok(Settings {
        notes_dir,
        editor,
        extension,
        search_words: cli.search_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_search_words() {
        let cli = parse_args(args(&[
            "-e", "emacs -nw", "--directory", "/tmp/notes", "tofu", "recipe",
        ]))
        .unwrap();
        assert_eq!(cli.editor.as_deref(), Some("emacs -nw"));
        assert_eq!(cli.directory.as_deref(), Some("/tmp/notes"));
        assert_eq!(cli.search_words, vec!["tofu", "recipe"]);
        assert!(!cli.help);
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        let err = parse_args(args(&["-e"])).unwrap_err();
        assert!(err.to_string().contains("-e/--editor"));
    }

    #[test]
    fn config_file_single_section() {
        let cfg = parse_config(
            "# notefind settings\n\
             [notefind]\n\
             editor = emacs -nw\n\
             directory = ~/notes\n\
             extension = md\n\
             ; trailing comment\n\
             unknown = ignored\n",
        );
        assert_eq!(cfg.editor.as_deref(), Some("emacs -nw"));
        assert_eq!(cfg.directory.as_deref(), Some("~/notes"));
        assert_eq!(cfg.extension.as_deref(), Some("md"));
    }

    #[test]
    fn config_file_ignores_blank_values_and_junk() {
        let cfg = parse_config("editor =\nnot a key value line\n");
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn tilde_expansion() {
        let home = Some("/home/sam");
        assert_eq!(
            expand_tilde("~/txt", home).unwrap(),
            PathBuf::from("/home/sam/txt")
        );
        assert_eq!(expand_tilde("~", home).unwrap(), PathBuf::from("/home/sam"));
        assert_eq!(
            expand_tilde("/abs/path", None).unwrap(),
            PathBuf::from("/abs/path")
        );
        // A tilde mid-name is just a file name character.
        assert_eq!(
            expand_tilde("no~tilde", None).unwrap(),
            PathBuf::from("no~tilde")
        );
        assert!(expand_tilde("~/txt", None).is_err());
    }

    #[test]
    fn extension_gets_a_leading_dot() {
        assert_eq!(normalize_extension("md"), ".md");
        assert_eq!(normalize_extension(".md"), ".md");
        assert_eq!(normalize_extension(""), "");
    }
}
