//! `dombuild`: build a JSON descriptor into a document and print the markup.

use builder::{Builder, Descriptor, JsonError};
use clap::Parser;
use dom::{Document, DomError};
use std::fmt;
use std::io::{self, Read, Write};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const OUTLINE_CAP: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Output {
    Outer,
    Inner,
    Outline,
}

#[derive(Debug, Parser)]
#[command(name = "dombuild", version)]
#[command(about = "Build a JSON descriptor into a document and print the markup", long_about = None)]
#[command(after_help = "Set RUST_LOG (for example RUST_LOG=builder=trace) for build logging.")]
struct Cli {
    /// Print the children of the result instead of the result itself
    #[arg(long, group = "output")]
    fragment: bool,

    /// Print an indented outline instead of markup
    #[arg(long, group = "output")]
    outline: bool,

    /// Descriptor file; `-` reads stdin
    #[arg(value_name = "PATH", default_value = "-")]
    path: String,
}

impl Cli {
    fn output(&self) -> Output {
        if self.outline {
            Output::Outline
        } else if self.fragment {
            Output::Inner
        } else {
            Output::Outer
        }
    }

    /// `None` reads stdin.
    fn input_path(&self) -> Option<&str> {
        (self.path != "-").then_some(self.path.as_str())
    }
}

#[derive(Debug)]
enum CliError {
    Io { path: String, err: io::Error },
    Json(JsonError),
    Dom(DomError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, err } => write!(f, "cannot read {path}: {err}"),
            CliError::Json(err) => write!(f, "{err}"),
            CliError::Dom(err) => write!(f, "build failed: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<JsonError> for CliError {
    fn from(err: JsonError) -> Self {
        CliError::Json(err)
    }
}

impl From<DomError> for CliError {
    fn from(err: DomError) -> Self {
        CliError::Dom(err)
    }
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    let read = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).map(|_| input)
        }
    };
    read.map_err(|err| CliError::Io {
        path: path.unwrap_or("<stdin>").to_string(),
        err,
    })
}

/// Build `input` and render it per `output`. A descriptor that builds to
/// nothing renders as the empty string.
fn render(input: &str, output: Output) -> Result<String, CliError> {
    let descriptor: Descriptor = Descriptor::parse_json(input)?;
    let mut doc = Document::new();
    let Some(node) = Builder::default().build_node(&mut doc, &descriptor)? else {
        return Ok(String::new());
    };
    log::debug!(target: "dombuild", "built {} nodes", doc.node_count());
    Ok(match output {
        Output::Outer => doc.outer_html(node),
        Output::Inner => doc.inner_html(node),
        Output::Outline => dom::outline(&doc, node, OUTLINE_CAP).join("\n"),
    })
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input_path())?;
    let rendered = render(&input, cli.output())?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(|err| CliError::Io {
        path: "<stdout>".to_string(),
        err,
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dombuild: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dombuild").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_path() {
        let cli = parse(&["--outline", "in.json"]).unwrap();
        assert_eq!(cli.output(), Output::Outline);
        assert_eq!(cli.input_path(), Some("in.json"));

        let cli = parse(&["--fragment"]).unwrap();
        assert_eq!(cli.output(), Output::Inner);
        assert_eq!(cli.input_path(), None);

        let cli = parse(&["-"]).unwrap();
        assert_eq!(cli.output(), Output::Outer);
        assert_eq!(cli.input_path(), None);
    }

    #[test]
    fn help_is_generated() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--outline"));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert_eq!(
            parse(&["--pretty"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["a.json", "b.json"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn fragment_and_outline_are_exclusive() {
        assert_eq!(
            parse(&["--fragment", "--outline"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn renders_outer_and_inner_markup() {
        let input = r#"{"tag": "ul", "content": [{"tag": "li", "content": "a"}]}"#;
        assert_eq!(render(input, Output::Outer).unwrap(), "<ul><li>a</li></ul>");
        assert_eq!(render(input, Output::Inner).unwrap(), "<li>a</li>");
    }

    #[test]
    fn renders_outline() {
        let input = r#"{"tag": "p", "id": "x", "content": "hi"}"#;
        assert_eq!(
            render(input, Output::Outline).unwrap(),
            "<p id=\"x\">\n  \"hi\""
        );
    }

    #[test]
    fn null_renders_nothing() {
        assert_eq!(render("null", Output::Outer).unwrap(), "");
    }

    #[test]
    fn errors_are_reported() {
        assert!(matches!(render("{", Output::Outer), Err(CliError::Json(_))));
        assert!(matches!(
            render(r#"{"tag": "9"}"#, Output::Outer),
            Err(CliError::Dom(DomError::InvalidCharacter { .. }))
        ));
    }
}
