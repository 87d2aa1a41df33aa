use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{BankOrigin, Clock, QuestionService};
use storage::XlsxQuestionBank;
use ui::{App, UiApp, build_app_context};

const DEFAULT_WORKBOOK: &str = "questions.xlsx";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath => write!(f, "--questions requires a non-empty path"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <xlsx_path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_WORKBOOK}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TMUA_QUESTIONS");
}

struct Args {
    workbook: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut workbook = std::env::var("TMUA_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORKBOOK.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath);
                    }
                    workbook = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { workbook })
    }
}

struct DesktopApp {
    questions: Arc<QuestionService>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let source = Arc::new(XlsxQuestionBank::new(&parsed.workbook));
    let questions = Arc::new(QuestionService::new(source));

    // Warm the cache here so a bad workbook is reported once, at startup,
    // rather than surfacing only as the in-app sample notice.
    let bank = questions.load_or_fallback();
    if let BankOrigin::BuiltIn { reason } = bank.origin() {
        eprintln!(
            "could not load {}: {reason}; showing the built-in sample set",
            parsed.workbook
        );
    }

    let app = DesktopApp {
        questions,
        clock: Clock::system(),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("TMUA Guide")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
