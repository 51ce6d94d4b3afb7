use clap::{Parser, Subcommand, ValueEnum};
use procmap::prelude::*;
use std::fs;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationCli {
    /// Top to bottom
    Td,
    /// Left to right
    Lr,
}

impl From<OrientationCli> for Orientation {
    fn from(value: OrientationCli) -> Self {
        match value {
            OrientationCli::Td => Orientation::TopDown,
            OrientationCli::Lr => Orientation::LeftRight,
        }
    }
}

/// Build swimlane process flowcharts for Mermaid
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a flowchart from a JSON process model or outline
    Generate {
        /// Path to the process JSON file
        input: String,
        /// Treat the input as an outline that references lanes by name
        #[arg(long)]
        outline: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Answer a guided series of questions to build a process
    Wizard {
        /// Also save the finished process model as JSON
        #[arg(long)]
        save_model: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Flow direction (overrides the config file)
    #[arg(short, long, value_enum)]
    orientation: Option<OrientationCli>,
    /// Path to a JSON diagram configuration
    #[arg(short, long)]
    config: Option<String>,
    /// Wrap the output in a ```mermaid fence
    #[arg(long)]
    markdown: bool,
    /// Write the diagram here instead of stdout
    #[arg(long)]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            input,
            outline,
            output,
        } => run_generate(&input, outline, &output),
        Command::Wizard { save_model, output } => run_wizard(save_model.as_deref(), &output),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_generate(input: &str, outline: bool, output: &OutputArgs) {
    let model = if outline {
        let authored = ProcessOutline::from_file(input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load outline: {}", e)));
        authored
            .into_process(&mut RandomIds::new())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert outline: {}", e)))
    } else {
        ProcessModel::from_file(input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load process model: {}", e)))
    };
    info!(input, "loaded process '{}'", model.name);

    emit_diagram(&model, output);
}

fn emit_diagram(model: &ProcessModel, output: &OutputArgs) {
    let mut config = match &output.config {
        Some(path) => DiagramConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => DiagramConfig::default(),
    };
    if let Some(orientation) = output.orientation {
        config.orientation = orientation.into();
    }

    let generator = Generator::builder().with_config(config).build();
    let markup = match generator.generate(model) {
        Ok(markup) => markup,
        Err(errors) => {
            eprintln!("\nThe process cannot be drawn yet:");
            for message in errors.messages() {
                eprintln!("  - {}", message);
            }
            std::process::exit(1);
        }
    };

    let text = if output.markdown {
        render_diagram(&MarkdownRenderer, &markup)
            .unwrap_or_else(|errors| exit_with_error(&errors.join("\n")))
    } else {
        format!("{}\n", markup)
    };

    match &output.output {
        Some(path) => {
            fs::write(path, &text).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!("Diagram written to '{}'", path);
        }
        None => print!("{}", text),
    }
}

/// Runs the guided questionnaire on stdin/stdout.
fn run_wizard(save_model: Option<&str>, output: &OutputArgs) {
    println!("--- procmap Wizard ---");
    println!("Type ':back' to return to the previous question.\n");

    let mut wizard = Wizard::standard();
    let model = loop {
        let question = wizard.current_question();
        println!("\n{}", question.prompt());
        if let Some(help) = question.help_text() {
            println!("  ({})", help);
        }
        if question.id() == "review" {
            println!("\n{}\n", SummaryFormatter::format_model(&wizard.context().model));
        }

        let Some(answer) = read_answer(question.kind(), &wizard.lane_names()) else {
            if !wizard.go_back() {
                println!("Already at the first question.");
            }
            continue;
        };

        match wizard.submit_answer(answer) {
            Ok(Submission::Completed(model)) => break model,
            Ok(Submission::Rejected(message)) => println!("! {}", message),
            Ok(Submission::Restarted) => println!("\nStarting over."),
            Ok(Submission::Advanced { to }) => debug!(to = %to, "next question"),
            Err(e) => exit_with_error(&e.to_string()),
        }
    };

    if let Some(path) = save_model {
        model
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save model: {}", e)));
        println!("Process model saved to '{}'", path);
    }

    println!();
    emit_diagram(&model, output);
}

/// Reads an answer for `kind`. Returns `None` when the user asked to go back.
fn read_answer(kind: &QuestionKind, lanes: &[String]) -> Option<Answer> {
    match kind {
        QuestionKind::Input => {
            let line = prompt_for_input("Answer")?;
            Some(Answer::Text(line))
        }
        QuestionKind::Multi => {
            let mut draft = ListDraft::new();
            println!("  One item per line, empty line to finish.");
            loop {
                let line = prompt_for_input("Item")?;
                if line.is_empty() {
                    break;
                }
                draft.set_pending(line);
                if !draft.commit_pending() {
                    println!("  (already listed)");
                }
            }
            Some(draft.into_answer())
        }
        QuestionKind::Table { columns } => {
            let mut draft = TableDraft::new();
            println!(
                "  One row per line as '{}', empty line to finish.",
                columns.join(" | ")
            );
            if !lanes.is_empty() {
                println!("  Lanes: {} (default: {})", lanes.join(", "), lanes[0]);
            }
            loop {
                let line = prompt_for_input("Row")?;
                if line.is_empty() {
                    break;
                }
                let (action, lane) = line.split_once('|').unwrap_or((line.as_str(), ""));
                let index = draft.add_row(lanes);
                draft.set_action(index, action.trim());
                if !lane.trim().is_empty() {
                    draft.set_lane(index, lane.trim());
                }
            }
            Some(draft.into_answer())
        }
        QuestionKind::Select { options } => {
            for (i, option) in options.iter().enumerate() {
                println!("  {}: {}", i + 1, option);
            }
            let line = prompt_for_input("Enter choice")?;
            let choice = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i).cloned())
                .unwrap_or(line);
            Some(Answer::Choice(choice))
        }
    }
}

/// Prompts and reads one trimmed line. Returns `None` for `:back`.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write prompt: {}", e)));

    let read = io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)));
    if read == 0 {
        exit_with_error("Input closed before the wizard finished.");
    }

    let trimmed = line.trim().to_string();
    (trimmed != ":back").then_some(trimmed)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
