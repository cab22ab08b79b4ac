//! Terminal front end for the quiz engine
//!
//! Reads one command per line from stdin while the countdown runs in the
//! background. Type `h` for the command list.

use clap::{ArgAction, Parser};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use quiz_runner_core::config::{
    DEFAULT_QUESTION_COUNT, DEFAULT_TICK_MILLIS, DEFAULT_TIME_LIMIT_SECS,
};
use quiz_runner_core::input::{map_key, Command};
use quiz_runner_core::markup::RenderError;
use quiz_runner_core::view::{navigator_view, question_view, result_view, time_left_label};
use quiz_runner_core::{
    QuestionBank, QuizConfig, QuizController, QuizResult, SessionStatus, TimerEvent,
};

const HELP: &str = "\
Commands:
  a-e        choose an option
  n / p      next / previous question
  g <num>    go to question <num>
  s          submit (asks for confirmation; answer the current question first)
  r          start a new attempt (after results)
  h          show this help
  q          quit";

#[derive(Parser, Debug)]
#[command(name = "quiz-runner", version, about = "Timed multiple-choice quiz in the terminal")]
struct Cli {
    /// Question bank JSON file; the bundled bank is used when omitted
    #[arg(long, env = "QUIZ_BANK")]
    bank: Option<PathBuf>,

    /// Number of questions per attempt (clamped to the bank size)
    #[arg(
        short = 'n',
        long,
        env = "QUIZ_QUESTION_COUNT",
        default_value_t = DEFAULT_QUESTION_COUNT
    )]
    count: usize,

    /// Time limit in seconds
    #[arg(
        short = 't',
        long,
        env = "QUIZ_TIME_LIMIT_SECS",
        default_value_t = DEFAULT_TIME_LIMIT_SECS
    )]
    time_limit: u32,

    /// Milliseconds per countdown second; lower values speed up the clock
    #[arg(long, env = "QUIZ_TICK_MILLIS", default_value_t = DEFAULT_TICK_MILLIS)]
    tick_millis: u64,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let bank = match &cli.bank {
        Some(path) => QuestionBank::from_json(&tokio::fs::read_to_string(path).await?)?,
        None => QuestionBank::bundled()?,
    };
    let config = QuizConfig::new(cli.count, cli.time_limit)?.with_tick_millis(cli.tick_millis);
    tracing::info!(questions = bank.len(), ?config, "bank loaded");

    let (tx, mut rx) = mpsc::unbounded_channel::<TimerEvent>();
    // Validates the tick period as well
    let mut controller = QuizController::new(bank, config)?.with_observer(Arc::new(tx));
    controller.start()?;
    println!("{}", HELP);
    show_question(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut confirming = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = handle_line(&mut controller, line.trim(), &mut confirming) {
                    break;
                }
            }
            Some(event) = rx.recv() => match event {
                // Queued from an attempt that has since been replaced
                _ if !controller.is_current(&event) => {
                    tracing::debug!(attempt = event.attempt(), "dropping stale timer event");
                }
                TimerEvent::Tick { remaining, .. } => {
                    if remaining % 60 == 0 || remaining <= 10 {
                        println!("{}", time_left_label(remaining));
                    }
                }
                TimerEvent::Expired { result, .. } => {
                    confirming = false;
                    println!("\nTime is up!");
                    show_results(&result);
                }
            },
        }
    }

    Ok(())
}

fn handle_line(controller: &mut QuizController, line: &str, confirming: &mut bool) -> Flow {
    if *confirming {
        *confirming = false;
        if line.eq_ignore_ascii_case("y") {
            match controller.finish() {
                Ok(result) => show_results(&result),
                Err(err) => eprintln!("{}", err),
            }
        } else {
            show_question(controller);
        }
        return Flow::Continue;
    }

    let finished = controller
        .snapshot()
        .is_some_and(|s| s.status == SessionStatus::Finished);
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_ascii_lowercase();

    match command.as_str() {
        "" => {}
        "q" => return Flow::Quit,
        "h" => println!("{}", HELP),
        "r" if finished => match controller.start() {
            Ok(_) => show_question(controller),
            Err(err) => eprintln!("{}", err),
        },
        "s" if !finished => {
            if controller.can_submit() {
                *confirming = true;
                println!("Submit your answers? [y/N]");
            } else {
                eprintln!("choose an answer for this question before submitting");
            }
        }
        "g" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(number) if number > 0 => dispatch(controller, Command::GoTo(number - 1)),
            _ => eprintln!("usage: g <question number>"),
        },
        key if key.chars().count() == 1 => {
            let option_count = controller
                .with_session(|s| s.current_question().option_count())
                .unwrap_or_default();
            match key.chars().next().and_then(|c| map_key(c, option_count)) {
                Some(command) => dispatch(controller, command),
                None => eprintln!("unknown command, type h for help"),
            }
        }
        _ => eprintln!("unknown command, type h for help"),
    }

    Flow::Continue
}

fn dispatch(controller: &QuizController, command: Command) {
    match controller.apply(command) {
        Ok(()) => show_question(controller),
        Err(err) => eprintln!("{}", err),
    }
}

/// Terminal output shows the TeX source without delimiters
fn plain_math(tex: &str) -> Result<String, RenderError> {
    Ok(tex.trim().to_string())
}

fn show_question(controller: &QuizController) {
    let Some((view, navigator)) =
        controller.with_session(|s| (question_view(s, &plain_math), navigator_view(s)))
    else {
        return;
    };

    let nav: Vec<String> = navigator
        .iter()
        .map(|entry| match (entry.current, entry.answered) {
            (true, _) => format!("[{}]", entry.number),
            (false, true) => format!("{}*", entry.number),
            (false, false) => entry.number.to_string(),
        })
        .collect();

    println!();
    println!("{}    {}", view.heading, view.time_left);
    println!("{}", nav.join(" "));
    println!();
    println!("{}", view.markup);
    for option in &view.options {
        let marker = if option.selected { ">" } else { " " };
        println!(" {} {}", marker, option.markup);
    }
}

fn show_results(result: &QuizResult) {
    let view = result_view(result, &plain_math);

    println!();
    for outcome in &view.outcomes {
        let mark = if outcome.is_correct { "correct" } else { "wrong" };
        println!("{}: {}", outcome.label, outcome.question);
        println!("    Your answer: {} ({})", outcome.your_answer, mark);
        if let Some(correct) = &outcome.correct_answer {
            println!("    Correct answer: {}", correct);
        }
    }
    println!();
    println!("{}", view.score_line);
    println!("{}", view.comment);
    println!("Type r to try again or q to quit.");
}
