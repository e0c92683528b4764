mod bootstrap;
mod command;
mod helper;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use bootstrap::{App, Args, Gateway};
use command::ShellCommand;
use fxdesk_application::{ConversionOrchestrator, NoticeBoard};
use helper::{CliHelper, CodeSource};

const HELP: &[(&str, &str)] = &[
    ("from <CODE>", "Set the source currency"),
    ("to <CODE>", "Set the target currency"),
    ("amount <N>", "Set the amount to convert"),
    ("clear from|to|amount", "Clear a field"),
    ("currencies", "List supported currencies"),
    ("history [k]", "Show the k most recent conversions"),
    ("show", "Show the form and the current result"),
    ("dismiss", "Close the error notice"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

/// Prints every published result. An edit clears the result; that is not printed.
fn spawn_result_renderer(orchestrator: Arc<ConversionOrchestrator<Gateway>>) {
    let mut current = orchestrator.subscribe();
    tokio::spawn(async move {
        while current.changed().await.is_ok() {
            let Some(conversion) = current.borrow_and_update().clone() else {
                continue;
            };
            let line = render::conversion_line(&conversion, &orchestrator.currencies());
            println!("{}", line.bright_blue());
        }
    });
}

fn spawn_notice_renderer(notices: Arc<NoticeBoard>) {
    let mut published = notices.subscribe();
    tokio::spawn(async move {
        while published.changed().await.is_ok() {
            if let Some(notice) = published.borrow_and_update().clone() {
                println!(
                    "{} {}",
                    notice.message.bright_red().bold(),
                    format!("[{}: type 'dismiss']", notice.action).bright_black()
                );
            }
        }
    });
}

fn print_help() {
    for (usage, description) in HELP {
        println!("  {:<22} {}", usage.bright_cyan(), description.bright_black());
    }
}

fn show(app: &App) {
    let form = app.orchestrator.form();
    let field = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    println!(
        "{}",
        format!(
            "from: {}  to: {}  amount: {}  [{:?}]",
            field(form.from),
            field(form.to),
            field(form.amount.map(|a| a.to_string())),
            app.orchestrator.state()
        )
        .bright_black()
    );
    match app.orchestrator.current() {
        Some(conversion) => println!(
            "{}",
            render::conversion_line(&conversion, &app.orchestrator.currencies()).bright_blue()
        ),
        None => println!("{}", "No result".bright_black()),
    }
    if let Some(notice) = app.notices.active() {
        println!("{}", notice.message.bright_red());
    }
}

async fn history(app: &mut App, take: Option<i64>) {
    if let Some(take) = take {
        app.history_view.set_take(take);
    }
    let entries = app.history_view.last_conversions().await;
    if entries.is_empty() {
        println!("{}", "No conversions yet".bright_black());
        return;
    }
    let currencies = app.orchestrator.currencies();
    for conversion in entries {
        println!("  {}", render::conversion_line(&conversion, &currencies));
    }
}

fn currencies(app: &App) {
    let currencies = app.orchestrator.currencies();
    if currencies.is_empty() {
        println!("{}", "No currencies loaded".bright_black());
        return;
    }
    for currency in &currencies {
        println!("  {}", render::currency_line(currency));
    }
}

/// Runs one command. Returns `false` when the REPL should stop.
async fn execute(app: &mut App, command: ShellCommand) -> bool {
    match command {
        ShellCommand::Edit(change) => app.orchestrator.edit(change),
        ShellCommand::Currencies => currencies(app),
        ShellCommand::History(take) => history(app, take).await,
        ShellCommand::Show => show(app),
        ShellCommand::Dismiss => {
            if !app.notices.dismiss() {
                println!("{}", "Nothing to dismiss".bright_black());
            }
        }
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => return false,
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init()?;

    let config = bootstrap::load_config(&args)?;
    let mut app = bootstrap::build(config)?;
    tracing::info!("[Shell] Backend at {}", app.config.backend_url);

    spawn_result_renderer(Arc::clone(&app.orchestrator));
    spawn_notice_renderer(Arc::clone(&app.notices));
    let loading = app.orchestrator.start();

    let orchestrator = Arc::clone(&app.orchestrator);
    let codes: CodeSource = Arc::new(move || {
        orchestrator
            .currencies()
            .into_iter()
            .map(|currency| currency.short_code)
            .collect()
    });
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(codes)));

    println!("{}", "=== fxdesk ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'from USD', 'to EUR', 'amount 100' to convert, 'help' for commands.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match command::parse(trimmed) {
                    Ok(command) => {
                        if !execute(&mut app, command).await {
                            println!("{}", "Goodbye!".bright_green());
                            break;
                        }
                    }
                    Err(message) => println!("{}", message.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    app.orchestrator.dispose();
    loading.abort();
    tracing::info!(
        "[Shell] Exiting after {} unauthorized responses",
        app.classifier.unauthorized_count()
    );
    Ok(())
}
