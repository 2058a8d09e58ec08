//! Momentum CLI entry point

use std::fs;
use std::io::{BufRead, Write as _};
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use tokio::sync::mpsc;
use tracing::info;

use momentum::cli::{Cli, Command, OutputFormat};
use momentum::config::Config;
use momentum::session::{DaySession, PomodoroTimer, Ticker, TimerEvent};
use momentum::{PlanError, PlanRequest, PlanResponse, PlanService, estimate_months};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Plan {
            goal,
            months,
            daily_hours,
            commitments,
            offline,
            format,
            output,
        } => {
            let request = PlanRequest {
                goal,
                months,
                daily_hours,
                fixed_commitments: commitments,
            };
            cmd_plan(&config, request, offline, format, output.as_deref()).await
        }
        Command::Session { plan_file, day } => cmd_session(&config, &plan_file, day).await,
        Command::Estimate { goal, daily_hours } => cmd_estimate(&goal, daily_hours),
    }
}

/// Acquire and render a plan
async fn cmd_plan(
    config: &Config,
    request: PlanRequest,
    offline: bool,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let service = if offline {
        PlanService::offline()
    } else {
        PlanService::from_config(config)
    };

    let response = match service.acquire(&request).await {
        Ok(response) => response,
        Err(PlanError::InvalidInput(message)) => return Err(eyre!(message)),
        Err(e) => {
            // One generic line for the user; the cause is in the log.
            info!(error = %e, "plan acquisition failed");
            return Err(eyre!("Something went wrong generating your plan. Please try again in a moment."));
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => render_plan(&request, &response),
    }

    if let Some(path) = output {
        fs::write(path, serde_json::to_string_pretty(&response)?)
            .context(format!("Failed to write plan to {}", path.display()))?;
        println!();
        println!("Plan saved to {}", path.display());
        println!("Start a session with: momentum session {}", path.display());
    }

    Ok(())
}

/// Print the roadmap and the first week of tasks
fn render_plan(request: &PlanRequest, response: &PlanResponse) {
    println!("{}", format!("Roadmap: {}", request.goal).bold());
    println!();

    for entry in &response.monthly_plan {
        println!("  {} {}", format!("Month {}:", entry.month).cyan().bold(), entry.goal);
        for milestone in &entry.milestones {
            println!("    - {}", milestone);
        }
    }

    println!();
    println!("{}", "First week".bold());
    println!();

    for day in &response.daily_tasks {
        let total_minutes: u32 = day.tasks.iter().map(|t| t.duration).sum();
        println!("  {} ({} min)", day.day.green().bold(), total_minutes);
        for task in &day.tasks {
            println!("    [{:>2} min] {}", task.duration, task.title);
        }
    }
}

/// Work through one day of a saved plan interactively
async fn cmd_session(config: &Config, plan_file: &Path, day: usize) -> Result<()> {
    let content =
        fs::read_to_string(plan_file).context(format!("Failed to read plan file {}", plan_file.display()))?;
    let plan: PlanResponse = serde_json::from_str(&content).context("Failed to parse plan file")?;

    let mut session = DaySession::new();
    session.start_day(&plan, day);

    if session.tasks().is_empty() {
        return Err(eyre!("plan has no tasks for day {}", day));
    }

    println!("{}", format!("Day {} - {} tasks", day, session.tasks().len()).bold());
    println!("Commands: start, done, skip, status, quit");
    print_status(&session);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "start" => {
                let Some(task) = session.current_task() else {
                    println!("No pending tasks left.");
                    continue;
                };
                let task_id = task.id.clone();
                let title = task.title.clone();
                run_countdown(config, &mut session, &task_id, &title).await?;
            }
            "done" => {
                let Some(task) = session.current_task() else {
                    println!("No pending tasks left.");
                    continue;
                };
                let task_id = task.id.clone();
                session.complete_task(&task_id);
                print_status(&session);
            }
            "skip" => {
                let Some(task) = session.current_task() else {
                    println!("No pending tasks left.");
                    continue;
                };
                let task_id = task.id.clone();
                session.skip_task(&task_id);
                print_status(&session);
            }
            "status" => print_status(&session),
            "quit" | "q" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }

        if session.day_finished() {
            let energy = session.energy();
            if session.skipped_count() == 0 {
                println!();
                println!(
                    "{}",
                    format!("Day {} complete! Streak: {}", day, energy.streak).green().bold()
                );
            } else {
                println!();
                println!("Day {} finished with {} skipped.", day, session.skipped_count());
            }
            break;
        }
    }

    Ok(())
}

/// Run the Pomodoro countdown for the active task
///
/// The ticker guard is dropped on every exit path, which cancels the
/// recurring tick. Ctrl+C pauses and returns to the prompt.
async fn run_countdown(config: &Config, session: &mut DaySession, task_id: &str, title: &str) -> Result<()> {
    let mut timer = PomodoroTimer::new(&config.session);
    timer.start();

    println!("{} {}", "Focus:".cyan().bold(), title);

    let (tx, mut rx) = mpsc::channel(4);
    let _ticker = Ticker::spawn(tx);

    loop {
        tokio::select! {
            received = rx.recv() => {
                if received.is_none() {
                    break;
                }

                let remaining = timer.remaining_secs().saturating_sub(1);
                match timer.tick() {
                    TimerEvent::Ticked => {
                        // One status line per minute and a final countdown.
                        if remaining % 60 == 0 || remaining <= 5 {
                            println!("  {:02}:{:02} remaining", remaining / 60, remaining % 60);
                        }
                    }
                    TimerEvent::WorkElapsed => {
                        session.complete_task(task_id);
                        println!("{}", "Task complete! Break time.".green().bold());
                        print_status(session);
                    }
                    TimerEvent::BreakElapsed => {
                        println!("Break over. Ready for the next task.");
                        break;
                    }
                    TimerEvent::Skipped | TimerEvent::Idle => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                timer.pause();
                println!();
                println!("Timer paused, back to the prompt.");
                break;
            }
        }
    }

    Ok(())
}

/// Print the day's progress and the energy meter
fn print_status(session: &DaySession) {
    let energy = session.energy();

    println!();
    for (index, task) in session.tasks().iter().enumerate() {
        let marker = if task.is_completed() {
            "x".green()
        } else if task.is_skipped() {
            "-".yellow()
        } else if Some(index) == session.current_task_index() {
            ">".cyan()
        } else {
            " ".normal()
        };
        println!("  [{}] {} ({} min)", marker, task.title, task.duration);
    }

    println!(
        "  {}/{} done, {} skipped | energy {} | streak {}",
        session.completed_count(),
        session.tasks().len(),
        session.skipped_count(),
        format!("{}%", energy.level).magenta(),
        energy.streak
    );
}

/// Print the deterministic month estimate for a goal
fn cmd_estimate(goal: &str, daily_hours: f64) -> Result<()> {
    let months = estimate_months(goal, daily_hours);
    println!(
        "{} at {} hours/day: about {} months",
        goal.bold(),
        daily_hours,
        months.to_string().cyan().bold()
    );
    Ok(())
}
