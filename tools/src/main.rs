//! workload-runner: headless front end for the Workload Desk engine.
//!
//! Usage:
//!   workload-runner --db workload.db --tasks 50 --seed 7
//!   workload-runner --db workload.db --ipc-mode
//!   workload-runner --db :memory: --data-dir ./data --reset

mod generator;

use anyhow::Result;
use generator::TaskGenerator;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::{self, BufRead, Write};
use workload_core::{
    config::RosterConfig,
    decision_log::AssignResult,
    engine::{AssignmentEngine, DeskState},
    error::WorkloadError,
    skill::Skill,
    store::WorkloadStore,
    types::{Hours, MAX_WEEKLY_HOURS, MIN_TASK_HOURS},
};

const DEFAULT_TASK_HOURS: Hours = 8;
const SUMMARY_LOG_ENTRIES: usize = 10;

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Assign(AssignRequest),
    Reset,
    Quit,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignRequest {
    task_name: Option<String>,
    skill:     Option<String>,
    priority:  Option<String>,
    hours:     Option<Hours>,
}

#[derive(Serialize)]
struct IpcReply {
    #[serde(flatten)]
    state: DeskState,
    #[serde(rename = "lastResult", skip_serializing_if = "Option::is_none")]
    last_result: Option<AssignResult>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let tasks = parse_arg(&args, "--tasks", 0u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let reset = args.iter().any(|a| a == "--reset");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or("workload.db");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    if !ipc_mode {
        println!("Workload Desk: workload-runner");
        println!("  db:        {db}");
        println!("  data_dir:  {data_dir}");
        println!("  seed:      {seed}");
        println!("  tasks:     {tasks}");
        println!();
    }

    let config = RosterConfig::load_or_builtin(data_dir)?;
    log::debug!(
        "roster: {} skills, {} employees",
        config.skills.len(),
        config.employees.len()
    );
    let store = WorkloadStore::open(db)?;
    let mut engine = AssignmentEngine::build(store, &config)?;

    if reset {
        engine.reset_all()?;
    }

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        run_batch(&mut engine, seed, tasks)?;
        print_summary(&engine)?;
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut AssignmentEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unrecognized IPC line: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                write_reply(&mut stdout, engine.default_snapshot()?, None)?;
            }
            IpcCommand::Reset => {
                engine.reset_all()?;
                write_reply(&mut stdout, engine.default_snapshot()?, None)?;
            }
            IpcCommand::Assign(req) => match handle_assign(engine, req)? {
                Ok(result) => write_reply(&mut stdout, engine.default_snapshot()?, Some(result))?,
                Err(message) => {
                    log::warn!("Rejected assign request: {message}");
                    write_error(&mut stdout, &message)?
                }
            },
        }
    }
    Ok(())
}

/// Apply request defaults and reject bad input before the engine sees it.
/// The inner `Err` is a caller error to echo back; the outer one is fatal.
fn handle_assign(
    engine: &mut AssignmentEngine,
    req: AssignRequest,
) -> Result<Result<AssignResult, String>> {
    let task_name = req.task_name.unwrap_or_default();
    let task_name = task_name.trim();
    let skill = req.skill.unwrap_or_default();
    let hours = req.hours.unwrap_or(DEFAULT_TASK_HOURS);

    if task_name.is_empty() {
        return Ok(Err("taskName is required".into()));
    }
    if Skill::from_name(&skill).is_none() {
        let known: Vec<&str> = Skill::ALL.iter().map(|s| s.name()).collect();
        return Ok(Err(format!("skill must be one of {known:?}")));
    }
    if !(MIN_TASK_HOURS..=MAX_WEEKLY_HOURS).contains(&hours) {
        return Ok(Err(format!(
            "hours must be between {MIN_TASK_HOURS} and {MAX_WEEKLY_HOURS}"
        )));
    }

    match engine.assign(task_name, &skill, req.priority.as_deref(), hours) {
        Ok(result) => Ok(Ok(result)),
        Err(WorkloadError::InvalidInput(message)) => Ok(Err(message)),
        Err(e) => Err(e.into()),
    }
}

fn write_reply(
    out: &mut impl Write,
    state: DeskState,
    last_result: Option<AssignResult>,
) -> Result<()> {
    let reply = IpcReply { state, last_result };
    writeln!(out, "{}", serde_json::to_string(&reply)?)?;
    out.flush()?;
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn run_batch(engine: &mut AssignmentEngine, seed: u64, tasks: u64) -> Result<()> {
    let mut generator = TaskGenerator::new(seed);
    let mut assigned = 0u64;
    for _ in 0..tasks {
        let task = generator.next_task()?;
        if engine.assign_task(&task)?.is_success() {
            assigned += 1;
        }
    }
    if tasks > 0 {
        println!("Assigned {assigned} of {tasks} generated tasks.");
        println!();
    }
    Ok(())
}

fn print_summary(engine: &AssignmentEngine) -> Result<()> {
    let stats = engine.stats()?;
    println!("=== TEAM SUMMARY ===");
    println!("  employees:  {}", stats.total);
    println!("  available:  {}", stats.available);
    println!("  busy:       {}", stats.busy);
    println!("  critical:   {}", stats.critical);

    println!();
    println!("=== ROSTER ===");
    for e in engine.list_employees_enriched()? {
        println!(
            "  {:>3} {:<3} {:<18} {:<3} {:>2}h {:>5.1}% {}",
            e.employee.id,
            e.initials,
            e.employee.name,
            e.skill_code,
            e.employee.current_hours,
            e.load_pct,
            e.status.label()
        );
    }

    println!();
    println!("=== RECENT DECISIONS ===");
    let log = engine.get_log(SUMMARY_LOG_ENTRIES)?;
    if log.is_empty() {
        println!("  (no assignments yet)");
    }
    for view in log {
        let e = &view.entry;
        match (&e.assignee, e.score) {
            (Some(who), Some(score)) => println!(
                "  #{:<4} {:<3} {:<28} {:>2}h -> {} (score {score}, {})",
                e.id,
                view.skill_code,
                e.task_name,
                e.hours,
                who,
                e.reasons.as_deref().unwrap_or_default()
            ),
            _ => println!(
                "  #{:<4} {:<3} {:<28} {:>2}h -> FAILED: {}",
                e.id,
                view.skill_code,
                e.task_name,
                e.hours,
                e.failure_message.as_deref().unwrap_or_default()
            ),
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
