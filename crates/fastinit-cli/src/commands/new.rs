//! Implementation of the `fastinit new` command.
//!
//! Responsibility: turn flags, prompts and config defaults into validated
//! `ProjectOptions`, call the core scaffold service, and display results.
//! No composition logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use fastinit_adapters::{LocalFilesystem, catalog};
use fastinit_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{Feature, GenerationPlan, ProjectOptions, RawOptions},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fastinit new` command.
///
/// Dispatch sequence:
/// 1. Gather selections: flags, then prompts (TTY only), then config defaults
/// 2. Validate them into `ProjectOptions`
/// 3. Resolve the generation plan and check the destination
/// 4. Early-exit if `--dry-run`
/// 5. Confirm with user unless `--yes` or non-interactive
/// 6. Write the tree with a progress bar and print next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1-2. Selections
    let interactive = is_interactive(&args, &config);
    let raw = collect_selections(&args, &config.defaults, interactive)?;
    let options = ProjectOptions::from_raw(&raw)?;
    debug!(%options, interactive, "Options resolved");

    // 3. Plan + destination
    let parent = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let service = ScaffoldService::new(Arc::new(catalog()?), Box::new(LocalFilesystem::new()));
    let plan = service.plan(&options)?;
    let root = service.check_destination(&options, &parent)?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return show_plan(&options, &root, &plan, &output);
    }

    // 5. Confirm
    if interactive && !args.yes && !global.quiet {
        show_configuration(&options, &root, &plan, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Write
    output.header(&format!("Creating '{}'...", options.name()))?;
    info!(path = %root.display(), files = plan.len(), "Scaffold started");

    let progress = output.progress_bar(plan.len() as u64);
    let result = service.write_plan(&options, &parent, &plan, |task| {
        progress.set_message(task.path().to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();
    let report = result?;

    info!(files = report.files_written, "Scaffold completed");

    if output.is_json() {
        output.json(&ReportSummary::new(&options, &report))?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created ({} files)",
        options.name(),
        report.files_written
    ))?;
    print_next_steps(&options, &report.root, &output)?;

    Ok(())
}

// ── Selections ────────────────────────────────────────────────────────────────

/// Prompts only make sense with a terminal on both ends.
fn is_interactive(args: &NewArgs, config: &AppConfig) -> bool {
    cfg!(feature = "interactive")
        && !args.non_interactive
        && config.prompts.interactive
        && std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal()
}

/// Flags win; missing slots are prompted for or taken from `defaults`.
fn collect_selections(
    args: &NewArgs,
    defaults: &Defaults,
    interactive: bool,
) -> CliResult<RawOptions> {
    let pick = |flag: &Option<String>, default: &str| flag.clone().unwrap_or_else(|| default.into());

    let mut raw = RawOptions {
        name: args.name.clone(),
        database: pick(&args.database, &defaults.database),
        orm: pick(&args.orm, &defaults.orm),
        linter: pick(&args.linter, &defaults.linter),
        test_framework: pick(&args.tests, &defaults.tests),
        docker: args
            .docker_flag()
            .unwrap_or(yes_no(defaults.docker))
            .to_string(),
    };

    if interactive {
        ask_missing(&mut raw, args, defaults)?;
    }
    Ok(raw)
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(feature = "interactive")]
fn ask_missing(raw: &mut RawOptions, args: &NewArgs, defaults: &Defaults) -> CliResult<()> {
    use fastinit_core::domain::{Database, Linter, Orm, TestFramework};

    use crate::prompt::{confirm, select};

    if args.database.is_none() {
        let default: Database = defaults.database.parse()?;
        raw.database = select("Database", &Database::ALL, Database::label, default)?
            .as_str()
            .into();
    }
    if args.orm.is_none() {
        let default: Orm = defaults.orm.parse()?;
        raw.orm = select("ORM", &Orm::ALL, Orm::label, default)?.as_str().into();
    }
    if args.linter.is_none() {
        let default: Linter = defaults.linter.parse()?;
        raw.linter = select("Linter", &Linter::ALL, Linter::label, default)?
            .as_str()
            .into();
    }
    if args.tests.is_none() {
        let default: TestFramework = defaults.tests.parse()?;
        raw.test_framework = select(
            "Test framework",
            &TestFramework::ALL,
            TestFramework::label,
            default,
        )?
        .as_str()
        .into();
    }
    if args.docker_flag().is_none() {
        raw.docker = yes_no(confirm("Generate Docker files?", defaults.docker)?).into();
    }
    Ok(())
}

#[cfg(not(feature = "interactive"))]
fn ask_missing(_: &mut RawOptions, _: &NewArgs, _: &Defaults) -> CliResult<()> {
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    crate::prompt::confirm("Create project?", true)
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Ok(true)
}

// ── Serialisable summaries ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OptionsSummary {
    database: &'static str,
    orm: &'static str,
    linter: &'static str,
    tests: &'static str,
    docker: bool,
}

impl OptionsSummary {
    fn new(options: &ProjectOptions) -> Self {
        Self {
            database: options.database().as_str(),
            orm: options.orm().as_str(),
            linter: options.linter().as_str(),
            tests: options.test_framework().as_str(),
            docker: options.docker(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FileSummary<'a> {
    path: &'a str,
    feature: Feature,
    origin: &'a str,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct PlanSummary<'a> {
    project: &'a str,
    root: String,
    options: OptionsSummary,
    files: Vec<FileSummary<'a>>,
}

impl<'a> PlanSummary<'a> {
    fn new(options: &'a ProjectOptions, root: &Path, plan: &'a GenerationPlan) -> Self {
        Self {
            project: options.name().as_str(),
            root: root.display().to_string(),
            options: OptionsSummary::new(options),
            files: plan
                .tasks()
                .iter()
                .map(|task| FileSummary {
                    path: task.path().as_str(),
                    feature: task.feature(),
                    origin: task.origin(),
                    bytes: task.size(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    project: &'a str,
    root: String,
    files_written: usize,
    directories: usize,
    bytes_written: usize,
}

impl<'a> ReportSummary<'a> {
    fn new(options: &'a ProjectOptions, report: &ScaffoldReport) -> Self {
        Self {
            project: options.name().as_str(),
            root: report.root.display().to_string(),
            files_written: report.files_written,
            directories: report.directories,
            bytes_written: report.bytes_written,
        }
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(
    options: &ProjectOptions,
    root: &Path,
    plan: &GenerationPlan,
    out: &OutputManager,
) -> CliResult<()> {
    if out.is_json() {
        out.json(&PlanSummary::new(options, root, plan))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        options.name(),
        root.display()
    ))?;
    for task in plan.tasks() {
        out.print(&format!(
            "  {:<36} {:>6} B  {}",
            task.path().as_str(),
            task.size(),
            task.origin()
        ))?;
    }
    out.print(&format!(
        "  {} files in {} directories",
        plan.len(),
        plan.directories().len()
    ))?;
    Ok(())
}

fn show_configuration(
    options: &ProjectOptions,
    root: &Path,
    plan: &GenerationPlan,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", options.name()))?;
    out.print(&format!("  Database:  {}", options.database().label()))?;
    out.print(&format!("  ORM:       {}", options.orm().label()))?;
    out.print(&format!("  Linter:    {}", options.linter().label()))?;
    out.print(&format!("  Tests:     {}", options.test_framework().label()))?;
    out.print(&format!("  Docker:    {}", yes_no(options.docker())))?;
    out.print(&format!("  Location:  {}", root.display()))?;
    out.print(&format!("  Files:     {}", plan.len()))?;
    out.print("")?;
    Ok(())
}

fn print_next_steps(options: &ProjectOptions, root: &Path, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", root.display()))?;
    out.print("  uv sync")?;
    out.print("  uv run uvicorn app.main:app --reload")?;
    if options.docker() {
        out.print("")?;
        out.print("Or with Docker:")?;
        out.print("  docker compose up --build")?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
