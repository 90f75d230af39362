//! SignScope - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use signscope::cli::{Args, Commands};
use signscope::config::DemoConfig;
use signscope::console::DemoDisplay;
use signscope::demo;
use signscope::results::{demo_results, BatchStats, ExportReport, ResultQuery};
use signscope::telemetry::TelemetryCollector;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Some(Commands::Run { single }) => {
            run(&args, *single).await?;
        }
        Some(Commands::Stages) => {
            show_stages(&args)?;
        }
        Some(Commands::Results { json }) => {
            show_results(&args, *json)?;
        }
        Some(Commands::Config) => {
            show_config(&args)?;
        }
        None => {
            // No subcommand: run the full demo flow.
            run(&args, false).await?;
        }
    }

    Ok(())
}

async fn run(args: &Args, single: bool) -> Result<()> {
    let mut config = load_config(args)?;
    let model = args.model_kind()?;
    if let Some(tick) = args.tick_interval {
        config.tick_interval_ms = tick.max(1);
    }

    let mut display = DemoDisplay::new();
    let telemetry = TelemetryCollector::new();

    if args.verbosity().show_progress() {
        display.clear_screen().ok();
    }
    display.show_banner(env!("CARGO_PKG_VERSION"), model.display_name());

    let outcome = demo::run_demo(
        &config,
        model,
        single,
        args.verbosity(),
        &mut display,
        &telemetry,
    )
    .await?;

    println!(
        "\n{} Demo finished on the {} screen ({} uploads, {:.1}s simulated processing)",
        "✓".green(),
        outcome.final_screen.display_name().bold(),
        outcome.uploads_completed,
        outcome.processing_elapsed_ms as f64 / 1000.0
    );

    if args.verbosity().show_events() {
        telemetry.display_summary();
    }

    Ok(())
}

fn show_stages(args: &Args) -> Result<()> {
    let model = args.model_kind()?;
    let plan = model.stage_plan();

    println!(
        "\n{} pipeline ({} stages, {:.1}s total)\n",
        model.display_name().bold().cyan(),
        plan.len(),
        plan.total_duration_ms() as f64 / 1000.0
    );

    for (index, stage) in plan.stages().iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            stage.label.bold(),
            format!("({}ms)", stage.duration_ms).dimmed()
        );
        println!("     {}", stage.description);
        println!("     {}", stage.details.dimmed());
    }
    println!();

    Ok(())
}

fn show_results(args: &Args, json: bool) -> Result<()> {
    let model = args.model_kind()?;
    let results = demo_results();

    if json {
        let report = ExportReport::new(model, results);
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let display = DemoDisplay::new();
    display.show_section("Recognition Results");
    let query = ResultQuery::default();
    display.show_results_table(&query.apply(&results));
    display.show_batch_stats(&BatchStats::compute(&results));
    println!();

    Ok(())
}

fn show_config(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    println!("\n{}", "SignScope Configuration".bold().cyan());
    println!("{}", "-".repeat(40).cyan());
    println!("Model:            {}", config.model.display_name());
    println!("Tick interval:    {}ms", config.tick_interval_ms);
    println!(
        "Upload mode:      {}",
        if config.upload.batch_mode {
            "batch"
        } else {
            "single"
        }
    );
    println!("Upload tick:      {}ms", config.upload.tick_ms);
    println!("Verbosity:        {:?}", args.verbosity());
    println!();

    Ok(())
}

fn load_config(args: &Args) -> Result<DemoConfig> {
    match &args.config {
        Some(path) => DemoConfig::load_from(path),
        None => DemoConfig::load(),
    }
}
