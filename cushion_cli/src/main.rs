//! # Cushion CLI
//!
//! Terminal front-end for the cushion casting calculator.
//!
//! ```text
//! cushion_cli                      interactive session, builds a casting job
//! cushion_cli list                 print the preset tables
//! cushion_cli preset NAME [RHO]    calculate one preset (density RHO, default 150)
//! cushion_cli json                 read a CushionInput JSON object from stdin
//! ```
//!
//! Set `RUST_LOG=cushion_core=debug` to trace each calculation.

use std::env;
use std::io::{self, BufRead, Read, Write};

use anyhow::{bail, Context};
use cushion_core::calculations::{calculate, CushionInput, CushionResult, MoldType};
use cushion_core::job::{CastingJob, JobItem, JobTotals};
use cushion_core::presets::{find_preset, presets_for, LENGTH_OPTIONS_MM, OD_OPTIONS_MM, THICKNESS_OPTIONS_MM};
use cushion_core::settings::CalculatorSettings;
use cushion_core::CalcError;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_yes(prompt: &str) -> bool {
    matches!(prompt_line(prompt).as_deref(), Some("y" | "Y" | "yes"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let settings = CalculatorSettings::default();

    match args.first().map(String::as_str) {
        None => run_interactive(&settings),
        Some("list") => {
            print_presets();
            Ok(())
        }
        Some("preset") => {
            let name = args.get(1).context("usage: cushion_cli preset NAME [DENSITY]")?;
            let density = match args.get(2) {
                Some(raw) => raw
                    .parse::<f64>()
                    .with_context(|| format!("density '{}' is not a number", raw))?,
                None => settings.density_kg_m3,
            };
            run_preset(name, density)
        }
        Some("json") => run_json(),
        Some(other) => bail!("unknown command '{}' (expected 'list', 'preset' or 'json')", other),
    }
}

fn run_preset(name: &str, density: f64) -> anyhow::Result<()> {
    let (mold, preset) = find_preset(name).map_err(report)?;
    info!(preset = preset.name, %mold, "calculating preset");

    let input = preset.to_input(mold, density);
    let result = calculate(&input).map_err(report)?;

    print_result(&input, &result);
    print_json("JSON Output:", &result);
    Ok(())
}

fn run_json() -> anyhow::Result<()> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read stdin")?;

    let input = CushionInput::from_json(&raw).map_err(report)?;
    let result = calculate(&input).map_err(report)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_interactive(settings: &CalculatorSettings) -> anyhow::Result<()> {
    println!("Cushion CLI - Polyurethane Casting Calculator");
    println!("=============================================");
    println!();

    let operator = prompt_line("Operator name []: ").unwrap_or_default();
    let job_id = prompt_line("Job number []: ").unwrap_or_default();
    let mut job = CastingJob::new(operator, job_id);
    job.settings = settings.clone();

    loop {
        println!();
        let input = prompt_input(&job.settings);

        match calculate(&input) {
            Ok(result) => {
                print_result(&input, &result);
                let qty = prompt_u32("Pieces to pour [1] (0 = skip): ", 1);
                if qty > 0 {
                    let label = prompt_line("Label []: ").unwrap_or_default();
                    job.add_item(JobItem::new(label, input, qty));
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                print_error_json(&e);
            }
        }

        if !prompt_yes("Another cushion? [y/N]: ") {
            break;
        }
    }

    if job.item_count() > 0 {
        let totals = job.totals().map_err(report)?;
        print_totals(&job, &totals);
        print_json("Job JSON:", &job);
    }
    Ok(())
}

fn prompt_input(settings: &CalculatorSettings) -> CushionInput {
    let default_mold = settings.default_mold;
    let mold = prompt_line(&format!("Mold type (circular/saddle) [{}]: ", default_mold))
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<MoldType>().ok())
        .unwrap_or(default_mold);

    let names: Vec<&str> = presets_for(mold).iter().map(|p| p.name).collect();
    println!("Presets: {}", names.join(", "));

    if let Some(name) = prompt_line("Preset name [manual entry]: ").filter(|s| !s.is_empty()) {
        match find_preset(&name) {
            Ok((preset_mold, preset)) => {
                let density = prompt_f64(
                    &format!("Density (kg/m³) [{}]: ", settings.density_kg_m3),
                    settings.density_kg_m3,
                );
                return preset.to_input(preset_mold, density);
            }
            Err(e) => eprintln!("{} - falling back to manual entry", e),
        }
    }

    println!("Common thicknesses: {}", join_mm(&THICKNESS_OPTIONS_MM));
    let thickness_mm = prompt_f64(
        &format!("Wall thickness (mm) [{}]: ", settings.thickness_mm),
        settings.thickness_mm,
    );
    println!("Common pipe ODs: {}", join_mm(&OD_OPTIONS_MM));
    let outer_diameter_mm = prompt_f64(
        &format!("Pipe outer diameter (mm) [{}]: ", settings.outer_diameter_mm),
        settings.outer_diameter_mm,
    );
    println!("Common lengths: {}", join_mm(&LENGTH_OPTIONS_MM));
    let length_mm = prompt_f64(
        &format!("Cushion length (mm) [{}]: ", settings.length_mm),
        settings.length_mm,
    );
    let density_kg_m3 = prompt_f64(
        &format!("Density (kg/m³) [{}]: ", settings.density_kg_m3),
        settings.density_kg_m3,
    );

    CushionInput {
        mold_type: mold,
        thickness_mm,
        outer_diameter_mm,
        length_mm,
        density_kg_m3,
    }
}

fn print_presets() {
    for mold in MoldType::ALL {
        println!("{} presets (thickness / OD / length, mm):", mold);
        for p in presets_for(mold) {
            println!(
                "  {:<16} {:>4} / {:>4} / {:>5}",
                p.name, p.thickness_mm, p.outer_diameter_mm, p.length_mm
            );
        }
        println!();
    }
}

fn print_result(input: &CushionInput, result: &CushionResult) {
    println!("═══════════════════════════════════════");
    println!("  CUSHION CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Mold:       {}", input.mold_type);
    println!("  Thickness:  {} mm", input.thickness_mm);
    println!("  Pipe OD:    {} mm", input.outer_diameter_mm);
    println!("  Length:     {} mm", input.length_mm);
    println!("  Density:    {} kg/m³", input.density_kg_m3);
    println!();
    println!("Geometry:");
    println!("  Area:       {:.4} m²", result.area_m2);
    println!("  Volume:     {:.5} m³", result.volume_m3);
    println!();
    println!("Mass:");
    println!("  Finished:   {:.2} kg", result.finished_mass_kg);
    println!("  To pour:    {:.2} kg", result.required_mass_kg);
    println!("  Polyol:     {:.2} kg", result.polyol_kg);
    println!("  Isocyanate: {:.2} kg", result.isocyanate_kg);
    println!("═══════════════════════════════════════");
}

fn print_totals(job: &CastingJob, totals: &JobTotals) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  JOB {} TOTALS ({} pieces)", job.meta.job_id, totals.pieces);
    println!("═══════════════════════════════════════");
    println!("  Finished:   {:.2} kg", totals.finished_mass_kg);
    println!("  To pour:    {:.2} kg", totals.required_mass_kg);
    println!("  Polyol:     {:.2} kg", totals.polyol_kg);
    println!("  Isocyanate: {:.2} kg", totals.isocyanate_kg);
    println!("═══════════════════════════════════════");
}

fn print_json<T: serde::Serialize>(heading: &str, value: &T) {
    println!();
    println!("{}", heading);
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{}", json);
    }
}

fn print_error_json(e: &CalcError) {
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

/// Print the structured error, then hand it to anyhow for the exit path.
fn report(e: CalcError) -> anyhow::Error {
    print_error_json(&e);
    e.into()
}

fn join_mm(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
