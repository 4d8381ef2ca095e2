//! # Short-Column CLI Application
//!
//! Loads a column project, prints its P–M interaction diagram and checks
//! every load case against the design envelope.
//!
//! ## Usage
//!
//! ```text
//! column_cli [project.json]        analyze a project (prompts when omitted)
//! column_cli --sample <path>       write the sample project and exit
//! ```
//!
//! A project path that does not exist is created from the sample project
//! first. Log output goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use column_core::calculations::{check_load_cases, max_design_moment, AnalysisResult, LoadCheck};
use column_core::errors::{CalcError, CalcResult};
use column_core::file_io::{load_project, save_sample};
use log::{info, warn};
use serde::Serialize;

const DEFAULT_PROJECT_FILE: &str = "column.json";

/// Everything the run produces, printed as JSON at the end.
#[derive(Debug, Serialize)]
struct Report {
    job_id: String,
    design_code: String,
    diagram: Vec<AnalysisResult>,
    load_checks: Vec<LoadCheck>,
    load_states: Vec<LoadState>,
}

/// Section state at the neutral axis carrying a load case's axial force.
#[derive(Debug, Serialize)]
struct LoadState {
    label: String,
    state: AnalysisResult,
}

enum Command {
    Analyze(PathBuf),
    WriteSample(PathBuf),
}

fn prompt_path(prompt: &str, default: &str) -> PathBuf {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return PathBuf::from(default);
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return PathBuf::from(default);
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        PathBuf::from(default)
    } else {
        PathBuf::from(trimmed)
    }
}

fn parse_args(args: &[String]) -> CalcResult<Command> {
    match args {
        [] => Ok(Command::Analyze(prompt_path(
            &format!("Enter project file [{}]: ", DEFAULT_PROJECT_FILE),
            DEFAULT_PROJECT_FILE,
        ))),
        [flag, path] if flag == "--sample" => Ok(Command::WriteSample(PathBuf::from(path))),
        [flag] if flag == "--sample" => Err(CalcError::missing_field("--sample <path>")),
        [path] => Ok(Command::Analyze(PathBuf::from(path))),
        _ => Err(CalcError::invalid_input(
            "arguments",
            args.join(" "),
            "usage: column_cli [project.json] | --sample <path>",
        )),
    }
}

fn main() {
    env_logger::init();

    println!("Short-Column Capacity Calculator");
    println!("================================");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parse_args(&args).and_then(|command| match command {
        Command::WriteSample(path) => {
            save_sample(&path)?;
            println!("Sample project written to {}", path.display());
            Ok(())
        }
        Command::Analyze(path) => run(&path),
    });

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(path: &Path) -> CalcResult<()> {
    if !path.exists() {
        warn!("{} not found, writing the sample project there", path.display());
        save_sample(path)?;
    }

    let project = load_project(path)?;
    project.validate()?;
    info!("analyzing {} with {}", path.display(), project.design_code);

    let analyzer = project.analyzer();
    let diagram = analyzer.generate_interaction_diagram(project.settings.diagram_points);
    let peak = max_design_moment(&diagram).ok_or_else(|| {
        CalcError::calculation_failed("interaction diagram", "no points were generated")
    })?;

    println!("Project:  {}", project.meta.job_id);
    println!("Code:     {}", analyzer.code().name());
    println!(
        "Section:  {} {:.0} x {:.0} mm, {} bars",
        project.geometry.shape.display_name(),
        project.geometry.width_mm,
        project.geometry.extreme_dimension_mm(),
        project.bars.len()
    );
    println!();

    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  INTERACTION DIAGRAM");
    println!("═══════════════════════════════════════════════════════════════════════");
    println!(
        "{:>10} {:>10} {:>10} {:>6} {:>10} {:>10} {:>9}",
        "c (mm)", "Pn (kN)", "Mn (kNm)", "phi", "phiPn", "phiMn", "eps_t"
    );
    for point in &diagram {
        println!(
            "{:>10.2} {:>10.1} {:>10.1} {:>6.3} {:>10.1} {:>10.1} {:>9.5}",
            point.neutral_axis_mm,
            point.axial_force_kn,
            point.moment_knm,
            point.reduction_factor,
            point.design_axial_kn,
            point.design_moment_knm,
            point.net_tensile_strain
        );
    }
    println!();
    println!(
        "Max design moment: {:.1} kNm at phiPn = {:.1} kN (c = {:.1} mm)",
        peak.design_moment_knm, peak.design_axial_kn, peak.neutral_axis_mm
    );
    println!();

    let load_checks = check_load_cases(&diagram, &project.load_cases);
    let load_states: Vec<LoadState> = project
        .load_cases
        .iter()
        .map(|case| LoadState {
            label: case.label.clone(),
            state: analyzer.solve_for_load(case.axial_kn),
        })
        .collect();

    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  LOAD CHECKS");
    println!("═══════════════════════════════════════════════════════════════════════");
    for (check, load_state) in load_checks.iter().zip(&load_states) {
        let k = match check.safety_factor {
            Some(k) => format!("{:.2}", k),
            None => "n/a".to_string(),
        };
        println!(
            "  {:<12} Pu = {:>8.1} kN  Mu = {:>7.1} kNm  k = {:>6}  c = {:>7.1} mm  phi = {:.3} {}",
            check.label,
            check.axial_kn,
            check.moment_knm,
            k,
            load_state.state.neutral_axis_mm,
            load_state.state.reduction_factor,
            status_icon(check.passes)
        );
    }
    let failures = load_checks.iter().filter(|c| !c.passes).count();
    println!();
    println!("═══════════════════════════════════════════════════════════════════════");
    println!(
        "  RESULT: {} ({} of {} load cases inside the envelope)",
        if failures == 0 { "PASS" } else { "FAIL" },
        load_checks.len() - failures,
        load_checks.len()
    );
    println!("═══════════════════════════════════════════════════════════════════════");

    let report = Report {
        job_id: project.meta.job_id.clone(),
        design_code: project.design_code.to_string(),
        diagram,
        load_checks,
        load_states,
    };

    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
