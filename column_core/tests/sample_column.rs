//! End-to-end checks on the sample circular column.

use column_core::calculations::{check_load_cases, max_design_moment, UNBOUNDED_TENSILE_STRAIN};
use column_core::codes::DesignCodeKind;
use column_core::file_io::{load_project, save_project};
use column_core::project::ColumnProject;

#[test]
fn solves_neutral_axis_for_3500_kn() {
    let project = ColumnProject::sample();
    let analyzer = project.analyzer();

    let c = analyzer.solve_neutral_axis_for_load(3500.0);
    let result = analyzer.calculate_section_forces(c);

    assert!((result.axial_force_kn - 3500.0).abs() < 1e-3);
    assert!(result.reduction_factor >= 0.65);
    assert!(result.reduction_factor <= 0.90);
    assert!((result.design_axial_kn - result.reduction_factor * 3500.0).abs() < 1e-2);
}

#[test]
fn diagram_has_64_points_in_schedule_order() {
    let project = ColumnProject::sample();
    let diagram = project.analyzer().generate_interaction_diagram(60);

    assert_eq!(diagram.len(), 64);
    assert_eq!(diagram[0].neutral_axis_mm, 50_000.0);
    assert_eq!(diagram[1].neutral_axis_mm, 1000.0);
    assert_eq!(diagram[63].neutral_axis_mm, 0.001);

    for pair in diagram.windows(2) {
        assert!(
            pair[0].axial_force_kn > pair[1].axial_force_kn,
            "axial force must decrease: c = {} -> {}",
            pair[0].neutral_axis_mm,
            pair[1].neutral_axis_mm
        );
    }
}

#[test]
fn diagram_moment_rises_then_falls() {
    let project = ColumnProject::sample();
    let diagram = project.analyzer().generate_interaction_diagram(60);
    let last = diagram.len() - 1;

    assert!(diagram[1].moment_knm > diagram[0].moment_knm);
    assert!(diagram[last].moment_knm < diagram[last - 1].moment_knm);

    let peak_index = diagram
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.moment_knm.total_cmp(&b.1.moment_knm))
        .map(|(i, _)| i)
        .unwrap();
    assert!(peak_index > 0 && peak_index < last);
}

#[test]
fn diagram_end_points_match_closed_form() {
    let project = ColumnProject::sample();
    let analyzer = project.analyzer();
    let diagram = analyzer.generate_interaction_diagram(60);

    let p0 = analyzer.pure_compression_capacity_kn();
    assert!((diagram[0].axial_force_kn - p0).abs() / p0 < 1e-9);

    // Effectively pure tension: every bar yielded
    let tension = -2010.0 * 420.0 / 1000.0;
    assert!((diagram[63].axial_force_kn - tension).abs() < 0.01);

    let exact = analyzer.calculate_section_forces(0.0);
    assert!((exact.axial_force_kn - tension).abs() < 1e-9);
    assert_eq!(exact.net_tensile_strain, UNBOUNDED_TENSILE_STRAIN);
    assert_eq!(exact.reduction_factor, 0.90);
}

#[test]
fn sample_load_cases_are_checked_in_order() {
    let project = ColumnProject::sample();
    let diagram = project.analyzer().generate_interaction_diagram(60);
    let checks = check_load_cases(&diagram, &project.load_cases);

    assert_eq!(checks.len(), 3);
    let labels: Vec<&str> = checks.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Combo1", "Combo2", "Combo3"]);
    for check in &checks {
        let k = check.safety_factor.unwrap();
        assert!(k > 0.0);
        assert_eq!(check.passes, k >= 1.0);
    }

    // Combo2 (1500 kN, 300 kNm) lies outside the envelope
    let peak = max_design_moment(&diagram).unwrap();
    assert!(peak.design_moment_knm > 0.0);
    assert!(!checks[1].passes);
}

#[test]
fn material_factor_codes_report_unreduced_capacity() {
    let mut project = ColumnProject::sample();
    project.design_code = DesignCodeKind::Eurocode2;
    let diagram = project.analyzer().generate_interaction_diagram(20);

    assert_eq!(diagram.len(), 24);
    for point in &diagram {
        assert_eq!(point.reduction_factor, 1.0);
        assert_eq!(point.design_axial_kn, point.axial_force_kn);
    }
}

#[test]
fn saved_project_analyzes_identically() {
    let path = std::env::temp_dir().join(format!("column_e2e_{}.json", std::process::id()));
    let project = ColumnProject::sample();
    save_project(&project, &path).unwrap();
    let loaded = load_project(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let a = project.analyzer().solve_for_load(1500.0);
    let b = loaded.analyzer().solve_for_load(1500.0);
    assert!((a.neutral_axis_mm - b.neutral_axis_mm).abs() < 1e-6);
    assert!((a.moment_knm - b.moment_knm).abs() < 1e-6);
}
