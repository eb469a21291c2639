use crate::report::{BoxStat, ReportInput, format_f32_6};

pub fn render_report_text(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let summary = &input.summary;

    out.push_str("9-Box Talent Calibration Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Snapshot\n");
    out.push_str(&format!("Source: {}\n", input.source_path));
    out.push_str(&format!("Quarters: {}\n", quarter_list(&input.quarters)));
    out.push_str(&format!("Headcount: {}\n", summary.total_headcount));
    out.push_str(&format!("Evaluated: {}\n\n", summary.evaluated));

    out.push_str("2. Box distribution\n");
    for stat in &summary.boxes {
        out.push_str(&format!(
            "{}: {} ({})\n",
            stat.name,
            stat.count,
            format_f32_6(stat.fraction)
        ));
    }
    out.push_str(&format!(
        "Dominant boxes: {}\n\n",
        dominant_boxes(&summary.boxes)
    ));

    out.push_str("3. Org vs team calibration\n");
    out.push_str(&format!(
        "Higher in org: {}\n",
        summary.movement.higher_in_org
    ));
    out.push_str(&format!("Lower in org: {}\n", summary.movement.lower_in_org));
    out.push_str(&format!("Unchanged: {}\n", summary.movement.unchanged));
    out.push_str(&format!("No data: {}\n", summary.movement.no_data));
    out.push_str(&format!(
        "Conclusion: {}\n\n",
        calibration_statement(
            summary.movement.higher_in_org + summary.movement.lower_in_org,
            summary.evaluated
        )
    ));

    out.push_str("4. Score cutlines\n");
    out.push_str(&format!(
        "Performance: low < {}, high > {}\n",
        format_f32_6(summary.cutpoints.perf_low),
        format_f32_6(summary.cutpoints.perf_high)
    ));
    out.push_str(&format!(
        "Potential: low < {}, high > {}\n",
        format_f32_6(summary.cutpoints.pot_low),
        format_f32_6(summary.cutpoints.pot_high)
    ));

    out
}

fn quarter_list(quarters: &[String]) -> String {
    if quarters.is_empty() {
        "all".to_string()
    } else {
        quarters.join(", ")
    }
}

fn dominant_boxes(boxes: &[BoxStat]) -> String {
    let mut sorted = boxes.to_vec();
    sorted.sort_by(|a, b| match b.count.cmp(&a.count) {
        std::cmp::Ordering::Equal => a.name.cmp(b.name),
        other => other,
    });
    let mut parts = Vec::new();
    for stat in sorted.iter().take(2) {
        parts.push(format!("{} ({})", stat.name, stat.count));
    }
    parts.join(", ")
}

fn calibration_statement(moved: usize, evaluated: usize) -> &'static str {
    if evaluated == 0 {
        "no evaluated rows in scope"
    } else if moved * 4 >= evaluated {
        "team calibration diverges noticeably from org-wide standing"
    } else if moved == 0 {
        "team calibration fully matches org-wide standing"
    } else {
        "team calibration is broadly aligned with org-wide standing"
    }
}
