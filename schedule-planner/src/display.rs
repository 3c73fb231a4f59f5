use crate::schedule::{Activity, ScheduleData};

/// Formats an activity with its category tag, e.g. "[wellness] Yoga"
pub fn format_activity(activity: &Activity) -> String {
    match activity.category.as_deref() {
        Some(category) if !category.is_empty() => format!("[{}] {}", category, activity.name),
        _ => activity.name.clone(),
    }
}

/// Renders the unscheduled board, one activity per line
pub fn render_board(data: &ScheduleData) -> String {
    let mut out = String::new();
    out.push_str(&format!("** Board ({}) **\n", data.activities.len()));
    if data.activities.is_empty() {
        out.push_str("  [EMPTY]\n");
    }
    for activity in &data.activities {
        out.push_str(&format!("  {} ({})\n", format_activity(activity), activity.id));
    }
    out
}

/// Renders every day and time row, `[EMPTY]` for slots with nothing in them
pub fn render_schedule(data: &ScheduleData) -> String {
    let mut out = String::new();
    for day in &data.days {
        out.push_str(&format!("** {} **\n", day));
        let Some(rows) = data.schedule.get(day) else {
            continue;
        };
        for (index, slot) in rows.iter().enumerate() {
            let label = if slot.time.is_empty() {
                format!("#{}", index)
            } else {
                slot.time.clone()
            };
            if slot.activities.is_empty() {
                out.push_str(&format!("  {} [EMPTY]\n", label));
            } else {
                let names: Vec<String> = slot.activities.iter().map(format_activity).collect();
                out.push_str(&format!("  {} {}\n", label, names.join(", ")));
            }
        }
    }
    out
}

/// Prints board and grid to stdout
pub fn print_planner(data: &ScheduleData) {
    println!("{}", render_board(data));
    print!("{}", render_schedule(data));
}
