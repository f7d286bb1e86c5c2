//! Plain-text rendering of API results

use autodash_client::{
    ApiStatus, CpuStats, DashboardSummary, DataStatistics, DirectorySize, DiskStats, FileListing,
    HealthCheck, HistoryPage, MemoryStats, NetworkStats, ProcessList, SystemHealth,
};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    format!("{:-<width$}", "", width = RULE_WIDTH)
}

/// Joins lines into a newline-terminated block
fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn alert_marker(alert: bool) -> &'static str {
    if alert {
        "  [ALERT]"
    } else {
        ""
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

pub fn overview(summary: &DashboardSummary, health: &SystemHealth) -> String {
    let mut lines = vec![
        "Overview".to_string(),
        rule(),
        format!("  Tasks:       {} total", summary.total_tasks),
        format!("  Successful:  {}", summary.successful_tasks),
        format!("  Failed:      {}", summary.failed_tasks),
    ];
    if let Some(rate) = summary.success_rate() {
        lines.push(format!("  Success:     {:.1}%", rate));
    }
    lines.push(String::new());
    lines.push(format!(
        "  CPU:         {:>5.1}%{}",
        health.cpu.usage_percent,
        alert_marker(health.cpu.alert)
    ));
    lines.push(format!(
        "  Memory:      {:>5.1}%{}",
        health.memory.percent,
        alert_marker(health.memory.alert)
    ));
    lines.push(format!(
        "  Disk:        {:>5.1}%{}",
        health.disk.percent,
        alert_marker(health.disk.alert)
    ));
    lines.push(format!("  Health:      {}", health.overall_health.as_str()));
    lines.push(format!("  Updated:     {}", summary.timestamp));
    block(lines)
}

pub fn summary(summary: &DashboardSummary) -> String {
    block(vec![
        "Dashboard Summary".to_string(),
        rule(),
        format!("  Total tasks:      {}", summary.total_tasks),
        format!("  Successful:       {}", summary.successful_tasks),
        format!("  Failed:           {}", summary.failed_tasks),
        format!("  System health:    {}", summary.system_health.as_str()),
        format!("  CPU usage:        {:.1}%", summary.cpu_usage),
        format!("  Memory usage:     {:.1}%", summary.memory_usage),
        format!("  Disk usage:       {:.1}%", summary.disk_usage),
        format!("  Timestamp:        {}", summary.timestamp),
    ])
}

pub fn health_check(health: &HealthCheck) -> String {
    format!(
        "API: {} (version {}, {})\n",
        health.status, health.version, health.timestamp
    )
}

pub fn api_status(status: &ApiStatus) -> String {
    let dashboard = if status.dashboard_connected {
        "connected"
    } else {
        "disconnected"
    };
    block(vec![
        "API Status".to_string(),
        rule(),
        format!("  State:       {}", status.api_status),
        format!("  Dashboard:   {}", dashboard),
        format!("  Scripts:     {}", status.scripts_available.join(", ")),
        format!("  Timestamp:   {}", status.timestamp),
    ])
}

pub fn system_health(health: &SystemHealth) -> String {
    let mut out = format!("System Health: {}\n{}\n", health.overall_health.as_str(), rule());
    out.push_str(&cpu(&health.cpu));
    out.push_str(&memory(&health.memory));
    out.push_str(&disk(&health.disk));
    if let Some(net) = &health.network {
        out.push_str(&network(net));
    }
    if let Some(procs) = &health.processes {
        out.push_str(&processes(procs));
    }
    out.push_str(&format!("  Reported at {}\n", health.timestamp));
    out
}

pub fn cpu(stats: &CpuStats) -> String {
    let cores = stats
        .core_count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string());
    let mut out = format!(
        "  CPU:     {:>5.1}% across {} cores{}\n",
        stats.usage_percent,
        cores,
        alert_marker(stats.alert)
    );
    if !stats.per_core_usage.is_empty() {
        let per_core: Vec<String> = stats
            .per_core_usage
            .iter()
            .map(|c| format!("{:.0}", c))
            .collect();
        out.push_str(&format!("           per core: {}\n", per_core.join(" ")));
    }
    out
}

pub fn memory(stats: &MemoryStats) -> String {
    format!(
        "  Memory:  {:>5.1}% ({:.2} / {:.2} GB){}\n",
        stats.percent,
        stats.used_gb,
        stats.total_gb,
        alert_marker(stats.alert)
    )
}

pub fn disk(stats: &DiskStats) -> String {
    format!(
        "  Disk:    {:>5.1}% ({:.2} / {:.2} GB){}\n",
        stats.percent,
        stats.used_gb,
        stats.total_gb,
        alert_marker(stats.alert)
    )
}

pub fn network(stats: &NetworkStats) -> String {
    format!(
        "  Network: sent {} ({} packets), received {} ({} packets)\n",
        format_bytes(stats.bytes_sent),
        stats.packets_sent,
        format_bytes(stats.bytes_received),
        stats.packets_received
    )
}

pub fn processes(list: &ProcessList) -> String {
    let mut lines = vec![format!("  {:<8} {:<32} {}", "PID", "Name", "Memory %")];
    for p in &list.top_processes {
        let name = p.name.as_deref().unwrap_or("-");
        let mem = p
            .memory_percent
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("  {:<8} {:<32} {}", p.pid, name, mem));
    }
    block(lines)
}

pub fn statistics(stats: &DataStatistics) -> String {
    if stats.is_empty() {
        return "  No statistics available\n".to_string();
    }
    let mut lines = vec![
        format!("  Rows:        {}", stats.total_rows),
        format!("  Columns:     {}", stats.total_columns),
        format!("  Memory:      {} bytes", stats.memory_usage),
    ];
    if !stats.data_types.is_empty() {
        lines.push("  Column types:".to_string());
        for (column, dtype) in &stats.data_types {
            let dtype = dtype.as_str().map(str::to_string).unwrap_or_else(|| dtype.to_string());
            lines.push(format!("    {:<24} {}", column, dtype));
        }
    }
    block(lines)
}

pub fn file_listing(listing: &FileListing) -> String {
    let mut lines = vec![
        format!("{} files", listing.count),
        rule(),
        format!("  {:<36} {:>10}  {}", "Path", "Size", "Modified"),
    ];
    for f in &listing.files {
        lines.push(format!(
            "  {:<36} {:>10}  {}",
            f.path,
            format_bytes(f.size_bytes),
            f.modified
        ));
    }
    block(lines)
}

pub fn directory_size(size: &DirectorySize) -> String {
    format!(
        "{} files, {} ({:.2} MB)\n",
        size.file_count,
        format_bytes(size.total_bytes),
        size.total_mb
    )
}

pub fn history(page: &HistoryPage) -> String {
    let mut lines = vec![
        format!(
            "Showing {} of {} history entries",
            page.history.len(),
            page.count
        ),
        rule(),
    ];
    for entry in &page.history {
        lines.push(format!(
            "  {:<28} {:<20} {}",
            entry.timestamp,
            entry.task,
            entry.status.as_str()
        ));
    }
    block(lines)
}
