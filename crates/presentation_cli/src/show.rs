//! `show` and `history` commands: print what the pipeline has stored

use anyhow::bail;
use application::ports::ReportStorePort;
use domain::{HistoryEntry, WeatherReport};
use infrastructure::AppConfig;

/// Load the stored report and print it
pub async fn show_latest(config: &AppConfig) -> anyhow::Result<()> {
    let store = config.output.report_store();
    let Some(report) = store.load_report().await? else {
        bail!(
            "No stored report in {}; run the pipeline first",
            store.dir().display()
        );
    };

    print!("{}", render_report(&report));
    Ok(())
}

/// Load the observation history and print it, oldest first
pub async fn show_history(config: &AppConfig) -> anyhow::Result<()> {
    let history = config.output.report_store().load_history().await?;
    print!("{}", render_history(&history));
    Ok(())
}

/// One line per recorded observation
pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No observations recorded yet\n".to_string();
    }

    let mut lines = vec![format!("📈 {} observation(s)", history.len())];
    lines.extend(history.iter().map(|e| {
        format!(
            "  {}  {:>5.1}°C (feels {:.1}°C)  {:>3}%  {}, {}, {}{}",
            e.observed_at.format("%Y-%m-%d %H:%M"),
            e.temperature,
            e.feels_like,
            e.humidity,
            e.weather_description,
            e.comfort,
            e.wind,
            if e.alert_count > 0 {
                format!(", {} alert(s)", e.alert_count)
            } else {
                String::new()
            }
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Human-readable rendering of a report
pub fn render_report(report: &WeatherReport) -> String {
    let snapshot = &report.snapshot;
    let current = snapshot.current();
    let analysis = &report.analysis;
    let forecast = &analysis.forecast;

    let mut lines = vec![
        format!(
            "🌍 {} (observed {})",
            snapshot.location(),
            current.observed_at.format("%Y-%m-%d %H:%M")
        ),
        String::new(),
        format!("Now: {}", current.summary()),
        format!(
            "     {:.1}°F, comfort: {}, humidity: {}, wind: {}",
            analysis.current.temperature_fahrenheit,
            analysis.current.comfort,
            analysis.current.humidity_level,
            analysis.current.wind
        ),
        String::new(),
        format!("📅 Forecast ({} days, trend: {})", forecast.days, forecast.trend),
    ];

    for day in snapshot.forecast() {
        lines.push(format!("  {}  {}", day.date, day.summary()));
    }

    lines.push(format!("  {}", forecast.week_summary));
    if let Some(range) = &forecast.temperature_range {
        lines.push(format!(
            "  Range {:.1}°C to {:.1}°C, average {:.1}°C/{:.1}°C",
            range.lowest, range.highest, range.average_high, range.average_low
        ));
    }
    if let Some(day) = forecast.precipitation.heaviest_day {
        lines.push(format!(
            "  Precipitation {:.1}mm over {} day(s), heaviest {day} ({:.1}mm)",
            forecast.precipitation.total_mm,
            forecast.precipitation.rainy_days,
            forecast.precipitation.heaviest_mm
        ));
    }

    lines.push(String::new());
    if analysis.has_alerts() {
        lines.push("⚠️  Alerts:".to_string());
        lines.extend(analysis.alerts.iter().map(|a| format!("  - {a}")));
    } else {
        lines.push("✅ No alerts".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
