use anyhow::{bail, Result};
use std::path::Path;

use nightcast::config::SiteConfig;
use nightcast::models::NightAnalysis;
use nightcast::parsing::parse_forecast_file;
use nightcast::services::{
    analyze_night, astrospheric_url, clear_outside_url, format_night_summary, normalize_forecast,
    Rating,
};

fn print_hourly_table(analysis: &NightAnalysis) {
    println!(
        "{:<10} {:>6} {:>7} {:>7} {:>7} {:>5} {:>6}  OK",
        "Time", "Cloud%", "Seeing", "Transp", "Temp°C", "RH%", "Score"
    );
    for hour in &analysis.hours {
        println!(
            "{:<10} {:>6.0} {:>6.1}\" {:>7.1} {:>7.1} {:>5.0} {:>6.1}  {}",
            hour.local_time.format("%-I:%M %p"),
            hour.cloud_cover_pct,
            hour.seeing.value(),
            hour.transparency,
            hour.temperature_c,
            hour.humidity_pct,
            hour.score,
            if hour.imageable { "✓" } else { " " }
        );
    }
}

fn print_analysis(analysis: &NightAnalysis) {
    let rating = Rating::from_score(analysis.score);
    println!();
    println!("Rating: {} {} ({}/100)", rating.emoji(), rating, analysis.score);

    match &analysis.best_window {
        Some(window) => println!(
            "Best window: {} - {} ({} hours, quality {}%)",
            window.start_hour.format("%-I:%M %p"),
            window.end_hour.format("%-I:%M %p"),
            window.length,
            window.avg_quality
        ),
        None => println!("Best window: none"),
    }

    let verdict = if analysis.should_notify { "notify" } else { "skip" };
    println!("Decision: {} ({})", verdict, analysis.reason);
    if analysis.has_deal_breaker {
        println!("Deal-breaker: {}", analysis.deal_breaker_reason);
    }

    println!();
    println!("Avg cloud cover: {:.1}%", analysis.avg_cloud_cover);
    println!("Avg transparency: {:.1}", analysis.avg_transparency);
    println!("Min temperature: {:.1}°C", analysis.min_temp_c);
    println!("Max humidity: {:.1}%", analysis.max_humidity_pct);

    println!();
    println!("Message preview:");
    println!("{}", format_night_summary(analysis));
}

fn analyze_file(forecast_path: &str) -> Result<NightAnalysis> {
    let forecast = parse_forecast_file(Path::new(forecast_path))?;
    let hours = normalize_forecast(&forecast)?;

    match analyze_night(hours) {
        Some(analysis) => Ok(analysis),
        None => bail!("Forecast contained no hours to analyze"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // File paths - read from args or use defaults
    let args: Vec<String> = std::env::args().collect();
    let forecast_path = args.get(1).map(|s| s.as_str()).unwrap_or("forecast.json");
    let config = match args.get(2) {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::from_default_location()?,
    };

    println!("=== Night Forecast Analyzer ===");
    println!("Site: {} ({}, {})", config.name, config.latitude, config.longitude);
    println!("Forecast file: {}", forecast_path);
    println!();

    match analyze_file(forecast_path) {
        Ok(analysis) => {
            print_hourly_table(&analysis);
            print_analysis(&analysis);
            println!();
            println!("✓ Analysis complete");
            println!("  Astrospheric:  {}", astrospheric_url(config.latitude, config.longitude));
            println!("  Clear Outside: {}", clear_outside_url(config.latitude, config.longitude));
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Analysis failed: {}", e);
            Err(e)
        }
    }
}
