//! demos/dashboard.rs
//!
//! Looks up a place, fetches its wind forecast and archived wind data (one month unless
//! another range is given), prints the summary metrics, plots both series and writes the
//! archive to CSV.
//!
//! To run this example:
//! cargo run --example dashboard --features examples -- "Chennai, India" 3 "3 months"

use std::error::Error;

use plotlars::{Axis, Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;
use windscope::{default_export_dir, HistoricalRange, SummaryStats, WindData};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let place = args.next().unwrap_or_else(|| "Chennai, India".to_string());
    let forecast_days: u8 = match args.next() {
        Some(days) => days.parse()?,
        None => 1,
    };
    // Either a label ("3 months") or a day count ("90")
    let range: HistoricalRange = match args.next() {
        Some(range) => range.parse()?,
        None => HistoricalRange::OneMonth,
    };

    // 1. Look up the place and fetch its forecast
    let client = WindData::new()?;
    let report = client
        .dashboard()
        .place(&place)
        .forecast_days(forecast_days)
        .call()
        .await?;

    println!(
        "{} is at ({:.4}, {:.4}), map zoom {}",
        report.place,
        report.coordinate.latitude(),
        report.coordinate.longitude(),
        report.map.zoom
    );
    if let Some(grid) = report.forecast.grid_location() {
        println!(
            "Weather model grid cell is {:.1} km away",
            report.coordinate.distance_km(&grid)
        );
    }
    if let Some(offset) = report.forecast.fixed_offset() {
        println!(
            "Times are local to {} (UTC{})",
            report.forecast.timezone().unwrap_or("unknown timezone"),
            offset
        );
    }
    print_metrics("Forecast", &report.forecast_summary);

    // 2. Plot the forecast
    plot_wind(&report.forecast.to_dataframe()?, "Wind forecast");

    // 3. Fetch, plot and export the archive. A failure here keeps the forecast output.
    match client
        .dashboard_history()
        .report(&report)
        .range(range)
        .call()
        .await
    {
        Ok(history) => {
            print_metrics(&format!("Last {}", history.range), &history.summary);
            plot_wind(&history.series.to_dataframe()?, "Historical wind");
            let path = history.export_csv(&default_export_dir())?;
            println!("Archived data written to {}", path.display());
        }
        Err(e) => eprintln!("Historical data unavailable, nothing exported: {e}"),
    }

    Ok(())
}

fn print_metrics(title: &str, stats: &SummaryStats) {
    println!("{title}:");
    println!("  average wind speed  {:.2} m/s", stats.average_speed_mps);
    println!(
        "  latest direction    {:.0}° ({}, sector centered on {:.0}°)",
        stats.latest_direction_deg,
        stats.latest_direction_compass,
        stats.latest_direction_compass.degrees()
    );
    println!(
        "  peak                {:.2} m/s at {}",
        stats.peak_speed_mps, stats.peak_at
    );
}

/// Speed on the left axis, direction on the right.
fn plot_wind(data: &DataFrame, title: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x("time")
        .y("wind_speed")
        .additional_series(vec!["wind_dir"])
        .size(6)
        .colors(vec![Rgb(69, 157, 230), Rgb(235, 117, 0)])
        .lines(vec![Line::Solid, Line::Dash])
        .plot_title(Text::from(title).font("Arial").size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("time")
        .y_title(Text::from("wind speed (m/s)").color(Rgb(0, 0, 0)))
        .y_title2(Text::from("direction (°)").color(Rgb(0, 0, 0)))
        .y_axis(
            &Axis::new()
                .value_color(Rgb(0, 0, 0))
                .show_grid(false)
                .zero_line_color(Rgb(0, 0, 0)),
        )
        .y_axis2(
            &Axis::new()
                .axis_side(plotlars::AxisSide::Right)
                .value_color(Rgb(0, 0, 0))
                .show_grid(false),
        )
        .build()
        .plot();
}
