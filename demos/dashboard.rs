use weatheria::{interpret_correlation, ResultSet, Weatheria, WeatheriaError};

#[tokio::main]
async fn main() -> Result<(), WeatheriaError> {
    let client = Weatheria::builder().build();

    let snapshot = client.dashboard().await;
    for section in snapshot.failed_sections() {
        eprintln!("section unavailable: {section}");
    }
    if let Some(overview) = snapshot.overview() {
        println!("Average temperature: {}", overview.average_temperature);
        println!("Warming trend:       {}", overview.warming_trend);
        println!("Total precipitation: {}", overview.total_precipitation);
        println!("Very hot days:       {}", overview.very_hot_days);
    }

    let stats = client.statistics().await?;
    println!(
        "\nServer summary: {} months, max {}°C, min {}°C",
        stats.total_months_analyzed, stats.max_temperature, stats.min_temperature
    );

    if let Some(hottest) = client.monthly().hottest().await? {
        println!("Hottest month: {} ({}°C)", hottest.month, hottest.avg_max);
    }
    if let Some(wettest) = client.correlation().wettest().await? {
        println!(
            "Wettest month: {} ({} mm, {})",
            wettest.month,
            wettest.total_precip,
            interpret_correlation(wettest.correlation)
        );
    }

    let export = client.download(ResultSet::MonthlyAverages).await?;
    println!(
        "\nExport {} is {} bytes",
        ResultSet::MonthlyAverages.file_name(),
        export.len()
    );

    Ok(())
}
