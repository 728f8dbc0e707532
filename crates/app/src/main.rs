mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "washdesk={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let facility = engine::Facility::from_catalog(settings.catalog)?;
    tracing::info!(
        "catalog loaded: {} supplies, {} vehicle types",
        facility.supplies().len(),
        facility.vehicle_types().len()
    );

    let Some(server) = settings.server else {
        tracing::info!("no server settings, nothing else to do");
        return Ok(());
    };

    tracing::info!("Found server settings...");
    let bind = server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, server.port)).await?;
    server::run_with_listener(facility, listener).await?;

    Ok(())
}
