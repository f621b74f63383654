use graphyte::{AnalysisOptions, Graphyte, RenderRequest};
use graphyte_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,graphyte=trace,graphyte_core=trace,graphyte_graphite=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let g = Graphyte::builder().with_connector(get_connector()?).build()?;

    let req = RenderRequest::new(["cpu.load", "net.bytes"])?.from("-1d");
    let _ = g.fetch(&req).await?;
    let report = g.render(&req, &AnalysisOptions::raw()).await?;
    tracing::info!(
        rows = report.table.len(),
        step = report.table.step(),
        warnings = report.warnings.len(),
        "render complete"
    );

    Ok(())
}
