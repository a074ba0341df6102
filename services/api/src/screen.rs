use crate::infra::{JsonDocumentSource, LogNotifier, LogResultSink, LogStatusUpdater};
use applicant_screening::config::{AppConfig, ScreeningSettings};
use applicant_screening::error::AppError;
use applicant_screening::telemetry;
use applicant_screening::workflows::screening::{
    BatchOptions, BatchSummary, CsvResultSink, ResultSink, ScreeningEngine, ScreeningService,
};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// JSON export of applicant documents (array, or object with a `data` array)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write one CSV row per screened application to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Screening rules file; overrides SCREENING_RULES_PATH
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Stop after this many pages
    #[arg(long, default_value_t = 50)]
    pub(crate) max_pages: u32,
    /// Documents per page
    #[arg(long, default_value_t = 25)]
    pub(crate) page_size: usize,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        input,
        export,
        rules,
        max_pages,
        page_size,
    } = args;

    let mut config = AppConfig::load()?;
    if rules.is_some() {
        config.screening = ScreeningSettings { rules_path: rules };
    }
    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(ScreeningEngine::new(config.screening.screening_config()?));
    let source = Arc::new(JsonDocumentSource::from_path(&input, page_size)?);
    info!(input = %input.display(), documents = source.len(), "loaded applicant export");

    let options = BatchOptions { max_pages };
    let summary = match export {
        Some(path) => {
            let file = BufWriter::new(File::create(&path)?);
            let sink = CsvResultSink::new(file, engine.questionnaire().clone());
            let summary = execute(engine, source, sink, options)?;
            info!(export = %path.display(), "screening export written");
            summary
        }
        None => execute(engine, source, LogResultSink, options)?,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| format!("{summary:?}"))
    );
    Ok(())
}

fn execute<X>(
    engine: Arc<ScreeningEngine>,
    source: Arc<JsonDocumentSource>,
    sink: X,
    options: BatchOptions,
) -> Result<BatchSummary, AppError>
where
    X: ResultSink + 'static,
{
    let service = ScreeningService::new(
        engine,
        source,
        Arc::new(sink),
        Arc::new(LogNotifier),
        Arc::new(LogStatusUpdater),
    );

    Ok(service.run_batch(options)?)
}
