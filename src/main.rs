use anyhow::{Context, Result};
use bizfilter::application::{UseCaseContainer, dto::BusinessDto};
use bizfilter::domain::entities::{FilterGroup, SettingsRecord};
use bizfilter::domain::repositories::BusinessRepository;
use bizfilter::infrastructure::{ConfigRepository, memory::InMemoryBusinessRepository};
use bizfilter::presentation::components::{SettingsScreen, settings_rows};
use bizfilter::presentation::services::SearchExecutor;
use std::sync::{Arc, mpsc};

fn init_tracing() {
    let level = if cfg!(feature = "verbose-logging") {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config_repository = ConfigRepository::new();
    let mut config = config_repository.load()?;

    let repository: Arc<dyn BusinessRepository> =
        Arc::new(InMemoryBusinessRepository::with_sample_data());
    let use_cases = Arc::new(UseCaseContainer::new(repository, &config));
    let executor = SearchExecutor::new(use_cases)?;

    let mut current = config.last_settings.clone();
    if let Some(term) = std::env::args().nth(1) {
        current.term = Some(term);
    }

    // Pass the stored settings through the settings screen so stale values drop out.
    let (sender, receiver) = mpsc::channel();
    let screen = SettingsScreen::open(&current, move |record| {
        let _ = sender.send(record);
    });
    for group in FilterGroup::ALL {
        tracing::debug!("{} rows: {:?}", group, settings_rows::rows(screen.state(), group));
    }
    screen.save();
    let settings = receiver.recv().context("Settings screen closed without saving")?;

    let remembered = SettingsRecord {
        term: None,
        ..settings.clone()
    };
    if config.remember_settings && remembered != config.last_settings {
        config.last_settings = remembered;
        config_repository.save(&config)?;
    }

    let businesses = executor.search(&settings)?;
    tracing::info!("Found {} businesses", businesses.len());

    let results: Vec<BusinessDto> = businesses.into_iter().map(BusinessDto::from).collect();
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
