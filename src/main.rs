use clap::Parser;
use geochange::utils::{logger, validation::Validate};
use geochange::{DemoArgs, GeoCascade, HttpOptionSource, InMemoryPage, Level, Trigger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = DemoArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting geochange demo");
    if args.verbose {
        tracing::debug!("Demo args: {:?}", args);
    }

    let config = args.build_config()?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 建立示範頁面與四個 select
    let page = InMemoryPage::default();
    for level in [Level::Continente, Level::Pais, Level::Estado, Level::Cidade] {
        page.add_select(config.selector(level));
    }

    let source = HttpOptionSource::new();
    let cascade = GeoCascade::attach("#GeoForm", page.clone(), source, config.clone())
        .ok_or_else(|| anyhow::anyhow!("controller did not attach"))?;

    // Fire the selection chain top-down, exactly as a user would
    let steps = [
        (Level::Continente, args.continente.clone()),
        (Level::Pais, args.pais.clone()),
        (Level::Estado, args.estado.clone()),
    ];
    for (level, chosen) in steps {
        let Some(id) = chosen else { continue };
        let Some(select) = page.select_handle(config.selector(level)) else {
            continue;
        };
        tracing::info!("Selecting {} = {}", level.dom_name(), id);
        select.set_value(&id);
        cascade.handle(Trigger::Change(level)).await;
    }

    for level in [Level::Pais, Level::Estado, Level::Cidade] {
        if let Some(select) = page.select_handle(config.selector(level)) {
            println!("{}: {}", level.dom_name(), select.content());
        }
    }

    let alerts = page.alerts();
    for alert in &alerts {
        eprintln!("⚠️  {}", alert);
    }

    if alerts.is_empty() {
        tracing::info!("✅ Cascade demo finished");
    } else {
        tracing::warn!("⚠️  Cascade demo finished with {} alert(s)", alerts.len());
    }

    Ok(())
}
