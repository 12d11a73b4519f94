use {
    anyhow::{Context, Result},
    clap::Parser,
    rand::{SeedableRng, rngs::StdRng},
    std::time::Duration,
    tabled::{builder::Builder, settings::Style},
    token_discovery::{
        ColumnSet, TICKER, TokenRecord, UiAction, UiStore,
        data::{MockTokenSource, TokenSource},
        derive_view,
        engine::apply_tick,
        utils::format_field,
    },
};

/// Print the token table for one category without starting the GUI.
#[derive(Parser, Debug)]
#[command(name = "token-snapshot", version, about, long_about = None)]
struct Args {
    /// Table layout and matching mock dataset
    #[arg(long, value_enum, default_value_t = ColumnSet::Compact)]
    columns: ColumnSet,

    /// Category id: new, stretch or migrated
    #[arg(long, default_value = "new")]
    category: String,

    /// Sort requests, applied in order as header clicks (repeatable)
    #[arg(long = "sort")]
    sort: Vec<String>,

    /// Start with no sort instead of TVL descending
    #[arg(long, default_value_t = false)]
    unsorted: bool,

    /// Simulated price ticks to apply before printing
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Seed for the simulated ticks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the rows as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn render_table(rows: &[TokenRecord], columns: ColumnSet) -> String {
    let keys = columns.columns();
    let mut builder = Builder::default();
    builder.push_record(keys.iter().map(|k| k.label().to_string()));
    for token in rows {
        builder.push_record(keys.iter().map(|k| format_field(*k, token)));
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let source = MockTokenSource::new(args.columns).with_latency(Duration::ZERO);
    let mut tokens = source
        .fetch_tokens()
        .await
        .context("Failed to load the mock dataset")?;

    let mut store = UiStore::default();
    if args.unsorted {
        store.dispatch(UiAction::ClearSort, args.columns);
    }
    store.dispatch(UiAction::SelectCategoryById(args.category.clone()), args.columns);
    for name in &args.sort {
        store.dispatch(UiAction::RequestSortByName(name.clone()), args.columns);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for _ in 0..args.ticks {
        if let Some(outcome) = apply_tick(&tokens, &mut rng, &TICKER.simulation) {
            log::info!(
                "tick: {} {} -> {}",
                outcome.change.token_id,
                outcome.change.old_price,
                outcome.change.new_price
            );
            tokens = outcome.tokens;
        }
    }

    let rows = derive_view(&tokens, store.active_category(), store.sort());

    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
        println!("{}", json);
        return Ok(());
    }

    let sort = match store.sort() {
        Some(spec) => format!("{} {:?}", spec.key.label(), spec.direction),
        None => "unsorted".to_string(),
    };
    println!(
        "{} ({} of {} tokens, {})",
        store.active_category().name(),
        rows.len(),
        tokens.len(),
        sort
    );
    println!("{}", render_table(&rows, args.columns));
    Ok(())
}
