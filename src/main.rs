use joinmark::{default_suite_set, BenchResult, Engine, Sweep};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("joinmark=warn")),
        )
        .init();
}

fn main() -> BenchResult<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    // Current-thread runtime: the sweep is strictly sequential and the
    // patterns express logical concurrency only.
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    let mut suites = default_suite_set();
    let sweep = Sweep::new(Engine::default());

    let stdout = std::io::stdout();
    runtime.block_on(sweep.run(&mut suites, &mut stdout.lock()))
}
