use trendarr::run;

fn main() -> anyhow::Result<()> {
    // The pipeline is sequential end to end; one worker thread is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run())
}
