use anyhow::Context;

fn main() -> anyhow::Result<()> {
    miniops_observability::init();

    miniops_finance::run_demo();
    miniops_clinic::run_demo();
    miniops_inventory::run_demo();

    let scratch = std::env::temp_dir().join("miniops-gradebook");
    std::fs::create_dir_all(&scratch)
        .with_context(|| format!("creating scratch dir {}", scratch.display()))?;

    // File-system failures inside the demo are reported, not propagated; the
    // error conditions the demos trigger on purpose are printed by the demos
    // themselves.
    if let Err(err) = miniops_gradebook::run_demo(&scratch) {
        tracing::error!("gradebook demo failed: {err}");
    }

    Ok(())
}
