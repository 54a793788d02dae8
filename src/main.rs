use anyhow::Result;

fn main() -> Result<()> {
    floe::run()?;
    Ok(())
}
