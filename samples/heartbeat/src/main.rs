use anyhow::Context;
use sdun_heartbeat::Heartbeat;

fn main() -> anyhow::Result<()> {
    sdun_platform::run(Box::new(Heartbeat::default())).context("bootstrap halted")?;
    Ok(())
}
